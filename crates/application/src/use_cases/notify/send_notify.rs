use crate::ports::NotifyExchange;
use dns_notify_domain::{
    classify, normalize_target, DomainError, NotifyConfig, NotifyQuery, NotifyResult, ZoneName,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Per-call settings for a notify dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Upper bound for each server's round trip.
    pub timeout: Duration,

    /// Transaction id of the NOTIFY message. Random when `None`.
    pub query_id: Option<u16>,
}

impl NotifyOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            query_id: None,
        }
    }

    pub fn with_query_id(mut self, id: u16) -> Self {
        self.query_id = Some(id);
        self
    }
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl From<&NotifyConfig> for NotifyOptions {
    fn from(config: &NotifyConfig) -> Self {
        Self::new(Duration::from_millis(config.timeout_ms))
    }
}

/// Sends a NOTIFY for one zone to every server concurrently and collects one
/// result per server.
pub struct SendNotifyUseCase {
    exchange: Arc<dyn NotifyExchange>,
}

impl SendNotifyUseCase {
    pub fn new(exchange: Arc<dyn NotifyExchange>) -> Self {
        Self { exchange }
    }

    /// Notifies `servers` that `domain` changed.
    ///
    /// The returned results are in the order of `servers` and there is exactly
    /// one per server; per-server failures are reported inside the results.
    /// An empty server list yields a single "No servers" error result without
    /// touching the network. Only an invalid zone name is returned as `Err`.
    pub async fn execute(
        &self,
        domain: &str,
        servers: &[String],
        options: NotifyOptions,
    ) -> Result<Vec<NotifyResult>, DomainError> {
        if servers.is_empty() {
            debug!(domain = %domain, "No servers to notify");
            return Ok(vec![NotifyResult::no_servers()]);
        }

        let zone = ZoneName::new(domain)?;
        let id = options.query_id.unwrap_or_else(|| fastrand::u16(..));
        let query = Arc::new(NotifyQuery::new(id, zone));

        debug!(
            zone = %query.zone,
            id = query.id,
            servers = servers.len(),
            timeout_ms = options.timeout.as_millis() as u64,
            "Dispatching notify"
        );

        let start = Instant::now();

        let handles: Vec<_> = servers
            .iter()
            .map(|server| {
                let exchange = Arc::clone(&self.exchange);
                let query = Arc::clone(&query);
                let server = server.clone();
                tokio::spawn(async move {
                    notify_server(exchange.as_ref(), &query, &server, options.timeout).await
                })
            })
            .collect();

        let results: Vec<NotifyResult> = join_all(handles)
            .await
            .into_iter()
            .zip(servers)
            .map(|(joined, server)| match joined {
                Ok(result) => result,
                Err(e) => {
                    // A task can only panic after its address was accepted.
                    let target = normalize_target(server).unwrap_or_else(|_| server.clone());
                    debug!(target = %target, error = %e, "Notify task panicked");
                    NotifyResult::exchange_error(&target, &DomainError::TaskFailed(e.to_string()))
                }
            })
            .collect();

        debug!(
            zone = %query.zone,
            servers = results.len(),
            failed = results.iter().filter(|r| r.is_error()).count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Notify complete"
        );

        Ok(results)
    }
}

async fn notify_server(
    exchange: &dyn NotifyExchange,
    query: &NotifyQuery,
    server: &str,
    limit: Duration,
) -> NotifyResult {
    let target = match normalize_target(server) {
        Ok(target) => target,
        Err(e) => {
            debug!(server = %server, error = %e, "Invalid server address");
            return NotifyResult::address_error(server, &e);
        }
    };

    debug!(target = %target, zone = %query.zone, "Sending notify");

    // The adapter enforces its own read timeout; this bounds the whole call.
    let outcome = match timeout(limit, exchange.exchange(query, &target, limit)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(DomainError::TransportTimeout {
            server: target.clone(),
        }),
    };

    if let Err(e) = &outcome {
        debug!(target = %target, error = %e, "Notify exchange failed");
    }

    classify(&target, outcome)
}
