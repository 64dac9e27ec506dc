use crate::dns::notify::{MessageBuilder, ResponseParser};
use crate::dns::transport;
use async_trait::async_trait;
use dns_notify_application::ports::NotifyExchange;
use dns_notify_domain::{DomainError, ExchangeResponse, NotifyQuery, NotifyTransport};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// [`NotifyExchange`] adapter: `hickory-proto` encoding over tokio UDP or TCP.
///
/// Flow per call: encode → resolve `host:port` → send → parse → match the
/// reply to the query. The round-trip time covers send through parse. No
/// retries and no UDP→TCP fallback.
pub struct HickoryNotifyExchange {
    transport: NotifyTransport,
}

impl HickoryNotifyExchange {
    pub fn new(transport: NotifyTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NotifyExchange for HickoryNotifyExchange {
    async fn exchange(
        &self,
        query: &NotifyQuery,
        target: &str,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError> {
        let query_bytes = MessageBuilder::build_notify(query)?;
        let server_addr = resolve_target(target, timeout).await?;

        let dns_transport = transport::create_transport(self.transport, server_addr);

        let start = Instant::now();
        let response = dns_transport.send(&query_bytes, timeout).await?;
        let reply = ResponseParser::parse(&response.bytes)?;
        let rtt = start.elapsed();

        reply.ensure_answers(query)?;

        debug!(
            target = %target,
            server = %server_addr,
            protocol = %response.protocol,
            authoritative = reply.authoritative,
            rtt_us = rtt.as_micros() as u64,
            "NOTIFY exchange complete"
        );

        Ok(ExchangeResponse::new(reply.authoritative, reply.rcode, rtt))
    }
}

/// Resolves `host:port` to the first socket address, bounded by `timeout`.
pub async fn resolve_target(target: &str, timeout: Duration) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = target.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.to_string(),
        })?
        .map_err(|e| DomainError::AddressResolution {
            server: target.to_string(),
            reason: e.to_string(),
        })?;

    addrs.next().ok_or_else(|| DomainError::AddressResolution {
        server: target.to_string(),
        reason: "no addresses found".to_string(),
    })
}
