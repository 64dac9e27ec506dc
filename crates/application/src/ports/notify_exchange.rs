use async_trait::async_trait;
use dns_notify_domain::{DomainError, ExchangeResponse, NotifyQuery};
use std::time::Duration;

/// One NOTIFY request/response round trip against a single server.
///
/// Implementations own the wire format and the transport. `target` is always
/// in `host:port` form.
#[async_trait]
pub trait NotifyExchange: Send + Sync {
    async fn exchange(
        &self,
        query: &NotifyQuery,
        target: &str,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError>;
}
