mod notify_exchange;

pub use notify_exchange::NotifyExchange;

// Re-export for convenience
pub use dns_notify_domain::{ExchangeResponse, NotifyQuery};
