//! dns-notify Domain Layer
pub mod config;
pub mod errors;
pub mod notify_query;
pub mod notify_result;
pub mod notify_target;
pub mod zone_name;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, NotifyConfig, NotifyTransport};
pub use errors::DomainError;
pub use notify_query::NotifyQuery;
pub use notify_result::{classify, rcode_name, ExchangeResponse, NotifyOutcome, NotifyResult};
pub use notify_target::{normalize_target, AddressError, DEFAULT_DNS_PORT};
pub use zone_name::ZoneName;
