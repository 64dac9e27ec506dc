pub mod errors;
pub mod logging;
pub mod notify;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use notify::{NotifyConfig, NotifyTransport};
pub use root::{CliOverrides, Config};
