use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Could not resolve {server}: {reason}")]
    AddressResolution { server: String, reason: String },

    #[error("Notify task failed: {0}")]
    TaskFailed(String),
}

impl DomainError {
    /// Maps an I/O error raised while talking to `server` onto the transport variants.
    pub fn from_io(server: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut => Self::TransportTimeout {
                server: server.to_string(),
            },
            std::io::ErrorKind::ConnectionRefused => Self::TransportConnectionRefused {
                server: server.to_string(),
            },
            std::io::ErrorKind::ConnectionReset | std::io::ErrorKind::ConnectionAborted => {
                Self::TransportConnectionReset {
                    server: server.to_string(),
                }
            }
            _ => Self::IoError(format!("{}: {}", server, err)),
        }
    }
}
