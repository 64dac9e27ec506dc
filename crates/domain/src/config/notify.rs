use serde::{Deserialize, Serialize};
use std::fmt;

/// Socket type used to deliver NOTIFY messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyTransport {
    #[default]
    Udp,
    Tcp,
}

impl fmt::Display for NotifyTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyTransport::Udp => f.write_str("UDP"),
            NotifyTransport::Tcp => f.write_str("TCP"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Servers notified when none are given on the command line.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Per-server response timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub transport: NotifyTransport,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            timeout_ms: default_timeout_ms(),
            transport: NotifyTransport::default(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
