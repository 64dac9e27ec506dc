//! Socket delivery of NOTIFY messages.
//!
//! Every exchange opens a fresh socket, writes one message and reads one
//! reply. Each I/O step is bounded by the caller's timeout.

#[cfg(feature = "dns-over-tcp")]
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use dns_notify_domain::{DomainError, NotifyTransport};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// Raw reply bytes plus the socket type that carried them.
#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,
    pub protocol: NotifyTransport,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    #[cfg(feature = "dns-over-tcp")]
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => t.send(message_bytes, timeout).await,
            #[cfg(feature = "dns-over-tcp")]
            Self::Tcp(t) => t.send(message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(kind: NotifyTransport, server_addr: SocketAddr) -> Transport {
    match kind {
        NotifyTransport::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),

        #[cfg(feature = "dns-over-tcp")]
        NotifyTransport::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),

        #[cfg(not(feature = "dns-over-tcp"))]
        NotifyTransport::Tcp => {
            tracing::warn!(
                server = %server_addr,
                "TCP support not compiled in, sending notify over UDP"
            );
            Transport::Udp(udp::UdpTransport::new(server_addr))
        }
    }
}

/// Runs one socket step under `limit`. Elapsed time becomes
/// [`DomainError::TransportTimeout`]; I/O errors go through
/// [`DomainError::from_io`].
pub(crate) async fn bounded<T, F>(
    server: SocketAddr,
    limit: Duration,
    step: F,
) -> Result<T, DomainError>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(limit, step).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(DomainError::from_io(&server.to_string(), &e)),
        Err(_) => Err(DomainError::TransportTimeout {
            server: server.to_string(),
        }),
    }
}
