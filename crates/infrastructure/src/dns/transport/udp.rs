//! NOTIFY over UDP (RFC 1035 §4.2.1): one datagram out, one back.
//!
//! The socket is connected to the server, so datagrams from other sources are
//! dropped by the kernel and an ICMP port-unreachable surfaces as
//! "connection refused".

use super::{bounded, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dns_notify_domain::{DomainError, NotifyTransport};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Room for an EDNS(0)-sized reply; NOTIFY answers are far smaller.
const RECV_BUFFER_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    /// Wildcard address of the server's family with an ephemeral port.
    fn local_addr(&self) -> SocketAddr {
        match self.server_addr {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        }
    }

    async fn open_socket(&self) -> Result<UdpSocket, DomainError> {
        let socket = UdpSocket::bind(self.local_addr())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| DomainError::from_io(&self.server_addr.to_string(), &e))?;

        Ok(socket)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = self.open_socket().await?;

        let sent = bounded(self.server_addr, timeout, socket.send(message_bytes)).await?;
        debug!(server = %self.server_addr, bytes = sent, "UDP notify sent");

        let mut datagram = vec![0u8; RECV_BUFFER_SIZE];
        let received = bounded(self.server_addr, timeout, socket.recv(&mut datagram)).await?;
        datagram.truncate(received);

        debug!(server = %self.server_addr, bytes = received, "UDP reply received");

        Ok(TransportResponse {
            bytes: Bytes::from(datagram),
            protocol: NotifyTransport::Udp,
        })
    }
}
