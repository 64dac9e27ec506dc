//! NOTIFY over TCP (RFC 1035 §4.2.2)
//!
//! Each message is framed with a two-byte big-endian length prefix. One
//! connection per exchange; nothing is pooled.

use super::{bounded, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dns_notify_domain::{DomainError, NotifyTransport};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_FRAME_LEN: usize = u16::MAX as usize;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream =
            bounded(self.server_addr, timeout, TcpStream::connect(self.server_addr)).await?;
        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::from_io(&self.server_addr.to_string(), &e))?;

        bounded(self.server_addr, timeout, write_frame(&mut stream, message_bytes)).await?;
        debug!(server = %self.server_addr, bytes = message_bytes.len(), "TCP notify sent");

        let reply = bounded(self.server_addr, timeout, read_frame(&mut stream)).await?;
        debug!(server = %self.server_addr, bytes = reply.len(), "TCP reply received");

        Ok(TransportResponse {
            bytes: Bytes::from(reply),
            protocol: NotifyTransport::Tcp,
        })
    }
}

/// Writes `message` preceded by its length.
pub(crate) async fn write_frame<S>(stream: &mut S, message: &[u8]) -> io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let len = u16::try_from(message.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "message of {} bytes exceeds the {} byte TCP frame limit",
                message.len(),
                MAX_FRAME_LEN
            ),
        )
    })?;

    stream.write_all(&len.to_be_bytes()).await?;
    stream.write_all(message).await?;
    stream.flush().await
}

/// Reads one length-prefixed message.
pub(crate) async fn read_frame<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncRead + Unpin,
{
    let len = stream.read_u16().await? as usize;
    let mut message = vec![0u8; len];
    stream.read_exact(&mut message).await?;
    Ok(message)
}
