use dns_notify_domain::{rcode_name, DomainError, NotifyQuery};
use hickory_proto::op::{Message, MessageType, OpCode};
use tracing::debug;

/// Header fields of a NOTIFY reply that matter to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyReply {
    pub id: u16,

    pub is_response: bool,

    pub op_code: OpCode,

    pub authoritative: bool,

    pub rcode: u16,
}

impl NotifyReply {
    /// Checks that this reply answers `query`.
    ///
    /// The opcode is not checked: servers without NOTIFY support answer with
    /// NOTIMP and may not echo it.
    pub fn ensure_answers(&self, query: &NotifyQuery) -> Result<(), DomainError> {
        if !self.is_response {
            return Err(DomainError::InvalidDnsResponse(
                "reply does not have the QR bit set".into(),
            ));
        }
        if self.id != query.id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "id mismatch: sent {}, received {}",
                query.id, self.id
            )));
        }
        Ok(())
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<NotifyReply, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let reply = NotifyReply {
            id: message.id(),
            is_response: message.message_type() == MessageType::Response,
            op_code: message.op_code(),
            authoritative: message.authoritative(),
            rcode: u16::from(message.response_code()),
        };

        debug!(
            id = reply.id,
            op_code = ?reply.op_code,
            authoritative = reply.authoritative,
            rcode = %rcode_name(reply.rcode),
            "NOTIFY reply parsed"
        );

        Ok(reply)
    }
}
