//! NOTIFY Message Builder
//!
//! Constructs RFC 1996 NOTIFY messages in wire format using `hickory-proto`.

use dns_notify_domain::{DomainError, NotifyQuery};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds NOTIFY messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a NOTIFY message for `query` and serialize it to wire format bytes
    ///
    /// Creates a message with:
    /// - the query's transaction ID
    /// - opcode NOTIFY and the AA flag set
    /// - a single `<zone> IN SOA` question
    ///
    /// The output depends only on `query`, so every target of a dispatch gets
    /// byte-identical content.
    pub fn build_notify(query: &NotifyQuery) -> Result<Vec<u8>, DomainError> {
        let message = Self::notify_message(query)?;
        Self::serialize_message(&message)
    }

    /// Build the NOTIFY `Message` without serializing it
    pub fn notify_message(query: &NotifyQuery) -> Result<Message, DomainError> {
        let name = Name::from_str(query.zone.as_str()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid zone '{}': {}", query.zone, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordType::SOA);
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Notify);
        message.set_authoritative(true);
        message.add_query(question);

        Ok(message)
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize NOTIFY message: {}", e))
        })?;

        Ok(buf)
    }
}
