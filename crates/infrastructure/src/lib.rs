//! dns-notify Infrastructure Layer
//!
//! Adapters for the application ports: NOTIFY encoding with `hickory-proto`
//! and UDP/TCP delivery over tokio sockets.
pub mod dns;
