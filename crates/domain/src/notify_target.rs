//! Server address normalization.
//!
//! Notify targets are given on the command line as `host`, `host:port`,
//! `[v6]` or `[v6]:port`. A missing port is filled in with the DNS port; any
//! other malformed input is reported back to the caller.

use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

pub const DEFAULT_DNS_PORT: u16 = 53;

const MAX_LABEL_LEN: usize = 63;
const MAX_HOSTNAME_LEN: usize = 253;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address {0}: too many colons")]
    TooManyColons(String),

    #[error("address {0}: missing ']'")]
    MissingBracket(String),

    #[error("address {0}: unexpected '[' or ']'")]
    UnexpectedBracket(String),

    #[error("address {0}: missing host")]
    MissingHost(String),

    #[error("address {address}: invalid host '{host}'")]
    InvalidHost { address: String, host: String },

    #[error("address {address}: invalid port '{port}'")]
    InvalidPort { address: String, port: String },
}

/// Returns `raw` in `host:port` form.
///
/// Input that already carries a port is returned unchanged. Input that only
/// lacks a port gets `:53` appended. Everything else is an [`AddressError`].
pub fn normalize_target(raw: &str) -> Result<String, AddressError> {
    let (host, port, bracketed) = split_host_port(raw)?;

    if bracketed {
        validate_ipv6_host(raw, host)?;
    } else {
        validate_host(raw, host)?;
    }

    match port {
        Some(port) => {
            validate_port(raw, port)?;
            Ok(raw.to_string())
        }
        None => Ok(format!("{}:{}", raw, DEFAULT_DNS_PORT)),
    }
}

/// Splits `host:port` / `[host]:port`; the port is `None` when absent.
fn split_host_port(s: &str) -> Result<(&str, Option<&str>, bool), AddressError> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| AddressError::MissingBracket(s.to_string()))?;
        let host = &rest[..end];
        let after = &rest[end + 1..];

        if host.contains('[') || after.contains('[') || after.contains(']') {
            return Err(AddressError::UnexpectedBracket(s.to_string()));
        }

        return match after.strip_prefix(':') {
            Some(port) => Ok((host, Some(port), true)),
            None if after.is_empty() => Ok((host, None, true)),
            None => Err(AddressError::InvalidPort {
                address: s.to_string(),
                port: after.to_string(),
            }),
        };
    }

    if s.contains('[') || s.contains(']') {
        return Err(AddressError::UnexpectedBracket(s.to_string()));
    }

    match s.matches(':').count() {
        0 => Ok((s, None, false)),
        1 => {
            let (host, port) = s.split_once(':').unwrap_or((s, ""));
            Ok((host, Some(port), false))
        }
        _ => Err(AddressError::TooManyColons(s.to_string())),
    }
}

/// Scoped addresses (`fe80::1%eth0`) are rejected: a named zone cannot be
/// turned into a socket address.
fn validate_ipv6_host(address: &str, host: &str) -> Result<(), AddressError> {
    host.parse::<Ipv6Addr>()
        .map(|_| ())
        .map_err(|_| AddressError::InvalidHost {
            address: address.to_string(),
            host: host.to_string(),
        })
}

fn validate_host(address: &str, host: &str) -> Result<(), AddressError> {
    if host.is_empty() {
        return Err(AddressError::MissingHost(address.to_string()));
    }

    if host.parse::<Ipv4Addr>().is_ok() {
        return Ok(());
    }

    let invalid = || AddressError::InvalidHost {
        address: address.to_string(),
        host: host.to_string(),
    };

    let name = host.strip_suffix('.').unwrap_or(host);
    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return Err(invalid());
    }

    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(invalid());
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(invalid());
        }
    }

    Ok(())
}

fn validate_port(address: &str, port: &str) -> Result<(), AddressError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidPort {
            address: address.to_string(),
            port: port.to_string(),
        });
    }
    port.parse::<u16>()
        .map(|_| ())
        .map_err(|_| AddressError::InvalidPort {
            address: address.to_string(),
            port: port.to_string(),
        })
}
