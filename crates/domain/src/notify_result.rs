use crate::errors::DomainError;
use crate::notify_target::AddressError;
use std::borrow::Cow;
use std::time::Duration;

/// What the exchange layer reports back for a single NOTIFY round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeResponse {
    /// AA bit of the reply header.
    pub authoritative: bool,
    pub rcode: u16,
    pub rtt: Duration,
}

impl ExchangeResponse {
    pub fn new(authoritative: bool, rcode: u16, rtt: Duration) -> Self {
        Self {
            authoritative,
            rcode,
            rtt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyOutcome {
    /// The server answered with the AA bit set.
    Acknowledged,
    /// The server answered, but not authoritatively.
    NotAuthoritative,
    /// The server address could not be normalized; nothing was sent.
    AddressError,
    /// Timeout, refused connection, unparsable reply and similar.
    ExchangeError,
    /// The server list was empty.
    NoServers,
}

/// Outcome of notifying one server. Built once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyResult {
    server: String,
    message: String,
    is_error: bool,
    outcome: NotifyOutcome,
    rtt: Option<Duration>,
}

impl NotifyResult {
    pub fn no_servers() -> Self {
        Self {
            server: String::new(),
            message: "No servers".to_string(),
            is_error: true,
            outcome: NotifyOutcome::NoServers,
            rtt: None,
        }
    }

    pub fn address_error(raw: &str, error: &AddressError) -> Self {
        Self {
            server: raw.to_string(),
            message: format!("{}: {}", raw, error),
            is_error: true,
            outcome: NotifyOutcome::AddressError,
            rtt: None,
        }
    }

    pub fn exchange_error(target: &str, error: &DomainError) -> Self {
        Self {
            server: target.to_string(),
            message: error.to_string(),
            is_error: true,
            outcome: NotifyOutcome::ExchangeError,
            rtt: None,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn outcome(&self) -> NotifyOutcome {
        self.outcome
    }

    pub fn rtt(&self) -> Option<Duration> {
        self.rtt
    }

    /// True only when the server confirmed the notify authoritatively.
    pub fn is_acknowledged(&self) -> bool {
        self.outcome == NotifyOutcome::Acknowledged
    }
}

/// Turns the raw result of one exchange into a [`NotifyResult`].
///
/// A non-authoritative reply is described as "not ok" but keeps
/// `is_error == false`: the exchange itself succeeded. Use
/// [`NotifyResult::is_acknowledged`] for the strict check.
pub fn classify(target: &str, outcome: Result<ExchangeResponse, DomainError>) -> NotifyResult {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return NotifyResult::exchange_error(target, &e),
    };

    let (status, outcome) = if response.authoritative {
        (Cow::Borrowed("ok"), NotifyOutcome::Acknowledged)
    } else {
        (
            Cow::Owned(format!("not ok ({})", rcode_name(response.rcode))),
            NotifyOutcome::NotAuthoritative,
        )
    };

    NotifyResult {
        server: target.to_string(),
        message: format!("{}: {} ({:?})", target, status, response.rtt),
        is_error: false,
        outcome,
        rtt: Some(response.rtt),
    }
}

/// Mnemonic for a response code, as printed by dig and friends.
pub fn rcode_name(rcode: u16) -> Cow<'static, str> {
    let name = match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADVERS",
        other => return Cow::Owned(format!("RCODE{}", other)),
    };
    Cow::Borrowed(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rcode_name_known_and_unknown() {
        assert_eq!(rcode_name(5), "REFUSED");
        assert_eq!(rcode_name(9), "NOTAUTH");
        assert_eq!(rcode_name(12), "RCODE12");
    }

    #[test]
    fn test_rtt_kept_on_answer() {
        let rtt = Duration::from_micros(1500);
        let result = classify("ns1:53", Ok(ExchangeResponse::new(true, 0, rtt)));
        assert_eq!(result.rtt(), Some(rtt));
        assert_eq!(result.message(), "ns1:53: ok (1.5ms)");
    }
}
