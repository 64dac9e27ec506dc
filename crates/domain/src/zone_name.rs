use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
/// Presentation length limit including the trailing root label.
const MAX_NAME_LEN: usize = 254;

/// A zone name in fully qualified form (always ends with the root label `.`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneName(Arc<str>);

impl ZoneName {
    /// Validates `domain` and appends the root label when it is missing.
    ///
    /// Normalization is idempotent: `example.com` and `example.com.` yield the
    /// same value.
    pub fn new(domain: &str) -> Result<Self, DomainError> {
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain must not be empty".into(),
            ));
        }

        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        if fqdn == "." {
            return Ok(Self(fqdn.into()));
        }

        if fqdn.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                domain, MAX_NAME_LEN
            )));
        }

        for label in fqdn[..fqdn.len() - 1].split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    domain
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' in '{}' exceeds {} octets",
                    label, domain, MAX_LABEL_LEN
                )));
            }
            if label
                .chars()
                .any(|c| !c.is_ascii() || c.is_ascii_whitespace() || c.is_ascii_control())
            {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains characters not allowed in a domain name",
                    domain
                )));
            }
        }

        Ok(Self(fqdn.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZoneName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ZoneName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
