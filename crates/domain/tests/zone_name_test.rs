use dns_notify_domain::{DomainError, ZoneName};

#[test]
fn test_appends_root_label() {
    let zone = ZoneName::new("example.com").unwrap();
    assert_eq!(zone.as_str(), "example.com.");
}

#[test]
fn test_trailing_dot_is_idempotent() {
    let plain = ZoneName::new("example.com").unwrap();
    let fqdn = ZoneName::new("example.com.").unwrap();
    assert_eq!(plain, fqdn);
    assert_eq!(ZoneName::new(plain.as_str()).unwrap(), plain);
}

#[test]
fn test_root_zone() {
    let root = ZoneName::new(".").unwrap();
    assert_eq!(root.as_str(), ".");
    assert_eq!(root.to_string(), ".");
}

#[test]
fn test_empty_is_rejected() {
    assert!(matches!(
        ZoneName::new(""),
        Err(DomainError::InvalidDomainName(_))
    ));
}

#[test]
fn test_empty_label_is_rejected() {
    assert!(ZoneName::new("example..com").is_err());
    assert!(ZoneName::new(".example.com").is_err());
}

#[test]
fn test_long_label_is_rejected() {
    let zone = format!("{}.com", "x".repeat(64));
    assert!(ZoneName::new(&zone).is_err());
    let zone = format!("{}.com", "x".repeat(63));
    assert!(ZoneName::new(&zone).is_ok());
}

#[test]
fn test_whitespace_is_rejected() {
    assert!(ZoneName::new("exa mple.com").is_err());
}

#[test]
fn test_parse_via_from_str() {
    let zone: ZoneName = "example.org".parse().unwrap();
    assert_eq!(zone.as_ref(), "example.org.");
}
