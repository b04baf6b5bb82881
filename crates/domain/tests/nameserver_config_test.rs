use apex_ns_domain::{fqdn_key, CliOverrides, Config, ConfigError, DEFAULT_RECORD_TTL};
use std::io::Write;

const FULL_CONFIG: &str = r#"
    [server]
    bind_address = "127.0.0.1"
    dns_port = 5353

    [nameserver]
    base_domain = "example.com"
    server_ip = "203.0.113.10"

    [[nameserver.txt]]
    fqdn = "example.com"
    value = "v=spf1 include:mailgun.org ~all"
    ttl = 60

    [[nameserver.txt]]
    fqdn = "_dmarc.example.com"
    value = "v=DMARC1; p=none"

    [[nameserver.mx]]
    fqdn = "example.com"
    exchange = "mxa.mailgun.org"
    preference = 10
    ttl = 60

    [logging]
    level = "debug"
"#;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(config.nameserver.base_domain.is_empty());
    assert!(config.nameserver.server_ip.is_empty());
    assert!(config.nameserver.txt.is_empty());
    assert!(config.nameserver.mx.is_empty());
    assert!(!config.nameserver.is_enabled());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_deserialization_with_all_fields() {
    let config = Config::from_toml(FULL_CONFIG).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.dns_bind_addr(), "127.0.0.1:5353");
    assert_eq!(config.nameserver.base_domain, "example.com");
    assert_eq!(config.nameserver.server_ip, "203.0.113.10");
    assert!(config.nameserver.is_enabled());
    assert_eq!(config.logging.level, "debug");

    assert_eq!(config.nameserver.txt.len(), 2);
    assert_eq!(config.nameserver.txt[0].ttl, 60);
    assert_eq!(config.nameserver.txt[1].ttl, DEFAULT_RECORD_TTL);
    assert_eq!(fqdn_key(&config.nameserver.txt[1].fqdn), "_dmarc.example.com.");

    assert_eq!(config.nameserver.mx.len(), 1);
    assert_eq!(config.nameserver.mx[0].preference, 10);
    assert_eq!(config.nameserver.mx[0].exchange, "mxa.mailgun.org");
}

#[test]
fn test_config_empty_document_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.server.dns_port, 53);
    assert!(!config.nameserver.is_enabled());
}

#[test]
fn test_config_parse_error_reported() {
    let result = Config::from_toml("[nameserver\nbase_domain = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_unvalidated_server_ip_is_accepted() {
    let config = Config::from_toml(
        r#"
        [nameserver]
        base_domain = "example.com"
        server_ip = "not-an-address"
    "#,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.nameserver.server_ip, "not-an-address");
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_accepts_host_names() {
    for base_domain in ["", "example.com", "example.com.", "mail-1.example.co.uk", "_acme.example.org"] {
        let mut config = Config::default();
        config.nameserver.base_domain = base_domain.to_string();
        assert!(config.validate().is_ok(), "{base_domain:?} should be accepted");
    }
}

#[test]
fn test_validate_rejects_malformed_base_domain() {
    let long_label = format!("{}.com", "a".repeat(64));
    let long_name = format!("{}.com", vec!["a".repeat(60); 5].join("."));
    for base_domain in [
        ".example.com",
        "bad..example.com",
        "has space.example.com",
        "a\\142c.example.com",
        long_label.as_str(),
        long_name.as_str(),
    ] {
        let mut config = Config::default();
        config.nameserver.base_domain = base_domain.to_string();
        assert!(
            matches!(config.validate(), Err(ConfigError::Validation(_))),
            "{base_domain:?} should be rejected"
        );
    }
}

#[test]
fn test_zone_origin_has_trailing_dot() {
    let mut config = Config::default();
    assert_eq!(config.nameserver.zone_origin(), ".");

    config.nameserver.base_domain = "example.com".to_string();
    assert_eq!(config.nameserver.zone_origin(), "example.com.");
}

#[test]
fn test_ipv6_bind_address_is_bracketed() {
    let mut config = Config::default();
    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.dns_bind_addr(), "[::]:53");
}

#[test]
fn test_load_from_file_applies_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let overrides = CliOverrides {
        dns_port: Some(1053),
        server_ip: Some("198.51.100.7".to_string()),
        ..Default::default()
    };
    let config = Config::load(Some(&path), overrides).unwrap();

    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.nameserver.server_ip, "198.51.100.7");
    assert_eq!(config.nameserver.base_domain, "example.com");
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/apex-ns.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
