use serde::{Deserialize, Serialize};

/// TTL applied to configured records that omit one.
pub const DEFAULT_RECORD_TTL: u32 = 300;

/// Custom TXT record served verbatim for an exact name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TxtRecord {
    pub fqdn: String,

    pub value: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl TxtRecord {
    pub fn new(fqdn: impl Into<String>, value: impl Into<String>, ttl: u32) -> Self {
        Self {
            fqdn: fqdn.into(),
            value: value.into(),
            ttl,
        }
    }
}

/// Custom MX record; lower `preference` is more preferred.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MxRecord {
    pub fqdn: String,

    pub exchange: String,

    #[serde(default)]
    pub preference: u16,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl MxRecord {
    pub fn new(
        fqdn: impl Into<String>,
        exchange: impl Into<String>,
        preference: u16,
        ttl: u32,
    ) -> Self {
        Self {
            fqdn: fqdn.into(),
            exchange: exchange.into(),
            preference,
            ttl,
        }
    }

    /// Exchange host as an absolute name.
    pub fn exchange_fqdn(&self) -> String {
        let exchange = self.exchange.trim();
        if exchange.ends_with('.') {
            exchange.to_string()
        } else {
            format!("{}.", exchange)
        }
    }
}

/// Normalizes a name into a record store key: lowercase with a trailing dot.
pub fn fqdn_key(name: &str) -> String {
    let mut key = name.trim().to_ascii_lowercase();
    if !key.ends_with('.') {
        key.push('.');
    }
    key
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fqdn_key_appends_root_dot() {
        assert_eq!(fqdn_key("example.com"), "example.com.");
        assert_eq!(fqdn_key("example.com."), "example.com.");
    }

    #[test]
    fn test_fqdn_key_lowercases() {
        assert_eq!(fqdn_key("_DMARC.Example.COM."), "_dmarc.example.com.");
    }

    #[test]
    fn test_exchange_fqdn_is_absolute() {
        let mx = MxRecord::new("example.com", "mxa.mailgun.org", 10, 60);
        assert_eq!(mx.exchange_fqdn(), "mxa.mailgun.org.");
    }
}
