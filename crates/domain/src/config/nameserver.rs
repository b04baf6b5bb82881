use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::zone_record::{MxRecord, TxtRecord};

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Zone served by the authoritative responder.
///
/// An empty `base_domain` or `server_ip` disables answering: every query
/// gets an empty reply. `server_ip` is kept as written and never validated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NameserverConfig {
    /// Parent domain without trailing dot, e.g. `example.com`
    #[serde(default)]
    pub base_domain: String,

    /// Address every name under `base_domain` resolves to
    #[serde(default)]
    pub server_ip: String,

    /// Static TXT records (SPF, DKIM, DMARC ...)
    #[serde(default)]
    pub txt: Vec<TxtRecord>,

    /// Static MX records
    #[serde(default)]
    pub mx: Vec<MxRecord>,
}

impl NameserverConfig {
    pub fn is_enabled(&self) -> bool {
        !self.base_domain.is_empty() && !self.server_ip.is_empty()
    }

    /// Checks that `base_domain` is empty or an ASCII host name: labels of
    /// 1 to 63 letters, digits, `-` or `_`, at most 253 bytes overall. One
    /// trailing dot is accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.base_domain.trim();
        if domain.is_empty() {
            return Ok(());
        }
        let name = domain.strip_suffix('.').unwrap_or(domain);
        let invalid = |reason: &str| {
            ConfigError::Validation(format!(
                "Base domain '{}' {}",
                self.base_domain, reason
            ))
        };

        if name.len() > MAX_NAME_LEN {
            return Err(invalid("is longer than 253 bytes"));
        }
        for label in name.split('.') {
            if label.is_empty() {
                return Err(invalid("contains an empty label"));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(invalid("has a label longer than 63 bytes"));
            }
            if !label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
            {
                return Err(invalid("contains characters not allowed in a host name"));
            }
        }
        Ok(())
    }

    /// Base domain with the trailing root dot.
    pub fn zone_origin(&self) -> String {
        format!("{}.", self.base_domain.trim_end_matches('.'))
    }
}
