use apex_ns_domain::DomainError;
use arc_swap::ArcSwap;
use hickory_proto::rr::{LowerName, Name};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// The zone a responder instance answers for.
///
/// Owned by the responder rather than a process-wide dispatch table;
/// re-registering swaps the origin atomically under running queries.
pub struct ZoneRegistration {
    origin: ArcSwap<LowerName>,
}

impl ZoneRegistration {
    /// Registers `base_domain`; an empty base domain registers the root.
    pub fn new(base_domain: &str) -> Result<Self, DomainError> {
        let origin = Self::parse_origin(base_domain)?;
        info!(zone = %origin, "Registered DNS zone");
        Ok(Self {
            origin: ArcSwap::from_pointee(origin),
        })
    }

    pub fn register(&self, base_domain: &str) -> Result<(), DomainError> {
        let origin = Self::parse_origin(base_domain)?;
        info!(zone = %origin, "Re-registered DNS zone");
        self.origin.store(Arc::new(origin));
        Ok(())
    }

    /// Whether `name` is the origin or any name beneath it.
    pub fn contains(&self, name: &LowerName) -> bool {
        self.origin.load().zone_of(name)
    }

    fn parse_origin(base_domain: &str) -> Result<LowerName, DomainError> {
        let trimmed = base_domain.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Ok(LowerName::from(Name::root()));
        }
        let name = Name::from_str(&format!("{}.", trimmed))
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", base_domain, e)))?;
        Ok(LowerName::from(name))
    }
}
