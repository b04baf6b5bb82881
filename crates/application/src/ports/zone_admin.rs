use apex_ns_domain::DomainError;
use async_trait::async_trait;

/// Administrative surface of the authoritative responder.
#[async_trait]
pub trait ZoneAdmin: Send + Sync {
    /// Insert or overwrite the TXT record for `fqdn`.
    fn add_txt(&self, fqdn: &str, value: &str, ttl: u32);

    /// Insert or overwrite the MX record for `fqdn`.
    fn add_mx(&self, fqdn: &str, exchange: &str, preference: u16, ttl: u32);

    fn clear_txt(&self);

    fn clear_mx(&self);

    /// Re-register the served zone from the current base domain.
    async fn reset(&self) -> Result<(), DomainError>;
}
