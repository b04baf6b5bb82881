//! Apex NS Domain Layer
pub mod config;
pub mod errors;
pub mod zone_record;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, NameserverConfig, ServerConfig};
pub use errors::DomainError;
pub use zone_record::{fqdn_key, MxRecord, TxtRecord, DEFAULT_RECORD_TTL};
