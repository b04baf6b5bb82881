pub mod errors;
pub mod handler;
pub mod listener;
pub mod nameserver;
pub mod record_builder;
pub mod record_store;
pub mod zone_registration;

pub use errors::ServerError;
pub use handler::DnsServerHandler;
pub use listener::ServerHandle;
pub use nameserver::{Nameserver, ZoneResponse};
pub use record_store::RecordStore;
pub use zone_registration::ZoneRegistration;
