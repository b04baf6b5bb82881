pub mod errors;
pub mod logging;
pub mod nameserver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use nameserver::NameserverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
