use apex_ns_domain::{CliOverrides, Config, DomainError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::ports::ZoneAdmin;
use crate::use_cases::records::{AppliedRecords, ApplyZoneRecordsUseCase};

pub struct ReloadConfigUseCase {
    config: Arc<RwLock<Config>>,
    zone: Arc<dyn ZoneAdmin>,
    overrides: CliOverrides,
}

impl ReloadConfigUseCase {
    pub fn new(
        config: Arc<RwLock<Config>>,
        zone: Arc<dyn ZoneAdmin>,
        overrides: CliOverrides,
    ) -> Self {
        Self {
            config,
            zone,
            overrides,
        }
    }

    /// Reloads `config_path`, re-registers the zone and replaces all custom
    /// records. The running configuration is untouched if loading fails and
    /// restored if the zone cannot be re-registered.
    pub async fn execute(&self, config_path: &str) -> Result<Config, DomainError> {
        let new_config = Config::load(Some(config_path), self.overrides.clone())
            .map_err(|e| DomainError::ConfigError(format!("Config load error: {}", e)))?;

        new_config
            .validate()
            .map_err(|e| DomainError::ConfigError(format!("Config validation error: {}", e)))?;

        let previous = {
            let mut config = self.config.write().await;
            std::mem::replace(&mut *config, new_config.clone())
        };

        if let Err(e) = self.zone.reset().await {
            warn!(error = %e, "Zone re-registration failed, restoring previous configuration");
            *self.config.write().await = previous;
            return Err(e);
        }

        let AppliedRecords { txt, mx } =
            ApplyZoneRecordsUseCase::new(self.zone.clone()).execute(&new_config.nameserver);

        info!(
            path = %config_path,
            base_domain = %new_config.nameserver.base_domain,
            txt,
            mx,
            "Configuration reloaded successfully"
        );

        Ok(new_config)
    }
}
