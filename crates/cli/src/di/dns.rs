use apex_ns_application::ports::ZoneAdmin;
use apex_ns_application::use_cases::{ApplyZoneRecordsUseCase, ReloadConfigUseCase};
use apex_ns_domain::{CliOverrides, Config};
use apex_ns_infrastructure::dns::Nameserver;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct DnsServices {
    pub nameserver: Arc<Nameserver>,
    pub reload_config: Arc<ReloadConfigUseCase>,
}

impl DnsServices {
    pub async fn new(config: Arc<RwLock<Config>>, overrides: CliOverrides) -> anyhow::Result<Self> {
        let nameserver = Arc::new(Nameserver::new(config.clone()).await?);
        let zone_admin: Arc<dyn ZoneAdmin> = nameserver.clone();

        let apply_records = ApplyZoneRecordsUseCase::new(zone_admin.clone());
        let reload_config = Arc::new(ReloadConfigUseCase::new(config.clone(), zone_admin, overrides));

        let zone = config.read().await.nameserver.clone();
        if zone.is_enabled() {
            info!(
                base_domain = %zone.base_domain,
                server_ip = %zone.server_ip,
                "Serving zone"
            );
        } else {
            warn!("base_domain or server_ip not set, DNS answers disabled");
        }
        apply_records.execute(&zone);

        Ok(Self {
            nameserver,
            reload_config,
        })
    }
}
