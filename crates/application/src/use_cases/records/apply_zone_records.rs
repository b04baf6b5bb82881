use std::sync::Arc;

use apex_ns_domain::NameserverConfig;
use tracing::{debug, info};

use crate::ports::ZoneAdmin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedRecords {
    pub txt: usize,
    pub mx: usize,
}

/// Replaces the responder's TXT and MX stores with the configured records.
pub struct ApplyZoneRecordsUseCase {
    zone: Arc<dyn ZoneAdmin>,
}

impl ApplyZoneRecordsUseCase {
    pub fn new(zone: Arc<dyn ZoneAdmin>) -> Self {
        Self { zone }
    }

    pub fn execute(&self, config: &NameserverConfig) -> AppliedRecords {
        self.zone.clear_txt();
        self.zone.clear_mx();

        for txt in &config.txt {
            debug!(fqdn = %txt.fqdn, ttl = txt.ttl, "Adding TXT record");
            self.zone.add_txt(&txt.fqdn, &txt.value, txt.ttl);
        }

        for mx in &config.mx {
            debug!(fqdn = %mx.fqdn, exchange = %mx.exchange, preference = mx.preference, "Adding MX record");
            self.zone
                .add_mx(&mx.fqdn, &mx.exchange_fqdn(), mx.preference, mx.ttl);
        }

        let applied = AppliedRecords {
            txt: config.txt.len(),
            mx: config.mx.len(),
        };
        info!(txt = applied.txt, mx = applied.mx, "Zone records applied");
        applied
    }
}
