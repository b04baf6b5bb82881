#![allow(dead_code)]

use apex_ns_domain::Config;
use apex_ns_infrastructure::dns::{Nameserver, ZoneResponse};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const BASE_DOMAIN: &str = "example.com";
pub const SERVER_IP: &str = "203.0.113.10";

pub fn config_with(base_domain: &str, server_ip: &str) -> Config {
    let mut config = Config::default();
    config.nameserver.base_domain = base_domain.to_string();
    config.nameserver.server_ip = server_ip.to_string();
    config
}

pub async fn nameserver_with(config: Config) -> Arc<Nameserver> {
    Arc::new(
        Nameserver::new(Arc::new(RwLock::new(config)))
            .await
            .unwrap(),
    )
}

pub async fn example_nameserver() -> Arc<Nameserver> {
    nameserver_with(config_with(BASE_DOMAIN, SERVER_IP)).await
}

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub async fn query(nameserver: &Nameserver, qname: &str, record_type: RecordType) -> ZoneResponse {
    nameserver.handle_query(&name(qname), record_type).await
}

pub fn txt_values(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| match r.data() {
            RData::TXT(txt) => Some(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

pub fn soa_serials(records: &[Record]) -> Vec<u32> {
    records
        .iter()
        .filter_map(|r| match r.data() {
            RData::SOA(soa) => Some(soa.serial()),
            _ => None,
        })
        .collect()
}
