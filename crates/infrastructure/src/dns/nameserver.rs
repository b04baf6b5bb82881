//! Authoritative responder for a single base domain.
//!
//! Every name under the base domain resolves to the configured service
//! address. NS answers exist only at the apex, TXT and MX answers only for
//! names explicitly added to the record stores. Every in-zone reply carries
//! the zone SOA in the authority section.

use super::errors::ServerError;
use super::handler::DnsServerHandler;
use super::listener::{self, ServerHandle};
use super::record_builder;
use super::record_store::{fqdn_store_key, name_key, RecordStore};
use super::zone_registration::ZoneRegistration;
use apex_ns_application::ports::ZoneAdmin;
use apex_ns_domain::{Config, DomainError, MxRecord, TxtRecord};
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{LowerName, Name, Record, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Records synthesized for a single question.
#[derive(Debug, Clone)]
pub struct ZoneResponse {
    pub response_code: ResponseCode,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
}

impl ZoneResponse {
    pub fn empty() -> Self {
        Self {
            response_code: ResponseCode::NoError,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }

    fn out_of_zone() -> Self {
        Self {
            response_code: ResponseCode::ServFail,
            ..Self::empty()
        }
    }
}

pub struct Nameserver {
    config: Arc<RwLock<Config>>,
    serial: u32,
    txt: RecordStore<TxtRecord>,
    mx: RecordStore<MxRecord>,
    registration: ZoneRegistration,
}

impl Nameserver {
    /// Fixes the zone serial and registers the configured base domain.
    pub async fn new(config: Arc<RwLock<Config>>) -> Result<Self, DomainError> {
        let base_domain = config.read().await.nameserver.base_domain.clone();
        let registration = ZoneRegistration::new(&base_domain)?;
        let serial = chrono::Utc::now().timestamp() as u32;

        info!(base_domain = %base_domain, serial, "Nameserver initialized");

        Ok(Self {
            config,
            serial,
            txt: RecordStore::new(),
            mx: RecordStore::new(),
            registration,
        })
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.config
    }

    pub fn registration(&self) -> &ZoneRegistration {
        &self.registration
    }

    /// Binds UDP on `bind_addr` and serves queries on a background task.
    ///
    /// Returns once the socket is bound; a bind failure is returned to the
    /// caller, which is expected to treat it as fatal.
    pub async fn start(self: &Arc<Self>, bind_addr: SocketAddr) -> Result<ServerHandle, ServerError> {
        let handler = DnsServerHandler::new(Arc::clone(self));
        listener::spawn_udp_server(handler, bind_addr).await
    }

    pub fn add_txt(&self, fqdn: &str, value: &str, ttl: u32) {
        let key = fqdn_store_key(fqdn);
        debug!(fqdn = %key, ttl, "TXT record stored");
        self.txt.upsert(key, TxtRecord::new(fqdn, value, ttl));
    }

    pub fn add_mx(&self, fqdn: &str, exchange: &str, preference: u16, ttl: u32) {
        let key = fqdn_store_key(fqdn);
        debug!(fqdn = %key, exchange, preference, ttl, "MX record stored");
        self.mx
            .upsert(key, MxRecord::new(fqdn, exchange, preference, ttl));
    }

    pub fn clear_txt(&self) {
        self.txt.clear();
    }

    pub fn clear_mx(&self) {
        self.mx.clear();
    }

    pub fn txt_count(&self) -> usize {
        self.txt.len()
    }

    pub fn mx_count(&self) -> usize {
        self.mx.len()
    }

    /// Re-registers the zone after the configured base domain changed.
    pub async fn reset(&self) -> Result<(), DomainError> {
        let base_domain = self.config.read().await.nameserver.base_domain.clone();
        self.registration.register(&base_domain)
    }

    /// Builds the reply records for one question.
    pub async fn handle_query(&self, name: &Name, record_type: RecordType) -> ZoneResponse {
        if !self.registration.contains(&LowerName::from(name)) {
            debug!(name = %name, "Query outside registered zone");
            return ZoneResponse::out_of_zone();
        }

        let config = self.config.read().await;
        let zone = &config.nameserver;
        if !zone.is_enabled() {
            return ZoneResponse::empty();
        }

        let origin = match Name::from_str(&zone.zone_origin()) {
            Ok(origin) => origin,
            Err(e) => {
                warn!(base_domain = %zone.base_domain, error = %e, "Invalid base domain");
                return ZoneResponse::empty();
            }
        };

        let mut response = ZoneResponse::empty();
        match record_builder::soa_record(&origin, self.serial) {
            Ok(soa) => response.authority.push(soa),
            Err(e) => warn!(error = %e, "Failed to build SOA record"),
        }

        let key = name_key(name);

        match record_type {
            RecordType::A => {
                debug!(name = %key, address = %zone.server_ip, "DNS A");
                match zone.server_ip.parse::<Ipv4Addr>() {
                    Ok(address) => response
                        .answers
                        .push(record_builder::a_record(name, address)),
                    Err(_) => {
                        warn!(server_ip = %zone.server_ip, "Service address is not an IPv4 address")
                    }
                }
            }
            RecordType::NS => {
                debug!(name = %key, "DNS NS");
                if LowerName::from(name) == LowerName::from(&origin) {
                    match record_builder::ns_records(&origin) {
                        Ok(records) => response.answers.extend(records),
                        Err(e) => warn!(error = %e, "Failed to build NS records"),
                    }
                }
            }
            RecordType::TXT => {
                debug!(name = %key, "DNS TXT");
                if let Some(txt) = self.txt.get(&key) {
                    response
                        .answers
                        .push(record_builder::txt_record(name, &txt));
                }
            }
            RecordType::MX => {
                debug!(name = %key, "DNS MX");
                if let Some(mx) = self.mx.get(&key) {
                    match record_builder::mx_record(name, &mx) {
                        Ok(record) => response.answers.push(record),
                        Err(e) => warn!(exchange = %mx.exchange, error = %e, "Invalid MX exchange"),
                    }
                }
            }
            _ => {}
        }

        response
    }
}

#[async_trait]
impl ZoneAdmin for Nameserver {
    fn add_txt(&self, fqdn: &str, value: &str, ttl: u32) {
        Nameserver::add_txt(self, fqdn, value, ttl);
    }

    fn add_mx(&self, fqdn: &str, exchange: &str, preference: u16, ttl: u32) {
        Nameserver::add_mx(self, fqdn, exchange, preference, ttl);
    }

    fn clear_txt(&self) {
        Nameserver::clear_txt(self);
    }

    fn clear_mx(&self) {
        Nameserver::clear_mx(self);
    }

    async fn reset(&self) -> Result<(), DomainError> {
        Nameserver::reset(self).await
    }
}
