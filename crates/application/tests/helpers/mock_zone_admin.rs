#![allow(dead_code)]

use apex_ns_application::ports::ZoneAdmin;
use apex_ns_domain::DomainError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMx {
    pub exchange: String,
    pub preference: u16,
    pub ttl: u32,
}

#[derive(Default)]
pub struct MockZoneAdmin {
    txt: RwLock<HashMap<String, (String, u32)>>,
    mx: RwLock<HashMap<String, StoredMx>>,
    resets: AtomicUsize,
    fail_reset: RwLock<bool>,
}

impl MockZoneAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reset(&self, fail: bool) {
        *self.fail_reset.write().unwrap() = fail;
    }

    pub fn txt(&self, fqdn: &str) -> Option<(String, u32)> {
        self.txt.read().unwrap().get(fqdn).cloned()
    }

    pub fn mx(&self, fqdn: &str) -> Option<StoredMx> {
        self.mx.read().unwrap().get(fqdn).cloned()
    }

    pub fn txt_count(&self) -> usize {
        self.txt.read().unwrap().len()
    }

    pub fn mx_count(&self) -> usize {
        self.mx.read().unwrap().len()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneAdmin for MockZoneAdmin {
    fn add_txt(&self, fqdn: &str, value: &str, ttl: u32) {
        self.txt
            .write()
            .unwrap()
            .insert(fqdn.to_string(), (value.to_string(), ttl));
    }

    fn add_mx(&self, fqdn: &str, exchange: &str, preference: u16, ttl: u32) {
        self.mx.write().unwrap().insert(
            fqdn.to_string(),
            StoredMx {
                exchange: exchange.to_string(),
                preference,
                ttl,
            },
        );
    }

    fn clear_txt(&self) {
        self.txt.write().unwrap().clear();
    }

    fn clear_mx(&self) {
        self.mx.write().unwrap().clear();
    }

    async fn reset(&self) -> Result<(), DomainError> {
        if *self.fail_reset.read().unwrap() {
            return Err(DomainError::InvalidDomainName("mock".to_string()));
        }
        self.resets.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
