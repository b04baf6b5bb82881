use apex_ns_domain::fqdn_key;
use dashmap::DashMap;
use hickory_proto::rr::{LowerName, Name};

/// Concurrent record map keyed by normalized fqdn.
///
/// Inserts, clears and lookups may run from any number of query tasks and
/// administrative callers at once.
#[derive(Debug)]
pub struct RecordStore<T> {
    entries: DashMap<String, T>,
}

impl<T: Clone> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Last write wins.
    pub fn upsert(&self, key: String, record: T) {
        self.entries.insert(key, record);
    }

    pub fn get(&self, key: &str) -> Option<T> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Store key for a name taken off the wire: lowercased, escaped ASCII form
/// with a trailing dot.
pub fn name_key(name: &Name) -> String {
    LowerName::from(name).to_ascii()
}

/// Store key for an administratively supplied name.
///
/// Presentation escapes (`\101`, `\.`) are decoded the same way a query name
/// is, so both sides produce identical keys. Names hickory refuses to parse
/// can never be queried and fall back to plain lowercasing.
pub fn fqdn_store_key(fqdn: &str) -> String {
    let key = fqdn_key(fqdn);
    match Name::from_ascii(&key) {
        Ok(name) => name_key(&name),
        Err(_) => key,
    }
}
