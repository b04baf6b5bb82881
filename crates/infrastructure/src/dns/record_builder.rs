//! Synthesized zone records: SOA, NS, A, TXT and MX.

use apex_ns_domain::{MxRecord, TxtRecord};
use hickory_proto::rr::rdata::{A, MX, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::ProtoError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// TTL of the SOA, NS and A records.
pub const ZONE_TTL: u32 = 300;
pub const SOA_REFRESH: i32 = 900;
pub const SOA_RETRY: i32 = 900;
pub const SOA_EXPIRE: i32 = 1800;
pub const SOA_MINIMUM: u32 = 60;
/// Longest single character-string a TXT rdata can carry.
pub const TXT_STRING_MAX: usize = 255;

/// SOA for `origin` naming `ns1.<origin>` and `hostmaster.<origin>`.
pub fn soa_record(origin: &Name, serial: u32) -> Result<Record, ProtoError> {
    let mname = Name::from_str("ns1")?.append_domain(origin)?;
    let rname = Name::from_str("hostmaster")?.append_domain(origin)?;
    let soa = SOA::new(
        mname,
        rname,
        serial,
        SOA_REFRESH,
        SOA_RETRY,
        SOA_EXPIRE,
        SOA_MINIMUM,
    );
    Ok(Record::from_rdata(origin.clone(), ZONE_TTL, RData::SOA(soa)))
}

/// `ns1.<origin>` and `ns2.<origin>`, in that order.
pub fn ns_records(origin: &Name) -> Result<Vec<Record>, ProtoError> {
    ["ns1", "ns2"]
        .iter()
        .map(|label| {
            let target = Name::from_str(label)?.append_domain(origin)?;
            Ok(Record::from_rdata(
                origin.clone(),
                ZONE_TTL,
                RData::NS(NS(target)),
            ))
        })
        .collect()
}

pub fn a_record(name: &Name, address: Ipv4Addr) -> Record {
    Record::from_rdata(name.clone(), ZONE_TTL, RData::A(A(address)))
}

/// Values longer than [`TXT_STRING_MAX`] are split into consecutive
/// character-strings; resolvers concatenate them back.
pub fn txt_record(name: &Name, txt: &TxtRecord) -> Record {
    let mut chunks: Vec<&[u8]> = txt.value.as_bytes().chunks(TXT_STRING_MAX).collect();
    if chunks.is_empty() {
        chunks.push(b"");
    }
    Record::from_rdata(name.clone(), txt.ttl, RData::TXT(TXT::from_bytes(chunks)))
}

pub fn mx_record(name: &Name, mx: &MxRecord) -> Result<Record, ProtoError> {
    let exchange = Name::from_str(&mx.exchange_fqdn())?;
    Ok(Record::from_rdata(
        name.clone(),
        mx.ttl,
        RData::MX(MX::new(mx.preference, exchange)),
    ))
}
