mod apply_zone_records;

pub use apply_zone_records::{AppliedRecords, ApplyZoneRecordsUseCase};
