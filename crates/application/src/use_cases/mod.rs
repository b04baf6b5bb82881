pub mod config;
pub mod records;

pub use config::ReloadConfigUseCase;
pub use records::{AppliedRecords, ApplyZoneRecordsUseCase};
