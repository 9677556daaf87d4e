//! Core domain logic for the hostel management system.
//! This crate is the single source of truth for allocation and fee invariants.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shared;

pub use config::{ConfigError, ConfigResult, HostelConfig, MAX_ROOM_COUNT};
pub use error::{FacilityError, FacilityResult, IdentityKind};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{AttendanceRecord, Notice, NoticeKind, Visitor};
pub use model::fee::FeeRecord;
pub use model::person::{Describe, Occupant, StaffMember};
pub use model::room::Room;
pub use model::{Amount, OccupantId, RoomNumber, StaffId};
pub use repo::activity_log::ActivityLog;
pub use repo::fee_ledger::{FeeLedger, FeeStatementLine};
pub use repo::occupant_registry::OccupantRegistry;
pub use repo::room_inventory::RoomInventory;
pub use service::allocation_service::AllocationService;
pub use service::facility::Facility;
pub use service::snapshot::{AttendanceLine, FacilitySnapshot};
pub use shared::SharedFacility;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
