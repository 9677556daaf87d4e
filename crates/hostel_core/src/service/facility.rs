//! Facility aggregate: the operation set used by command front-ends.
//!
//! # Responsibility
//! - Own the registry, room inventory, fee ledger and activity logs.
//! - Delegate each operation to the component that owns its invariant.
//! - Emit one structured log event per mutating operation.
//!
//! # Invariants
//! - No validation happens here beyond what components enforce.
//! - Fee and activity entries may reference ids that were never registered.

use crate::config::HostelConfig;
use crate::error::FacilityResult;
use crate::model::activity::{AttendanceRecord, Notice, NoticeKind, Visitor};
use crate::model::fee::FeeRecord;
use crate::model::person::{Occupant, StaffMember};
use crate::model::room::Room;
use crate::model::{Amount, OccupantId, RoomNumber, StaffId};
use crate::repo::activity_log::ActivityLog;
use crate::repo::fee_ledger::{FeeLedger, FeeStatementLine};
use crate::repo::occupant_registry::OccupantRegistry;
use crate::repo::room_inventory::RoomInventory;
use crate::service::allocation_service::AllocationService;
use crate::service::snapshot::{AttendanceLine, FacilitySnapshot};
use log::{info, warn};
use std::fmt::Arguments;
use std::num::NonZeroU32;

pub struct Facility {
    registry: OccupantRegistry,
    inventory: RoomInventory,
    ledger: FeeLedger,
    activity: ActivityLog,
}

impl Facility {
    /// Creates an empty facility with rooms `1..=room_count`.
    pub fn new(room_count: NonZeroU32) -> Self {
        info!(
            "event=facility_init module=facility status=ok room_count={}",
            room_count
        );
        Self {
            registry: OccupantRegistry::new(),
            inventory: RoomInventory::new(room_count),
            ledger: FeeLedger::new(),
            activity: ActivityLog::new(),
        }
    }

    /// Creates a facility sized by `config`, seeding demo records when enabled.
    pub fn from_config(config: &HostelConfig) -> FacilityResult<Self> {
        let mut facility = Self::new(config.room_count);
        if config.seed_demo_data {
            facility.seed_demo_data()?;
        }
        Ok(facility)
    }

    /// Registers the two sample students and the warden.
    ///
    /// # Errors
    /// - `DuplicateIdentifier` when any sample id is already taken.
    pub fn seed_demo_data(&mut self) -> FacilityResult<()> {
        self.register_occupant(1, "Ali", "1234567890")?;
        self.register_occupant(2, "Musaid", "0987654321")?;
        self.register_staff(1, "Mr. Ahsan", "1122334455", "Warden")?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    pub fn register_occupant(
        &mut self,
        id: OccupantId,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> FacilityResult<&Occupant> {
        let result = self.registry.register_occupant(id, name, contact);
        log_outcome("occupant_register", format_args!("occupant_id={id}"), &result);
        result
    }

    pub fn register_staff(
        &mut self,
        id: StaffId,
        name: impl Into<String>,
        contact: impl Into<String>,
        role: impl Into<String>,
    ) -> FacilityResult<&StaffMember> {
        let result = self.registry.register_staff(id, name, contact, role);
        log_outcome("staff_register", format_args!("staff_id={id}"), &result);
        result
    }

    pub fn find_occupant(&self, id: OccupantId) -> Option<&Occupant> {
        self.registry.find_occupant(id)
    }

    pub fn occupant_exists(&self, id: OccupantId) -> bool {
        self.registry.exists(id)
    }

    pub fn find_staff(&self, id: StaffId) -> Option<&StaffMember> {
        self.registry.find_staff(id)
    }

    pub fn registry(&self) -> &OccupantRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    pub fn allocate_room(&mut self, occupant_id: OccupantId, room: RoomNumber) -> FacilityResult<()> {
        let result = self.allocation().allocate(occupant_id, room);
        log_outcome(
            "room_allocate",
            format_args!("occupant_id={occupant_id} room={room}"),
            &result,
        );
        result
    }

    /// Frees `room`; returns the occupant that held it.
    pub fn deallocate_room(&mut self, room: RoomNumber) -> FacilityResult<OccupantId> {
        let result = self.allocation().deallocate(room);
        log_outcome("room_deallocate", format_args!("room={room}"), &result);
        result
    }

    pub fn room(&self, number: RoomNumber) -> FacilityResult<&Room> {
        self.inventory.room(number)
    }

    pub fn is_room_occupied(&self, number: RoomNumber) -> FacilityResult<bool> {
        self.inventory.is_occupied(number)
    }

    pub fn inventory(&self) -> &RoomInventory {
        &self.inventory
    }

    fn allocation(&mut self) -> AllocationService<'_> {
        AllocationService::new(&mut self.registry, &mut self.inventory)
    }

    // ------------------------------------------------------------------
    // Fees
    // ------------------------------------------------------------------

    pub fn add_fee(&mut self, occupant_id: OccupantId, amount: Amount) -> FacilityResult<()> {
        let result = self.ledger.add_charge(occupant_id, amount);
        log_outcome("fee_charge", format_args!("occupant_id={occupant_id}"), &result);
        result
    }

    pub fn pay_fee(&mut self, occupant_id: OccupantId, amount: Amount) -> FacilityResult<()> {
        let result = self.ledger.record_payment(occupant_id, amount);
        log_outcome("fee_payment", format_args!("occupant_id={occupant_id}"), &result);
        result
    }

    pub fn amount_due(&self, occupant_id: OccupantId) -> FacilityResult<Amount> {
        self.ledger.amount_due(occupant_id)
    }

    pub fn fee_record(&self, occupant_id: OccupantId) -> Option<&FeeRecord> {
        self.ledger.record(occupant_id)
    }

    pub fn overdue_fees(&self) -> Vec<(OccupantId, Amount)> {
        self.ledger.list_overdue()
    }

    pub fn fee_statement(&self) -> Vec<FeeStatementLine> {
        self.ledger.statement()
    }

    pub fn total_fees(&self) -> Amount {
        self.ledger.total_charged()
    }

    pub fn total_paid(&self) -> Amount {
        self.ledger.total_paid()
    }

    // ------------------------------------------------------------------
    // Activity logs
    // ------------------------------------------------------------------

    pub fn post_notice(
        &mut self,
        message: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        is_maintenance: bool,
    ) {
        let kind = NoticeKind::from_maintenance_flag(is_maintenance);
        self.activity
            .post_notice(Notice::new(message, sender, recipient, kind));
        info!(
            "event=notice_post module=facility status=ok maintenance={}",
            is_maintenance
        );
    }

    pub fn log_visitor(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
        reason: impl Into<String>,
        occupant_id: OccupantId,
    ) {
        self.activity
            .log_visitor(Visitor::arriving_now(name, contact, reason, occupant_id));
        info!(
            "event=visitor_log module=facility status=ok occupant_id={}",
            occupant_id
        );
    }

    /// Returns the occupant's updated attended-day count.
    pub fn mark_attendance(&mut self, occupant_id: OccupantId) -> u32 {
        let days = self.activity.mark_attendance(occupant_id);
        info!(
            "event=attendance_mark module=facility status=ok occupant_id={} days={}",
            occupant_id, days
        );
        days
    }

    /// Returns the occupant's updated leave-day total.
    pub fn request_leave(&mut self, occupant_id: OccupantId, days: NonZeroU32) -> u32 {
        let total = self.activity.request_leave(occupant_id, days);
        info!(
            "event=leave_request module=facility status=ok occupant_id={} days={} total={}",
            occupant_id, days, total
        );
        total
    }

    pub fn add_meal_time(&mut self, time: impl Into<String>) {
        self.activity.add_meal_time(time);
        info!("event=meal_time_add module=facility status=ok");
    }

    pub fn attendance(&self, occupant_id: OccupantId) -> AttendanceRecord {
        self.activity.attendance(occupant_id)
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    // ------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------

    /// Owned copy of every component.
    pub fn snapshot(&self) -> FacilitySnapshot {
        FacilitySnapshot {
            occupants: self.registry.occupants().cloned().collect(),
            staff: self.registry.staff().cloned().collect(),
            rooms: self.inventory.rooms().cloned().collect(),
            free_rooms: self.inventory.free_rooms(),
            notices: self.activity.notices().to_vec(),
            maintenance_requests: self.activity.maintenance_requests().cloned().collect(),
            visitors: self.activity.visitors().to_vec(),
            fees: self.ledger.statement(),
            total_charged: self.ledger.total_charged(),
            total_paid: self.ledger.total_paid(),
            attendance: self
                .activity
                .attendance_records()
                .map(|(occupant_id, record)| AttendanceLine {
                    occupant_id,
                    days_attended: record.days_attended,
                    leave_days: record.leave_days,
                })
                .collect(),
            meal_times: self.activity.meal_times().to_vec(),
        }
    }
}

fn log_outcome<T>(event: &str, fields: Arguments<'_>, result: &FacilityResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=facility status=ok {fields}"),
        Err(err) => warn!(
            "event={event} module=facility status=error {fields} error_code={}",
            err.error_code()
        ),
    }
}
