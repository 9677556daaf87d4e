//! Read-only facility snapshot used by "display all" style listings.

use crate::model::activity::{Notice, Visitor};
use crate::model::person::{Occupant, StaffMember};
use crate::model::room::Room;
use crate::model::{Amount, OccupantId, RoomNumber};
use crate::repo::fee_ledger::FeeStatementLine;
use serde::Serialize;

/// Attendance counters flattened for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceLine {
    pub occupant_id: OccupantId,
    pub days_attended: u32,
    pub leave_days: u32,
}

/// Owned copy of every component, taken at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilitySnapshot {
    pub occupants: Vec<Occupant>,
    pub staff: Vec<StaffMember>,
    pub rooms: Vec<Room>,
    pub free_rooms: Vec<RoomNumber>,
    pub notices: Vec<Notice>,
    /// Maintenance-request subset of `notices`, in posting order.
    pub maintenance_requests: Vec<Notice>,
    pub visitors: Vec<Visitor>,
    pub fees: Vec<FeeStatementLine>,
    pub total_charged: Amount,
    pub total_paid: Amount,
    pub attendance: Vec<AttendanceLine>,
    pub meal_times: Vec<String>,
}

impl FacilitySnapshot {
    pub fn occupied_rooms(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_occupied()).count()
    }
}
