//! Auxiliary logs: notices, visitors, attendance and meal times.
//!
//! # Invariants
//! - Notices, visitors and meal times keep insertion order.
//! - Attendance and leave counters only grow (saturating at `u32::MAX`).

use crate::model::activity::{AttendanceRecord, Notice, Visitor};
use crate::model::OccupantId;
use std::collections::BTreeMap;
use std::num::NonZeroU32;

#[derive(Debug, Default)]
pub struct ActivityLog {
    notices: Vec<Notice>,
    visitors: Vec<Visitor>,
    attendance: BTreeMap<OccupantId, AttendanceRecord>,
    meal_times: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn log_visitor(&mut self, visitor: Visitor) {
        self.visitors.push(visitor);
    }

    /// Adds one attended day and returns the new count.
    pub fn mark_attendance(&mut self, occupant_id: OccupantId) -> u32 {
        let record = self.attendance.entry(occupant_id).or_default();
        record.days_attended = record.days_attended.saturating_add(1);
        record.days_attended
    }

    /// Adds leave days and returns the new leave total.
    pub fn request_leave(&mut self, occupant_id: OccupantId, days: NonZeroU32) -> u32 {
        let record = self.attendance.entry(occupant_id).or_default();
        record.leave_days = record.leave_days.saturating_add(days.get());
        record.leave_days
    }

    pub fn add_meal_time(&mut self, time: impl Into<String>) {
        self.meal_times.push(time.into());
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Maintenance requests in posting order.
    pub fn maintenance_requests(&self) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(|notice| notice.is_maintenance_request())
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn attendance(&self, occupant_id: OccupantId) -> AttendanceRecord {
        self.attendance
            .get(&occupant_id)
            .copied()
            .unwrap_or_default()
    }

    /// Attendance counters in ascending occupant id order.
    pub fn attendance_records(&self) -> impl Iterator<Item = (OccupantId, AttendanceRecord)> + '_ {
        self.attendance.iter().map(|(&id, &record)| (id, record))
    }

    pub fn meal_times(&self) -> &[String] {
        &self.meal_times
    }
}
