//! Append-only activity records: notices, visitors, attendance.
//!
//! These records carry no cross-record invariants. They reference occupants
//! by id without requiring the id to be registered.

use crate::model::OccupantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::person::Describe;

/// Notice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Ordinary communication between residents and staff.
    General,
    /// Request for repair or upkeep work.
    MaintenanceRequest,
}

impl NoticeKind {
    pub fn from_maintenance_flag(is_maintenance: bool) -> Self {
        if is_maintenance {
            Self::MaintenanceRequest
        } else {
            Self::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub sender: String,
    pub recipient: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(
        message: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        kind: NoticeKind,
    ) -> Self {
        Self {
            message: message.into(),
            sender: sender.into(),
            recipient: recipient.into(),
            kind,
        }
    }

    pub fn is_maintenance_request(&self) -> bool {
        self.kind == NoticeKind::MaintenanceRequest
    }
}

impl Describe for Notice {
    fn describe(&self) -> String {
        let mut line = format!(
            "Notice: {}, From: {}, To: {}",
            self.message, self.sender, self.recipient
        );
        if self.is_maintenance_request() {
            line.push_str(" (Maintenance Request)");
        }
        line
    }
}

/// Visitor entry, stamped with its arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub contact: String,
    pub reason: String,
    pub occupant_id: OccupantId,
    pub visited_at: DateTime<Utc>,
}

impl Visitor {
    /// Creates a visitor entry stamped with the current time.
    pub fn arriving_now(
        name: impl Into<String>,
        contact: impl Into<String>,
        reason: impl Into<String>,
        occupant_id: OccupantId,
    ) -> Self {
        Self::arriving_at(name, contact, reason, occupant_id, Utc::now())
    }

    pub fn arriving_at(
        name: impl Into<String>,
        contact: impl Into<String>,
        reason: impl Into<String>,
        occupant_id: OccupantId,
        visited_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            reason: reason.into(),
            occupant_id,
            visited_at,
        }
    }
}

impl Describe for Visitor {
    fn describe(&self) -> String {
        format!(
            "Visitor Name: {}, Contact: {}, Reason: {}, Visiting Student ID: {}, Visit Time: {}",
            self.name,
            self.contact,
            self.reason,
            self.occupant_id,
            self.visited_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Attendance counters for one occupant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub days_attended: u32,
    pub leave_days: u32,
}
