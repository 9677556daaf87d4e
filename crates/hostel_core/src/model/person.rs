//! Occupant and staff identity records.
//!
//! # Responsibility
//! - Hold identity data for residents and staff members.
//! - Provide one-line descriptions for listings through [`Describe`].
//!
//! # Invariants
//! - `Occupant::room` is a cache of room state; only the allocation service
//!   writes it.
//! - Staff members never take part in room allocation.

use crate::model::{OccupantId, RoomNumber, StaffId};
use serde::{Deserialize, Serialize};

/// Human-readable, single-line description used by listings.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Resident eligible for room allocation and fee tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub id: OccupantId,
    pub name: String,
    pub contact: String,
    /// `None` while unassigned.
    room: Option<RoomNumber>,
}

impl Occupant {
    /// Creates an occupant with no room assigned.
    pub fn new(id: OccupantId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            room: None,
        }
    }

    /// Room currently held by this occupant.
    pub fn room(&self) -> Option<RoomNumber> {
        self.room
    }

    pub fn is_assigned(&self) -> bool {
        self.room.is_some()
    }

    pub(crate) fn assign_room(&mut self, room: RoomNumber) {
        self.room = Some(room);
    }

    pub(crate) fn clear_room(&mut self) {
        self.room = None;
    }
}

impl Describe for Occupant {
    fn describe(&self) -> String {
        let mut line = format!(
            "Student Name: {}, Contact: {}, ID: {}",
            self.name, self.contact, self.id
        );
        if let Some(room) = self.room {
            line.push_str(&format!(", Room Number: {room}"));
        }
        line
    }
}

/// Staff member with a free-form role label (warden, cook, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub contact: String,
    pub role: String,
}

impl StaffMember {
    pub fn new(
        id: StaffId,
        name: impl Into<String>,
        contact: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            role: role.into(),
        }
    }
}

impl Describe for StaffMember {
    fn describe(&self) -> String {
        format!(
            "Staff Name: {}, Contact: {}, ID: {}, Role: {}",
            self.name, self.contact, self.id, self.role
        )
    }
}
