//! Room record.
//!
//! # Invariants
//! - A room is occupied iff it holds an occupant id. The occupied flag is
//!   derived from `occupant`, so the two can never disagree.

use crate::model::{OccupantId, RoomNumber};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    /// Non-owning reference into the occupant registry.
    occupant_id: Option<OccupantId>,
}

impl Room {
    pub(crate) fn new(number: RoomNumber) -> Self {
        Self {
            number,
            occupant_id: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant_id.is_some()
    }

    pub fn occupant_id(&self) -> Option<OccupantId> {
        self.occupant_id
    }

    pub(crate) fn bind(&mut self, occupant_id: OccupantId) {
        debug_assert!(self.occupant_id.is_none(), "room {} bound twice", self.number);
        self.occupant_id = Some(occupant_id);
    }

    /// Clears the occupant reference and returns the previous holder.
    pub(crate) fn release(&mut self) -> Option<OccupantId> {
        self.occupant_id.take()
    }
}
