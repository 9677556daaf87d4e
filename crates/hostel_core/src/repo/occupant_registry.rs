//! Occupant and staff registry.
//!
//! # Responsibility
//! - Register residents and staff under caller-supplied identifiers.
//! - Serve lookups for allocation, listings and existence checks.
//!
//! # Invariants
//! - Occupant ids are unique among occupants; staff ids are unique among staff.
//!   The two namespaces are independent.
//! - Records are never removed.

use crate::error::{FacilityError, FacilityResult};
use crate::model::person::{Occupant, StaffMember};
use crate::model::{OccupantId, StaffId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct OccupantRegistry {
    occupants: BTreeMap<OccupantId, Occupant>,
    staff: BTreeMap<StaffId, StaffMember>,
}

impl OccupantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resident with no room assigned.
    ///
    /// # Errors
    /// - `DuplicateIdentifier` when `id` is already registered as an occupant.
    pub fn register_occupant(
        &mut self,
        id: OccupantId,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> FacilityResult<&Occupant> {
        if self.occupants.contains_key(&id) {
            return Err(FacilityError::duplicate_occupant(id));
        }
        Ok(self
            .occupants
            .entry(id)
            .or_insert_with(|| Occupant::new(id, name, contact)))
    }

    /// Registers a staff member.
    ///
    /// # Errors
    /// - `DuplicateIdentifier` when `id` is already registered as staff.
    pub fn register_staff(
        &mut self,
        id: StaffId,
        name: impl Into<String>,
        contact: impl Into<String>,
        role: impl Into<String>,
    ) -> FacilityResult<&StaffMember> {
        if self.staff.contains_key(&id) {
            return Err(FacilityError::duplicate_staff(id));
        }
        Ok(self
            .staff
            .entry(id)
            .or_insert_with(|| StaffMember::new(id, name, contact, role)))
    }

    pub fn find_occupant(&self, id: OccupantId) -> Option<&Occupant> {
        self.occupants.get(&id)
    }

    pub(crate) fn find_occupant_mut(&mut self, id: OccupantId) -> Option<&mut Occupant> {
        self.occupants.get_mut(&id)
    }

    pub fn exists(&self, id: OccupantId) -> bool {
        self.occupants.contains_key(&id)
    }

    pub fn find_staff(&self, id: StaffId) -> Option<&StaffMember> {
        self.staff.get(&id)
    }

    /// Occupants in ascending id order.
    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.occupants.values()
    }

    /// Staff in ascending id order.
    pub fn staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.values()
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }
}
