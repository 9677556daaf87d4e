//! Room allocation use-cases.
//!
//! # Responsibility
//! - Bind and release occupant/room pairs across the registry and inventory.
//! - Keep `Room::occupant_id` and `Occupant::room` in sync.
//!
//! # Invariants
//! - Room lifecycle: free -> occupied -> free. Occupant lifecycle:
//!   unassigned -> assigned(room) -> unassigned.
//! - One occupant holds at most one room; one room holds at most one occupant.
//! - All checks run before the first mutation, so a failed call changes nothing.
//! - A room referencing an unregistered occupant, or an occupant whose cache
//!   disagrees with its room, is corrupted state and panics.

use crate::error::{FacilityError, FacilityResult};
use crate::model::{OccupantId, RoomNumber};
use crate::repo::occupant_registry::OccupantRegistry;
use crate::repo::room_inventory::RoomInventory;

/// Borrowed view that coordinates the registry and the room inventory.
pub struct AllocationService<'a> {
    registry: &'a mut OccupantRegistry,
    inventory: &'a mut RoomInventory,
}

impl<'a> AllocationService<'a> {
    pub fn new(registry: &'a mut OccupantRegistry, inventory: &'a mut RoomInventory) -> Self {
        Self {
            registry,
            inventory,
        }
    }

    /// Assigns `room` to `occupant_id`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `UnknownOccupant` when the occupant is not registered.
    /// - `RoomNotFound` when the room number is out of range.
    /// - `RoomAlreadyOccupied` when the room holds someone.
    /// - `OccupantAlreadyAssigned` when the occupant holds another room.
    pub fn allocate(&mut self, occupant_id: OccupantId, room: RoomNumber) -> FacilityResult<()> {
        let occupant = self
            .registry
            .find_occupant(occupant_id)
            .ok_or(FacilityError::UnknownOccupant(occupant_id))?;
        let target = self.inventory.room(room)?;
        if let Some(holder) = target.occupant_id() {
            return Err(FacilityError::RoomAlreadyOccupied {
                room,
                occupant_id: holder,
            });
        }
        if let Some(current) = occupant.room() {
            return Err(FacilityError::OccupantAlreadyAssigned {
                occupant_id,
                room: current,
            });
        }

        self.inventory.room_mut(room)?.bind(occupant_id);
        self.registry
            .find_occupant_mut(occupant_id)
            .unwrap_or_else(|| panic!("occupant {occupant_id} vanished during allocation"))
            .assign_room(room);
        Ok(())
    }

    /// Frees `room` and resets its holder to unassigned. Returns the id of
    /// the occupant that held it.
    ///
    /// # Errors
    /// - `RoomNotFound` when the room number is out of range.
    /// - `RoomNotOccupied` when the room is already free.
    pub fn deallocate(&mut self, room: RoomNumber) -> FacilityResult<OccupantId> {
        if !self.inventory.is_occupied(room)? {
            return Err(FacilityError::RoomNotOccupied(room));
        }

        let occupant_id = self
            .inventory
            .room_mut(room)?
            .release()
            .unwrap_or_else(|| panic!("room {room} lost its occupant during deallocation"));
        let occupant = self.registry.find_occupant_mut(occupant_id).unwrap_or_else(|| {
            panic!("room {room} references unregistered occupant {occupant_id}")
        });
        assert_eq!(
            occupant.room(),
            Some(room),
            "occupant {occupant_id} room cache disagrees with room {room}"
        );
        occupant.clear_room();
        Ok(occupant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::AllocationService;
    use crate::error::FacilityError;
    use crate::repo::occupant_registry::OccupantRegistry;
    use crate::repo::room_inventory::RoomInventory;
    use std::num::NonZeroU32;

    fn setup() -> (OccupantRegistry, RoomInventory) {
        let mut registry = OccupantRegistry::new();
        registry.register_occupant(7, "Ali", "1").expect("register 7");
        registry
            .register_occupant(8, "Musaid", "2")
            .expect("register 8");
        let inventory = RoomInventory::new(NonZeroU32::new(5).expect("non-zero"));
        (registry, inventory)
    }

    #[test]
    fn allocate_binds_both_sides() {
        let (mut registry, mut inventory) = setup();
        AllocationService::new(&mut registry, &mut inventory)
            .allocate(7, 3)
            .expect("allocation");

        assert_eq!(inventory.room(3).expect("room 3").occupant_id(), Some(7));
        assert_eq!(registry.find_occupant(7).expect("occupant").room(), Some(3));
    }

    #[test]
    fn checks_unknown_occupant_before_room_range() {
        let (mut registry, mut inventory) = setup();
        let err = AllocationService::new(&mut registry, &mut inventory)
            .allocate(99, 42)
            .expect_err("unknown occupant");
        assert_eq!(err, FacilityError::UnknownOccupant(99));
    }

    #[test]
    fn occupied_room_is_checked_before_assigned_occupant() {
        let (mut registry, mut inventory) = setup();
        let mut service = AllocationService::new(&mut registry, &mut inventory);
        service.allocate(7, 1).expect("7 -> 1");
        service.allocate(8, 2).expect("8 -> 2");

        let err = service.allocate(7, 2).expect_err("both conflicts apply");
        assert_eq!(
            err,
            FacilityError::RoomAlreadyOccupied {
                room: 2,
                occupant_id: 8
            }
        );
    }

    #[test]
    fn deallocate_returns_previous_holder() {
        let (mut registry, mut inventory) = setup();
        let mut service = AllocationService::new(&mut registry, &mut inventory);
        service.allocate(8, 5).expect("allocation");
        assert_eq!(service.deallocate(5), Ok(8));
        assert_eq!(service.deallocate(5), Err(FacilityError::RoomNotOccupied(5)));
        assert_eq!(service.deallocate(6), Err(FacilityError::RoomNotFound(6)));
    }

    #[test]
    #[should_panic(expected = "references unregistered occupant")]
    fn dangling_room_reference_panics() {
        let (mut registry, mut inventory) = setup();
        inventory.room_mut(4).expect("room 4").bind(1234);
        let _ = AllocationService::new(&mut registry, &mut inventory).deallocate(4);
    }
}
