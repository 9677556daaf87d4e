//! Fixed room inventory.
//!
//! # Responsibility
//! - Create rooms `1..=room_count` once and answer occupancy queries.
//!
//! # Invariants
//! - The room set never grows or shrinks after construction.
//! - `rooms[i].number == i + 1`.

use crate::error::{FacilityError, FacilityResult};
use crate::model::room::Room;
use crate::model::RoomNumber;
use std::num::NonZeroU32;

#[derive(Debug)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Creates `room_count` free rooms numbered from 1.
    pub fn new(room_count: NonZeroU32) -> Self {
        Self {
            rooms: (1..=room_count.get()).map(Room::new).collect(),
        }
    }

    /// Looks up one room.
    ///
    /// # Errors
    /// - `RoomNotFound` when `number` is outside `1..=room_count`.
    pub fn room(&self, number: RoomNumber) -> FacilityResult<&Room> {
        let index = self.index_of(number)?;
        Ok(&self.rooms[index])
    }

    pub(crate) fn room_mut(&mut self, number: RoomNumber) -> FacilityResult<&mut Room> {
        let index = self.index_of(number)?;
        Ok(&mut self.rooms[index])
    }

    /// # Errors
    /// - `RoomNotFound` when `number` is outside `1..=room_count`.
    pub fn is_occupied(&self, number: RoomNumber) -> FacilityResult<bool> {
        self.room(number).map(Room::is_occupied)
    }

    /// Rooms in ascending number order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Numbers of rooms that are currently free, ascending.
    pub fn free_rooms(&self) -> Vec<RoomNumber> {
        self.rooms
            .iter()
            .filter(|room| !room.is_occupied())
            .map(|room| room.number)
            .collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_occupied()).count()
    }

    fn index_of(&self, number: RoomNumber) -> FacilityResult<usize> {
        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&index| index < self.rooms.len())
            .ok_or(FacilityError::RoomNotFound(number))?;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::RoomInventory;
    use crate::error::FacilityError;
    use std::num::NonZeroU32;

    fn inventory(count: u32) -> RoomInventory {
        RoomInventory::new(NonZeroU32::new(count).expect("non-zero room count"))
    }

    #[test]
    fn creates_contiguous_free_rooms_from_one() {
        let inventory = inventory(4);
        let numbers: Vec<_> = inventory.rooms().map(|room| room.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(inventory.free_rooms(), vec![1, 2, 3, 4]);
        assert_eq!(inventory.occupied_count(), 0);
    }

    #[test]
    fn out_of_range_rooms_are_not_found() {
        let inventory = inventory(3);
        for number in [0, 4, u32::MAX] {
            assert_eq!(
                inventory.is_occupied(number),
                Err(FacilityError::RoomNotFound(number))
            );
        }
        assert_eq!(inventory.is_occupied(3), Ok(false));
    }

    #[test]
    fn occupancy_follows_room_binding() {
        let mut inventory = inventory(2);
        inventory.room_mut(2).expect("room 2").bind(11);
        assert_eq!(inventory.is_occupied(2), Ok(true));
        assert_eq!(inventory.free_rooms(), vec![1]);
        assert_eq!(inventory.occupied_count(), 1);
    }
}
