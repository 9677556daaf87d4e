use hostel_core::{Facility, FacilityError};
use std::num::NonZeroU32;

fn facility_with_rooms(count: u32) -> Facility {
    Facility::new(NonZeroU32::new(count).unwrap())
}

fn assert_rooms_consistent(facility: &Facility) {
    for room in facility.inventory().rooms() {
        assert_eq!(room.is_occupied(), room.occupant_id().is_some());
        if let Some(id) = room.occupant_id() {
            let occupant = facility.find_occupant(id).unwrap();
            assert_eq!(occupant.room(), Some(room.number));
        }
    }
    for occupant in facility.registry().occupants() {
        if let Some(number) = occupant.room() {
            assert_eq!(
                facility.room(number).unwrap().occupant_id(),
                Some(occupant.id)
            );
        }
    }
}

#[test]
fn allocate_then_deallocate_restores_initial_state() {
    let mut facility = facility_with_rooms(5);
    facility.register_occupant(7, "Ali", "1234567890").unwrap();
    let room_before = facility.room(3).unwrap().clone();
    let occupant_before = facility.find_occupant(7).unwrap().clone();

    facility.allocate_room(7, 3).unwrap();
    assert!(facility.is_room_occupied(3).unwrap());
    assert_eq!(facility.find_occupant(7).unwrap().room(), Some(3));
    assert_rooms_consistent(&facility);

    assert_eq!(facility.deallocate_room(3).unwrap(), 7);
    assert_eq!(facility.room(3).unwrap(), &room_before);
    assert_eq!(facility.find_occupant(7).unwrap(), &occupant_before);
    assert_rooms_consistent(&facility);
}

#[test]
fn second_occupant_cannot_take_an_occupied_room() {
    let mut facility = facility_with_rooms(5);
    facility.register_occupant(1, "Ali", "1").unwrap();
    facility.register_occupant(2, "Musaid", "2").unwrap();
    facility.allocate_room(1, 4).unwrap();

    let err = facility.allocate_room(2, 4).unwrap_err();
    assert_eq!(
        err,
        FacilityError::RoomAlreadyOccupied {
            room: 4,
            occupant_id: 1
        }
    );
    assert_eq!(facility.room(4).unwrap().occupant_id(), Some(1));
    assert_eq!(facility.find_occupant(2).unwrap().room(), None);
    assert_rooms_consistent(&facility);
}

#[test]
fn assigned_occupant_cannot_be_moved_to_another_room() {
    let mut facility = facility_with_rooms(5);
    facility.register_occupant(7, "Ali", "1").unwrap();
    facility.allocate_room(7, 3).unwrap();

    let err = facility.allocate_room(7, 4).unwrap_err();
    assert_eq!(
        err,
        FacilityError::OccupantAlreadyAssigned {
            occupant_id: 7,
            room: 3
        }
    );
    assert!(!facility.is_room_occupied(4).unwrap());
    assert_eq!(facility.find_occupant(7).unwrap().room(), Some(3));
    assert_rooms_consistent(&facility);
}

#[test]
fn occupant_can_move_after_deallocation() {
    let mut facility = facility_with_rooms(5);
    facility.register_occupant(7, "Ali", "1").unwrap();
    facility.allocate_room(7, 3).unwrap();
    facility.deallocate_room(3).unwrap();
    facility.allocate_room(7, 4).unwrap();

    assert_eq!(facility.find_occupant(7).unwrap().room(), Some(4));
    assert!(!facility.is_room_occupied(3).unwrap());
    assert_rooms_consistent(&facility);
}

#[test]
fn unknown_occupant_leaves_room_untouched() {
    let mut facility = facility_with_rooms(5);
    let err = facility.allocate_room(99, 1).unwrap_err();
    assert_eq!(err, FacilityError::UnknownOccupant(99));
    assert!(!facility.is_room_occupied(1).unwrap());
}

#[test]
fn out_of_range_rooms_are_rejected() {
    let mut facility = facility_with_rooms(3);
    facility.register_occupant(1, "Ali", "1").unwrap();

    assert_eq!(
        facility.allocate_room(1, 0).unwrap_err(),
        FacilityError::RoomNotFound(0)
    );
    assert_eq!(
        facility.allocate_room(1, 4).unwrap_err(),
        FacilityError::RoomNotFound(4)
    );
    assert_eq!(
        facility.deallocate_room(4).unwrap_err(),
        FacilityError::RoomNotFound(4)
    );
    assert_eq!(
        facility.is_room_occupied(10).unwrap_err(),
        FacilityError::RoomNotFound(10)
    );
    assert_eq!(facility.find_occupant(1).unwrap().room(), None);
}

#[test]
fn deallocating_a_free_room_always_fails_without_mutation() {
    let mut facility = facility_with_rooms(2);
    facility.register_occupant(1, "Ali", "1").unwrap();
    facility.allocate_room(1, 1).unwrap();

    for _ in 0..3 {
        assert_eq!(
            facility.deallocate_room(2).unwrap_err(),
            FacilityError::RoomNotOccupied(2)
        );
    }
    assert_eq!(facility.room(1).unwrap().occupant_id(), Some(1));
    assert_eq!(facility.inventory().occupied_count(), 1);
    assert_rooms_consistent(&facility);
}

#[test]
fn mixed_sequence_keeps_rooms_consistent() {
    let mut facility = facility_with_rooms(4);
    for id in 1..=6 {
        facility
            .register_occupant(id, format!("occupant-{id}"), "000")
            .unwrap();
    }

    let steps: [(u32, u32); 8] = [(1, 1), (2, 2), (3, 2), (1, 3), (4, 4), (5, 9), (6, 3), (2, 1)];
    for (id, room) in steps {
        let _ = facility.allocate_room(id, room);
        assert_rooms_consistent(&facility);
    }
    for room in [2, 2, 4, 7] {
        let _ = facility.deallocate_room(room);
        assert_rooms_consistent(&facility);
    }

    assert_eq!(facility.inventory().free_rooms(), vec![2, 4]);
    assert_eq!(facility.room(3).unwrap().occupant_id(), Some(6));
    assert_eq!(facility.find_occupant(1).unwrap().room(), Some(1));
}
