//! Caller-facing error taxonomy for facility operations.
//!
//! # Responsibility
//! - Name every recoverable failure of allocation, registry and ledger calls.
//! - Provide stable `error_code` strings for structured log events.
//!
//! # Invariants
//! - Every variant is an input/caller condition; corrupted core state is a
//!   panic, never a `FacilityError`.
//! - A failed operation leaves facility state untouched.

use crate::model::{Amount, OccupantId, RoomNumber, StaffId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FacilityResult<T> = Result<T, FacilityError>;

/// Identity namespace used by duplicate-id checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    Occupant,
    Staff,
}

impl IdentityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Occupant => "occupant",
            Self::Staff => "staff",
        }
    }
}

/// Recoverable failures reported back to the command interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// Room number is outside `1..=room_count`.
    RoomNotFound(RoomNumber),
    /// Target room already holds an occupant.
    RoomAlreadyOccupied {
        room: RoomNumber,
        occupant_id: OccupantId,
    },
    /// Deallocation target is already free.
    RoomNotOccupied(RoomNumber),
    /// Occupant id is not registered (allocation) or has no ledger record
    /// (payments and balance queries).
    UnknownOccupant(OccupantId),
    /// Identifier already registered in the given namespace.
    DuplicateIdentifier { kind: IdentityKind, id: u32 },
    /// Charge or payment amount is negative, or would overflow a running
    /// total.
    InvalidAmount(Amount),
    /// Occupant already holds a room and must be deallocated first.
    OccupantAlreadyAssigned {
        occupant_id: OccupantId,
        room: RoomNumber,
    },
}

impl FacilityError {
    pub(crate) fn duplicate_occupant(id: OccupantId) -> Self {
        Self::DuplicateIdentifier {
            kind: IdentityKind::Occupant,
            id,
        }
    }

    pub(crate) fn duplicate_staff(id: StaffId) -> Self {
        Self::DuplicateIdentifier {
            kind: IdentityKind::Staff,
            id,
        }
    }

    /// Stable machine-readable code used in log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RoomNotFound(_) => "room_not_found",
            Self::RoomAlreadyOccupied { .. } => "room_already_occupied",
            Self::RoomNotOccupied(_) => "room_not_occupied",
            Self::UnknownOccupant(_) => "unknown_occupant",
            Self::DuplicateIdentifier { .. } => "duplicate_identifier",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::OccupantAlreadyAssigned { .. } => "occupant_already_assigned",
        }
    }
}

impl Display for FacilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound(room) => write!(f, "room {room} does not exist"),
            Self::RoomAlreadyOccupied { room, occupant_id } => {
                write!(f, "room {room} is already occupied by occupant {occupant_id}")
            }
            Self::RoomNotOccupied(room) => write!(f, "room {room} is not occupied"),
            Self::UnknownOccupant(id) => write!(f, "unknown occupant id: {id}"),
            Self::DuplicateIdentifier { kind, id } => {
                write!(f, "{} id already registered: {id}", kind.as_str())
            }
            Self::InvalidAmount(amount) if amount.is_sign_negative() => {
                write!(f, "amount must not be negative, got {amount}")
            }
            Self::InvalidAmount(amount) => {
                write!(f, "amount {amount} would overflow the ledger total")
            }
            Self::OccupantAlreadyAssigned { occupant_id, room } => write!(
                f,
                "occupant {occupant_id} already holds room {room}; deallocate it first"
            ),
        }
    }
}

impl Error for FacilityError {}
