//! Facility domain records.
//!
//! # Responsibility
//! - Define the records held by registries, the room inventory, the fee
//!   ledger and the auxiliary activity logs.
//! - Fix the identifier and money types shared across the core.
//!
//! # Invariants
//! - Rooms reference occupants by identifier, never by pointer or owned copy.
//! - Monetary values are exact decimals; no floating point is involved.

pub mod activity;
pub mod fee;
pub mod person;
pub mod room;

use rust_decimal::Decimal;

/// Caller-supplied occupant (resident) identifier.
pub type OccupantId = u32;

/// Caller-supplied staff identifier. Lives in its own namespace.
pub type StaffId = u32;

/// Room number inside the contiguous `1..=room_count` range.
pub type RoomNumber = u32;

/// Exact base-10 amount used for every ledger value.
pub type Amount = Decimal;
