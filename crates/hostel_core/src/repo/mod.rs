//! In-memory record stores.
//!
//! # Responsibility
//! - Own the facility's records and enforce per-store invariants
//!   (unique identifiers, room range, non-negative ledger totals).
//! - Keep cross-store coordination out: room/occupant binding belongs to
//!   `service::allocation_service`.
//!
//! # Invariants
//! - Listings are deterministic: identifiers ascend, logs keep insertion order.
//! - A store method that returns an error has not mutated the store.

pub mod activity_log;
pub mod fee_ledger;
pub mod occupant_registry;
pub mod room_inventory;
