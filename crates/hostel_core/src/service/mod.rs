//! Core use-case services.
//!
//! # Responsibility
//! - Coordinate record stores into facility-level operations.
//! - Keep command front-ends decoupled from store internals.

pub mod allocation_service;
pub mod facility;
pub mod snapshot;
