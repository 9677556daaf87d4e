//! Lock-protected facility handle for multi-caller hosts.
//!
//! # Responsibility
//! - Serialize every mutation behind one writer lock.
//! - Let listings run concurrently with each other on the reader side.
//!
//! # Invariants
//! - A reader never observes a half-applied mutation: every facility
//!   operation validates before mutating and runs entirely under the lock.
//! - Poisoned locks are recovered, since no facility operation leaves state
//!   partially applied when it panics on validated input.

use crate::service::facility::Facility;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle; clones share one facility.
#[derive(Clone)]
pub struct SharedFacility {
    inner: Arc<RwLock<Facility>>,
}

impl SharedFacility {
    pub fn new(facility: Facility) -> Self {
        Self {
            inner: Arc::new(RwLock::new(facility)),
        }
    }

    /// Runs a read-only closure against a consistent view.
    pub fn read<T>(&self, f: impl FnOnce(&Facility) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs a mutating closure with exclusive access.
    pub fn write<T>(&self, f: impl FnOnce(&mut Facility) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedFacility;
    use crate::service::facility::Facility;
    use rust_decimal::Decimal;
    use std::num::NonZeroU32;
    use std::thread;

    #[test]
    fn concurrent_charges_all_land() {
        let shared = SharedFacility::new(Facility::new(NonZeroU32::new(4).expect("non-zero")));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared
                            .write(|f| f.add_fee(1, Decimal::new(1, 2)))
                            .expect("charge");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread");
        }

        assert_eq!(shared.read(|f| f.total_fees()), Decimal::from(2));
    }

    #[test]
    fn one_room_cannot_be_won_twice() {
        let shared = SharedFacility::new(Facility::new(NonZeroU32::new(1).expect("non-zero")));
        shared.write(|f| {
            for id in 0..6 {
                f.register_occupant(id, format!("o{id}"), "c")
                    .expect("register");
            }
        });

        let handles: Vec<_> = (0..6)
            .map(|id| {
                let shared = shared.clone();
                thread::spawn(move || shared.write(|f| f.allocate_room(id, 1)).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread"))
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(shared.read(|f| f.inventory().occupied_count()), 1);
    }
}
