//! Per-occupant fee ledger record.
//!
//! # Invariants
//! - `charged` and `paid` are never negative and never decrease.
//! - `due()` may be negative when an occupant has over-paid.
//! - A rejected charge or payment leaves the record unchanged.

use crate::error::{FacilityError, FacilityResult};
use crate::model::Amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    charged: Amount,
    paid: Amount,
}

impl FeeRecord {
    pub(crate) fn new() -> Self {
        Self {
            charged: Amount::ZERO,
            paid: Amount::ZERO,
        }
    }

    pub fn charged(&self) -> Amount {
        self.charged
    }

    pub fn paid(&self) -> Amount {
        self.paid
    }

    /// Outstanding balance: `charged - paid`.
    pub fn due(&self) -> Amount {
        self.charged - self.paid
    }

    pub fn is_overdue(&self) -> bool {
        self.due() > Amount::ZERO
    }

    /// Callers must have rejected negative amounts.
    ///
    /// # Errors
    /// - `InvalidAmount` when the charged total would overflow.
    pub(crate) fn charge(&mut self, amount: Amount) -> FacilityResult<()> {
        debug_assert!(amount >= Amount::ZERO);
        self.charged = checked_total(self.charged, amount)?;
        Ok(())
    }

    /// Callers must have rejected negative amounts.
    ///
    /// # Errors
    /// - `InvalidAmount` when the paid total would overflow.
    pub(crate) fn pay(&mut self, amount: Amount) -> FacilityResult<()> {
        debug_assert!(amount >= Amount::ZERO);
        self.paid = checked_total(self.paid, amount)?;
        Ok(())
    }
}

pub(crate) fn checked_total(total: Amount, amount: Amount) -> FacilityResult<Amount> {
    total
        .checked_add(amount)
        .ok_or(FacilityError::InvalidAmount(amount))
}
