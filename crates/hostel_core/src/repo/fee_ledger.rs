//! Fee ledger: cumulative charges and payments per occupant.
//!
//! # Responsibility
//! - Accumulate charges and payments with exact decimal arithmetic.
//! - Report balances, overdue records and totals.
//!
//! # Invariants
//! - Charged and paid totals are never negative; negative inputs are rejected
//!   before any mutation.
//! - A record exists only after its first charge; payments never create one.
//! - Records are keyed by occupant id without consulting the registry.
//! - `total_charged`/`total_paid` equal the sums over all records; a charge or
//!   payment that would overflow either the record or the total is rejected
//!   with `InvalidAmount` before any mutation.

use crate::error::{FacilityError, FacilityResult};
use crate::model::fee::{checked_total, FeeRecord};
use crate::model::{Amount, OccupantId};
use serde::Serialize;
use std::collections::BTreeMap;

/// One line of a fee statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeStatementLine {
    pub occupant_id: OccupantId,
    pub charged: Amount,
    pub paid: Amount,
    pub due: Amount,
}

#[derive(Debug, Default)]
pub struct FeeLedger {
    records: BTreeMap<OccupantId, FeeRecord>,
    total_charged: Amount,
    total_paid: Amount,
}

impl FeeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the occupant's charged total, opening a record with
    /// zero paid on first use.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is negative or the charged total would
    ///   overflow.
    pub fn add_charge(&mut self, occupant_id: OccupantId, amount: Amount) -> FacilityResult<()> {
        ensure_non_negative(amount)?;
        let total = checked_total(self.total_charged, amount)?;
        // Each record is bounded by the total.
        self.records
            .entry(occupant_id)
            .or_insert_with(FeeRecord::new)
            .charge(amount)?;
        self.total_charged = total;
        Ok(())
    }

    /// Adds `amount` to the occupant's paid total.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is negative or the paid total would
    ///   overflow.
    /// - `UnknownOccupant` when no charge was ever recorded for the id.
    pub fn record_payment(
        &mut self,
        occupant_id: OccupantId,
        amount: Amount,
    ) -> FacilityResult<()> {
        ensure_non_negative(amount)?;
        let record = self
            .records
            .get_mut(&occupant_id)
            .ok_or(FacilityError::UnknownOccupant(occupant_id))?;
        let total = checked_total(self.total_paid, amount)?;
        record.pay(amount)?;
        self.total_paid = total;
        Ok(())
    }

    /// `charged - paid` for one occupant; negative when over-paid.
    ///
    /// # Errors
    /// - `UnknownOccupant` when the occupant has no ledger record.
    pub fn amount_due(&self, occupant_id: OccupantId) -> FacilityResult<Amount> {
        self.record(occupant_id)
            .map(FeeRecord::due)
            .ok_or(FacilityError::UnknownOccupant(occupant_id))
    }

    pub fn record(&self, occupant_id: OccupantId) -> Option<&FeeRecord> {
        self.records.get(&occupant_id)
    }

    /// `(occupant_id, overdue_amount)` for every record with a positive
    /// balance, ascending by id.
    pub fn list_overdue(&self) -> Vec<(OccupantId, Amount)> {
        self.records
            .iter()
            .filter(|(_, record)| record.is_overdue())
            .map(|(&id, record)| (id, record.due()))
            .collect()
    }

    /// Full statement for every record, ascending by id.
    pub fn statement(&self) -> Vec<FeeStatementLine> {
        self.records
            .iter()
            .map(|(&occupant_id, record)| FeeStatementLine {
                occupant_id,
                charged: record.charged(),
                paid: record.paid(),
                due: record.due(),
            })
            .collect()
    }

    pub fn total_charged(&self) -> Amount {
        self.total_charged
    }

    pub fn total_paid(&self) -> Amount {
        self.total_paid
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn ensure_non_negative(amount: Amount) -> FacilityResult<()> {
    if amount < Amount::ZERO {
        return Err(FacilityError::InvalidAmount(amount));
    }
    Ok(())
}
