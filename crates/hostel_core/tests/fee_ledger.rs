use hostel_core::{Facility, FacilityError};
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::str::FromStr;

fn facility() -> Facility {
    Facility::new(NonZeroU32::new(10).unwrap())
}

fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn charges_and_payment_leave_expected_balance() {
    let mut facility = facility();
    facility.add_fee(1, amount("500")).unwrap();
    facility.add_fee(1, amount("200")).unwrap();
    facility.pay_fee(1, amount("300")).unwrap();

    assert_eq!(facility.amount_due(1).unwrap(), amount("400"));
    assert!(facility.overdue_fees().contains(&(1, amount("400"))));
    assert_eq!(facility.total_fees(), amount("700"));
}

#[test]
fn fractional_amounts_reconcile_exactly() {
    let mut facility = facility();
    for _ in 0..3 {
        facility.add_fee(4, amount("0.10")).unwrap();
    }
    facility.add_fee(4, amount("0.20")).unwrap();
    facility.pay_fee(4, amount("0.50")).unwrap();

    assert_eq!(facility.amount_due(4).unwrap(), Decimal::ZERO);
    assert!(facility.overdue_fees().is_empty());
}

#[test]
fn payment_before_any_charge_is_rejected() {
    let mut facility = facility();
    let err = facility.pay_fee(2, amount("50")).unwrap_err();
    assert_eq!(err, FacilityError::UnknownOccupant(2));
    assert!(facility.fee_record(2).is_none());
}

#[test]
fn negative_amounts_never_reach_the_ledger() {
    let mut facility = facility();
    facility.add_fee(1, amount("100")).unwrap();

    assert_eq!(
        facility.add_fee(1, amount("-5")).unwrap_err(),
        FacilityError::InvalidAmount(amount("-5"))
    );
    assert_eq!(
        facility.pay_fee(1, amount("-0.01")).unwrap_err(),
        FacilityError::InvalidAmount(amount("-0.01"))
    );

    let record = facility.fee_record(1).unwrap();
    assert_eq!(record.charged(), amount("100"));
    assert_eq!(record.paid(), Decimal::ZERO);
}

#[test]
fn over_payment_is_accepted_and_not_overdue() {
    let mut facility = facility();
    facility.add_fee(3, amount("100")).unwrap();
    facility.pay_fee(3, amount("120.50")).unwrap();

    assert_eq!(facility.amount_due(3).unwrap(), amount("-20.50"));
    assert!(facility.overdue_fees().is_empty());
    assert_eq!(facility.total_paid(), amount("120.50"));
}

#[test]
fn overdue_listing_is_ascending_by_occupant() {
    let mut facility = facility();
    for (id, charge) in [(8, "80"), (3, "30"), (5, "50")] {
        facility.add_fee(id, amount(charge)).unwrap();
    }
    facility.pay_fee(5, amount("50")).unwrap();

    assert_eq!(
        facility.overdue_fees(),
        vec![(3, amount("30")), (8, amount("80"))]
    );

    let statement = facility.fee_statement();
    assert_eq!(statement.len(), 3);
    assert!(statement
        .iter()
        .all(|line| line.charged >= Decimal::ZERO && line.paid >= Decimal::ZERO));
}

#[test]
fn charges_past_the_decimal_limit_are_rejected() {
    let mut facility = facility();
    facility.add_fee(1, Decimal::MAX).unwrap();

    assert_eq!(
        facility.add_fee(1, Decimal::ONE).unwrap_err(),
        FacilityError::InvalidAmount(Decimal::ONE)
    );
    assert_eq!(
        facility.add_fee(2, Decimal::MAX).unwrap_err(),
        FacilityError::InvalidAmount(Decimal::MAX)
    );
    assert_eq!(facility.amount_due(1).unwrap(), Decimal::MAX);
    assert!(facility.fee_record(2).is_none());
    assert_eq!(facility.total_fees(), Decimal::MAX);
}
