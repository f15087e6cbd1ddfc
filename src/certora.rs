//! Formal verification rules for `add`.

use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` correctly computes the sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    let sum = x as i128 + y as i128;
    cvlr_assume!(sum >= i64::MIN as i128 && sum <= i64::MAX as i128);
    cvlr_assert!(add(x, y) == Ok(sum as i64));
}

/// Verifies that an out-of-range sum is reported instead of wrapping.
#[rule]
pub fn rule_add_reports_overflow() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    let sum = x as i128 + y as i128;
    cvlr_assume!(sum < i64::MIN as i128 || sum > i64::MAX as i128);
    cvlr_assert!(add(x, y).is_err());
}

#[rule]
pub fn rule_add_is_commutative() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    cvlr_assert!(add(x, y).ok() == add(y, x).ok());
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x: i64 = nondet();
    cvlr_assert!(add(x, 0) == Ok(x));
}

/// Associativity holds whenever neither grouping overflows part way.
#[rule]
pub fn rule_add_is_associative() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    let z: i64 = nondet();
    if let (Ok(xy), Ok(yz)) = (add(x, y), add(y, z)) {
        let left = add(xy, z);
        let right = add(x, yz);
        cvlr_assume!(left.is_ok() && right.is_ok());
        cvlr_assert!(left == right);
    }
}
