//! Signed addition/subtraction and in-place increment/decrement.
//!
//! Everything here reduces to two primitives on non-negative magnitudes,
//! [`unsigned_add`] and [`unsigned_sub`], dispatched over the sign bits of
//! the two operands.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::cmp::compare_magnitude;
use crate::limb::{add_with_carry, sub_with_borrow};

/// `A + B` on two non-negative magnitudes. Allocates `max(|A|,|B|) + 1`
/// limbs up front; the final carry out of the top limb is always zero
/// (there is no fixed width to overflow), which is checked rather than
/// assumed.
pub(crate) fn unsigned_add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let n = a.len().max(b.len()) + 1;
    let mut result = Vec::with_capacity(n);
    let mut carry = 0u8;
    for i in 0..n {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let (sum, carry_out) = add_with_carry(x, y, carry);
        result.push(sum);
        carry = carry_out;
    }
    debug_assert_eq!(carry, 0, "unsigned_add: final carry must be zero");
    result
}

/// `A - B` on two non-negative magnitudes. Precondition: `A >= B`; violating
/// it leaves a nonzero final borrow, caught by the debug assertion below
/// rather than silently wrapping.
pub(crate) fn unsigned_sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    let n = a.len().max(b.len()) + 1;
    let mut result = Vec::with_capacity(n);
    let mut borrow = 0u8;
    for i in 0..n {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let (diff, borrow_out) = sub_with_borrow(x, y, borrow);
        result.push(diff);
        borrow = borrow_out;
    }
    debug_assert_eq!(
        borrow, 0,
        "unsigned_sub: final borrow must be zero (precondition a >= b violated)"
    );
    result
}

/// `a - b` on two magnitudes, picking whichever order keeps the result
/// non-negative and attaching the correct sign. `Ordering::Equal` short
/// circuits to canonical zero rather than subtracting at all.
fn magnitude_difference(a: &[u64], b: &[u64]) -> BigInt {
    match compare_magnitude(a, b) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_sign_and_limbs(true, unsigned_sub(a, b)),
        Ordering::Less => BigInt::from_sign_and_limbs(false, unsigned_sub(b, a)),
    }
}

/// Signed addition, dispatched on the sign of each operand: same-sign
/// operands fall straight through to [`unsigned_add`]; mixed-sign operands
/// become a magnitude difference.
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    match (a.is_sign_positive(), b.is_sign_positive()) {
        (true, true) => BigInt::from_sign_and_limbs(true, unsigned_add(a.limbs(), b.limbs())),
        (true, false) => magnitude_difference(a.limbs(), b.limbs()),
        (false, true) => magnitude_difference(b.limbs(), a.limbs()),
        (false, false) => BigInt::from_sign_and_limbs(false, unsigned_add(a.limbs(), b.limbs())),
    }
}

/// Signed subtraction; mirrors [`add`]'s table with `b`'s sign flipped.
pub fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    match (a.is_sign_positive(), b.is_sign_positive()) {
        (true, true) => magnitude_difference(a.limbs(), b.limbs()),
        (true, false) => BigInt::from_sign_and_limbs(true, unsigned_add(a.limbs(), b.limbs())),
        (false, true) => BigInt::from_sign_and_limbs(false, unsigned_add(a.limbs(), b.limbs())),
        (false, false) => magnitude_difference(b.limbs(), a.limbs()),
    }
}

/// Add one to a magnitude in place: the first non-`u64::MAX` limb absorbs
/// the carry and we stop; any limbs skipped over were all-ones and become
/// zero. If every limb was all-ones, a fresh limb holding `1` is appended.
fn increment_magnitude(limbs: &mut Vec<u64>) {
    for limb in limbs.iter_mut() {
        if *limb != u64::MAX {
            *limb += 1;
            return;
        }
        *limb = 0;
    }
    limbs.push(1);
}

/// Subtract one from a non-zero magnitude in place: the first non-zero limb
/// absorbs the borrow; any limbs skipped over were zero and become
/// all-ones. Never call this on a zero magnitude.
fn decrement_magnitude(limbs: &mut [u64]) {
    for limb in limbs.iter_mut() {
        if *limb != 0 {
            *limb -= 1;
            return;
        }
        *limb = u64::MAX;
    }
    unreachable!("decrement_magnitude called on a zero magnitude");
}

/// Increment `x` in place (`x += 1`).
///
/// Zero is a direct special case (`0++ = 1`). A positive value increments
/// its magnitude directly. A negative value is `-a`, and `-a + 1 = -(a -
/// 1)`, so it decrements its magnitude instead — including the case where
/// that magnitude was `1`, which [`BigInt::normalize`] (called by
/// [`BigInt::from_sign_and_limbs`]-style callers, and inlined here via
/// direct mutation + `normalize`) turns back into canonical positive zero.
pub fn inc_in_place(x: &mut BigInt) {
    if x.is_zero() {
        x.limbs[0] = 1;
        x.sign = true;
        return;
    }
    if x.sign {
        increment_magnitude(&mut x.limbs);
    } else {
        decrement_magnitude(&mut x.limbs);
    }
    x.normalize();
}

/// Decrement `x` in place (`x -= 1`).
///
/// Zero is a direct special case (`0-- = -1`). A negative value is `-a`,
/// and `-a - 1 = -(a + 1)`, so it increments its magnitude. A positive
/// value decrements its magnitude directly.
pub fn dec_in_place(x: &mut BigInt) {
    if x.is_zero() {
        x.limbs[0] = 1;
        x.sign = false;
        return;
    }
    if x.sign {
        decrement_magnitude(&mut x.limbs);
    } else {
        increment_magnitude(&mut x.limbs);
    }
    x.normalize();
}
