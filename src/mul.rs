//! Recursive Karatsuba multiplication over limb slices.
//!
//! Operates on magnitude-only slices throughout; [`mul`] handles the sign.
//! A high half that doesn't exist (the operand is shorter than the split
//! point) is modeled as an explicit two-variant enum rather than a nullable
//! pointer or an allocated zero-filled slice.

use std::cmp::Ordering;

use crate::addsub::{unsigned_add, unsigned_sub};
use crate::bigint::BigInt;
use crate::cmp::compare_magnitude;
use crate::limb::mul_wide;

/// A high-half operand slice that might not exist at all: when one operand
/// is shorter than the Karatsuba split point, its high half is "phantom
/// zero" rather than an allocated, zero-filled slice.
#[derive(Clone, Copy)]
enum Operand<'a> {
    Zero,
    Slice(&'a [u64]),
}

/// Split `slice` at limb index `at`: the low half is always real (a slice
/// is never empty), the high half is phantom-zero when `slice` doesn't
/// reach past `at`.
fn split(slice: &[u64], at: usize) -> (Operand<'_>, &[u64]) {
    if slice.len() > at {
        (Operand::Slice(&slice[at..]), &slice[..at])
    } else {
        (Operand::Zero, slice)
    }
}

/// `A1 * B1` where either half may be phantom-zero.
fn mul_high_halves(a1: Operand<'_>, b1: Operand<'_>) -> Vec<u64> {
    match (a1, b1) {
        (Operand::Zero, _) | (_, Operand::Zero) => vec![0],
        (Operand::Slice(a), Operand::Slice(b)) => karatsuba(a, b),
    }
}

/// `A1 + A0` where `A1` may be phantom-zero (in which case the sum is just
/// a copy of `A0`).
fn add_high_and_low(high: Operand<'_>, low: &[u64]) -> Vec<u64> {
    match high {
        Operand::Zero => low.to_vec(),
        Operand::Slice(high) => unsigned_add(high, low),
    }
}

/// Single-limb × single-limb, via the widening multiply. The
/// result is at most two limbs.
fn mul_base(a: u64, b: u64) -> Vec<u64> {
    let (low, high) = mul_wide(a, b);
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}

/// Strip trailing (most-significant) zero limbs, the same normalisation
/// [`BigInt::normalize`] applies, kept separate here since these
/// intermediate values aren't `BigInt`s yet — [`unsigned_add`]/
/// [`unsigned_sub`] always allocate one limb more than strictly needed, and
/// without trimming that padding would make [`compare_magnitude`]'s
/// length-first shortcut see two equal-valued slices as different lengths.
fn trim(limbs: &mut Vec<u64>) {
    while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
        limbs.pop();
    }
}

/// Grow `limbs` by `k` zero limbs inserted at the low end, i.e. multiply by
/// `(2^64)^k`. Done in place: grow then shift existing limbs up.
fn shift_left_by_limbs(limbs: &mut Vec<u64>, k: usize) {
    if k == 0 {
        return;
    }
    let old_len = limbs.len();
    limbs.resize(old_len + k, 0);
    for i in (0..old_len).rev() {
        limbs[i + k] = limbs[i];
    }
    for limb in limbs.iter_mut().take(k) {
        *limb = 0;
    }
}

/// Recursive Karatsuba on two real (non-phantom) magnitude slices.
fn karatsuba(a: &[u64], b: &[u64]) -> Vec<u64> {
    // base shortcuts: *0 and *1 never need to recurse at all.
    if a.len() == 1 {
        match a[0] {
            0 => return vec![0],
            1 => return b.to_vec(),
            _ => {}
        }
    }
    if b.len() == 1 {
        match b[0] {
            0 => return vec![0],
            1 => return a.to_vec(),
            _ => {}
        }
    }

    if a.len() == 1 && b.len() == 1 {
        return mul_base(a[0], b[0]);
    }

    let max_len = a.len().max(b.len());
    let split_at = max_len.div_ceil(2);

    let (a1, a0) = split(a, split_at);
    let (b1, b0) = split(b, split_at);

    let mut z2 = mul_high_halves(a1, b1);
    trim(&mut z2);
    let z0 = karatsuba(a0, b0);

    let sum_a = add_high_and_low(a1, a0);
    let sum_b = add_high_and_low(b1, b0);
    let z1_mul = karatsuba(&sum_a, &sum_b);

    debug_assert_ne!(
        compare_magnitude(&z1_mul, &z2),
        Ordering::Less,
        "(a1+a0)*(b1+b0) must be >= z2"
    );
    let mut z1_minus_z2 = unsigned_sub(&z1_mul, &z2);
    trim(&mut z1_minus_z2);
    debug_assert_ne!(
        compare_magnitude(&z1_minus_z2, &z0),
        Ordering::Less,
        "(a1+a0)*(b1+b0) - z2 must be >= z0"
    );
    let mut z1 = unsigned_sub(&z1_minus_z2, &z0);

    shift_left_by_limbs(&mut z2, split_at * 2);
    shift_left_by_limbs(&mut z1, split_at);

    let combined = unsigned_add(&z2, &z1);
    let mut result = unsigned_add(&combined, &z0);
    trim(&mut result);
    result
}

/// Signed Karatsuba multiplication: the sign is the XOR of the operands'
/// signs, except that a zero result is always canonical positive zero
/// (handled automatically by [`BigInt::from_sign_and_limbs`]'s
/// normalisation).
pub fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    let sign = a.is_sign_positive() == b.is_sign_positive();
    let limbs = karatsuba(a.limbs(), b.limbs());
    BigInt::from_sign_and_limbs(sign, limbs)
}
