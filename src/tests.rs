//! Property-based tests using quickcheck.
//!
//! These verify the algebraic laws of addition, subtraction, multiplication,
//! comparison, and increment/decrement hold for arbitrary
//! `BigInt`s, generated here from arbitrary `i64`/`i128` seeds (quickcheck
//! doesn't know how to shrink/generate a `Vec<u64>` with the crate's
//! normalisation invariants for free, so every generator below goes through
//! a real constructor or the parser instead of building a `BigInt` by hand).

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{add, compare, dec_in_place, equals, inc_in_place, mul, parse, sub, to_bin, to_hex, to_string, BigInt};

/// A small wrapper so quickcheck can generate arbitrary `BigInt`s, weighted
/// towards magnitudes that span more than one limb.
#[derive(Clone, Debug)]
struct AnyBigInt(BigInt);

impl Arbitrary for AnyBigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let choice = u8::arbitrary(g) % 3;
        let value = match choice {
            0 => BigInt::from_i64(i64::arbitrary(g)),
            1 => {
                let hi = u64::arbitrary(g);
                let lo = u64::arbitrary(g);
                let mut v = BigInt::from_limbs(&[hi, lo]);
                if bool::arbitrary(g) {
                    v.negate_in_place();
                }
                v
            }
            _ => {
                let a = u64::arbitrary(g);
                let b = u64::arbitrary(g);
                let c = u64::arbitrary(g);
                let mut v = BigInt::from_limbs(&[a, b, c]);
                if bool::arbitrary(g) {
                    v.negate_in_place();
                }
                v
            }
        };
        AnyBigInt(value)
    }
}

#[quickcheck]
fn law_parse_to_string_roundtrip(a: AnyBigInt) -> bool {
    let text = to_string(&a.0);
    equals(&parse(&text).unwrap(), &a.0)
}

/// Re-decode an un-prefixed, un-trimmed, un-gapped hex/binary rendering
/// (sign stripped, since `to_hex`/`to_bin` always emit it regardless of
/// `prefix`) back into little-endian limbs, `bits_per_digit` wide per
/// character. Used to check the magnitude round-trips even though the
/// parser itself only understands decimal text.
fn limbs_from_radix_text(text: &str, bits_per_digit: u32, bits_per_limb: u32) -> Vec<u64> {
    let body = text.strip_prefix('-').unwrap_or(text);
    let digits_per_limb = (bits_per_limb / bits_per_digit) as usize;
    let values: Vec<u64> = body
        .chars()
        .map(|c| c.to_digit(16).unwrap() as u64)
        .collect();
    let mut limbs: Vec<u64> = values
        .chunks(digits_per_limb)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u64, |acc, &d| (acc << bits_per_digit) | d)
        })
        .collect();
    limbs.reverse();
    limbs
}

#[quickcheck]
fn law_hex_roundtrip(a: AnyBigInt) -> bool {
    let hex = to_hex(&a.0, false, false, false, false);
    limbs_from_radix_text(&hex, 4, 64) == a.0.limbs()
}

#[quickcheck]
fn law_bin_roundtrip(a: AnyBigInt) -> bool {
    let bin = to_bin(&a.0, false, false, false);
    limbs_from_radix_text(&bin, 1, 64) == a.0.limbs()
}

#[quickcheck]
fn law_add_commutative(a: AnyBigInt, b: AnyBigInt) -> bool {
    equals(&add(&a.0, &b.0), &add(&b.0, &a.0))
}

#[quickcheck]
fn law_add_negation_is_zero(a: AnyBigInt) -> bool {
    let mut neg = a.0.clone();
    neg.negate_in_place();
    add(&a.0, &neg).is_zero()
}

#[quickcheck]
fn law_sub_is_add_of_negation(a: AnyBigInt, b: AnyBigInt) -> bool {
    let mut neg_b = b.0.clone();
    neg_b.negate_in_place();
    equals(&sub(&a.0, &b.0), &add(&a.0, &neg_b))
}

#[quickcheck]
fn law_mul_commutative(a: AnyBigInt, b: AnyBigInt) -> bool {
    equals(&mul(&a.0, &b.0), &mul(&b.0, &a.0))
}

#[quickcheck]
fn law_mul_distributes_over_add(a: AnyBigInt, b: AnyBigInt, c: AnyBigInt) -> bool {
    let lhs = mul(&a.0, &add(&b.0, &c.0));
    let rhs = add(&mul(&a.0, &b.0), &mul(&a.0, &c.0));
    equals(&lhs, &rhs)
}

#[quickcheck]
fn law_compare_antisymmetric(a: AnyBigInt, b: AnyBigInt) -> bool {
    compare(&a.0, &b.0) == compare(&b.0, &a.0).reverse()
}

#[quickcheck]
fn law_compare_transitive(a: AnyBigInt, b: AnyBigInt, c: AnyBigInt) -> bool {
    use std::cmp::Ordering;
    let ab = compare(&a.0, &b.0);
    let bc = compare(&b.0, &c.0);
    if ab != Ordering::Greater && bc != Ordering::Greater {
        compare(&a.0, &c.0) != Ordering::Greater
    } else {
        true
    }
}

#[quickcheck]
fn law_inc_dec_is_identity(a: AnyBigInt) -> bool {
    let mut v = a.0.clone();
    inc_in_place(&mut v);
    dec_in_place(&mut v);
    equals(&v, &a.0)
}

#[quickcheck]
fn law_dec_inc_is_identity(a: AnyBigInt) -> bool {
    let mut v = a.0.clone();
    dec_in_place(&mut v);
    inc_in_place(&mut v);
    equals(&v, &a.0)
}

#[quickcheck]
fn law_double_negate_is_identity(a: AnyBigInt) -> bool {
    let mut v = a.0.clone();
    v.negate_in_place();
    v.negate_in_place();
    equals(&v, &a.0)
}

#[test]
fn law_negate_zero_is_noop() {
    let mut z = BigInt::zero();
    z.negate_in_place();
    assert!(z.is_zero());
    assert_eq!(z.limbs(), &[0]);
}

#[quickcheck]
fn law_from_limbs_roundtrips(l0: u64, l1: u64, l2: u64) -> bool {
    // build a most-significant-first literal with no leading zero limb so
    // the roundtrip is exact.
    let msb_first = if l2 != 0 {
        vec![l2, l1, l0]
    } else if l1 != 0 {
        vec![l1, l0]
    } else {
        vec![l0]
    };
    let v = BigInt::from_limbs(&msb_first);
    let read_back: Vec<u64> = v.limbs().iter().rev().copied().collect();
    read_back == msb_first
}

#[test]
fn invariant_limbs_never_empty_and_zero_is_canonical() {
    for s in ["0", "1", "-1", "999999999999999999999999999999", "-42"] {
        let v = parse(s).unwrap();
        assert!(!v.limbs().is_empty());
        if v.limbs() == [0] {
            assert!(v.is_sign_positive());
        }
        if v.limbs().len() > 1 {
            assert_ne!(*v.limbs().last().unwrap(), 0);
        }
    }
}

#[test]
fn boundary_i64_min() {
    let from_min = BigInt::from_i64(i64::MIN);
    let from_parse = parse("-9223372036854775808").unwrap();
    assert!(equals(&from_min, &from_parse));
}

#[test]
fn boundary_decrement_zero_then_increment_minus_one() {
    let mut z = BigInt::zero();
    dec_in_place(&mut z);
    assert_eq!(to_string(&z), "-1");
    inc_in_place(&mut z);
    assert!(z.is_zero());
}

#[test]
fn boundary_u64_max_plus_u64_max() {
    let max = BigInt::from_u64(u64::MAX);
    let sum = add(&max, &max);
    assert_eq!(sum.limbs(), &[u64::MAX - 1, 1]);
}

#[test]
fn scenario_parse_separators_then_to_string() {
    let v = parse("-10_00'00.000,00").unwrap();
    assert_eq!(to_string(&v), "-10000000000");
}

#[test]
fn scenario_leading_zeros_and_plus() {
    let v = parse("+0021").unwrap();
    assert_eq!(to_string(&v), "21");
}

#[test]
fn scenario_add() {
    let a = parse("+1").unwrap();
    let b = parse("+2131215135135132515135").unwrap();
    let expected = parse("2131215135135132515136").unwrap();
    assert!(equals(&add(&a, &b), &expected));
}

#[test]
fn scenario_sub() {
    let a = parse("+2131215135135132515135").unwrap();
    let b = parse("+1").unwrap();
    let expected = parse("2131215135135132515134").unwrap();
    assert!(equals(&sub(&a, &b), &expected));
}

#[test]
fn scenario_mul_u64_max_squared() {
    let max = BigInt::from_u64(u64::MAX);
    let result = mul(&max, &max);
    let expected = parse("340282366920938463426481119284349108225").unwrap();
    assert!(equals(&result, &expected));
}

#[test]
fn scenario_hex_format() {
    let v = parse("-384324_132132_3123123_3").unwrap();
    assert_eq!(to_string(&v), "-38432413213231231233");
    assert_eq!(to_hex(&v, true, true, true, true), "-0x2 155B5C319BAD3101");
}

#[test]
fn scenario_bin_format() {
    let v = BigInt::from_u64(0xDEADBEEF);
    assert_eq!(to_bin(&v, true, true, true), "0b11011110101011011011111011101111");
}

#[test]
fn scenario_negative_zero_rejected() {
    let err = parse("-0").unwrap_err();
    assert_eq!(err.message, "-0 is not allowed");
    assert_eq!(err.index, 2);
    assert_eq!(err.symbol, None);
}
