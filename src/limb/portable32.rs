//! 32-bit-split fallback for the limb primitives, enabled by the
//! `portable32` feature. Ground algorithm for `mul_wide` mirrors the
//! generic (non-intrinsic) branch of the reference C implementation.

#[inline]
pub fn add_with_carry(a: u64, b: u64, carry_in: u8) -> (u64, u8) {
    let a_lo = a as u32;
    let a_hi = (a >> 32) as u32;
    let b_lo = b as u32;
    let b_hi = (b >> 32) as u32;

    let (lo, c0) = a_lo.overflowing_add(b_lo);
    let (lo, c1) = lo.overflowing_add(carry_in as u32);
    let carry_mid = (c0 || c1) as u32;

    let (hi, c2) = a_hi.overflowing_add(b_hi);
    let (hi, c3) = hi.overflowing_add(carry_mid);
    let carry_out = (c2 || c3) as u8;

    (((hi as u64) << 32) | lo as u64, carry_out)
}

#[inline]
pub fn sub_with_borrow(a: u64, b: u64, borrow_in: u8) -> (u64, u8) {
    let a_lo = a as u32;
    let a_hi = (a >> 32) as u32;
    let b_lo = b as u32;
    let b_hi = (b >> 32) as u32;

    let (lo, b0) = a_lo.overflowing_sub(b_lo);
    let (lo, b1) = lo.overflowing_sub(borrow_in as u32);
    let borrow_mid = (b0 || b1) as u32;

    let (hi, b2) = a_hi.overflowing_sub(b_hi);
    let (hi, b3) = hi.overflowing_sub(borrow_mid);
    let borrow_out = (b2 || b3) as u8;

    (((hi as u64) << 32) | lo as u64, borrow_out)
}

#[inline]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let a_lo = a & 0xFFFF_FFFF;
    let a_hi = a >> 32;
    let b_lo = b & 0xFFFF_FFFF;
    let b_hi = b >> 32;

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let carry = ((ll >> 32) + (lh & 0xFFFF_FFFF) + (hl & 0xFFFF_FFFF)) >> 32;

    let low = ll.wrapping_add(lh << 32).wrapping_add(hl << 32);
    let high = hh + (lh >> 32) + (hl >> 32) + carry;

    (low, high)
}
