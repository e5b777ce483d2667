//! The `BigInt` value type: sign + limb vector, and the handful of
//! operations that only touch the representation itself.

use std::fmt;

/// An arbitrary-precision signed integer.
///
/// Represented as a sign bit plus a little-endian vector of 64-bit limbs
/// (`limbs[0]` is the least-significant limb). Every `BigInt` returned by
/// this crate satisfies three invariants:
///
/// 1. `limbs.len() >= 1`.
/// 2. No leading zero limbs: if `limbs.len() > 1`, the last limb is non-zero.
/// 3. Zero is represented uniquely as `sign = true, limbs = [0]` — negative
///    zero never escapes a public operation.
#[derive(Clone)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) limbs: Vec<u64>,
}

impl BigInt {
    /// The canonical zero value.
    pub fn zero() -> Self {
        Self {
            sign: true,
            limbs: vec![0],
        }
    }

    /// Construct from an unsigned machine word.
    pub fn from_u64(n: u64) -> Self {
        Self {
            sign: true,
            limbs: vec![n],
        }
    }

    /// Construct from a signed machine word, including `i64::MIN` (whose
    /// magnitude does not fit back into an `i64`).
    pub fn from_i64(n: i64) -> Self {
        if n >= 0 {
            Self {
                sign: true,
                limbs: vec![n as u64],
            }
        } else {
            // `n.unsigned_abs()` computes the magnitude without a signed
            // overflow even when `n == i64::MIN`.
            Self {
                sign: false,
                limbs: vec![n.unsigned_abs()],
            }
        }
    }

    /// Construct from limbs given most-significant-first (the natural
    /// order for writing a literal by hand). The result is always
    /// non-negative; use [`negate_in_place`](Self::negate_in_place) if a
    /// negative value is needed.
    ///
    /// # Panics
    ///
    /// Panics if `msb_first` is empty.
    pub fn from_limbs(msb_first: &[u64]) -> Self {
        assert!(!msb_first.is_empty(), "from_limbs requires at least one limb");
        let limbs: Vec<u64> = msb_first.iter().rev().copied().collect();
        let mut result = Self { sign: true, limbs };
        result.normalize();
        result
    }

    /// Deep copy. Equivalent to [`Clone::clone`]; kept as a named method to
    /// mirror the crate's public operation surface.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// `true` iff this value is the canonical zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// `true` iff this value is non-negative (includes zero).
    pub fn is_sign_positive(&self) -> bool {
        self.sign
    }

    /// The limbs in little-endian order (`limbs()[0]` is least significant).
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Flip the sign in place, unless the value is zero (negative zero is
    /// forbidden, so negating zero is a no-op).
    pub fn negate_in_place(&mut self) {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
    }

    /// Construct directly from an already-decomposed sign and little-endian
    /// limb vector, normalising afterward. Used internally by arithmetic
    /// operations that build a result limb-by-limb.
    pub(crate) fn from_sign_and_limbs(sign: bool, limbs: Vec<u64>) -> Self {
        let mut result = Self { sign, limbs };
        result.normalize();
        result
    }

    /// Strip trailing (most-significant) zero limbs and enforce the
    /// zero-is-positive invariant.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && *self.limbs.last().unwrap() == 0 {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs.len() == 1 && self.limbs[0] == 0 {
            self.sign = true;
        }
        self.assert_invariants();
    }

    pub(crate) fn assert_invariants(&self) {
        debug_assert!(!self.limbs.is_empty(), "BigInt must have at least one limb");
        debug_assert!(
            self.limbs.len() == 1 || *self.limbs.last().unwrap() != 0,
            "BigInt must not have leading zero limbs"
        );
        debug_assert!(
            !(self.limbs.len() == 1 && self.limbs[0] == 0) || self.sign,
            "zero must not be negative"
        );
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.sign)
            .field("limbs", &self.limbs)
            .finish()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::to_string(self))
    }
}
