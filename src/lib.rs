//! Arbitrary-precision signed integers: parsing, formatting, comparison,
//! and addition/subtraction/multiplication over integers of unbounded
//! magnitude.
//!
//! The representation is a sign bit plus a little-endian `Vec<u64>` of
//! limbs (see [`BigInt`]); every value the crate hands back satisfies the
//! normalisation invariants documented there. There is no process-wide
//! state, no I/O, and no division/modulo/shift/exponentiation — see each
//! module's doc comment for the exact operation it owns.

mod addsub;
mod bcd;
mod bigint;
mod cmp;
mod convert;
mod format;
mod limb;
mod mul;
mod parse;

#[cfg(test)]
mod tests;

pub use addsub::{add, dec_in_place, inc_in_place, sub};
pub use bigint::BigInt;
pub use cmp::{compare, equals};
pub use format::{to_bin, to_hex, to_string};
pub use mul::mul;
pub use parse::{parse, ParseError};
