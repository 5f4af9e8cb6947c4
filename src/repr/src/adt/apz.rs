// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! An arbitrary-precision integer type and its aggregation state.
//!
//! [`Apz`] is a thin wrapper around [`num_bigint::BigInt`], which supplies
//! the exact arithmetic. The wrapper pins down the properties the rest of
//! the system relies on: a canonical sign/magnitude representation, and a
//! fixed 32-bit word size at the magnitude import/export boundary,
//! independent of the arithmetic library's internal limb width.

use std::fmt;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

use num_traits::Zero;

pub use num_bigint::Sign;

use crate::strconv::{self, ParseError};

/// An arbitrary-precision signed integer.
///
/// The representation is canonical: zero has sign [`Sign::NoSign`] and an
/// empty magnitude, and the magnitude never carries leading zero words, so
/// each mathematical value has exactly one representation. Values are
/// immutable; the arithmetic operators consume their operands and allocate
/// fresh results.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Apz(num_bigint::BigInt);

impl Apz {
    /// Constructs an `Apz` from a sign and little-endian magnitude words.
    ///
    /// The pair is canonicalized: an empty magnitude yields zero whatever
    /// the sign, and leading (most significant) zero words are dropped. A
    /// sign of [`Sign::NoSign`] yields zero; callers should pass it only
    /// with an empty word slice.
    pub fn from_words(sign: Sign, words: &[u32]) -> Apz {
        Apz(num_bigint::BigInt::from_slice(sign, words))
    }

    /// Returns the sign and the magnitude as little-endian 32-bit words.
    ///
    /// The word sequence is minimal: no most-significant zero words, and
    /// empty iff the value is zero.
    pub fn to_words(&self) -> (Sign, Vec<u32>) {
        self.0.to_u32_digits()
    }

    /// Returns the sign of the value. [`Sign::NoSign`] iff the value is
    /// zero.
    pub fn sign(&self) -> Sign {
        self.0.sign()
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub(crate) fn from_biguint(sign: Sign, magnitude: num_bigint::BigUint) -> Apz {
        Apz(num_bigint::BigInt::from_biguint(sign, magnitude))
    }

    pub(crate) fn to_str_radix(&self, radix: u32) -> String {
        self.0.to_str_radix(radix)
    }
}

impl From<i16> for Apz {
    fn from(i: i16) -> Apz {
        Apz(i.into())
    }
}

impl From<i32> for Apz {
    fn from(i: i32) -> Apz {
        Apz(i.into())
    }
}

impl From<i64> for Apz {
    fn from(i: i64) -> Apz {
        Apz(i.into())
    }
}

impl Add for Apz {
    type Output = Apz;

    fn add(self, rhs: Apz) -> Apz {
        Apz(self.0 + rhs.0)
    }
}

impl Mul for Apz {
    type Output = Apz;

    fn mul(self, rhs: Apz) -> Apz {
        Apz(self.0 * rhs.0)
    }
}

impl Neg for Apz {
    type Output = Apz;

    fn neg(self) -> Apz {
        Apz(-self.0)
    }
}

impl fmt::Display for Apz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Apz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Apz, ParseError> {
        strconv::parse_apz(s)
    }
}

/// The running state of a streaming aggregation over [`Apz`] values.
///
/// The empty state records that no input has been folded in yet, which is
/// distinct from holding an accumulated value of zero. Each instance is
/// owned by exactly one aggregation and updated in place, one input at a
/// time; the owner must drive it sequentially from a single thread.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accum {
    value: Option<Apz>,
}

impl Accum {
    /// Creates an empty accumulator.
    pub fn new() -> Accum {
        Accum { value: None }
    }

    /// Reports whether any input has been folded in.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the accumulated value, if any input has been folded in.
    pub fn value(&self) -> Option<&Apz> {
        self.value.as_ref()
    }

    /// Consumes the accumulator, returning the accumulated value, or `None`
    /// if no input was ever folded in.
    pub fn into_value(self) -> Option<Apz> {
        self.value
    }

    /// Folds `x` into the accumulator.
    ///
    /// The first input is installed directly, so no identity element of the
    /// combining operation is required; each subsequent input replaces the
    /// held value with `combine(held, x)`.
    pub fn accumulate<F>(&mut self, x: Apz, combine: F)
    where
        F: FnOnce(Apz, Apz) -> Apz,
    {
        self.value = Some(match self.value.take() {
            None => x,
            Some(held) => combine(held, x),
        });
    }
}

impl From<Apz> for Accum {
    fn from(value: Apz) -> Accum {
        Accum { value: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_preserves_width_minima() {
        assert_eq!(Apz::from(i16::MIN).to_string(), "-32768");
        assert_eq!(Apz::from(i32::MIN).to_string(), "-2147483648");
        assert_eq!(Apz::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Apz::from(i16::MAX).to_string(), "32767");
        assert_eq!(Apz::from(0i32).to_string(), "0");
    }

    #[test]
    fn from_words_canonicalizes() {
        let zero = Apz::from(0i32);
        assert_eq!(Apz::from_words(Sign::Plus, &[]), zero);
        assert_eq!(Apz::from_words(Sign::Minus, &[]), zero);
        assert_eq!(zero.sign(), Sign::NoSign);
        assert_eq!(zero.to_words(), (Sign::NoSign, vec![]));
        assert_eq!(Apz::from_words(Sign::Plus, &[7, 0, 0]), Apz::from(7i32));
        let (sign, words) = Apz::from_words(Sign::Minus, &[0, 1, 0]).to_words();
        assert_eq!(sign, Sign::Minus);
        assert_eq!(words, vec![0, 1]);
    }

    #[test]
    fn arithmetic_is_exact() {
        let doubled = Apz::from(i64::MAX) + Apz::from(i64::MAX);
        assert_eq!(doubled.to_string(), "18446744073709551614");
        assert_eq!((-Apz::from(i64::MIN)).to_string(), "9223372036854775808");
        let squared = Apz::from(i64::MAX) * Apz::from(i64::MAX);
        assert_eq!(
            squared.to_string(),
            "85070591730234615847396907784232501249"
        );
    }

    #[test]
    fn accum_empty_is_not_zero() {
        let empty = Accum::new();
        assert!(!empty.has_value());

        let mut zero = Accum::new();
        zero.accumulate(Apz::from(0i32), |a, b| a + b);
        assert!(zero.has_value());
        assert_ne!(empty, zero);

        assert_eq!(zero.into_value(), Some(Apz::from(0i32)));
        assert_eq!(Accum::new().into_value(), None);
    }

    #[test]
    fn accum_installs_first_value_directly() {
        let mut accum = Accum::new();
        accum.accumulate(Apz::from(5i32), |_, _| {
            unreachable!("first input must not be combined")
        });
        assert_eq!(accum.value(), Some(&Apz::from(5i32)));
        accum.accumulate(Apz::from(3i32), |a, b| a * b);
        assert_eq!(accum.into_value(), Some(Apz::from(15i32)));
    }
}
