// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Routines for converting values to and from their text representation.
//!
//! The text form of an apz is an optional single leading `-` or `+`
//! followed by one or more digits. Parsing accepts redundant leading
//! zeros; formatting never produces them. Base 10 is the interchange
//! default, with a radix hook for bases 2 through 36.

use std::error::Error;
use std::fmt;

use num_bigint::{BigUint, Sign};

use apz_ore::fmt::FormatBuffer;
use apz_ore::str::StrExt;

use crate::adt::apz::Apz;

/// An error while parsing an input as a type.
///
/// Text input usually originates outside the system, so the error echoes
/// the offending input back to the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The name of the type the input failed to parse as.
    pub type_name: &'static str,
    /// The offending input.
    pub input: String,
}

impl ParseError {
    /// Constructs an error indicating the input is not valid syntax for
    /// the type.
    pub fn invalid_input_syntax<S>(type_name: &'static str, input: S) -> ParseError
    where
        S: Into<String>,
    {
        ParseError {
            type_name,
            input: input.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid input syntax for type {}: {}",
            self.type_name,
            self.input.quoted()
        )
    }
}

impl Error for ParseError {}

/// Parses an [`Apz`] from `s`, in base 10.
pub fn parse_apz(s: &str) -> Result<Apz, ParseError> {
    parse_apz_radix(s, 10)
}

/// Like [`parse_apz`], but in the given radix.
///
/// Digits beyond `9` may be written in either letter case.
///
/// # Panics
///
/// Panics if `radix` is outside 2..=36.
pub fn parse_apz_radix(s: &str, radix: u32) -> Result<Apz, ParseError> {
    assert!(
        (2..=36).contains(&radix),
        "radix {} is out of range",
        radix
    );
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &s[1..]),
        Some(b'+') => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.to_digit(radix).is_some()) {
        return Err(ParseError::invalid_input_syntax("apz", s));
    }
    let magnitude = BigUint::parse_bytes(digits.to_ascii_lowercase().as_bytes(), radix)
        .ok_or_else(|| ParseError::invalid_input_syntax("apz", s))?;
    Ok(Apz::from_biguint(sign, magnitude))
}

/// Writes the base 10 text representation of `n` to `buf`.
pub fn format_apz<F>(buf: &mut F, n: &Apz)
where
    F: FormatBuffer,
{
    format_apz_radix(buf, n, 10)
}

/// Like [`format_apz`], but in the given radix. Digits beyond `9` are
/// written in lower case.
///
/// # Panics
///
/// Panics if `radix` is outside 2..=36.
pub fn format_apz_radix<F>(buf: &mut F, n: &Apz, radix: u32)
where
    F: FormatBuffer,
{
    assert!(
        (2..=36).contains(&radix),
        "radix {} is out of range",
        radix
    );
    buf.write_str(&n.to_str_radix(radix))
        .expect("writing to format buffer cannot fail");
}
