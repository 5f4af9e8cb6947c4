// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The wire format for aggregation accumulators.
//!
//! An accumulator that has absorbed no input encodes to nothing at all:
//! the zero-length byte sequence in binary, the empty string in text.
//! This sentinel is distinct from an accumulator holding the value zero,
//! whose encoding is the one-byte encoding of zero. Any non-empty
//! encoding is exactly the held value's encoding.

use std::error::Error;
use std::fmt;

use bytes::BytesMut;
use postgres_types::{to_sql_checked, FromSql, IsNull, ToSql, Type};

use apz_ore::fmt::FormatBuffer;
use apz_repr::strconv::{self, ParseError};

use crate::oid;
use crate::value::apz;
use crate::value::MalformedEncodingError;

/// A wrapper for [`apz_repr::Accum`] that can be serialized and
/// deserialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accum(pub apz_repr::Accum);

impl Accum {
    /// Appends the binary encoding of the accumulator to `buf`.
    ///
    /// The empty state appends nothing.
    pub fn encode_binary(&self, buf: &mut BytesMut) {
        if let Some(value) = self.0.value() {
            apz::encode(buf, value);
        }
    }

    /// Decodes an accumulator from its binary encoding.
    pub fn decode_binary(raw: &[u8]) -> Result<Accum, MalformedEncodingError> {
        if raw.is_empty() {
            Ok(Accum(apz_repr::Accum::new()))
        } else {
            Ok(Accum(apz_repr::Accum::from(apz::decode(raw)?)))
        }
    }

    /// Appends the text encoding of the accumulator to `buf`.
    ///
    /// The empty state appends nothing.
    pub fn encode_text<F>(&self, buf: &mut F)
    where
        F: FormatBuffer,
    {
        if let Some(value) = self.0.value() {
            strconv::format_apz(buf, value);
        }
    }

    /// Decodes an accumulator from its text encoding.
    pub fn decode_text(s: &str) -> Result<Accum, ParseError> {
        if s.is_empty() {
            Ok(Accum(apz_repr::Accum::new()))
        } else {
            Ok(Accum(apz_repr::Accum::from(strconv::parse_apz(s)?)))
        }
    }
}

impl fmt::Display for Accum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.value() {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

impl ToSql for Accum {
    fn to_sql(
        &self,
        _: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.encode_binary(out);
        Ok(IsNull::No)
    }

    fn accepts(ty: &Type) -> bool {
        ty.oid() == oid::TYPE_APZ_ACCUM_OID
    }

    to_sql_checked!();
}

impl<'a> FromSql<'a> for Accum {
    fn from_sql(_: &Type, raw: &'a [u8]) -> Result<Accum, Box<dyn Error + Sync + Send>> {
        Ok(Accum::decode_binary(raw)?)
    }

    fn accepts(ty: &Type) -> bool {
        ty.oid() == oid::TYPE_APZ_ACCUM_OID
    }
}

#[cfg(test)]
mod tests {
    use crate::value::apz::SIGN_NONNEG;

    use super::*;

    #[test]
    fn empty_and_zero_are_distinct() {
        let empty = Accum(apz_repr::Accum::new());
        let mut buf = BytesMut::new();
        empty.encode_binary(&mut buf);
        assert!(buf.is_empty());

        let zero = Accum(apz_repr::Accum::from(apz_repr::Apz::from(0i32)));
        let mut buf = BytesMut::new();
        zero.encode_binary(&mut buf);
        assert_eq!(&buf[..], [SIGN_NONNEG]);

        assert_eq!(Accum::decode_binary(&[]).unwrap(), empty);
        assert_eq!(Accum::decode_binary(&[SIGN_NONNEG]).unwrap(), zero);
    }

    #[test]
    fn text_sentinel_round_trips() {
        assert_eq!(
            Accum::decode_text("").unwrap(),
            Accum(apz_repr::Accum::new())
        );

        let holding = Accum::decode_text("42").unwrap();
        assert_eq!(
            holding.0.value().map(|v| v.to_string()),
            Some("42".to_string())
        );
        let mut buf = String::new();
        holding.encode_text(&mut buf);
        assert_eq!(buf, "42");

        let mut buf = String::new();
        Accum(apz_repr::Accum::new()).encode_text(&mut buf);
        assert_eq!(buf, "");
    }

    #[test]
    fn malformed_held_value_is_surfaced() {
        assert!(Accum::decode_binary(&[9]).is_err());
        assert!(Accum::decode_text("12a").is_err());
    }
}
