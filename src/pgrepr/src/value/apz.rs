// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The wire format for arbitrary-precision integers.
//!
//! The encoding is one sign-marker byte followed by the magnitude as
//! big-endian 32-bit words, most significant word first: network byte
//! order throughout, never the byte order of the host that produced the
//! bytes. Zero is the marker byte alone. The encoding is canonical: the
//! magnitude never starts with a zero word and a negative marker never
//! carries an empty magnitude, so a value has exactly one byte sequence
//! and byte equality implies value equality.

use std::error::Error;
use std::fmt;

use byteorder::{NetworkEndian, ReadBytesExt};
use bytes::{BufMut, BytesMut};
use postgres_types::{to_sql_checked, FromSql, IsNull, ToSql, Type};

use apz_repr::Sign;

use crate::oid;
use crate::value::MalformedEncodingError;

/// The sign marker for zero or positive values.
pub const SIGN_NONNEG: u8 = 0;

/// The sign marker for negative values.
pub const SIGN_NEG: u8 = 1;

/// A wrapper for [`apz_repr::Apz`] that can be serialized to and
/// deserialized from the engine's binary format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Apz(pub apz_repr::Apz);

impl Apz {
    /// Appends the binary encoding of the value to `buf`.
    pub fn encode_binary(&self, buf: &mut BytesMut) {
        encode(buf, &self.0)
    }

    /// Decodes a value from its binary encoding.
    ///
    /// `raw` must be exactly one encoded value; the caller's container is
    /// responsible for delimiting it.
    pub fn decode_binary(raw: &[u8]) -> Result<Apz, MalformedEncodingError> {
        decode(raw).map(Apz)
    }
}

impl fmt::Display for Apz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ToSql for Apz {
    fn to_sql(
        &self,
        _: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.encode_binary(out);
        Ok(IsNull::No)
    }

    fn accepts(ty: &Type) -> bool {
        ty.oid() == oid::TYPE_APZ_OID
    }

    to_sql_checked!();
}

impl<'a> FromSql<'a> for Apz {
    fn from_sql(_: &Type, raw: &'a [u8]) -> Result<Apz, Box<dyn Error + Sync + Send>> {
        Ok(Apz::decode_binary(raw)?)
    }

    fn accepts(ty: &Type) -> bool {
        ty.oid() == oid::TYPE_APZ_OID
    }
}

pub(crate) fn encode(buf: &mut BytesMut, n: &apz_repr::Apz) {
    let (sign, words) = n.to_words();
    buf.put_u8(match sign {
        Sign::Minus => SIGN_NEG,
        Sign::NoSign | Sign::Plus => SIGN_NONNEG,
    });
    // The arithmetic boundary hands back words least significant first;
    // the wire wants the most significant word first.
    for word in words.iter().rev() {
        buf.put_u32(*word);
    }
}

pub(crate) fn decode(mut raw: &[u8]) -> Result<apz_repr::Apz, MalformedEncodingError> {
    let marker = raw
        .read_u8()
        .map_err(|_| MalformedEncodingError::MissingSignMarker)?;
    let sign = match marker {
        SIGN_NONNEG => Sign::Plus,
        SIGN_NEG => Sign::Minus,
        b => return Err(MalformedEncodingError::UnknownSignMarker(b)),
    };
    let magnitude_bytes = raw.len();
    let mut words = Vec::with_capacity(magnitude_bytes / 4);
    while !raw.is_empty() {
        let word = raw
            .read_u32::<NetworkEndian>()
            .map_err(|_| MalformedEncodingError::TruncatedMagnitude {
                bytes: magnitude_bytes,
            })?;
        words.push(word);
    }
    match words.first() {
        Some(&0) => return Err(MalformedEncodingError::LeadingZeroWord),
        None if sign == Sign::Minus => return Err(MalformedEncodingError::NegativeZero),
        _ => {}
    }
    words.reverse();
    Ok(apz_repr::Apz::from_words(sign, &words))
}

#[cfg(test)]
mod tests {
    use postgres_types::{FromSql, ToSql};
    use proptest::prelude::*;

    use apz_repr::strconv;

    use super::*;

    fn apz(s: &str) -> Apz {
        Apz(strconv::parse_apz(s).unwrap())
    }

    fn encoded(n: &Apz) -> Vec<u8> {
        let mut buf = BytesMut::new();
        n.encode_binary(&mut buf);
        buf.to_vec()
    }

    #[test]
    fn encoding_layout() {
        assert_eq!(encoded(&apz("0")), [SIGN_NONNEG]);
        assert_eq!(encoded(&apz("1")), [SIGN_NONNEG, 0, 0, 0, 1]);
        assert_eq!(encoded(&apz("-1")), [SIGN_NEG, 0, 0, 0, 1]);
        // 2^32 occupies two words; the most significant comes first.
        assert_eq!(
            encoded(&apz("4294967296")),
            [SIGN_NONNEG, 0, 0, 0, 1, 0, 0, 0, 0]
        );
        assert_eq!(
            encoded(&apz("-4294967297")),
            [SIGN_NEG, 0, 0, 0, 1, 0, 0, 0, 1]
        );
    }

    #[test]
    fn encoding_is_canonical() {
        // A negative zero cannot be represented, so it encodes as zero.
        let neg_zero = Apz(apz_repr::Apz::from_words(Sign::Minus, &[]));
        assert_eq!(encoded(&neg_zero), encoded(&apz("0")));
        assert_eq!(encoded(&apz("007")), encoded(&apz("7")));
    }

    #[test]
    fn decode_rejects_malformed_bytes() {
        assert_eq!(
            Apz::decode_binary(&[]),
            Err(MalformedEncodingError::MissingSignMarker)
        );
        assert_eq!(
            Apz::decode_binary(&[SIGN_NONNEG, 1, 2]),
            Err(MalformedEncodingError::TruncatedMagnitude { bytes: 2 })
        );
        assert_eq!(
            Apz::decode_binary(&[7]),
            Err(MalformedEncodingError::UnknownSignMarker(7))
        );
        assert_eq!(
            Apz::decode_binary(&[SIGN_NONNEG, 0, 0, 0, 0]),
            Err(MalformedEncodingError::LeadingZeroWord)
        );
        assert_eq!(
            Apz::decode_binary(&[SIGN_NONNEG, 0, 0, 0, 0, 0, 0, 0, 5]),
            Err(MalformedEncodingError::LeadingZeroWord)
        );
        assert_eq!(
            Apz::decode_binary(&[SIGN_NEG]),
            Err(MalformedEncodingError::NegativeZero)
        );
    }

    #[test]
    fn binary_round_trips_through_to_sql() {
        let ty = crate::Type::Apz;
        let n = apz("-340282366920938463463374607431768211456");
        let mut buf = BytesMut::new();
        n.to_sql(ty.inner(), &mut buf).unwrap();
        let decoded = Apz::from_sql(ty.inner(), &buf).unwrap();
        assert_eq!(decoded, n);
    }

    fn apz_strategy() -> impl Strategy<Value = Apz> {
        (any::<bool>(), prop::collection::vec(any::<u32>(), 0..8)).prop_map(
            |(negative, words)| {
                let sign = if negative { Sign::Minus } else { Sign::Plus };
                Apz(apz_repr::Apz::from_words(sign, &words))
            },
        )
    }

    proptest! {
        #[test]
        fn binary_round_trips(n in apz_strategy()) {
            prop_assert_eq!(Apz::decode_binary(&encoded(&n)).unwrap(), n);
        }
    }
}
