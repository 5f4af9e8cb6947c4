// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Codecs between wire bytes and apz values.

use std::error::Error;
use std::fmt;
use std::str;

use bytes::BytesMut;

use apz_repr::strconv::{self, ParseError};

use crate::{Format, Type};

pub mod accum;
pub mod apz;

use self::accum::Accum;
use self::apz::Apz;

/// A value of one of the types this crate can move across the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// An arbitrary-precision integer.
    Apz(Apz),
    /// An aggregation accumulator.
    Accum(Accum),
}

impl Value {
    /// Serializes this value to `buf` in the specified `format`.
    pub fn encode(&self, format: Format, buf: &mut BytesMut) {
        match format {
            Format::Text => self.encode_text(buf),
            Format::Binary => self.encode_binary(buf),
        }
    }

    /// Serializes this value to `buf` using the text encoding format.
    pub fn encode_text(&self, buf: &mut BytesMut) {
        match self {
            Value::Apz(n) => strconv::format_apz(buf, &n.0),
            Value::Accum(a) => a.encode_text(buf),
        }
    }

    /// Serializes this value to `buf` using the binary encoding format.
    pub fn encode_binary(&self, buf: &mut BytesMut) {
        match self {
            Value::Apz(n) => n.encode_binary(buf),
            Value::Accum(a) => a.encode_binary(buf),
        }
    }

    /// Deserializes a value of type `ty` from `raw` using the specified
    /// `format`.
    pub fn decode(format: Format, ty: Type, raw: &[u8]) -> Result<Value, DecodeError> {
        match format {
            Format::Text => Value::decode_text(ty, raw).map_err(DecodeError::from),
            Format::Binary => Value::decode_binary(ty, raw).map_err(DecodeError::from),
        }
    }

    /// Deserializes a value of type `ty` from `raw` using the text
    /// encoding format.
    pub fn decode_text(ty: Type, raw: &[u8]) -> Result<Value, ParseError> {
        let s = str::from_utf8(raw).map_err(|_| {
            ParseError::invalid_input_syntax(ty.name(), String::from_utf8_lossy(raw))
        })?;
        Ok(match ty {
            Type::Apz => Value::Apz(Apz(strconv::parse_apz(s)?)),
            Type::ApzAccum => Value::Accum(Accum::decode_text(s)?),
        })
    }

    /// Deserializes a value of type `ty` from `raw` using the binary
    /// encoding format.
    pub fn decode_binary(ty: Type, raw: &[u8]) -> Result<Value, MalformedEncodingError> {
        Ok(match ty {
            Type::Apz => Value::Apz(Apz::decode_binary(raw)?),
            Type::ApzAccum => Value::Accum(Accum::decode_binary(raw)?),
        })
    }
}

/// An error decoding a value from its binary encoding.
///
/// The binary form is produced by trusted upstream components that have
/// already validated the container length, so any of these indicates a
/// contract violation rather than bad user input. None of them is
/// recoverable by retrying.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedEncodingError {
    /// The buffer is empty, so there is no sign marker to read.
    MissingSignMarker,
    /// The bytes following the sign marker do not form whole magnitude
    /// words.
    TruncatedMagnitude {
        /// The number of bytes following the sign marker.
        bytes: usize,
    },
    /// The sign marker byte is not a known marker.
    UnknownSignMarker(u8),
    /// The magnitude begins with a zero word, which the canonical form
    /// forbids.
    LeadingZeroWord,
    /// The sign marker claims a negative value but the magnitude is empty.
    NegativeZero,
}

impl fmt::Display for MalformedEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("malformed apz encoding: ")?;
        match self {
            MalformedEncodingError::MissingSignMarker => f.write_str("missing sign marker"),
            MalformedEncodingError::TruncatedMagnitude { bytes } => write!(
                f,
                "magnitude of {} bytes is not a whole number of words",
                bytes
            ),
            MalformedEncodingError::UnknownSignMarker(b) => {
                write!(f, "unknown sign marker {:#04x}", b)
            }
            MalformedEncodingError::LeadingZeroWord => {
                f.write_str("magnitude has a leading zero word")
            }
            MalformedEncodingError::NegativeZero => {
                f.write_str("negative sign with empty magnitude")
            }
        }
    }
}

impl Error for MalformedEncodingError {}

/// An error decoding a [`Value`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The text encoding was malformed.
    Text(ParseError),
    /// The binary encoding was malformed.
    Binary(MalformedEncodingError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Text(e) => e.fmt(f),
            DecodeError::Binary(e) => e.fmt(f),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Text(e) => Some(e),
            DecodeError::Binary(e) => Some(e),
        }
    }
}

impl From<ParseError> for DecodeError {
    fn from(e: ParseError) -> DecodeError {
        DecodeError::Text(e)
    }
}

impl From<MalformedEncodingError> for DecodeError {
    fn from(e: MalformedEncodingError) -> DecodeError {
        DecodeError::Binary(e)
    }
}
