// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::error::Error;
use std::fmt;

/// The encoding format for a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// Text encoding: the strings produced and accepted by the type's
    /// input/output conversion routines.
    Text = 0,
    /// Binary encoding: the type's packed representation, with all
    /// multi-byte quantities in network byte order.
    Binary = 1,
}

impl TryFrom<i16> for Format {
    type Error = InvalidFormatError;

    fn try_from(n: i16) -> Result<Format, Self::Error> {
        match n {
            0 => Ok(Format::Text),
            1 => Ok(Format::Binary),
            _ => Err(InvalidFormatError(n)),
        }
    }
}

/// The error returned when converting an unknown format code to a
/// [`Format`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidFormatError(pub i16);

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid format code: {}", self.0)
    }
}

impl Error for InvalidFormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_codes() {
        assert_eq!(Format::try_from(0), Ok(Format::Text));
        assert_eq!(Format::try_from(1), Ok(Format::Binary));
        assert_eq!(Format::try_from(2), Err(InvalidFormatError(2)));
    }
}
