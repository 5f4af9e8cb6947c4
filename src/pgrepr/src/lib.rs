// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Representation of and serialization for apz values.
//!
//! This crate sits at the boundary with the host engine: it defines the
//! OIDs the engine knows the apz types by, the text and binary encoding
//! formats, and the codecs between wire bytes and the in-memory
//! representations of [`apz_repr`].

#![deny(missing_debug_implementations)]

use std::fmt;
use std::sync::LazyLock;

use postgres_types::Kind;

pub mod oid;

mod format;
mod value;

pub use format::{Format, InvalidFormatError};
pub use value::accum::Accum;
pub use value::apz::Apz;
pub use value::{DecodeError, MalformedEncodingError, Value};

static APZ: LazyLock<postgres_types::Type> = LazyLock::new(|| {
    postgres_types::Type::new(
        "apz".into(),
        oid::TYPE_APZ_OID,
        Kind::Simple,
        "public".into(),
    )
});

static APZ_ACCUM: LazyLock<postgres_types::Type> = LazyLock::new(|| {
    postgres_types::Type::new(
        "apz_accum".into(),
        oid::TYPE_APZ_ACCUM_OID,
        Kind::Simple,
        "public".into(),
    )
});

/// The type of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    /// An arbitrary-precision integer.
    Apz,
    /// The accumulator for an aggregation over apz values.
    ApzAccum,
}

impl Type {
    /// Returns the type corresponding to the provided OID, if the OID is
    /// known.
    pub fn from_oid(oid: u32) -> Option<Type> {
        match oid {
            oid::TYPE_APZ_OID => Some(Type::Apz),
            oid::TYPE_APZ_ACCUM_OID => Some(Type::ApzAccum),
            _ => None,
        }
    }

    /// Returns the name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Apz => "apz",
            Type::ApzAccum => "apz_accum",
        }
    }

    /// Returns the OID of the type.
    pub fn oid(&self) -> u32 {
        match self {
            Type::Apz => oid::TYPE_APZ_OID,
            Type::ApzAccum => oid::TYPE_APZ_ACCUM_OID,
        }
    }

    /// Returns the corresponding [`postgres_types::Type`].
    pub fn inner(&self) -> &'static postgres_types::Type {
        match self {
            Type::Apz => &APZ,
            Type::ApzAccum => &APZ_ACCUM,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
