// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The core data representation for apz values.
//!
//! The [`adt`] module defines the value types themselves and [`strconv`]
//! defines their text representation. The binary representation lives in
//! the `apz-pgrepr` crate, next to the rest of the wire-level concerns.

#![deny(missing_debug_implementations)]

pub mod adt;
pub mod strconv;

pub use crate::adt::apz::{Accum, Apz, Sign};
