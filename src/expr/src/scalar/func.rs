// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Scalar functions over apz values.
//!
//! Arithmetic over apz is exact, so unlike their fixed-width counterparts
//! these functions cannot overflow and are all total.

use apz_repr::Apz;

/// Negates an apz.
pub fn neg_apz(a: Apz) -> Apz {
    -a
}

/// Unary plus: returns its argument unchanged.
pub fn plus_apz(a: Apz) -> Apz {
    a
}

/// Adds two apz values.
pub fn add_apz(a: Apz, b: Apz) -> Apz {
    a + b
}

/// Multiplies two apz values.
pub fn mul_apz(a: Apz, b: Apz) -> Apz {
    a * b
}

/// Widens a 16-bit integer to an apz.
pub fn cast_int16_to_apz(a: i16) -> Apz {
    Apz::from(a)
}

/// Widens a 32-bit integer to an apz.
pub fn cast_int32_to_apz(a: i32) -> Apz {
    Apz::from(a)
}

/// Widens a 64-bit integer to an apz.
pub fn cast_int64_to_apz(a: i64) -> Apz {
    Apz::from(a)
}
