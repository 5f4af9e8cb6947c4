// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Scalar and aggregate functions over apz values.

#![deny(missing_debug_implementations)]

mod relation;
mod scalar;

pub use relation::func::{AggregateFunc, CallContext};
pub use scalar::func::{
    add_apz, cast_int16_to_apz, cast_int32_to_apz, cast_int64_to_apz, mul_apz, neg_apz, plus_apz,
};
pub use scalar::EvalError;
