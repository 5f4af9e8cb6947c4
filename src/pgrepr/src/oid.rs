// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Object identifiers the host engine assigns to the apz types.
//!
//! These live in the extension OID range, above every OID the engine
//! reserves for its built-in types.

/// The OID of the `apz` type.
pub const TYPE_APZ_OID: u32 = 16_384;

/// The OID of the `apz_accum` type.
pub const TYPE_APZ_ACCUM_OID: u32 = 16_385;
