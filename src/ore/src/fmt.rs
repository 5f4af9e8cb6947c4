// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Formatting utilities.

use std::fmt;

use bytes::BytesMut;

/// A buffer into which a value's text representation can be written.
///
/// Implemented for both [`String`] and [`BytesMut`], so formatting routines
/// can target an owned string or a network buffer without an intermediate
/// copy.
pub trait FormatBuffer: fmt::Write {
    /// Returns the number of bytes in the buffer.
    fn len(&self) -> usize;

    /// Reports whether the buffer contains no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FormatBuffer for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl FormatBuffer for BytesMut {
    fn len(&self) -> usize {
        BytesMut::len(self)
    }
}
