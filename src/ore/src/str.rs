// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! String utilities.

use std::fmt::{self, Write};

/// Extension methods for [`str`].
pub trait StrExt {
    /// Wraps the string in double quotes, backslash-escaping any embedded
    /// quote or backslash, for inclusion in an error message.
    fn quoted(&self) -> Quoted<'_>;
}

impl StrExt for str {
    fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

/// Displays a string surrounded by double quotes. See [`StrExt::quoted`].
#[derive(Debug)]
pub struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}
