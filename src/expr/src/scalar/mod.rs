// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Scalar function evaluation.

use std::error::Error;
use std::fmt;

pub mod func;

/// An error that occurred while evaluating a function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    /// An aggregate transition function was invoked outside a live
    /// aggregation. This is a bug in the caller, not a data error, and is
    /// reported distinctly so it cannot be mistaken for bad input.
    AggregateContextRequired {
        /// The name of the aggregate function.
        func: &'static str,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::AggregateContextRequired { func } => {
                write!(f, "{} can only be called in an aggregation", func)
            }
        }
    }
}

impl Error for EvalError {}
