// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Aggregate functions over apz values.
//!
//! The host's aggregation driver owns one [`Accum`] per aggregation and
//! presents inputs one at a time: [`AggregateFunc::transition`] once per
//! row (possibly zero times), then [`AggregateFunc::finish`] exactly once.
//! Calls for a given accumulator are sequential and single-threaded; that
//! discipline is a documented precondition of the driver, not something
//! checked here.

use apz_repr::{Accum, Apz};

use crate::scalar::EvalError;

/// The context the host engine reports when it invokes a function.
///
/// The aggregation driver reports [`CallContext::Aggregate`] for the
/// transition calls it issues; everything else is
/// [`CallContext::Scalar`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallContext {
    /// Ordinary scalar evaluation.
    Scalar,
    /// A call issued by the aggregation driver within a live aggregation.
    Aggregate,
}

/// An aggregate function over apz values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AggregateFunc {
    /// The sum of the non-null inputs.
    SumApz,
    /// The product of the non-null inputs.
    ProductApz,
}

impl AggregateFunc {
    /// Returns the name of the aggregate, for use in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunc::SumApz => "sum(apz)",
            AggregateFunc::ProductApz => "product(apz)",
        }
    }

    fn combine(&self, a: Apz, b: Apz) -> Apz {
        match self {
            AggregateFunc::SumApz => a + b,
            AggregateFunc::ProductApz => a * b,
        }
    }

    /// Folds one input into `accum`.
    ///
    /// A null input leaves the accumulator unchanged. The first non-null
    /// input is installed directly rather than combined with an identity
    /// element, which keeps "no inputs yet" distinct from an accumulated
    /// zero.
    ///
    /// `cx` must be [`CallContext::Aggregate`]; otherwise the call fails
    /// without touching the accumulator. The check is cheap and catches
    /// transition functions mistakenly invoked as ordinary scalar
    /// functions.
    pub fn transition(
        &self,
        cx: CallContext,
        accum: &mut Accum,
        input: Option<Apz>,
    ) -> Result<(), EvalError> {
        if cx != CallContext::Aggregate {
            return Err(EvalError::AggregateContextRequired { func: self.name() });
        }
        tracing::trace!(
            func = self.name(),
            has_value = accum.has_value(),
            "aggregate transition"
        );
        if let Some(x) = input {
            accum.accumulate(x, |held, x| self.combine(held, x));
        }
        Ok(())
    }

    /// Consumes `accum`, producing the aggregate's result.
    ///
    /// Returns `None` iff no non-null input was ever folded in; the host
    /// maps this to a null result. This is the last operation on the
    /// accumulator.
    pub fn finish(&self, accum: Accum) -> Option<Apz> {
        accum.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CX: CallContext = CallContext::Aggregate;

    fn run(func: AggregateFunc, inputs: &[Option<i64>]) -> Option<Apz> {
        let mut accum = Accum::new();
        for input in inputs {
            func.transition(CX, &mut accum, input.map(Apz::from)).unwrap();
        }
        func.finish(accum)
    }

    #[test]
    fn sum_over_no_rows_is_absent() {
        assert_eq!(run(AggregateFunc::SumApz, &[]), None);
    }

    #[test]
    fn sum_of_zero_is_not_absent() {
        assert_eq!(run(AggregateFunc::SumApz, &[Some(0)]), Some(Apz::from(0i64)));
    }

    #[test]
    fn sum_matches_sequential_addition() {
        let (a, b, c) = (123_456_789_012_345_678i64, -987_654_321i64, 42i64);
        assert_eq!(
            run(AggregateFunc::SumApz, &[Some(a), Some(b), Some(c)]),
            Some(Apz::from(a) + Apz::from(b) + Apz::from(c)),
        );
    }

    #[test]
    fn product_folds() {
        assert_eq!(
            run(AggregateFunc::ProductApz, &[Some(2), Some(3), Some(4)]),
            Some(Apz::from(24i64))
        );
        assert_eq!(run(AggregateFunc::ProductApz, &[]), None);
        assert_eq!(
            run(AggregateFunc::ProductApz, &[Some(0), Some(5)]),
            Some(Apz::from(0i64))
        );
    }

    #[test]
    fn nulls_are_skipped() {
        assert_eq!(
            run(AggregateFunc::SumApz, &[None, Some(7), None, Some(3)]),
            Some(Apz::from(10i64))
        );
        assert_eq!(run(AggregateFunc::SumApz, &[None, None]), None);
    }

    #[test]
    fn transition_requires_aggregate_context() {
        let mut accum = Accum::new();
        let err = AggregateFunc::SumApz
            .transition(CallContext::Scalar, &mut accum, Some(Apz::from(1i64)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "sum(apz) can only be called in an aggregation"
        );
        assert!(!accum.has_value());
    }
}
