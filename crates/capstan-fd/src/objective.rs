// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Objective Hooks
//!
//! Ready-made bounding closures for branch-and-bound over [`IntSpace`].
//! Each hook receives the space still to be explored and the best solution
//! found so far, and narrows the objective variable so that only strictly
//! better solutions survive.

use crate::{num::FdValue, space::IntSpace};
use capstan_core::index::VarIndex;

/// Returns a bounding hook that minimizes `objective`.
///
/// # Panics
///
/// The returned closure panics if the objective is not fixed in the best
/// space.
pub fn minimize<T>(objective: VarIndex) -> impl FnMut(&mut IntSpace<T>, &IntSpace<T>)
where
    T: FdValue,
{
    move |home, best| {
        let bound = best
            .value(objective)
            .expect("expected the objective variable to be fixed in a solution");
        home.narrow_above(objective, bound - T::one());
    }
}

/// Returns a bounding hook that maximizes `objective`.
///
/// # Panics
///
/// The returned closure panics if the objective is not fixed in the best
/// space.
pub fn maximize<T>(objective: VarIndex) -> impl FnMut(&mut IntSpace<T>, &IntSpace<T>)
where
    T: FdValue,
{
    move |home, best| {
        let bound = best
            .value(objective)
            .expect("expected the objective variable to be fixed in a solution");
        home.narrow_below(objective, bound + T::one());
    }
}
