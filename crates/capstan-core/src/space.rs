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

//! # Propagation Spaces
//!
//! A space is an opaque snapshot of propagation state: variable domains plus
//! whatever bookkeeping the propagation engine needs to narrow them. The
//! search engines in `capstan-search` drive spaces through a simple
//! clone/commit protocol:
//!
//! 1. `status()` propagates the space to a fixpoint and reports whether it
//!    failed, is solved, or has a pending branching choice with `n`
//!    alternatives.
//! 2. For each alternative the engine clones the space (or moves it for the
//!    last one) and calls `commit(alt)` on the copy, then loops back to 1.
//!
//! Spaces are never shared: exactly one component (driver or engine) owns a
//! given space at any time, and every copy handed to a caller is exclusively
//! theirs. The protocol requires that a space which reported
//! `Branches(n)` remembers its pending choice across `Clone`, so that each
//! clone can commit to a different alternative.

/// The result of propagating a space to a fixpoint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpaceStatus {
    /// Propagation emptied a domain; the space admits no solution.
    Failed,
    /// All decision variables are fixed; the space is a solution.
    Solved,
    /// Propagation reached a fixpoint with unfixed variables. A branching
    /// choice with the given number of alternatives (at least two) is now
    /// pending on the space.
    Branches(usize),
}

impl SpaceStatus {
    /// Returns `true` if the space failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, SpaceStatus::Failed)
    }

    /// Returns `true` if the space is solved.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SpaceStatus::Solved)
    }
}

impl std::fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceStatus::Failed => write!(f, "Failed"),
            SpaceStatus::Solved => write!(f, "Solved"),
            SpaceStatus::Branches(n) => write!(f, "Branches({})", n),
        }
    }
}

/// An opaque, cloneable propagation state.
///
/// Implementors supply the two operations the search engines need:
/// propagation to a fixpoint (`status`) and committing to one alternative of
/// the pending branching choice (`commit`).
///
/// # Contract
///
/// * After `status()` returned [`SpaceStatus::Branches`] with `n`
///   alternatives, `commit(alt)`
///   must be accepted for every `alt < n`, on this space or any clone of it.
/// * Calling `commit` without a pending choice, or with an out-of-range
///   alternative, is a programming error and must panic.
/// * A failed space stays failed; repeated `status()` calls must keep
///   reporting [`SpaceStatus::Failed`].
pub trait Space: Clone {
    /// Runs propagation to a fixpoint and reports the state of the space.
    ///
    /// When this returns [`SpaceStatus::Branches`], the branching choice is
    /// recorded on the space and survives cloning.
    fn status(&mut self) -> SpaceStatus;

    /// Commits to the given alternative of the pending branching choice.
    ///
    /// The effects of the commit are only visible after the next call to
    /// [`Space::status`].
    ///
    /// # Panics
    ///
    /// Panics if no branching choice is pending or if `alternative` is out
    /// of range for the pending choice.
    fn commit(&mut self, alternative: usize);
}

/// The branch-and-bound hook of a space.
///
/// `constrain` installs constraints on `self` that admit only solutions
/// strictly better than `best`, where `best` is a solved space previously
/// yielded by the search. Branch-and-bound calls this on unexplored spaces
/// whenever a new best solution has been found since they were created.
pub trait Constrain: Space {
    /// Constrains `self` to solutions strictly better than `best`.
    fn constrain(&mut self, best: &Self);
}
