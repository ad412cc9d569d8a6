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

//! # Branch-and-Bound Engine
//!
//! Depth-first branch-and-bound over spaces of type `S`. Every time a
//! solution is found, the engine remembers it as the incumbent and bumps a
//! generation mark. Open frames created before the bump are stale: each
//! child taken from a stale frame is re-constrained against the incumbent
//! through the [`BoundingHook`] before it is explored. The hook must make
//! the child admit only solutions strictly better than the incumbent, so
//! the sequence of yielded spaces improves monotonically and the last one
//! is optimal once the engine reports exhaustion.
//!
//! ## Highlights
//!
//! - [`NativeBound`] delegates bounding to the space's own
//!   `capstan_core::space::Constrain` implementation.
//! - Any `FnMut(&mut S, &S)` closure is a [`BoundingHook`], so ad-hoc
//!   objectives need no new types.
//! - Frame handling mirrors [`crate::dfs::DfsEngine`]: the last open
//!   alternative moves the frame's space instead of cloning it.

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    result::{SearchOutcome, TerminationReason},
    stats::SearchStatistics,
};
use capstan_core::space::{Constrain, Space, SpaceStatus};
use std::time::Instant;

/// Re-constrains an open space against the best solution found so far.
///
/// After `constrain(home, best)` returns, `home` must admit only solutions
/// strictly better than `best`; otherwise the engine can yield duplicates
/// and the optimality guarantee is lost.
pub trait BoundingHook<S> {
    fn constrain(&mut self, home: &mut S, best: &S);
}

impl<S, F> BoundingHook<S> for F
where
    F: FnMut(&mut S, &S),
{
    #[inline]
    fn constrain(&mut self, home: &mut S, best: &S) {
        self(home, best)
    }
}

/// A bounding hook that delegates to the space's own `Constrain`
/// implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeBound;

impl<S> BoundingHook<S> for NativeBound
where
    S: Constrain,
{
    #[inline]
    fn constrain(&mut self, home: &mut S, best: &S) {
        home.constrain(best);
    }
}

/// An open node together with the incumbent generation it was created under.
#[derive(Debug, Clone)]
struct Frame<S> {
    space: S,
    alternatives: usize,
    next: usize,
    mark: u64,
}

/// A resumable branch-and-bound search over spaces of type `S`.
///
/// Each call to `next` yields a solution strictly better than the previous
/// one. The last yielded solution before `next` returns `None` with an
/// exhausted outcome is optimal.
#[derive(Debug)]
pub struct BabEngine<S, H, M = NoOperationMonitor>
where
    S: Space,
    H: BoundingHook<S>,
    M: SearchMonitor<S>,
{
    root: Option<S>,
    stack: Vec<Frame<S>>,
    hook: H,
    best: Option<S>,
    /// Incumbent generation. Bumped on every solution; frames carrying an
    /// older mark get their children re-constrained.
    mark: u64,
    statistics: SearchStatistics,
    monitor: M,
    started_at: Option<Instant>,
    termination: Option<TerminationReason>,
}

impl<S> BabEngine<S, NativeBound>
where
    S: Constrain,
{
    /// Creates an engine that bounds through the space's own `Constrain`
    /// implementation.
    #[inline]
    pub fn new(root: S) -> Self {
        Self::with_hook(root, NativeBound)
    }
}

impl<S, H> BabEngine<S, H>
where
    S: Space,
    H: BoundingHook<S>,
{
    /// Creates an engine with an explicit bounding hook.
    #[inline]
    pub fn with_hook(root: S, hook: H) -> Self {
        Self::with_hook_and_monitor(root, hook, NoOperationMonitor::new())
    }
}

impl<S, H, M> BabEngine<S, H, M>
where
    S: Space,
    H: BoundingHook<S>,
    M: SearchMonitor<S>,
{
    /// Creates an engine with an explicit bounding hook, observed by
    /// `monitor`.
    pub fn with_hook_and_monitor(root: S, hook: H, monitor: M) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            hook,
            best: None,
            mark: 0,
            statistics: SearchStatistics::default(),
            monitor,
            started_at: None,
            termination: None,
        }
    }

    /// Yields the next improving solution, or `None` when no strictly
    /// better solution exists or the monitor stopped the search.
    pub fn next(&mut self) -> Option<S> {
        if self.termination.is_some() {
            return None;
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
            self.monitor.on_enter_search();
        }

        loop {
            if let SearchCommand::Terminate(reason) = self.monitor.search_command(&self.statistics)
            {
                self.finish(TerminationReason::Aborted(reason));
                return None;
            }

            let Some(mut space) = self.next_open_space() else {
                self.finish(TerminationReason::Exhausted);
                return None;
            };

            self.statistics.on_node_explored();
            self.monitor.on_node(&self.statistics);

            match space.status() {
                SpaceStatus::Failed => {
                    self.statistics.on_failure();
                }
                SpaceStatus::Solved => {
                    self.best = Some(space.clone());
                    self.mark += 1;
                    self.statistics.on_solution_found();
                    self.monitor.on_solution_found(&space, &self.statistics);
                    if let Some(start) = self.started_at {
                        self.statistics.set_total_time(start.elapsed());
                    }
                    return Some(space);
                }
                SpaceStatus::Branches(alternatives) => {
                    debug_assert!(
                        alternatives > 0,
                        "a branching space must offer at least one alternative"
                    );
                    self.stack.push(Frame {
                        space,
                        alternatives,
                        next: 0,
                        mark: self.mark,
                    });
                    self.statistics.on_depth_update(self.stack.len() as u64);
                }
            }
        }
    }

    /// Returns the best solution found so far.
    #[inline]
    pub fn best(&self) -> Option<&S> {
        self.best.as_ref()
    }

    /// Returns `true` if the engine can no longer yield spaces.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns why the engine stopped, or `None` while it can still yield.
    #[inline]
    pub fn termination_reason(&self) -> Option<&TerminationReason> {
        self.termination.as_ref()
    }

    /// Returns the final outcome once the engine has stopped.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        let reason = self.termination.as_ref()?;
        Some(match reason {
            TerminationReason::Exhausted => SearchOutcome::exhausted(self.statistics.clone()),
            TerminationReason::Aborted(text) => {
                SearchOutcome::aborted(text.clone(), self.statistics.clone())
            }
        })
    }

    /// Consumes the engine and returns the best solution found.
    #[inline]
    pub fn into_best(self) -> Option<S> {
        self.best
    }

    fn next_open_space(&mut self) -> Option<S> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }

        let (alternative, is_last, frame_mark) = {
            let frame = self.stack.last_mut()?;
            let alternative = frame.next;
            frame.next += 1;
            (
                alternative,
                frame.next == frame.alternatives,
                frame.mark,
            )
        };

        let mut child = if is_last {
            // Last alternative: the frame is spent, move its space out.
            self.stack
                .pop()
                .expect("expected a frame below an open alternative")
                .space
        } else {
            self.stack
                .last()
                .expect("expected a frame below an open alternative")
                .space
                .clone()
        };
        child.commit(alternative);

        // The frame predates the current incumbent: force the child to beat
        // it before exploring.
        if frame_mark != self.mark {
            let best = self
                .best
                .as_ref()
                .expect("expected an incumbent when a stale frame exists");
            self.hook.constrain(&mut child, best);
        }
        Some(child)
    }

    fn finish(&mut self, reason: TerminationReason) {
        if let Some(start) = self.started_at {
            self.statistics.set_total_time(start.elapsed());
        }
        self.monitor.on_exit_search(&self.statistics);
        self.stack.clear();
        self.root = None;
        self.termination = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_fd::{objective, propagator::Propagator, space::IntSpace};

    #[test]
    fn test_minimization_yields_improving_solutions() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=5);
        root.set_objective(x);

        let mut engine = BabEngine::new(root);
        let mut values = Vec::new();
        while let Some(space) = engine.next() {
            values.push(space.value(x).expect("expected a fixed objective"));
        }

        // The default brancher tries the smallest value first, so the first
        // solution is already optimal.
        assert_eq!(values, vec![0]);
        assert!(engine.is_finished());
        assert_eq!(
            engine.termination_reason(),
            Some(&TerminationReason::Exhausted)
        );
    }

    #[test]
    fn test_maximization_walks_up_to_the_optimum() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=3);

        let mut engine = BabEngine::with_hook(root, objective::maximize(x));
        let mut values = Vec::new();
        while let Some(space) = engine.next() {
            values.push(space.value(x).expect("expected a fixed objective"));
        }

        // Min-first branching makes every value an improving solution.
        assert_eq!(values, vec![0, 1, 2, 3]);
        let best = engine.best().expect("expected an incumbent");
        assert_eq!(best.value(x), Some(3));
    }

    #[test]
    fn test_constrained_minimum_is_found() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=9);
        let y = root.new_var(0..=9);
        root.post(Propagator::SumEq(vec![x, y], 10));
        root.set_objective(x);

        let mut engine = BabEngine::new(root);
        let mut last = None;
        while let Some(space) = engine.next() {
            last = space.value(x);
        }

        // x + y = 10 with y at most 9 forces x to at least 1.
        assert_eq!(last, Some(1));
        let best = engine.into_best().expect("expected an incumbent");
        assert_eq!(best.value(y), Some(9));
    }

    #[test]
    fn test_infeasible_root_yields_nothing() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=4);
        let y = root.new_var(0..=4);
        root.post(Propagator::Lt(x, y));
        root.post(Propagator::Lt(y, x));
        root.set_objective(x);

        let mut engine = BabEngine::new(root);
        assert!(engine.next().is_none());
        assert!(engine.best().is_none());
        assert!(engine.outcome().expect("expected an outcome").is_exhausted());
    }

    #[test]
    fn test_hook_that_fails_the_home_space_prunes_the_subtree() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=3);

        // Fails every re-constrained space outright.
        let hook = move |home: &mut IntSpace<i32>, _best: &IntSpace<i32>| {
            home.narrow_above(x, -1);
        };
        let mut engine = BabEngine::with_hook(root, hook);

        let first = engine.next().expect("expected a solution");
        assert_eq!(first.value(x), Some(0));
        assert!(engine.next().is_none());

        // Every open subtree was pruned, not aborted.
        assert_eq!(
            engine.termination_reason(),
            Some(&TerminationReason::Exhausted)
        );
        let best = engine.best().expect("expected an incumbent");
        assert_eq!(best.value(x), Some(0));
    }

    #[test]
    fn test_closure_hook_bounds_the_search() {
        let mut root = IntSpace::<i32>::new();
        let x = root.new_var(0..=7);

        let hook = |home: &mut IntSpace<i32>, best: &IntSpace<i32>| {
            let bound = best.value(x).expect("expected a fixed objective");
            home.narrow_below(x, bound + 1);
        };
        let mut engine = BabEngine::with_hook(root, hook);

        let mut count = 0;
        let mut last = None;
        while let Some(space) = engine.next() {
            count += 1;
            last = space.value(x);
        }
        assert_eq!(last, Some(7));
        assert_eq!(count, 8);
    }
}
