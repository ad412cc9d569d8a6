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

//! # Search Driver
//!
//! `SearchDriver` owns a base space and drives the engines over it. Every
//! search operation first flushes the deferred constraint queue into the
//! base space, then searches a clone of it, so the base space itself never
//! carries search decisions and [`SearchDriver::reset`] is a constant-time
//! pointer swap back to it.
//!
//! Search results are handed out as shared references, or to a callback, and
//! that reference is the only way to reach the bound solution. Exhaustion is
//! the sentinel `None`; contract violations against the space panic.

use crate::{queue::ConstraintQueue, state::DriverState};
use capstan_core::space::{Constrain, Space};
use capstan_search::{
    bab::{BabEngine, BoundingHook, NativeBound},
    dfs::DfsEngine,
    stats::SearchStatistics,
};

/// Drives depth-first and branch-and-bound searches over a base space.
pub struct SearchDriver<S>
where
    S: Space,
{
    base: S,
    active: Option<S>,
    queue: ConstraintQueue<S>,
    state: DriverState,
    last_statistics: Option<SearchStatistics>,
}

impl<S> SearchDriver<S>
where
    S: Space,
{
    /// Creates a driver over `base`.
    pub fn new(base: S) -> Self {
        Self {
            base,
            active: None,
            queue: ConstraintQueue::new(),
            state: DriverState::Unsolved,
            last_statistics: None,
        }
    }

    /// Queues a constraint post. It runs against the base space right
    /// before the next search operation, exactly once.
    #[inline]
    pub fn post<F>(&mut self, action: F)
    where
        F: FnOnce(&mut S) + 'static,
    {
        self.queue.push(action);
    }

    /// Searches for one solution.
    ///
    /// On success the solution becomes the current space, the driver is
    /// `Solved`, and a reference to it is returned. When the model is
    /// infeasible the driver returns `None` and keeps its previous state
    /// and current space.
    pub fn solve(&mut self) -> Option<&S> {
        self.queue.flush(&mut self.base);
        let previous = self.state;
        self.state = DriverState::Solving;

        let mut engine = DfsEngine::new(self.base.clone());
        let solution = engine.next();
        self.last_statistics = Some(engine.statistics().clone());

        match solution {
            Some(space) => {
                self.active = Some(space);
                self.state = DriverState::Solved;
                self.active.as_ref()
            }
            None => {
                self.state = previous;
                None
            }
        }
    }

    /// Enumerates every solution, invoking `f` once per solution, and
    /// returns how many there were. Afterwards the driver is reset to the
    /// base space regardless of the outcome.
    pub fn each_solution<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&S),
    {
        self.queue.flush(&mut self.base);
        self.state = DriverState::Solving;

        let mut engine = DfsEngine::new(self.base.clone());
        let mut count = 0;
        while let Some(space) = engine.next() {
            count += 1;
            f(&space);
        }
        self.last_statistics = Some(engine.statistics().clone());

        self.reset();
        count
    }

    /// Runs branch-and-bound with the given bounding hook and binds the
    /// optimal solution as the current space (`Solved`). Returns `None` and
    /// leaves the driver `Exhausted` when the model is infeasible.
    pub fn optimize<H>(&mut self, hook: H) -> Option<&S>
    where
        H: BoundingHook<S>,
    {
        self.queue.flush(&mut self.base);
        self.state = DriverState::Solving;

        let mut engine = BabEngine::with_hook(self.base.clone(), hook);
        while engine.next().is_some() {}
        self.last_statistics = Some(engine.statistics().clone());

        match engine.into_best() {
            Some(best) => {
                self.active = Some(best);
                self.state = DriverState::Solved;
                self.active.as_ref()
            }
            None => {
                self.state = DriverState::Exhausted;
                None
            }
        }
    }

    /// Solves, hands the solution to `f`, then resets. Returns `None` when
    /// the model is infeasible; the driver is reset either way.
    pub fn with_solution<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&S) -> R,
    {
        let value = self.solve().map(f);
        self.reset();
        value
    }

    /// Drops the bound solution and makes the base space current again.
    pub fn reset(&mut self) {
        self.active = None;
        self.state = DriverState::Unsolved;
    }

    /// Returns the current space: the bound solution if one exists, the
    /// base space otherwise.
    #[inline]
    pub fn current(&self) -> &S {
        self.active.as_ref().unwrap_or(&self.base)
    }

    /// Returns where the driver stands in its lifecycle.
    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns the statistics of the most recent search operation.
    #[inline]
    pub fn last_statistics(&self) -> Option<&SearchStatistics> {
        self.last_statistics.as_ref()
    }
}

impl<S> SearchDriver<S>
where
    S: Constrain,
{
    /// Runs branch-and-bound through the space's own `Constrain`
    /// implementation. See [`SearchDriver::optimize`].
    pub fn optimize_native(&mut self) -> Option<&S> {
        self.optimize(NativeBound)
    }
}

impl<S> std::fmt::Debug for SearchDriver<S>
where
    S: Space,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchDriver(state: {}, pending posts: {})",
            self.state,
            self.queue.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_fd::{objective, propagator::Propagator, space::IntSpace};

    fn two_free_vars() -> SearchDriver<IntSpace<i32>> {
        let mut space = IntSpace::new();
        space.new_var(0..=1);
        space.new_var(0..=1);
        SearchDriver::new(space)
    }

    #[test]
    fn test_solve_binds_a_solution() {
        let mut driver = two_free_vars();
        let solution = driver.solve().expect("expected a solution");
        assert!(solution.is_assigned(0.into()));
        assert!(solution.is_assigned(1.into()));
        assert_eq!(driver.state(), DriverState::Solved);
        assert!(driver.current().is_assigned(0.into()));
    }

    #[test]
    fn test_solve_on_infeasible_model_returns_none_and_keeps_state() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=5);
        let y = space.new_var(0..=5);
        let mut driver = SearchDriver::new(space);
        driver.post(move |s| s.post(Propagator::Lt(x, y)));
        driver.post(move |s| s.post(Propagator::Lt(y, x)));

        assert!(driver.solve().is_none());
        assert_eq!(driver.state(), DriverState::Unsolved);
        // No solution was bound; the base space is still current.
        assert!(!driver.current().is_assigned(x));
    }

    #[test]
    fn test_posts_are_deferred_and_run_once() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=9);
        let y = space.new_var(0..=9);
        let mut driver = SearchDriver::new(space);
        driver.post(move |s| s.post(Propagator::Lt(x, y)));

        // Not yet applied: the base space still has the full domains.
        assert_eq!(driver.current().bounds(x), Some((0, 9)));

        let solution = driver.solve().expect("expected a solution");
        let (vx, vy) = (solution.value(x).unwrap(), solution.value(y).unwrap());
        assert!(vx < vy);

        // A later post lands on top of the accumulated base space.
        driver.post(move |s| s.post(Propagator::Lt(y, x)));
        assert!(driver.solve().is_none());
    }

    #[test]
    fn test_each_solution_visits_every_solution_and_resets() {
        let mut driver = two_free_vars();
        let mut seen = Vec::new();
        let count = driver.each_solution(|space| {
            seen.push((space.value(0.into()).unwrap(), space.value(1.into()).unwrap()));
        });

        assert_eq!(count, 4);
        assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(driver.state(), DriverState::Unsolved);
        assert_eq!(driver.current().bounds(0.into()), Some((0, 1)));
    }

    #[test]
    fn test_each_solution_on_infeasible_model_counts_zero() {
        let mut space = IntSpace::new();
        let x = space.new_var(1..=1);
        let y = space.new_var(1..=1);
        space.post(Propagator::Ne(x, y));
        let mut driver = SearchDriver::new(space);

        let count = driver.each_solution(|_| panic!("no solution should be visited"));
        assert_eq!(count, 0);
        assert_eq!(driver.state(), DriverState::Unsolved);
    }

    #[test]
    fn test_optimize_binds_the_optimum() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=9);
        let y = space.new_var(0..=9);
        space.post(Propagator::SumEq(vec![x, y], 10));
        let mut driver = SearchDriver::new(space);

        let best = driver
            .optimize(objective::maximize(x))
            .expect("expected an optimum");
        assert_eq!(best.value(x), Some(9));
        assert_eq!(best.value(y), Some(1));
        assert_eq!(driver.state(), DriverState::Solved);
    }

    #[test]
    fn test_optimize_native_minimizes_the_objective_variable() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=9);
        let y = space.new_var(0..=9);
        space.post(Propagator::SumEq(vec![x, y], 10));
        space.set_objective(x);
        let mut driver = SearchDriver::new(space);

        let best = driver.optimize_native().expect("expected an optimum");
        assert_eq!(best.value(x), Some(1));
        assert_eq!(driver.state(), DriverState::Solved);
    }

    #[test]
    fn test_optimize_on_infeasible_model_exhausts_the_driver() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=4);
        let y = space.new_var(0..=4);
        space.post(Propagator::Lt(x, y));
        space.post(Propagator::Lt(y, x));
        space.set_objective(x);
        let mut driver = SearchDriver::new(space);

        assert!(driver.optimize_native().is_none());
        assert_eq!(driver.state(), DriverState::Exhausted);
    }

    #[test]
    fn test_with_solution_maps_and_resets() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=2);
        let y = space.new_var(0..=2);
        space.post(Propagator::Lt(x, y));
        let mut driver = SearchDriver::new(space);

        let pair = driver.with_solution(|s| (s.value(x).unwrap(), s.value(y).unwrap()));
        assert_eq!(pair, Some((0, 1)));
        assert_eq!(driver.state(), DriverState::Unsolved);
        assert_eq!(driver.current().bounds(y), Some((0, 2)));
    }

    #[test]
    fn test_with_solution_resets_even_when_infeasible() {
        let mut space = IntSpace::new();
        let x = space.new_var(0..=1);
        let mut driver = SearchDriver::new(space);
        driver.solve().expect("expected a solution");
        assert_eq!(driver.state(), DriverState::Solved);

        driver.post(move |s| s.post(Propagator::Ne(x, x)));
        let result: Option<i32> = driver.with_solution(|s| s.value(x).unwrap());

        // The earlier solution must not stay bound.
        assert!(result.is_none());
        assert_eq!(driver.state(), DriverState::Unsolved);
        assert!(!driver.current().is_assigned(x));
    }

    #[test]
    fn test_with_solution_on_infeasible_model_returns_none() {
        let mut space = IntSpace::new();
        let x = space.new_var(1..=1);
        space.post(Propagator::Ne(x, x));
        let mut driver = SearchDriver::new(space);

        let result: Option<i32> = driver.with_solution(|s| s.value(x).unwrap());
        assert!(result.is_none());
    }

    #[test]
    fn test_reset_restores_the_base_space() {
        let mut driver = two_free_vars();
        driver.solve().expect("expected a solution");
        assert_eq!(driver.state(), DriverState::Solved);
        assert!(driver.current().is_assigned(0.into()));

        driver.reset();
        assert_eq!(driver.state(), DriverState::Unsolved);
        assert_eq!(driver.current().bounds(0.into()), Some((0, 1)));
    }

    #[test]
    fn test_last_statistics_reflect_the_most_recent_search() {
        let mut driver = two_free_vars();
        assert!(driver.last_statistics().is_none());

        driver.each_solution(|_| {});
        let stats = driver.last_statistics().expect("expected statistics");
        assert_eq!(stats.solutions_found, 4);
        assert!(stats.nodes_explored >= 4);
    }
}
