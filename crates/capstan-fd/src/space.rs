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

//! # Finite-Domain Spaces
//!
//! `IntSpace` ties domains, propagators, and a brancher into an
//! implementation of the `capstan_core` space contract. Propagation runs all
//! posted propagators round-robin until a full pass changes nothing; a
//! pruned-empty domain fails the space permanently. Branching is binary:
//! alternative 0 assigns the brancher's chosen value, alternative 1 removes
//! it.
//!
//! The optional objective variable powers the `Constrain` implementation:
//! `constrain(best)` bounds the objective strictly below its value in the
//! best space, i.e. the native hook minimizes. Use the hooks in
//! [`crate::objective`] to minimize or maximize arbitrary variables without
//! touching the space.

use crate::{
    branch::{Brancher, Choice},
    domain::IntDomain,
    num::FdValue,
    propagator::Propagator,
};
use capstan_core::{
    index::VarIndex,
    space::{Constrain, Space, SpaceStatus},
};
use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// A finite-domain integer space.
#[derive(Clone, Debug)]
pub struct IntSpace<T>
where
    T: FdValue,
{
    domains: Vec<IntDomain<T>>,
    propagators: Vec<Propagator<T>>,
    brancher: Brancher,
    /// The pending branching choice recorded by the last `status` call.
    choice: Option<Choice<T>>,
    objective: Option<VarIndex>,
    failed: bool,
}

impl<T> Default for IntSpace<T>
where
    T: FdValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntSpace<T>
where
    T: FdValue,
{
    /// Creates an empty space with the default brancher
    /// (first unassigned variable, smallest value first).
    #[inline]
    pub fn new() -> Self {
        Self::with_brancher(Brancher::default())
    }

    /// Creates an empty space branching with the given heuristics.
    #[inline]
    pub fn with_brancher(brancher: Brancher) -> Self {
        Self {
            domains: Vec::new(),
            propagators: Vec::new(),
            brancher,
            choice: None,
            objective: None,
            failed: false,
        }
    }

    /// Creates a new variable with the given initial domain.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn new_var(&mut self, range: RangeInclusive<T>) -> VarIndex {
        let index = VarIndex::new(self.domains.len());
        self.domains.push(IntDomain::new(range));
        self.choice = None;
        index
    }

    /// Creates `count` variables sharing the same initial domain.
    pub fn new_vars(&mut self, count: usize, range: RangeInclusive<T>) -> Vec<VarIndex> {
        (0..count).map(|_| self.new_var(range.clone())).collect()
    }

    /// Returns the number of variables in the space.
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.domains.len()
    }

    /// Returns `true` if propagation has failed this space.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Posts a propagator. Its effects are visible after the next call to
    /// [`Space::status`].
    ///
    /// # Panics
    ///
    /// Panics if the propagator mentions a variable this space does not have.
    pub fn post(&mut self, propagator: Propagator<T>) {
        for var in propagator.vars() {
            self.check_var(var, "post");
        }
        self.propagators.push(propagator);
        self.choice = None;
    }

    /// Selects the variable minimized by [`Constrain::constrain`].
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    pub fn set_objective(&mut self, var: VarIndex) {
        self.check_var(var, "set_objective");
        self.objective = Some(var);
    }

    /// Returns the objective variable, if one was selected.
    #[inline]
    pub fn objective(&self) -> Option<VarIndex> {
        self.objective
    }

    /// Returns the value of `var` if it is fixed, `None` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    #[inline]
    pub fn value(&self, var: VarIndex) -> Option<T> {
        self.check_var(var, "value");
        self.domains[var.get()].value()
    }

    /// Returns the current bounds of `var`, or `None` when its domain is
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    #[inline]
    pub fn bounds(&self, var: VarIndex) -> Option<(T, T)> {
        self.check_var(var, "bounds");
        let domain = &self.domains[var.get()];
        Some((domain.min()?, domain.max()?))
    }

    /// Returns `true` if `var` is fixed to a single value.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    #[inline]
    pub fn is_assigned(&self, var: VarIndex) -> bool {
        self.check_var(var, "is_assigned");
        self.domains[var.get()].is_fixed()
    }

    /// Prunes every value of `var` above `bound`. May fail the space.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    pub fn narrow_above(&mut self, var: VarIndex, bound: T) {
        self.check_var(var, "narrow_above");
        let domain = &mut self.domains[var.get()];
        domain.remove_above(bound);
        if domain.is_empty() {
            self.failed = true;
        }
        self.choice = None;
    }

    /// Prunes every value of `var` below `bound`. May fail the space.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    pub fn narrow_below(&mut self, var: VarIndex, bound: T) {
        self.check_var(var, "narrow_below");
        let domain = &mut self.domains[var.get()];
        domain.remove_below(bound);
        if domain.is_empty() {
            self.failed = true;
        }
        self.choice = None;
    }

    #[inline]
    #[track_caller]
    fn check_var(&self, var: VarIndex, operation: &str) {
        assert!(
            var.get() < self.domains.len(),
            "called `IntSpace::{}` with variable index out of bounds: the len is {} but the index is {}",
            operation,
            self.domains.len(),
            var.get()
        );
    }

    /// Returns `Some(())` while the domain of `var` is non-empty.
    #[inline]
    fn alive(&self, var: VarIndex) -> Option<()> {
        (!self.domains[var.get()].is_empty()).then_some(())
    }

    #[inline]
    fn bounds_of(&self, var: VarIndex) -> Option<(T, T)> {
        let domain = &self.domains[var.get()];
        Some((domain.min()?, domain.max()?))
    }

    /// Runs all propagators to a fixpoint. Returns `false` on failure.
    fn propagate(&mut self) -> bool {
        if self.failed {
            return false;
        }

        // The propagator list is immutable during a fixpoint run; take it
        // out so `run_one` can mutate the domains freely.
        let propagators = std::mem::take(&mut self.propagators);
        let ok = 'fixpoint: loop {
            let mut changed = false;
            for propagator in &propagators {
                match self.run_one(propagator) {
                    Some(pruned) => changed |= pruned,
                    None => break 'fixpoint false,
                }
            }
            if !changed {
                break true;
            }
        };
        self.propagators = propagators;

        if !ok {
            self.failed = true;
        }
        ok
    }

    /// Runs a single propagator once. Returns `Some(changed)` or `None` when
    /// a domain was emptied.
    fn run_one(&mut self, propagator: &Propagator<T>) -> Option<bool> {
        let mut changed = false;
        match propagator {
            Propagator::Le(x, y) => {
                let (x_min, _) = self.bounds_of(*x)?;
                let (_, y_max) = self.bounds_of(*y)?;
                changed |= self.domains[x.get()].remove_above(y_max);
                changed |= self.domains[y.get()].remove_below(x_min);
                self.alive(*x)?;
                self.alive(*y)?;
            }
            Propagator::Lt(x, y) => {
                let (x_min, _) = self.bounds_of(*x)?;
                let (_, y_max) = self.bounds_of(*y)?;
                // A bound at the type boundary has no strict neighbor, so
                // the relation is unsatisfiable on that side.
                let upper = y_max.checked_sub(&T::one())?;
                let lower = x_min.checked_add(&T::one())?;
                changed |= self.domains[x.get()].remove_above(upper);
                changed |= self.domains[y.get()].remove_below(lower);
                self.alive(*x)?;
                self.alive(*y)?;
            }
            Propagator::Ne(x, y) => {
                if let Some(value) = self.domains[x.get()].value() {
                    changed |= self.domains[y.get()].remove(value);
                }
                if let Some(value) = self.domains[y.get()].value() {
                    changed |= self.domains[x.get()].remove(value);
                }
                self.alive(*x)?;
                self.alive(*y)?;
            }
            Propagator::Eq(x, y) => {
                let stale_x: SmallVec<[T; 8]> = self.domains[x.get()]
                    .iter()
                    .filter(|value| !self.domains[y.get()].contains(*value))
                    .collect();
                let stale_y: SmallVec<[T; 8]> = self.domains[y.get()]
                    .iter()
                    .filter(|value| !self.domains[x.get()].contains(*value))
                    .collect();
                for value in stale_x {
                    changed |= self.domains[x.get()].remove(value);
                }
                for value in stale_y {
                    changed |= self.domains[y.get()].remove(value);
                }
                self.alive(*x)?;
                self.alive(*y)?;
            }
            Propagator::Distinct(vars) => {
                for (i, var) in vars.iter().enumerate() {
                    let Some(value) = self.domains[var.get()].value() else {
                        continue;
                    };
                    for (j, other) in vars.iter().enumerate() {
                        if i == j {
                            continue;
                        }
                        changed |= self.domains[other.get()].remove(value);
                        self.alive(*other)?;
                    }
                }
            }
            Propagator::SumLe(vars, bound) => {
                let bounds: SmallVec<[(T, T); 8]> = vars
                    .iter()
                    .map(|var| self.bounds_of(*var))
                    .collect::<Option<_>>()?;
                let min_sum = bounds.iter().fold(T::zero(), |acc, (low, _)| acc + *low);
                for (var, (low, _)) in vars.iter().zip(bounds.iter()) {
                    let slack = *bound - (min_sum - *low);
                    changed |= self.domains[var.get()].remove_above(slack);
                    self.alive(*var)?;
                }
            }
            Propagator::SumEq(vars, total) => {
                let bounds: SmallVec<[(T, T); 8]> = vars
                    .iter()
                    .map(|var| self.bounds_of(*var))
                    .collect::<Option<_>>()?;
                let min_sum = bounds.iter().fold(T::zero(), |acc, (low, _)| acc + *low);
                let max_sum = bounds.iter().fold(T::zero(), |acc, (_, high)| acc + *high);
                for (var, (low, high)) in vars.iter().zip(bounds.iter()) {
                    changed |= self.domains[var.get()].remove_above(*total - (min_sum - *low));
                    changed |= self.domains[var.get()].remove_below(*total - (max_sum - *high));
                    self.alive(*var)?;
                }
            }
        }
        Some(changed)
    }
}

impl<T> Space for IntSpace<T>
where
    T: FdValue,
{
    fn status(&mut self) -> SpaceStatus {
        if self.failed {
            return SpaceStatus::Failed;
        }
        if !self.propagate() {
            self.choice = None;
            return SpaceStatus::Failed;
        }
        if self.domains.iter().all(|domain| domain.is_fixed()) {
            self.choice = None;
            return SpaceStatus::Solved;
        }

        let choice = self
            .brancher
            .choose(&self.domains)
            .expect("expected an unfixed variable after propagation reported a fixpoint");
        self.choice = Some(choice);
        SpaceStatus::Branches(2)
    }

    fn commit(&mut self, alternative: usize) {
        let choice = self
            .choice
            .take()
            .expect("called `IntSpace::commit` without a pending branching choice");
        assert!(
            alternative < 2,
            "called `IntSpace::commit` with alternative out of range: the number of alternatives is 2 but the alternative is {}",
            alternative
        );

        let domain = &mut self.domains[choice.var.get()];
        if alternative == 0 {
            domain.assign(choice.value);
        } else {
            domain.remove(choice.value);
        }
        if domain.is_empty() {
            self.failed = true;
        }
    }
}

impl<T> Constrain for IntSpace<T>
where
    T: FdValue,
{
    /// Minimizes the objective variable: only solutions with a strictly
    /// smaller objective value than `best` remain admissible.
    ///
    /// # Panics
    ///
    /// Panics if no objective variable was selected, or if the objective is
    /// not fixed in `best`.
    fn constrain(&mut self, best: &Self) {
        let objective = self
            .objective
            .expect("called `IntSpace::constrain` without an objective variable");
        let bound = best
            .value(objective)
            .expect("called `IntSpace::constrain` with a best space whose objective is unfixed");
        self.narrow_above(objective, bound - T::one());
    }
}

impl<T> std::fmt::Display for IntSpace<T>
where
    T: FdValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IntSpace(vars: {}, propagators: {}, failed: {})",
            self.domains.len(),
            self.propagators.len(),
            self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lt_chain_fixes_all_variables() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=2);
        let y = space.new_var(0..=2);
        let z = space.new_var(0..=2);
        space.post(Propagator::Lt(x, y));
        space.post(Propagator::Lt(y, z));

        assert_eq!(space.status(), SpaceStatus::Solved);
        assert_eq!(space.value(x), Some(0));
        assert_eq!(space.value(y), Some(1));
        assert_eq!(space.value(z), Some(2));
    }

    #[test]
    fn test_contradictory_relations_fail() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=5);
        let y = space.new_var(0..=5);
        space.post(Propagator::Lt(x, y));
        space.post(Propagator::Lt(y, x));

        assert_eq!(space.status(), SpaceStatus::Failed);
        assert!(space.is_failed());
        // A failed space stays failed.
        assert_eq!(space.status(), SpaceStatus::Failed);
    }

    #[test]
    fn test_lt_with_bound_at_type_minimum_fails() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(i32::MIN..=i32::MIN);
        let y = space.new_var(i32::MIN..=i32::MIN);
        space.post(Propagator::Lt(x, y));

        // Nothing is strictly below i32::MIN.
        assert_eq!(space.status(), SpaceStatus::Failed);
    }

    #[test]
    fn test_lt_with_bound_at_type_maximum_fails() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(i32::MAX..=i32::MAX);
        let y = space.new_var(i32::MAX..=i32::MAX);
        space.post(Propagator::Lt(x, y));

        assert_eq!(space.status(), SpaceStatus::Failed);
    }

    #[test]
    fn test_ne_prunes_on_fixed_variable() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(3..=3);
        let y = space.new_var(2..=4);
        space.post(Propagator::Ne(x, y));

        assert_eq!(space.status(), SpaceStatus::Branches(2));
        let (low, high) = space.bounds(y).unwrap();
        assert_eq!((low, high), (2, 4));
        assert!(!space.is_assigned(y));
        // 3 was pruned, so fixing either neighbor keeps the space alive.
        space.commit(0);
        assert_eq!(space.status(), SpaceStatus::Solved);
        assert_eq!(space.value(y), Some(2));
    }

    #[test]
    fn test_eq_intersects_domains() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=4);
        let y = space.new_var(3..=8);
        space.post(Propagator::Eq(x, y));

        assert_eq!(space.status(), SpaceStatus::Branches(2));
        assert_eq!(space.bounds(x), Some((3, 4)));
        assert_eq!(space.bounds(y), Some((3, 4)));
    }

    #[test]
    fn test_distinct_on_fixed_values_fails() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(1..=1);
        let y = space.new_var(1..=1);
        space.post(Propagator::Distinct(vec![x, y]));

        assert_eq!(space.status(), SpaceStatus::Failed);
    }

    #[test]
    fn test_sum_eq_tightens_bounds() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=9);
        let y = space.new_var(0..=2);
        space.post(Propagator::SumEq(vec![x, y], 10));

        assert_eq!(space.status(), SpaceStatus::Branches(2));
        // x >= 10 - max(y) = 8.
        assert_eq!(space.bounds(x), Some((8, 9)));
    }

    #[test]
    fn test_sum_le_prunes_upper_bounds() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(2..=9);
        let y = space.new_var(3..=9);
        space.post(Propagator::SumLe(vec![x, y], 7));

        assert_eq!(space.status(), SpaceStatus::Branches(2));
        assert_eq!(space.bounds(x), Some((2, 4)));
        assert_eq!(space.bounds(y), Some((3, 5)));
    }

    #[test]
    fn test_commit_explores_both_alternatives() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=1);
        assert_eq!(space.status(), SpaceStatus::Branches(2));

        let mut left = space.clone();
        left.commit(0);
        assert_eq!(left.status(), SpaceStatus::Solved);
        assert_eq!(left.value(x), Some(0));

        space.commit(1);
        assert_eq!(space.status(), SpaceStatus::Solved);
        assert_eq!(space.value(x), Some(1));
    }

    #[test]
    #[should_panic(expected = "without a pending branching choice")]
    fn test_commit_without_choice_panics() {
        let mut space = IntSpace::<i32>::new();
        space.new_var(0..=1);
        space.commit(0);
    }

    #[test]
    #[should_panic(expected = "variable index out of bounds")]
    fn test_value_with_foreign_index_panics() {
        let space = IntSpace::<i32>::new();
        space.value(VarIndex::new(0));
    }

    #[test]
    fn test_constrain_bounds_the_objective() {
        let mut best = IntSpace::<i32>::new();
        let objective = best.new_var(4..=4);
        best.set_objective(objective);
        assert_eq!(best.status(), SpaceStatus::Solved);

        let mut home = IntSpace::<i32>::new();
        let var = home.new_var(0..=9);
        home.set_objective(var);
        home.constrain(&best);

        assert_eq!(home.bounds(var), Some((0, 3)));
    }

    #[test]
    fn test_posting_after_status_invalidates_choice() {
        let mut space = IntSpace::<i32>::new();
        let x = space.new_var(0..=9);
        let y = space.new_var(0..=9);
        assert_eq!(space.status(), SpaceStatus::Branches(2));

        space.post(Propagator::Lt(x, y));
        // The old choice is gone; a fresh status must be requested.
        assert_eq!(space.status(), SpaceStatus::Branches(2));
        space.commit(0);
        assert_eq!(space.status(), SpaceStatus::Branches(2));
    }
}
