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

//! # Branching Heuristics
//!
//! Variable and value selection for `IntSpace`. A brancher turns a
//! propagation fixpoint with unfixed variables into a binary [`Choice`]:
//! alternative 0 assigns the chosen value, alternative 1 removes it. The
//! random value heuristic keeps its generator state on the brancher, so
//! cloned spaces reproduce the same value sequence deterministically for a
//! given seed.

use crate::{domain::IntDomain, num::FdValue};
use capstan_core::index::VarIndex;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// How the brancher picks the variable to branch on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VarChoice {
    /// The unfixed variable with the lowest index.
    #[default]
    FirstUnassigned,
    /// The unfixed variable with the fewest values left; ties break towards
    /// the lower index.
    SmallestDomain,
}

/// How the brancher picks the value to try first.
#[derive(Clone, Debug)]
pub enum ValueChoice {
    /// The smallest value in the domain.
    Min,
    /// The largest value in the domain.
    Max,
    /// A uniformly random value from the domain.
    Random(StdRng),
}

impl ValueChoice {
    /// Creates a random value heuristic seeded deterministically.
    #[inline]
    pub fn random(seed: u64) -> Self {
        ValueChoice::Random(StdRng::seed_from_u64(seed))
    }
}

impl Default for ValueChoice {
    #[inline]
    fn default() -> Self {
        ValueChoice::Min
    }
}

/// A pending binary branching choice: alternative 0 is `var = value`,
/// alternative 1 is `var != value`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Choice<T> {
    pub var: VarIndex,
    pub value: T,
}

impl<T> std::fmt::Display for Choice<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Choice({} = {})", self.var, self.value)
    }
}

/// Combined variable and value selection.
#[derive(Clone, Debug, Default)]
pub struct Brancher {
    pub var_choice: VarChoice,
    pub value_choice: ValueChoice,
}

impl Brancher {
    /// Creates a brancher from the given heuristics.
    #[inline]
    pub fn new(var_choice: VarChoice, value_choice: ValueChoice) -> Self {
        Self {
            var_choice,
            value_choice,
        }
    }

    /// Picks a branching choice over the given domains, or `None` when all
    /// domains are fixed.
    ///
    /// # Panics
    ///
    /// Panics if any domain is empty; branching is only defined on spaces
    /// that propagated successfully.
    pub fn choose<T>(&mut self, domains: &[IntDomain<T>]) -> Option<Choice<T>>
    where
        T: FdValue,
    {
        let var = match self.var_choice {
            VarChoice::FirstUnassigned => domains.iter().position(|d| !d.is_fixed()),
            VarChoice::SmallestDomain => domains
                .iter()
                .enumerate()
                .filter(|(_, d)| !d.is_fixed())
                .min_by_key(|(_, d)| d.size())
                .map(|(i, _)| i),
        }?;

        let domain = &domains[var];
        assert!(
            !domain.is_empty(),
            "called `Brancher::choose` on an empty domain: variable {}",
            var
        );

        let value = match &mut self.value_choice {
            ValueChoice::Min => domain.min()?,
            ValueChoice::Max => domain.max()?,
            ValueChoice::Random(rng) => {
                let nth = rng.random_range(0..domain.size());
                domain.iter().nth(nth)?
            }
        };

        Some(Choice {
            var: VarIndex::new(var),
            value,
        })
    }
}

impl std::fmt::Display for Brancher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.value_choice {
            ValueChoice::Min => "Min",
            ValueChoice::Max => "Max",
            ValueChoice::Random(_) => "Random",
        };
        write!(f, "Brancher({:?}, {})", self.var_choice, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(ranges: &[(i32, i32)]) -> Vec<IntDomain<i32>> {
        ranges
            .iter()
            .map(|&(low, high)| IntDomain::new(low..=high))
            .collect()
    }

    #[test]
    fn test_first_unassigned_skips_fixed_variables() {
        let mut brancher = Brancher::default();
        let domains = domains(&[(3, 3), (0, 5), (0, 9)]);
        let choice = brancher.choose(&domains).unwrap();
        assert_eq!(choice.var, VarIndex::new(1));
        assert_eq!(choice.value, 0);
    }

    #[test]
    fn test_smallest_domain_prefers_fewest_values() {
        let mut brancher = Brancher::new(VarChoice::SmallestDomain, ValueChoice::Max);
        let domains = domains(&[(0, 9), (4, 5), (0, 2)]);
        let choice = brancher.choose(&domains).unwrap();
        assert_eq!(choice.var, VarIndex::new(1));
        assert_eq!(choice.value, 5);
    }

    #[test]
    fn test_all_fixed_yields_no_choice() {
        let mut brancher = Brancher::default();
        let domains = domains(&[(1, 1), (7, 7)]);
        assert!(brancher.choose(&domains).is_none());
    }

    #[test]
    fn test_random_choice_is_deterministic_per_seed() {
        let domains = domains(&[(0, 99)]);

        let mut first = Brancher::new(VarChoice::FirstUnassigned, ValueChoice::random(7));
        let mut second = Brancher::new(VarChoice::FirstUnassigned, ValueChoice::random(7));
        let a = first.choose(&domains).unwrap();
        let b = second.choose(&domains).unwrap();

        assert_eq!(a, b);
        assert!(domains[0].contains(a.value));
    }
}
