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

//! # Propagators
//!
//! The constraint forms `IntSpace` knows how to propagate. Relations are
//! bounds-consistent except `Eq`, which is value-consistent; `Distinct`
//! prunes pairwise on fixed variables; the sum forms are bounds-consistent.
//! The pruning itself lives in `space.rs`, next to the domains it mutates.

use capstan_core::index::VarIndex;
use smallvec::SmallVec;

/// A constraint posted on an `IntSpace`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Propagator<T> {
    /// `x <= y`
    Le(VarIndex, VarIndex),
    /// `x < y`
    Lt(VarIndex, VarIndex),
    /// `x != y`
    Ne(VarIndex, VarIndex),
    /// `x == y`
    Eq(VarIndex, VarIndex),
    /// All variables take pairwise distinct values.
    Distinct(Vec<VarIndex>),
    /// The sum of the variables is at most the bound.
    SumLe(Vec<VarIndex>, T),
    /// The sum of the variables equals the total.
    SumEq(Vec<VarIndex>, T),
}

impl<T> Propagator<T> {
    /// Returns the variables this propagator mentions.
    pub fn vars(&self) -> SmallVec<[VarIndex; 4]> {
        match self {
            Propagator::Le(x, y)
            | Propagator::Lt(x, y)
            | Propagator::Ne(x, y)
            | Propagator::Eq(x, y) => SmallVec::from_slice(&[*x, *y]),
            Propagator::Distinct(vars)
            | Propagator::SumLe(vars, _)
            | Propagator::SumEq(vars, _) => SmallVec::from_slice(vars),
        }
    }
}

impl<T> std::fmt::Display for Propagator<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Propagator::Le(x, y) => write!(f, "{} <= {}", x, y),
            Propagator::Lt(x, y) => write!(f, "{} < {}", x, y),
            Propagator::Ne(x, y) => write!(f, "{} != {}", x, y),
            Propagator::Eq(x, y) => write!(f, "{} == {}", x, y),
            Propagator::Distinct(vars) => write!(f, "distinct({} vars)", vars.len()),
            Propagator::SumLe(vars, bound) => write!(f, "sum({} vars) <= {}", vars.len(), bound),
            Propagator::SumEq(vars, total) => write!(f, "sum({} vars) == {}", vars.len(), total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars_of_binary_relation() {
        let propagator: Propagator<i32> = Propagator::Lt(VarIndex::new(0), VarIndex::new(2));
        assert_eq!(
            propagator.vars().as_slice(),
            &[VarIndex::new(0), VarIndex::new(2)]
        );
    }

    #[test]
    fn test_vars_of_sum() {
        let vars = vec![VarIndex::new(1), VarIndex::new(3), VarIndex::new(5)];
        let propagator = Propagator::SumEq(vars.clone(), 10i32);
        assert_eq!(propagator.vars().as_slice(), vars.as_slice());
    }

    #[test]
    fn test_display() {
        let propagator: Propagator<i32> = Propagator::Ne(VarIndex::new(0), VarIndex::new(1));
        assert_eq!(format!("{}", propagator), "VarIndex(0) != VarIndex(1)");
    }
}
