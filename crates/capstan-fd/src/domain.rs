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

//! # Integer Domains
//!
//! A finite integer domain stored as a bitset over a contiguous value range.
//! Bit `i` represents the value `offset + i`; pruning operations clear bits
//! and never re-add them, so a domain only ever shrinks. An emptied domain
//! marks a failed space; the domain itself stays usable (all queries return
//! empty/`None`).

use crate::num::FdValue;
use fixedbitset::FixedBitSet;
use num_traits::NumCast;
use std::ops::RangeInclusive;

/// A finite integer domain over the initial range `offset..=offset + len - 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct IntDomain<T> {
    /// The value represented by bit 0.
    offset: T,
    /// One bit per still-possible value.
    bits: FixedBitSet,
}

impl<T> IntDomain<T>
where
    T: FdValue,
{
    /// Creates a new domain holding every value in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or its width does not fit in `usize`.
    pub fn new(range: RangeInclusive<T>) -> Self {
        let (low, high) = (*range.start(), *range.end());
        assert!(
            low <= high,
            "called `IntDomain::new` with an empty range: {}..={}",
            low,
            high
        );

        let width = (high - low)
            .to_usize()
            .and_then(|w| w.checked_add(1))
            .expect("called `IntDomain::new` with a range too wide to represent");

        let mut bits = FixedBitSet::with_capacity(width);
        bits.set_range(.., true);

        Self { offset: low, bits }
    }

    /// Returns the bit position of `value`, if it falls inside the
    /// representable range.
    #[inline]
    fn position(&self, value: T) -> Option<usize> {
        if value < self.offset {
            return None;
        }
        let index = (value - self.offset).to_usize()?;
        (index < self.bits.len()).then_some(index)
    }

    /// Returns the value represented by bit `position`.
    #[inline]
    fn value_at(&self, position: usize) -> T {
        let delta: T = NumCast::from(position)
            .expect("expected every bit position of an `IntDomain` to be representable");
        self.offset + delta
    }

    /// Returns the number of values left in the domain.
    #[inline]
    pub fn size(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Returns `true` if no values are left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if exactly one value is left.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.size() == 1
    }

    /// Returns `true` if `value` is still in the domain.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        match self.position(value) {
            Some(index) => self.bits.contains(index),
            None => false,
        }
    }

    /// Returns the smallest value left, or `None` for an empty domain.
    #[inline]
    pub fn min(&self) -> Option<T> {
        self.bits.ones().next().map(|index| self.value_at(index))
    }

    /// Returns the largest value left, or `None` for an empty domain.
    #[inline]
    pub fn max(&self) -> Option<T> {
        self.bits.ones().last().map(|index| self.value_at(index))
    }

    /// Returns the assigned value if the domain is fixed, `None` otherwise.
    #[inline]
    pub fn value(&self) -> Option<T> {
        if self.is_fixed() { self.min() } else { None }
    }

    /// Removes `value` from the domain. Returns `true` if the domain changed.
    #[inline]
    pub fn remove(&mut self, value: T) -> bool {
        match self.position(value) {
            Some(index) if self.bits.contains(index) => {
                self.bits.set(index, false);
                true
            }
            _ => false,
        }
    }

    /// Removes every value smaller than `bound`. Returns `true` if the
    /// domain changed.
    pub fn remove_below(&mut self, bound: T) -> bool {
        if bound <= self.offset {
            return false;
        }
        let cut = match (bound - self.offset).to_usize() {
            Some(index) => index.min(self.bits.len()),
            // The bound is above everything representable.
            None => self.bits.len(),
        };
        if self.bits.count_ones(..cut) == 0 {
            return false;
        }
        self.bits.set_range(..cut, false);
        true
    }

    /// Removes every value greater than `bound`. Returns `true` if the
    /// domain changed.
    pub fn remove_above(&mut self, bound: T) -> bool {
        let keep = if bound < self.offset {
            0
        } else {
            match (bound - self.offset).to_usize() {
                Some(index) => match index.checked_add(1) {
                    Some(keep) if keep < self.bits.len() => keep,
                    _ => return false,
                },
                None => return false,
            }
        };
        if self.bits.count_ones(keep..) == 0 {
            return false;
        }
        self.bits.set_range(keep.., false);
        true
    }

    /// Reduces the domain to exactly `value`. If `value` is not in the
    /// domain, the domain becomes empty. Returns `true` if the domain
    /// changed.
    pub fn assign(&mut self, value: T) -> bool {
        match self.position(value).filter(|&i| self.bits.contains(i)) {
            Some(index) => {
                if self.size() == 1 {
                    return false;
                }
                self.bits.clear();
                self.bits.insert(index);
                true
            }
            None => {
                let changed = !self.is_empty();
                self.bits.clear();
                changed
            }
        }
    }

    /// Returns an iterator over the values left in the domain, in ascending
    /// order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.bits.ones().map(move |index| self.value_at(index))
    }
}

impl<T> std::fmt::Debug for IntDomain<T>
where
    T: FdValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> std::fmt::Display for IntDomain<T>
where
    T: FdValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min(), self.max()) {
            (Some(low), Some(high)) => {
                write!(f, "IntDomain({}..={}, size: {})", low, high, self.size())
            }
            _ => write!(f, "IntDomain(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_domain_holds_full_range() {
        let domain = IntDomain::new(-2i32..=3);
        assert_eq!(domain.size(), 6);
        assert_eq!(domain.min(), Some(-2));
        assert_eq!(domain.max(), Some(3));
        assert!(domain.contains(0));
        assert!(!domain.contains(4));
        assert!(!domain.contains(-3));
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_new_with_reversed_range_panics() {
        let _ = IntDomain::new(5i32..=1);
    }

    #[test]
    fn test_remove_single_value() {
        let mut domain = IntDomain::new(0i32..=3);
        assert!(domain.remove(2));
        assert!(!domain.remove(2));
        assert!(!domain.contains(2));
        assert_eq!(domain.size(), 3);
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_remove_below_and_above() {
        let mut domain = IntDomain::new(0i32..=9);
        assert!(domain.remove_below(3));
        assert!(!domain.remove_below(3));
        assert!(domain.remove_above(7));
        assert!(!domain.remove_above(9));
        assert_eq!(domain.min(), Some(3));
        assert_eq!(domain.max(), Some(7));
    }

    #[test]
    fn test_remove_above_below_offset_empties_domain() {
        let mut domain = IntDomain::new(5i32..=9);
        assert!(domain.remove_above(4));
        assert!(domain.is_empty());
        assert_eq!(domain.min(), None);
    }

    #[test]
    fn test_assign_keeps_only_one_value() {
        let mut domain = IntDomain::new(0i32..=9);
        assert!(domain.assign(4));
        assert!(domain.is_fixed());
        assert_eq!(domain.value(), Some(4));
        assert!(!domain.assign(4));
    }

    #[test]
    fn test_assign_missing_value_empties_domain() {
        let mut domain = IntDomain::new(0i32..=9);
        domain.remove(4);
        assert!(domain.assign(4));
        assert!(domain.is_empty());
        assert_eq!(domain.value(), None);
    }

    #[test]
    fn test_value_only_reported_when_fixed() {
        let mut domain = IntDomain::new(0i32..=1);
        assert_eq!(domain.value(), None);
        domain.remove(0);
        assert_eq!(domain.value(), Some(1));
    }

    #[test]
    fn test_display_formats_bounds_and_size() {
        let mut domain = IntDomain::new(0i32..=4);
        domain.remove(2);
        assert_eq!(format!("{}", domain), "IntDomain(0..=4, size: 4)");
        let mut empty = IntDomain::new(0i32..=0);
        empty.remove(0);
        assert_eq!(format!("{}", empty), "IntDomain(empty)");
    }
}
