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

use crate::stats::SearchStatistics;

/// Why a search engine stopped producing spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every node of the tree was explored.
    Exhausted,
    /// A monitor stopped the search before the tree was exhausted.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a search engine after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    #[inline]
    pub fn exhausted(statistics: SearchStatistics) -> Self {
        Self {
            termination_reason: TerminationReason::Exhausted,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics collected during the search.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `true` if the whole tree was explored.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Exhausted)
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Outcome: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}
