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

use std::time::Duration;

/// Statistics collected while a search engine explores the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Total nodes whose propagation failed.
    pub failures: u64,
    /// Total solutions yielded so far.
    pub solutions_found: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Total time spent inside the engine.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_failure(&mut self) {
        self.failures = self.failures.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:    {}", self.nodes_explored)?;
        writeln!(f, "  Failures:          {}", self.failures)?;
        writeln!(f, "  Solutions found:   {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached: {}", self.max_depth)?;
        writeln!(f, "  Total time:        {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.failures, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_mutators_update_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_failure();
        stats.on_solution_found();
        stats.on_depth_update(4);
        stats.on_depth_update(2);

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_node_counter_saturates() {
        let mut stats = SearchStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }
}
