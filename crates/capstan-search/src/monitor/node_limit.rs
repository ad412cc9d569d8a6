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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};

/// A monitor that terminates the search once a number of nodes has been
/// explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLimitMonitor {
    max_nodes: u64,
}

impl NodeLimitMonitor {
    /// Creates a new `NodeLimitMonitor` with the specified node budget.
    pub fn new(max_nodes: u64) -> Self {
        Self { max_nodes }
    }
}

impl<S> SearchMonitor<S> for NodeLimitMonitor {
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self) {}
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}
    fn on_node(&mut self, _statistics: &SearchStatistics) {}
    fn on_solution_found(&mut self, _solution: &S, _statistics: &SearchStatistics) {}

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        if statistics.nodes_explored >= self.max_nodes {
            return SearchCommand::Terminate(format!(
                "Node limit of {} nodes exceeded",
                self.max_nodes
            ));
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_limit() {
        let mut monitor = NodeLimitMonitor::new(10);
        let stats = SearchStatistics {
            nodes_explored: 9,
            ..Default::default()
        };
        assert_eq!(
            SearchMonitor::<()>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = NodeLimitMonitor::new(10);
        let stats = SearchStatistics {
            nodes_explored: 10,
            ..Default::default()
        };
        let command = SearchMonitor::<()>::search_command(&mut monitor, &stats);
        assert!(matches!(command, SearchCommand::Terminate(_)));
    }
}
