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

/// A monitor that prints search progress to standard output.
///
/// Prints one line per solution and, every `node_interval` nodes, a progress
/// line with the current counters. An interval of 0 disables progress lines.
#[derive(Debug, Clone)]
pub struct LogSearchMonitor {
    node_interval: u64,
    nodes_since_last_report: u64,
}

impl LogSearchMonitor {
    /// Creates a new `LogSearchMonitor` reporting progress every
    /// `node_interval` nodes.
    pub fn new(node_interval: u64) -> Self {
        Self {
            node_interval,
            nodes_since_last_report: 0,
        }
    }

    /// Creates a new `LogSearchMonitor` that only reports solutions and the
    /// final statistics.
    pub fn solutions_only() -> Self {
        Self::new(0)
    }
}

impl Default for LogSearchMonitor {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl<S> SearchMonitor<S> for LogSearchMonitor {
    fn name(&self) -> &str {
        "LogSearchMonitor"
    }

    fn on_enter_search(&mut self) {
        self.nodes_since_last_report = 0;
        println!("Search started");
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        println!("Search finished");
        print!("{}", statistics);
    }

    fn on_node(&mut self, statistics: &SearchStatistics) {
        if self.node_interval == 0 {
            return;
        }
        self.nodes_since_last_report += 1;
        if self.nodes_since_last_report >= self.node_interval {
            self.nodes_since_last_report = 0;
            println!(
                "Progress: {} nodes, {} failures, {} solutions, depth {}",
                statistics.nodes_explored,
                statistics.failures,
                statistics.solutions_found,
                statistics.max_depth
            );
        }
    }

    fn on_solution_found(&mut self, _solution: &S, statistics: &SearchStatistics) {
        println!(
            "Solution #{} after {} nodes",
            statistics.solutions_found, statistics.nodes_explored
        );
    }

    fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}
