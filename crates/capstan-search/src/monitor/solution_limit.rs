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

/// A monitor that terminates the search once a number of solutions has been
/// found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionLimitMonitor {
    max_solutions: u64,
}

impl SolutionLimitMonitor {
    /// Creates a new `SolutionLimitMonitor` with the specified solution budget.
    pub fn new(max_solutions: u64) -> Self {
        Self { max_solutions }
    }
}

impl<S> SearchMonitor<S> for SolutionLimitMonitor {
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self) {}
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}
    fn on_node(&mut self, _statistics: &SearchStatistics) {}
    fn on_solution_found(&mut self, _solution: &S, _statistics: &SearchStatistics) {}

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        if statistics.solutions_found >= self.max_solutions {
            return SearchCommand::Terminate(format!(
                "Solution limit of {} solutions reached",
                self.max_solutions
            ));
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_once_enough_solutions_exist() {
        let mut monitor = SolutionLimitMonitor::new(2);
        let mut stats = SearchStatistics::default();
        assert_eq!(
            SearchMonitor::<()>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );

        stats.on_solution_found();
        stats.on_solution_found();
        let command = SearchMonitor::<()>::search_command(&mut monitor, &stats);
        assert!(matches!(command, SearchCommand::Terminate(_)));
    }
}
