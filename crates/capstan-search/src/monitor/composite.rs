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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging and early-stopping
//! without coupling them to the engines.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};

/// A search monitor that aggregates multiple monitors and forwards events to all of them.
/// This allows combining different monitoring behaviors into a single monitor.
pub struct CompositeSearchMonitor<'a, S> {
    monitors: Vec<Box<dyn SearchMonitor<S> + 'a>>,
}

impl<S> Default for CompositeSearchMonitor<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S> CompositeSearchMonitor<'a, S> {
    /// Creates a new empty `CompositeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSearchMonitor` with the specified capacity.
    /// This pre-allocates space for the given number of monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<S> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<S> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SearchMonitor<S> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors,
    /// `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, S> FromIterator<Box<dyn SearchMonitor<S> + 'a>> for CompositeSearchMonitor<'a, S> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<S> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<S> SearchMonitor<S> for CompositeSearchMonitor<'_, S> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search();
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn on_node(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_node(statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, solution: &S, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(solution, statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            // Short-circuit on the first non-Continue command
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeSearchMonitor::<'_, ()>::new();
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&SearchStatistics::default()),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_short_circuits_on_first_terminate() {
        let mut composite = CompositeSearchMonitor::<'_, ()>::new();
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor(NodeLimitMonitor::new(0));
        assert_eq!(composite.len(), 2);

        let command = composite.search_command(&SearchStatistics::default());
        assert!(matches!(command, SearchCommand::Terminate(_)));
    }
}
