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

//! # Depth-First Search Engine
//!
//! Copying depth-first exploration of the tree spanned by a root space.
//! `DfsEngine::next` resumes where the previous call stopped and yields the
//! next solved space, so the full solution set can be enumerated one space
//! at a time.
//!
//! ## Highlights
//!
//! - Open nodes live on an explicit frame stack; recursion depth is bounded
//!   by the heap, not the call stack.
//! - The last open alternative of a frame consumes the frame's space instead
//!   of cloning it, so a chain of forced choices costs no copies.
//! - The monitor is polled once per node and can abort the search; the
//!   reason is reported through [`DfsEngine::outcome`].

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    result::{SearchOutcome, TerminationReason},
    stats::SearchStatistics,
};
use capstan_core::space::{Space, SpaceStatus};
use std::time::Instant;

/// An open node: a branching space and the alternatives still to explore.
#[derive(Debug, Clone)]
struct Frame<S> {
    space: S,
    alternatives: usize,
    next: usize,
}

/// A resumable depth-first search over spaces of type `S`.
#[derive(Debug)]
pub struct DfsEngine<S, M = NoOperationMonitor>
where
    S: Space,
    M: SearchMonitor<S>,
{
    root: Option<S>,
    stack: Vec<Frame<S>>,
    statistics: SearchStatistics,
    monitor: M,
    started_at: Option<Instant>,
    termination: Option<TerminationReason>,
}

impl<S> DfsEngine<S>
where
    S: Space,
{
    /// Creates a new engine exploring the tree under `root`.
    #[inline]
    pub fn new(root: S) -> Self {
        Self::with_monitor(root, NoOperationMonitor::new())
    }
}

impl<S, M> DfsEngine<S, M>
where
    S: Space,
    M: SearchMonitor<S>,
{
    /// Creates a new engine observed by `monitor`.
    pub fn with_monitor(root: S, monitor: M) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            statistics: SearchStatistics::default(),
            monitor,
            started_at: None,
            termination: None,
        }
    }

    /// Yields the next solved space, or `None` when the tree is exhausted or
    /// the monitor stopped the search. After `None`, every further call
    /// returns `None`.
    pub fn next(&mut self) -> Option<S> {
        if self.termination.is_some() {
            return None;
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
            self.monitor.on_enter_search();
        }

        loop {
            if let SearchCommand::Terminate(reason) = self.monitor.search_command(&self.statistics)
            {
                self.finish(TerminationReason::Aborted(reason));
                return None;
            }

            let Some(mut space) = self.next_open_space() else {
                self.finish(TerminationReason::Exhausted);
                return None;
            };

            self.statistics.on_node_explored();
            self.monitor.on_node(&self.statistics);

            match space.status() {
                SpaceStatus::Failed => {
                    self.statistics.on_failure();
                }
                SpaceStatus::Solved => {
                    self.statistics.on_solution_found();
                    self.monitor.on_solution_found(&space, &self.statistics);
                    if let Some(start) = self.started_at {
                        self.statistics.set_total_time(start.elapsed());
                    }
                    return Some(space);
                }
                SpaceStatus::Branches(alternatives) => {
                    debug_assert!(
                        alternatives > 0,
                        "a branching space must offer at least one alternative"
                    );
                    self.stack.push(Frame {
                        space,
                        alternatives,
                        next: 0,
                    });
                    self.statistics.on_depth_update(self.stack.len() as u64);
                }
            }
        }
    }

    /// Returns `true` if the engine can no longer yield spaces.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns why the engine stopped, or `None` while it can still yield.
    #[inline]
    pub fn termination_reason(&self) -> Option<&TerminationReason> {
        self.termination.as_ref()
    }

    /// Returns the final outcome once the engine has stopped.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        let reason = self.termination.as_ref()?;
        Some(match reason {
            TerminationReason::Exhausted => SearchOutcome::exhausted(self.statistics.clone()),
            TerminationReason::Aborted(text) => {
                SearchOutcome::aborted(text.clone(), self.statistics.clone())
            }
        })
    }

    /// Pops the next committed child off the open-node stack, or takes the
    /// root on the very first call.
    fn next_open_space(&mut self) -> Option<S> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }

        let (alternative, is_last) = {
            let frame = self.stack.last_mut()?;
            let alternative = frame.next;
            frame.next += 1;
            (alternative, frame.next == frame.alternatives)
        };

        let mut child = if is_last {
            // Last alternative: the frame is spent, move its space out.
            self.stack
                .pop()
                .expect("expected a frame below an open alternative")
                .space
        } else {
            self.stack
                .last()
                .expect("expected a frame below an open alternative")
                .space
                .clone()
        };
        child.commit(alternative);
        Some(child)
    }

    fn finish(&mut self, reason: TerminationReason) {
        if let Some(start) = self.started_at {
            self.statistics.set_total_time(start.elapsed());
        }
        self.monitor.on_exit_search(&self.statistics);
        self.stack.clear();
        self.root = None;
        self.termination = Some(reason);
    }
}
