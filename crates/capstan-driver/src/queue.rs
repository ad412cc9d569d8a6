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

/// Deferred constraint posts against a space of type `S`.
///
/// Actions accumulate until [`ConstraintQueue::flush`] runs them against the
/// base space, exactly once and in insertion order. Actions pushed after a
/// flush wait for the next one.
pub struct ConstraintQueue<S> {
    actions: Vec<Box<dyn FnOnce(&mut S)>>,
}

impl<S> Default for ConstraintQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ConstraintQueue<S> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Queues a post-action for the next flush.
    #[inline]
    pub fn push<F>(&mut self, action: F)
    where
        F: FnOnce(&mut S) + 'static,
    {
        self.actions.push(Box::new(action));
    }

    /// Returns the number of pending actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs all pending actions against `space` in insertion order, leaving
    /// the queue empty.
    pub fn flush(&mut self, space: &mut S) {
        for action in self.actions.drain(..) {
            action(space);
        }
    }
}

impl<S> std::fmt::Debug for ConstraintQueue<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConstraintQueue(pending: {})", self.actions.len())
    }
}
