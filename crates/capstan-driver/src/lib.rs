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

//! # Capstan Driver
//!
//! The model-facing layer over the search engines. A `SearchDriver` owns a
//! base space, queues constraint posts until the next search, and tracks
//! where the model stands in its lifecycle
//! (`Unsolved -> Solving -> Solved | Exhausted`).
//!
//! ## Module map
//!
//! - [`driver`]: the `SearchDriver` and its search operations.
//! - [`queue`]: the deferred constraint queue.
//! - [`state`]: the driver lifecycle states.
//!
//! ## Highlights
//!
//! - Constraint posts are deferred: they run exactly once, in insertion
//!   order, right before the next search touches the base space.
//! - No solution is a sentinel (`None`), never an error; programming errors
//!   against the space contract panic.
//! - Solutions are only reachable through the references the driver hands
//!   out, so a stale solution can never be mutated behind the driver's back.

pub mod driver;
pub mod queue;
pub mod state;
