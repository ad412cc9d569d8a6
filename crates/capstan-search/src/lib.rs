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

//! # Capstan Search Engines
//!
//! Copying tree search over any type that implements the
//! `capstan_core::space::Space` contract. Two engines are provided:
//!
//! - [`dfs::DfsEngine`] enumerates solutions by depth-first search. Each call
//!   to `next` resumes the exploration where the previous call stopped and
//!   yields the next solved space, or `None` once the tree is exhausted.
//! - [`bab::BabEngine`] performs branch-and-bound. After every solution the
//!   remaining open nodes are re-constrained against the incumbent through a
//!   [`bab::BoundingHook`], so each yielded solution is strictly better than
//!   the one before it and the last one is optimal.
//!
//! ## Module map
//!
//! - [`dfs`]: the depth-first enumeration engine.
//! - [`bab`]: the branch-and-bound engine and bounding hooks.
//! - [`monitor`]: search observers and termination policies.
//! - [`result`]: termination reasons and search outcomes.
//! - [`stats`]: counters collected while the tree is explored.
//!
//! ## Highlights
//!
//! - Engines own their root space and clone lazily: the last open
//!   alternative of a node consumes the node instead of copying it.
//! - Monitors can stop a search at any node boundary; the engine reports
//!   the abort reason through its outcome.

pub mod bab;
pub mod dfs;
pub mod monitor;
pub mod result;
pub mod stats;
