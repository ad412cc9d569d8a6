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

//! # Capstan FD
//!
//! **A small finite-domain integer space for the Capstan search stack.**
//!
//! This crate provides a concrete implementation of the
//! `capstan_core::space::Space` contract: integer variables over bitset
//! domains, a handful of bounds/value-consistent propagators, and pluggable
//! branching heuristics. It exists so that the engines in `capstan-search`
//! and the driver in `capstan-driver` can be exercised against a real
//! propagation state; it makes no attempt to be a competitive propagation
//! library.
//!
//! ## Module map
//!
//! - `num`: the [`FdValue`](num::FdValue) numeric bound.
//! - `domain`: bitset-backed [`IntDomain`](domain::IntDomain).
//! - `propagator`: the [`Propagator`](propagator::Propagator) constraint
//!   forms.
//! - `branch`: variable and value selection heuristics.
//! - `space`: [`IntSpace`](space::IntSpace), the `Space`/`Constrain`
//!   implementation tying the above together.
//! - `objective`: minimize/maximize bounding hooks for branch-and-bound.

pub mod branch;
pub mod domain;
pub mod num;
pub mod objective;
pub mod propagator;
pub mod space;
