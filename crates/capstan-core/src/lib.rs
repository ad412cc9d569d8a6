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

//! # Capstan Core
//!
//! **The propagation-space contract for the Capstan constraint search engines.**
//!
//! This crate defines the interface between a propagation engine (anything
//! that can narrow variable domains to a fixpoint and describe a branching
//! choice) and the search layers built on top of it. It carries no search
//! logic of its own.
//!
//! * **`space`**: the [`Space`](space::Space) trait (propagate, branch,
//!   commit), the [`SpaceStatus`](space::SpaceStatus) fixpoint report, and
//!   the [`Constrain`](space::Constrain) branch-and-bound seam.
//! * **`index`**: the strongly-typed [`VarIndex`](index::VarIndex) used to
//!   address decision variables without raw `usize` mixups.

pub mod index;
pub mod space;
