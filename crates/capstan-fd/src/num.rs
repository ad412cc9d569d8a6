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

//! # Finite-Domain Value Trait
//!
//! Unified numeric bounds for finite-domain variables. Domains are stored as
//! bitsets with a value offset, so values must convert to and from `usize`
//! bit positions (`PrimInt` supplies `NumCast`). Signedness is required so
//! that domains may straddle zero, and the formatting bounds keep panic
//! messages and `Display` implementations readable.

use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types usable as finite-domain variable values.
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64` and
/// `isize`.
pub trait FdValue: PrimInt + Signed + std::fmt::Debug + std::fmt::Display {}

impl<T> FdValue for T where T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display {}
