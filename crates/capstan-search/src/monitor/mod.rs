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

//! # Search Monitors
//!
//! Observers that the engines notify at node boundaries. A monitor can log,
//! collect metrics, or stop the search early by answering
//! `SearchCommand::Terminate` from `search_command`.
//!
//! ## Module map
//!
//! - [`search_monitor`]: the `SearchMonitor` trait and `SearchCommand`.
//! - [`composite`]: a fan-out monitor that forwards events to children.
//! - [`log`]: a console monitor printing progress and solutions.
//! - [`no_op`]: the do-nothing default.
//! - [`node_limit`]: terminates after a number of explored nodes.
//! - [`solution_limit`]: terminates after a number of solutions.
//! - [`time_limit`]: terminates after a wall-clock duration.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod node_limit;
pub mod search_monitor;
pub mod solution_limit;
pub mod time_limit;
