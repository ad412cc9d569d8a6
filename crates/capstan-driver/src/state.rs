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

/// Where a driver stands in its search lifecycle.
///
/// `Solving` is only held while a search operation runs; by the time a
/// search operation returns the driver is in one of the other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// No search has bound a solution; the base space is current.
    #[default]
    Unsolved,
    /// A search operation is running.
    Solving,
    /// A search bound a solution; it is current until the next reset.
    Solved,
    /// A search proved that no (further) solution exists.
    Exhausted,
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverState::Unsolved => write!(f, "Unsolved"),
            DriverState::Solving => write!(f, "Solving"),
            DriverState::Solved => write!(f, "Solved"),
            DriverState::Exhausted => write!(f, "Exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unsolved() {
        assert_eq!(DriverState::default(), DriverState::Unsolved);
    }

    #[test]
    fn test_display_names_the_state() {
        assert_eq!(DriverState::Solved.to_string(), "Solved");
        assert_eq!(DriverState::Exhausted.to_string(), "Exhausted");
    }
}
