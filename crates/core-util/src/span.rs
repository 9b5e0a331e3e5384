//! Source location tracking.
//!
//! Core diagnostics are always reported as a file name plus a single
//! 1-based line number (`SPEC_FULL.md` §4). There is no column tracking and
//! no multi-file source map: each interpreter run reads exactly one program
//! file and one data file, so a bare line number is the whole location
//! model that is needed.

use std::fmt;

/// A 1-based source line number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u32);

impl Line {
    /// The first line of a file.
    pub const START: Line = Line(1);

    #[inline]
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The line after this one.
    #[inline]
    pub const fn next(self) -> Line {
        Line(self.0 + 1)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Line {
    fn from(n: u32) -> Self {
        Line(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_one() {
        assert_eq!(Line::START.get(), 1);
    }

    #[test]
    fn next_increments() {
        assert_eq!(Line::START.next(), Line(2));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Line(7).to_string(), "7");
    }
}
