//! Bounded status-line assembly.
//!
//! Every test invocation composes a short status line (test name, outcome,
//! parameter index) in one reusable fixed-capacity buffer. Capacity is a hard
//! upper bound: text that does not fit is truncated silently. Status lines
//! are advisory, not correctness-critical, so truncation is defined policy
//! rather than an error.

use std::fmt;

/// Hard upper bound on a composed status line, in bytes.
pub const STATUS_CAPACITY: usize = 50;

/// A fixed-capacity character buffer with a write cursor.
///
/// Between operations `write_index == len()` holds and `len()` never exceeds
/// [`STATUS_CAPACITY`]. The buffer is reset at the start of each status line
/// and overwritten on the next; callers that need to keep a line copy it out.
///
/// # Examples
///
/// ```rust
/// use vigil::output::{StatusLine, STATUS_CAPACITY};
/// let mut line = StatusLine::new();
/// line.append("divide_by[1] FAIL");
/// assert_eq!(line.as_str(), "divide_by[1] FAIL");
/// line.append(&"x".repeat(STATUS_CAPACITY));
/// assert_eq!(line.len(), STATUS_CAPACITY);
/// ```
#[derive(Debug, Clone)]
pub struct StatusLine {
    buf: [u8; STATUS_CAPACITY],
    write_index: usize,
    length: usize,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            buf: [0; STATUS_CAPACITY],
            write_index: 0,
            length: 0,
        }
    }

    /// Discards the current contents; the next append starts a fresh line.
    pub fn reset(&mut self) {
        self.write_index = 0;
        self.length = 0;
    }

    /// Copies as many characters from `text` as fit in the remaining
    /// capacity, truncating silently at the boundary. Never splits a code
    /// point. Returns the number of bytes actually written.
    pub fn append(&mut self, text: &str) -> usize {
        let start = self.length;
        for ch in text.chars() {
            let width = ch.len_utf8();
            if self.length + width > STATUS_CAPACITY {
                break;
            }
            ch.encode_utf8(&mut self.buf[self.length..self.length + width]);
            self.length += width;
        }
        self.write_index = self.length;
        self.length - start
    }

    /// Read-only view of the composed line.
    pub fn as_str(&self) -> &str {
        // append only ever writes whole code points, so this cannot fail
        std::str::from_utf8(&self.buf[..self.length]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn remaining(&self) -> usize {
        STATUS_CAPACITY - self.length
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for StatusLine {
    /// Saturating writer: formatting into a full buffer succeeds and drops
    /// the overflow, so `write!` against a `StatusLine` never errors.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn append_tracks_length_and_cursor() {
        let mut line = StatusLine::new();
        assert_eq!(line.append("abc"), 3);
        assert_eq!(line.len(), 3);
        assert_eq!(line.as_str(), "abc");
        line.append("def");
        assert_eq!(line.as_str(), "abcdef");
    }

    #[test]
    fn reset_clears_between_lines() {
        let mut line = StatusLine::new();
        line.append("first line");
        line.reset();
        assert!(line.is_empty());
        line.append("second");
        assert_eq!(line.as_str(), "second");
    }

    #[test]
    fn overflow_truncates_at_exactly_capacity() {
        let mut line = StatusLine::new();
        let long = "y".repeat(STATUS_CAPACITY * 2);
        let written = line.append(&long);
        assert_eq!(written, STATUS_CAPACITY);
        assert_eq!(line.len(), STATUS_CAPACITY);
        // further appends are no-ops, not errors
        assert_eq!(line.append("more"), 0);
        assert_eq!(line.len(), STATUS_CAPACITY);
    }

    #[test]
    fn truncation_never_splits_a_code_point() {
        let mut line = StatusLine::new();
        line.append(&"x".repeat(STATUS_CAPACITY - 1));
        // a two-byte char cannot fit in the single remaining byte
        line.append("é");
        assert_eq!(line.len(), STATUS_CAPACITY - 1);
        assert!(line.as_str().ends_with('x'));
    }

    #[test]
    fn fmt_write_is_saturating() {
        let mut line = StatusLine::new();
        let res = write!(line, "{}[{}] {}", "name", 3, "PASS");
        assert!(res.is_ok());
        assert_eq!(line.as_str(), "name[3] PASS");
    }
}
