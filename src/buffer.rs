//! Reusable line-assembly buffer

use std::fmt;

/// Default preallocation for a line buffer, sized for long log lines.
pub const DEFAULT_CAPACITY: usize = 10 * 1024;

/// Growable text accumulator for one log line.
///
/// A `LineBuffer` is meant to be reused: [`clear`](Self::clear) resets the
/// length but keeps the allocation, so steady-state logging performs no
/// allocation as long as lines fit the preallocated capacity. Appends that
/// would exceed capacity grow the buffer instead of overrunning it.
#[derive(Debug)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    /// Create a buffer with [`DEFAULT_CAPACITY`] preallocated.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer with a specific preallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Reset the write position to the start. Keeps the allocation.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a string slice.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append a single character.
    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Rendered text so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes of the rendered text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been rendered since the last clear.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// Lets scalar rendering use write!() without an intermediate String.
impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.text.push(c);
        Ok(())
    }
}
