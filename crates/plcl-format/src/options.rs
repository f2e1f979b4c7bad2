//! Formatting options for PLCL output.

/// Options for PLCL output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces added per nesting level (default: 4)
    pub indent_width: usize,

    /// Spaces before top-level constructs (default: 0)
    pub indent_start: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            indent_start: 0,
        }
    }
}

impl FormatOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level indentation width.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the indentation of the outermost level.
    pub fn indent_start(mut self, start: usize) -> Self {
        self.indent_start = start;
        self
    }
}
