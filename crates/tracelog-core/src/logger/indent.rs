//! Nesting depth of a logger

/// Depth a new logger starts at
pub const INITIAL_INDENT: usize = 1;

/// Spaces added per `enter` and removed per `exit`
pub const INDENT_STEP: usize = 2;

/// `enter` stops deepening once the depth reaches this value
pub const INDENT_LIMIT: usize = 20;

/// Depth counter plus the one-shot saturation warning flag
///
/// Enters past the limit are counted in `overflow` so the matching exits
/// unwind them before the visible depth shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndentState {
    indent: usize,
    overflow: usize,
    warned: bool,
}

impl Default for IndentState {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentState {
    pub(crate) fn new() -> Self {
        Self {
            indent: INITIAL_INDENT,
            overflow: 0,
            warned: false,
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.indent
    }

    /// Deepen by one step
    ///
    /// Returns the saturated depth the first time the limit is hit; later
    /// calls at the limit return `None` and leave the visible depth unchanged.
    pub(crate) fn push(&mut self) -> Option<usize> {
        if self.indent < INDENT_LIMIT {
            self.indent += INDENT_STEP;
            return None;
        }

        self.overflow += 1;
        if self.warned {
            None
        } else {
            self.warned = true;
            Some(self.indent)
        }
    }

    /// Shallow by one step, clamping at zero, and return the new depth
    pub(crate) fn pop(&mut self) -> usize {
        if self.overflow > 0 {
            self.overflow -= 1;
        } else {
            self.indent = self.indent.saturating_sub(INDENT_STEP);
        }
        self.indent
    }
}

/// Leading whitespace for a line at `indent`
pub(crate) fn spaces(indent: usize) -> String {
    " ".repeat(indent)
}
