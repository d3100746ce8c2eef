//! ANSI color codes for printing generated Java to a terminal.
//!
//! Three roles plus reset:
//! - Keyword: `package`, `public`, `static`, `class`, `void`
//! - Type: type names and casts
//! - Literal: view ids
//!
//! Comments and punctuation use the dim modifier.

/// ANSI color palette for rendered sources.
///
/// Standard 16-color codes only, so output reads in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub keyword: &'static str,
    pub ty: &'static str,
    pub literal: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        ty: "\x1b[34m",
        literal: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        keyword: "",
        ty: "",
        literal: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `color` ... `reset`.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            return text.to_owned();
        }
        format!("{color}{text}{}", self.reset)
    }
}
