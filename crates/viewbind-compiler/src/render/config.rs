//! Configuration for Java rendering.

use viewbind_core::Colors;

/// First line of every generated unit unless disabled.
pub const HEADER_COMMENT: &str = "// Generated by viewbind. Do not edit.";

/// Configuration for Java rendering.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to start each unit with the generated-code comment
    pub header: bool,
    /// One level of indentation
    pub indent: String,
    /// Color configuration for output
    pub colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: true,
            indent: "  ".to_owned(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the generated-code comment.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
