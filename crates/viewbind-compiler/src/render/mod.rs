//! Java source rendering of generated units.

mod config;
mod emitter;

#[cfg(test)]
mod emitter_tests;

pub use config::{Config, HEADER_COMMENT};
pub use emitter::Emitter;

use crate::synth::GeneratedUnit;

/// Render a unit with the default config.
pub fn render(unit: &GeneratedUnit) -> String {
    Emitter::new(unit, &Config::default()).emit()
}

/// Render a unit with a custom config.
pub fn render_with_config(unit: &GeneratedUnit, config: &Config) -> String {
    Emitter::new(unit, config).emit()
}
