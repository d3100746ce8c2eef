//! Synthesis of `bind` methods and their companion types.
//!
//! Works on the grouping index only; nothing here looks at sources.

mod method;
mod unit;

#[cfg(test)]
mod synth_tests;

pub use method::{Assignment, BindMethod, Parameter, synthesize_method};
pub use unit::{GeneratedUnit, synthesize, synthesize_type};
