//! Front ends that recover `@BindView` fields for a round.
//!
//! - `JavaScanner` parses `.java` sources with tree-sitter
//! - `ManifestScanner` reads JSON field manifests from hosts that already
//!   have a resolved declaration model

mod constants;
mod java;
mod manifest;
mod syntax;

#[cfg(test)]
mod java_tests;

pub use java::JavaScanner;
pub use manifest::ManifestScanner;

use crate::PassResult;
use crate::model::AnnotatedField;
use crate::source_map::SourceMap;

/// Supplies the annotated fields of one round.
///
/// Fields are returned in source order: sources in map order, declarations
/// in document order. Problems with individual fields are reported as
/// diagnostics and the field is left out; only failures that make the
/// whole input unusable are returned as `Err`.
pub trait Scanner {
    fn scan(&self, sources: &SourceMap) -> PassResult<Vec<AnnotatedField>>;
}

/// Simple name of the marker annotation.
pub const BIND_VIEW_ANNOTATION: &str = "BindView";
