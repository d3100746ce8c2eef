//! viewbind compiler: scanner, grouping index, synthesizers, and renderer.
//!
//! This crate turns `@BindView(<id>)` fields into companion `<Type>ViewBinding`
//! classes:
//! - `scan` - Java source front end and JSON manifest front end
//! - `index` - grouping of fields by declaring type and view id
//! - `synth` - `bind` method and companion type synthesis
//! - `render` - Java source rendering
//! - `emit` - writing generated units to disk
//! - `diagnostics` - error reporting
//! - `round` - high-level facade threading one round through the stages

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod emit;
pub mod index;
pub mod model;
pub mod render;
pub mod round;
pub mod scan;
pub mod source_map;
pub mod synth;

#[cfg(test)]
pub mod test_utils;


use std::path::PathBuf;

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (unreadable manifests, I/O) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{DirFiler, Filer, MemoryFiler};
pub use index::{GroupedType, GroupingIndex};
pub use model::{AnnotatedField, FieldType};
pub use round::{Round, RoundBuilder, RoundScanned};
pub use source_map::{SourceId, SourceMap, Span};
pub use synth::GeneratedUnit;

/// Errors that abort a generation round.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("scan failed with {} errors", .0.error_count())]
    ScanFailed(Diagnostics),

    #[error("synthesis failed with {} errors", .0.error_count())]
    SynthesisFailed(Diagnostics),

    #[error("invalid binding manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to load Java grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// Writing a generated unit failed; the round is aborted.
    #[error("failed to write '{}': {source}", path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
