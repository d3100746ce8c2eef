//! Test utilities shared by the compiler's unit tests.

use viewbind_core::{TypeName, ViewId};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{AnnotatedField, FieldType};
use crate::render::{Config, render_with_config};
use crate::scan::{JavaScanner, ManifestScanner, Scanner};
use crate::source_map::SourceMap;
use crate::{Round, RoundBuilder};

/// Scan one inline Java source.
pub fn scan_java(src: &str) -> (Vec<AnnotatedField>, Diagnostics) {
    JavaScanner::new()
        .scan(&SourceMap::inline(src))
        .expect("java scan")
}

/// Scan one inline manifest.
pub fn scan_manifest(json: &str) -> (Vec<AnnotatedField>, Diagnostics) {
    ManifestScanner::new()
        .scan(&SourceMap::inline(json))
        .expect("manifest scan")
}

/// A field without a span. `declaring_type` is a qualified name.
pub fn field(declaring_type: &str, name: &str, ty: &str, view_id: ViewId) -> AnnotatedField {
    AnnotatedField::new(
        TypeName::best_guess(declaring_type).expect("type name"),
        name,
        FieldType::new(ty),
        view_id,
    )
}

pub fn kinds(diag: &Diagnostics) -> Vec<DiagnosticKind> {
    diag.iter().map(|d| d.kind()).collect()
}

/// Run a full round over one inline source.
pub fn round(src: &str) -> Round {
    RoundBuilder::one_liner(src)
        .scan()
        .expect("scan")
        .synthesize()
}

/// Render every unit of a valid round without the header, separated by blank lines.
pub fn generate(src: &str) -> String {
    let round = round(src);
    assert!(
        round.is_valid(),
        "unexpected diagnostics:\n{}",
        round.diagnostics().render(round.source_map())
    );

    let config = Config::new().header(false);
    round
        .units()
        .iter()
        .map(|unit| render_with_config(unit, &config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Diagnostics of a round, one `Display` line each.
pub fn diagnostics(src: &str) -> String {
    round(src)
        .diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
