use super::*;
use crate::source_map::{SourceId, SourceMap, Span};

fn span(start: usize, end: usize) -> Span {
    Span::new(SourceId(0), start..end)
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingViewId, span(0, 9))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "`@BindView` requires a view id");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NonConstantViewId, span(10, 21))
        .message("R.id.title")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "view id `R.id.title` is not an integer constant");
}

#[test]
fn template_without_placeholder_falls_back_to_prefix() {
    assert_eq!(
        DiagnosticKind::InvalidManifestEntry.message(Some("bad field name `1x`")),
        "invalid manifest entry: bad field name `1x`"
    );
    assert_eq!(
        DiagnosticKind::SyntaxError.message(None),
        "source contains syntax errors"
    );
}

#[test]
fn severities() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateViewId, span(0, 1))
        .emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.error_count(), 0);
    assert!(!diagnostics.is_failure(false));
    assert!(diagnostics.is_failure(true));

    diagnostics
        .report(DiagnosticKind::PrivateField, span(2, 3))
        .emit();
    assert!(diagnostics.is_failure(false));
    assert_eq!(diagnostics.error_count(), 1);
}

#[test]
fn default_hint_is_attached() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::FinalField, span(0, 4))
        .message("title")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(
        diag.to_string(),
        @"error at 0..4: cannot bind final field `title` (hint: remove the `final` modifier)"
    );
}

#[test]
fn builder_with_related_and_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateViewId, span(20, 25))
        .message("view id 7 is bound twice in `Main`")
        .related_to("first bound here", span(5, 10))
        .hint("extra")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(
        diag.to_string(),
        @"warning at 20..25: view id 7 is bound twice in `Main` (related: first bound here at 5..10) (hint: the later field wins; give each field its own id) (hint: extra)"
    );
}

#[test]
fn unspanned_display() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_unspanned(DiagnosticKind::InvalidManifestEntry)
        .message("`9lives` is not a valid field name")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert!(diag.span.is_none());
    insta::assert_snapshot!(
        diag.to_string(),
        @"error: invalid manifest entry: `9lives` is not a valid field name"
    );
}

#[test]
fn extend_merges_in_order() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::PrivateField, span(0, 1)).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::StaticField, span(1, 2)).emit();

    a.extend(b);
    let kinds: Vec<_> = a.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::PrivateField, DiagnosticKind::StaticField]
    );
}

#[test]
fn printer_renders_source_excerpt() {
    let sources = SourceMap::inline("class A { @BindView(x) View v; }");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NonConstantViewId, span(20, 21))
        .message("x")
        .emit();

    let rendered = diagnostics.render(&sources);
    assert!(rendered.contains("error: view id `x` is not an integer constant"));
    assert!(rendered.contains("<source>"));
    assert!(rendered.contains("class A { @BindView(x) View v; }"));
    assert!(rendered.contains("^"));
    assert!(rendered.contains("help: use an integer literal"));
}

#[test]
fn printer_renders_related_from_other_file() {
    let mut sources = SourceMap::new();
    let a = sources.add_file("A.java", "class A {}");
    let b = sources.add_file("B.java", "class B {}");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateGeneratedType, Span::new(b, 6..7))
        .message("BViewBinding")
        .related_to("also generated for this type", Span::new(a, 6..7))
        .emit();

    let rendered = diagnostics.render(&sources);
    assert!(rendered.contains("A.java"));
    assert!(rendered.contains("B.java"));
    assert!(rendered.contains("also generated for this type"));
}

#[test]
fn printer_renders_unspanned_title() {
    let sources = SourceMap::new();
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_unspanned(DiagnosticKind::InvalidManifestEntry)
        .message("`app.ui` is not a type name")
        .emit();

    let rendered = diagnostics.render(&sources);
    assert!(rendered.starts_with("error: invalid manifest entry: `app.ui` is not a type name"));
}

#[test]
fn printer_empty_span_at_end_of_source() {
    let sources = SourceMap::inline("class A {");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError, span(9, 9))
        .emit();

    let rendered = diagnostics.render(&sources);
    assert!(rendered.contains("warning: source contains syntax errors"));
}

#[test]
fn printer_colored_differs_from_plain() {
    let sources = SourceMap::inline("class A {}");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PrivateField, span(0, 5))
        .emit();

    let plain = diagnostics.render_colored(&sources, false);
    let colored = diagnostics.render_colored(&sources, true);
    assert!(!plain.contains('\x1b'));
    assert!(colored.contains('\x1b'));
}

#[test]
fn printer_render_matches_format() {
    let sources = SourceMap::inline("class A { @BindView(1) private View v; }");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PrivateField, span(23, 30))
        .message("v")
        .emit();
    diagnostics
        .report(DiagnosticKind::PrivateField, span(36, 37))
        .message("v")
        .emit();

    let printer = diagnostics.printer(&sources);
    let mut formatted = String::new();
    printer.format(&mut formatted).expect("format");
    assert_eq!(printer.render(), formatted);
    assert!(formatted.matches("cannot bind private field `v`").count() >= 2);
}
