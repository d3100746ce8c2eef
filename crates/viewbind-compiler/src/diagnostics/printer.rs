//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::{DiagnosticMessage, Diagnostics, Severity};
use crate::source_map::{SourceMap, Span};

/// Builder for rendering diagnostics against the round's sources.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: &'s SourceMap,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics, sources: &'s SourceMap) -> Self {
        Self {
            diagnostics,
            sources,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = vec![self.group(diag)];
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn group<'a>(&'a self, diag: &'a DiagnosticMessage) -> Group<'a> {
        let level = severity_to_level(diag.severity());
        let mut group = Group::with_title(level.primary_title(diag.message()));

        if let Some(span) = diag.span {
            let mut snippet = self
                .snippet(span)
                .annotation(AnnotationKind::Primary.span(self.range(span)).label(diag.message()));

            let mut elsewhere = Vec::new();
            for related in &diag.related {
                if related.span.source == span.source {
                    snippet = snippet.annotation(
                        AnnotationKind::Context
                            .span(self.range(related.span))
                            .label(related.message.as_str()),
                    );
                } else {
                    elsewhere.push(related);
                }
            }
            group = group.element(snippet);

            for related in elsewhere {
                group = group.element(
                    self.snippet(related.span).annotation(
                        AnnotationKind::Context
                            .span(self.range(related.span))
                            .label(related.message.as_str()),
                    ),
                );
            }
        }

        for hint in &diag.hints {
            group = group.element(Level::HELP.message(hint.as_str()));
        }

        group
    }

    fn snippet(&self, span: Span) -> Snippet<'s, annotate_snippets::Annotation<'s>> {
        Snippet::source(self.sources.content(span.source))
            .line_start(1)
            .path(self.sources.display_name(span.source))
    }

    fn range(&self, span: Span) -> std::ops::Range<usize> {
        adjust_range(span.range(), self.sources.content(span.source).len())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
