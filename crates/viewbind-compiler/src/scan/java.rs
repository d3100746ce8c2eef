//! Java source front end.
//!
//! Walks type declarations (nested types included, method bodies excluded)
//! and turns every `@BindView` field declarator into an `AnnotatedField`.

use std::collections::HashMap;

use tree_sitter::{Language, Node, Parser};
use viewbind_core::{TypeName, ViewId, utils};

use super::constants::{ConstantTable, EvalError};
use super::syntax::{self, text};
use super::{BIND_VIEW_ANNOTATION, Scanner};
use crate::PassResult;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{AnnotatedField, FieldType};
use crate::source_map::{SourceId, SourceMap, Span};

/// Scans Java sources with the tree-sitter Java grammar.
pub struct JavaScanner {
    language: Language,
}

impl JavaScanner {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for JavaScanner {
    #[tracing::instrument(level = "debug", skip_all, fields(sources = sources.len()))]
    fn scan(&self, sources: &SourceMap) -> PassResult<Vec<AnnotatedField>> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let mut fields = Vec::new();
        let mut diag = Diagnostics::new();

        for source in sources.iter() {
            let Some(tree) = parser.parse(source.content, None) else {
                diag.report(DiagnosticKind::SyntaxError, Span::new(source.id, 0..0))
                    .message("parser produced no tree")
                    .emit();
                continue;
            };

            let before = fields.len();
            let scan = FileScan::new(
                source.id,
                source.content,
                tree.root_node(),
                &mut diag,
                &mut fields,
            );
            let constants = scan.constants.len();
            scan.run();

            tracing::debug!(
                source = source.kind.display_name(),
                fields = fields.len() - before,
                constants,
                "scanned source"
            );
        }

        Ok((fields, diag))
    }
}

/// Per-file scan state.
struct FileScan<'a, 't> {
    id: SourceId,
    source: &'t str,
    root: Node<'t>,
    package: String,
    /// Simple name → qualified name.
    single_imports: HashMap<String, String>,
    on_demand_imports: Vec<String>,
    constants: ConstantTable<'t>,
    diag: &'a mut Diagnostics,
    fields: &'a mut Vec<AnnotatedField>,
}

impl<'a, 't> FileScan<'a, 't> {
    fn new(
        id: SourceId,
        source: &'t str,
        root: Node<'t>,
        diag: &'a mut Diagnostics,
        fields: &'a mut Vec<AnnotatedField>,
    ) -> Self {
        let mut package = String::new();
        let mut single_imports = HashMap::new();
        let mut on_demand_imports = Vec::new();

        for item in syntax::named_children(root) {
            match item.kind() {
                "package_declaration" => {
                    if let Some(name) = qualified_name_child(item) {
                        package = compact(text(name, source));
                    }
                }
                "import_declaration" => {
                    let mut cursor = item.walk();
                    let children: Vec<_> = item.children(&mut cursor).collect();
                    if children.iter().any(|c| c.kind() == "static") {
                        continue;
                    }
                    let Some(name) = qualified_name_child(item) else {
                        continue;
                    };
                    let name = compact(text(name, source));
                    if children.iter().any(|c| c.kind() == "asterisk") {
                        on_demand_imports.push(name);
                    } else if let Some((_, simple)) = name.rsplit_once('.') {
                        single_imports.insert(simple.to_owned(), name.clone());
                    }
                }
                _ => {}
            }
        }

        let constants = ConstantTable::collect(root, source, &package);

        Self {
            id,
            source,
            root,
            package,
            single_imports,
            on_demand_imports,
            constants,
            diag,
            fields,
        }
    }

    fn run(mut self) {
        self.report_syntax_errors(self.root);

        for decl in syntax::named_children(self.root) {
            if syntax::is_type_declaration(decl) {
                self.visit_type(decl, None);
            }
        }
    }

    fn report_syntax_errors(&mut self, node: Node<'t>) {
        if node.is_missing() {
            self.diag
                .report(DiagnosticKind::SyntaxError, self.span(node))
                .message(format!("missing `{}`", node.kind()))
                .emit();
            return;
        }

        if node.is_error() {
            let excerpt: String = text(node, self.source)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .chars()
                .take(24)
                .collect();
            let detail = if excerpt.is_empty() {
                "unexpected input".to_owned()
            } else {
                format!("unexpected `{excerpt}`")
            };
            self.diag
                .report(DiagnosticKind::SyntaxError, self.span(node))
                .message(detail)
                .emit();
            return;
        }

        if !node.has_error() {
            return;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children {
            self.report_syntax_errors(child);
        }
    }

    fn visit_type(&mut self, decl: Node<'t>, enclosing: Option<&TypeName>) {
        let Some(name) = decl.child_by_field_name("name") else {
            return;
        };
        let name = text(name, self.source);
        let ty = match enclosing {
            Some(outer) => outer.nested(name),
            None => TypeName::new(self.package.clone(), name),
        };

        for member in syntax::body_members(decl) {
            match member.kind() {
                "field_declaration" => self.visit_field(member, &ty),
                "constant_declaration" => {
                    if let Some(annotation) = self.bind_view(member) {
                        let what = match decl.kind() {
                            "annotation_type_declaration" => "an annotation type",
                            _ => "an interface",
                        };
                        self.diag
                            .report(DiagnosticKind::UnsupportedEnclosingType, self.span(annotation))
                            .message(format!("`{}` is {what}", ty.relative_name()))
                            .emit();
                    }
                }
                _ if syntax::is_type_declaration(member) => self.visit_type(member, Some(&ty)),
                _ => {}
            }
        }
    }

    fn visit_field(&mut self, member: Node<'t>, owner: &TypeName) {
        let Some(annotation) = self.bind_view(member) else {
            return;
        };

        let names = syntax::declarators(member)
            .into_iter()
            .filter_map(|d| d.child_by_field_name("name"))
            .map(|n| text(n, self.source))
            .collect::<Vec<_>>()
            .join(", ");

        let mut bindable = true;
        if let Some(modifiers) = syntax::modifiers(member) {
            for (keyword, kind) in [
                ("private", DiagnosticKind::PrivateField),
                ("static", DiagnosticKind::StaticField),
                ("final", DiagnosticKind::FinalField),
            ] {
                if let Some(node) = syntax::modifier_keyword(modifiers, keyword) {
                    self.diag
                        .report(kind, self.span(node))
                        .message(names.as_str())
                        .emit();
                    bindable = false;
                }
            }
        }

        let view_id = self.view_id(annotation, owner);
        let (Some(view_id), true) = (view_id, bindable) else {
            return;
        };
        let Some(type_node) = member.child_by_field_name("type") else {
            return;
        };
        let field_type = self.resolve_type(text(type_node, self.source), owner);

        for declarator in syntax::declarators(member) {
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };

            // `TextView views[]` declares an array on the declarator.
            let field_type = match declarator.child_by_field_name("dimensions") {
                Some(dims) => FieldType {
                    name: format!(
                        "{}{}",
                        field_type.name,
                        utils::normalize_type_text(text(dims, self.source))
                    ),
                    on_demand_imports: field_type.on_demand_imports.clone(),
                },
                None => field_type.clone(),
            };

            self.fields.push(
                AnnotatedField::new(
                    owner.clone(),
                    text(name, self.source),
                    field_type,
                    view_id,
                )
                .with_span(self.span(name)),
            );
        }
    }

    /// The `@BindView` annotation on a member, if any.
    fn bind_view(&self, member: Node<'t>) -> Option<Node<'t>> {
        let modifiers = syntax::modifiers(member)?;
        syntax::named_children(modifiers).into_iter().find(|node| {
            matches!(node.kind(), "annotation" | "marker_annotation")
                && node.child_by_field_name("name").is_some_and(|name| {
                    compact(text(name, self.source)).rsplit('.').next() == Some(BIND_VIEW_ANNOTATION)
                })
        })
    }

    fn view_id(&mut self, annotation: Node<'t>, owner: &TypeName) -> Option<ViewId> {
        let first = annotation
            .child_by_field_name("arguments")
            .and_then(|args| syntax::named_children(args).into_iter().next());
        let Some(first) = first else {
            self.diag
                .report(DiagnosticKind::MissingViewId, self.span(annotation))
                .emit();
            return None;
        };

        let pair = match first.kind() {
            "element_value_pair" => Some(("key", "value")),
            "assignment_expression" => Some(("left", "right")),
            _ => None,
        };
        let expr = if let Some((key_field, value_field)) = pair {
            let key = first
                .child_by_field_name(key_field)
                .map(|k| text(k, self.source))
                .unwrap_or_default();
            if key != "value" {
                self.diag
                    .report(DiagnosticKind::MissingViewId, self.span(first))
                    .message(format!("found element `{key}`"))
                    .emit();
                return None;
            }
            first.child_by_field_name(value_field)?
        } else {
            first
        };

        match self.constants.eval(expr, owner.nesting()) {
            Ok(id) => Some(id),
            Err(EvalError::NotConstant { range, text }) => {
                self.diag
                    .report(DiagnosticKind::NonConstantViewId, Span::new(self.id, range))
                    .message(text)
                    .emit();
                None
            }
            Err(EvalError::OutOfRange { range, text }) => {
                self.diag
                    .report(DiagnosticKind::ViewIdOutOfRange, Span::new(self.id, range))
                    .message(text)
                    .emit();
                None
            }
        }
    }

    /// Rewrite a field's type so it resolves inside the generated unit.
    ///
    /// Names brought in by single-type imports become qualified, member types
    /// of enclosing declarations become package-relative. Anything else that
    /// looks like a type keeps its text and carries the on-demand imports.
    fn resolve_type(&self, raw: &str, owner: &TypeName) -> FieldType {
        let normalized = utils::normalize_type_text(raw);
        let mut name = String::with_capacity(normalized.len());
        let mut unresolved = false;

        let mut rest = normalized.as_str();
        while let Some(c) = rest.chars().next() {
            let run_len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.')))
                .unwrap_or(rest.len());
            if run_len == 0 {
                name.push(c);
                rest = &rest[c.len_utf8()..];
                continue;
            }

            let (run, tail) = rest.split_at(run_len);
            let (head, qualifier) = match run.split_once('.') {
                Some((head, qualifier)) => (head, Some(qualifier)),
                None => (run, None),
            };
            let resolved = self
                .single_imports
                .get(head)
                .cloned()
                .or_else(|| self.local_type(head, owner));
            match (resolved, qualifier) {
                (Some(resolved), Some(qualifier)) => {
                    name.push_str(&resolved);
                    name.push('.');
                    name.push_str(qualifier);
                }
                (Some(resolved), None) => name.push_str(&resolved),
                (None, _) => {
                    unresolved |= head.starts_with(|c: char| c.is_ascii_uppercase());
                    name.push_str(run);
                }
            }
            rest = tail;
        }

        let field_type = FieldType::new(name);
        if unresolved {
            field_type.with_on_demand_imports(self.on_demand_imports.clone())
        } else {
            field_type
        }
    }

    /// A type declared in this file that `simple` names from inside `owner`.
    fn local_type(&self, simple: &str, owner: &TypeName) -> Option<String> {
        let nesting = owner.nesting();
        (0..=nesting.len()).rev().find_map(|depth| {
            let mut candidate = nesting[..depth].to_vec();
            candidate.push(simple.to_owned());
            let candidate = candidate.join(".");
            self.constants
                .types()
                .contains(&candidate)
                .then_some(candidate)
        })
    }

    fn span(&self, node: Node<'_>) -> Span {
        Span::new(self.id, node.byte_range())
    }
}

fn qualified_name_child(node: Node<'_>) -> Option<Node<'_>> {
    syntax::named_children(node)
        .into_iter()
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
