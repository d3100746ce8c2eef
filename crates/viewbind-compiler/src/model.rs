//! Field model shared by the scanners and the synthesizers.

use viewbind_core::{TypeName, ViewId};

use crate::source_map::Span;

/// Cast target of a bound field.
///
/// `name` is the type exactly as it will be written in the generated cast.
/// When it is not fully qualified, `on_demand_imports` lists the wildcard
/// imports (`android.widget`) the declaring file relied on to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldType {
    pub name: String,
    pub on_demand_imports: Vec<String>,
}

impl FieldType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_demand_imports: Vec::new(),
        }
    }

    pub fn with_on_demand_imports(mut self, imports: Vec<String>) -> Self {
        self.on_demand_imports = imports;
        self
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One `@BindView` field observed in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedField {
    pub declaring_type: TypeName,
    pub field_name: String,
    pub field_type: FieldType,
    pub view_id: ViewId,
    /// Declarator location; `None` for manifest entries.
    pub span: Option<Span>,
}

impl AnnotatedField {
    pub fn new(
        declaring_type: TypeName,
        field_name: impl Into<String>,
        field_type: FieldType,
        view_id: ViewId,
    ) -> Self {
        Self {
            declaring_type,
            field_name: field_name.into(),
            field_type,
            view_id,
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}
