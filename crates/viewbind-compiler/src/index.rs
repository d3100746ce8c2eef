//! Grouping of annotated fields by declaring type and view id.
//!
//! Declaring types keep first-seen order; within a type, fields are keyed by
//! view id in ascending order. A later field with an id already present
//! replaces the earlier one and a `DuplicateViewId` warning is reported.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use viewbind_core::{TypeName, ViewId};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::AnnotatedField;

/// One declaring type and its id → field mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedType {
    declaring_type: TypeName,
    fields: BTreeMap<ViewId, AnnotatedField>,
}

impl GroupedType {
    pub fn new(declaring_type: TypeName) -> Self {
        Self {
            declaring_type,
            fields: BTreeMap::new(),
        }
    }

    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    pub fn fields(&self) -> &BTreeMap<ViewId, AnnotatedField> {
        &self.fields
    }

    /// Fields in ascending view id order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &AnnotatedField)> {
        self.fields.iter().map(|(id, field)| (*id, field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert a field under its view id, returning the field it displaced.
    pub fn insert(&mut self, field: AnnotatedField) -> Option<AnnotatedField> {
        self.fields.insert(field.view_id, field)
    }
}

/// All declaring types of a round, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GroupingIndex {
    types: IndexMap<TypeName, GroupedType>,
}

impl GroupingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `fields` in order, reporting id collisions into `diag`.
    #[tracing::instrument(level = "debug", skip_all, fields(fields = fields.len()))]
    pub fn build(fields: Vec<AnnotatedField>, diag: &mut Diagnostics) -> Self {
        let mut index = Self::new();
        for field in fields {
            index.insert(field, diag);
        }
        tracing::debug!(types = index.len(), "grouped fields");
        index
    }

    pub fn insert(&mut self, field: AnnotatedField, diag: &mut Diagnostics) {
        let grouped = self
            .types
            .entry(field.declaring_type.clone())
            .or_insert_with(|| GroupedType::new(field.declaring_type.clone()));

        let (id, name, span) = (field.view_id, field.field_name.clone(), field.span);
        let Some(displaced) = grouped.insert(field) else {
            return;
        };

        tracing::debug!(
            declaring_type = %grouped.declaring_type,
            view_id = id,
            kept = %name,
            replaced = %displaced.field_name,
            "view id collision"
        );

        let message = format!(
            "view id {id} is bound to both `{}` and `{name}` in `{}`",
            displaced.field_name,
            grouped.declaring_type.relative_name()
        );
        let builder = match span {
            Some(span) => diag.report(DiagnosticKind::DuplicateViewId, span),
            None => diag.report_unspanned(DiagnosticKind::DuplicateViewId),
        };
        let builder = builder.message(message);
        match displaced.span {
            Some(previous) => builder
                .related_to(format!("`{}` replaced", displaced.field_name), previous)
                .emit(),
            None => builder.emit(),
        }
    }

    pub fn get(&self, declaring_type: &TypeName) -> Option<&GroupedType> {
        self.types.get(declaring_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupedType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
