//! Companion types: one `<Name>ViewBinding` unit per declaring type.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use viewbind_core::TypeName;
use viewbind_core::utils::binding_type_name;

use super::method::{BindMethod, synthesize_method};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::index::{GroupedType, GroupingIndex};
use crate::source_map::Span;

/// A synthesized top-level type, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Same package as the declaring type; empty for the default package.
    pub package_name: String,
    pub type_name: String,
    pub declaring_type: TypeName,
    /// On-demand imports (`android.widget`) the casts rely on, sorted.
    pub imports: Vec<String>,
    pub method: BindMethod,
}

impl GeneratedUnit {
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.type_name)
        }
    }

    /// Conventional location below an output root: `app/ui/MainViewBinding.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.type_name));
        path
    }
}

/// Wrap a declaring type's `bind` method into its companion type.
pub fn synthesize_type(grouped: &GroupedType) -> Option<GeneratedUnit> {
    let method = synthesize_method(grouped)?;
    let declaring_type = grouped.declaring_type();
    let package_name = declaring_type.package().to_owned();

    let imports: BTreeSet<&str> = grouped
        .iter()
        .flat_map(|(_, field)| field.field_type.on_demand_imports.iter())
        .map(String::as_str)
        .filter(|import| *import != package_name)
        .collect();

    Some(GeneratedUnit {
        type_name: binding_type_name(declaring_type.simple_name()),
        imports: imports.into_iter().map(str::to_owned).collect(),
        package_name,
        declaring_type: declaring_type.clone(),
        method,
    })
}

/// Synthesize every non-empty declaring type of the index, in index order.
///
/// Member types with the same simple name in one package map to the same
/// companion type; the later one is reported and left out.
#[tracing::instrument(level = "debug", skip_all, fields(types = index.len()))]
pub fn synthesize(index: &GroupingIndex, diag: &mut Diagnostics) -> Vec<GeneratedUnit> {
    let mut claimed: HashMap<String, &GroupedType> = HashMap::new();
    let mut units = Vec::new();

    for grouped in index.iter() {
        let Some(unit) = synthesize_type(grouped) else {
            continue;
        };

        match claimed.entry(unit.qualified_name()) {
            Entry::Occupied(entry) => {
                report_duplicate(diag, &unit, entry.get(), grouped);
                continue;
            }
            Entry::Vacant(entry) => {
                entry.insert(grouped);
            }
        }

        tracing::debug!(
            unit = %unit.qualified_name(),
            statements = unit.method.statements.len(),
            "synthesized unit"
        );
        units.push(unit);
    }

    units
}

fn report_duplicate(
    diag: &mut Diagnostics,
    unit: &GeneratedUnit,
    first: &GroupedType,
    second: &GroupedType,
) {
    let message = format!(
        "`{}` would be generated for both `{}` and `{}`",
        unit.qualified_name(),
        first.declaring_type().relative_name(),
        second.declaring_type().relative_name(),
    );

    let builder = match first_span(second) {
        Some(span) => diag.report(DiagnosticKind::DuplicateGeneratedType, span),
        None => diag.report_unspanned(DiagnosticKind::DuplicateGeneratedType),
    };
    let builder = builder.message(message);
    match first_span(first) {
        Some(span) => builder
            .related_to(
                format!("`{}` is bound here", first.declaring_type().relative_name()),
                span,
            )
            .emit(),
        None => builder.emit(),
    }
}

fn first_span(grouped: &GroupedType) -> Option<Span> {
    grouped.iter().find_map(|(_, field)| field.span)
}
