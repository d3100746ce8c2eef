//! JSON manifest front end.
//!
//! Each source in the map is one manifest. Entries are validated one by one;
//! an invalid entry is reported and skipped, malformed JSON fails the scan.

use viewbind_core::{RawField, TypeName, ViewId, utils};

use super::Scanner;
use crate::PassResult;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{AnnotatedField, FieldType};
use crate::source_map::SourceMap;

/// Reads annotated fields from JSON manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestScanner;

impl ManifestScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for ManifestScanner {
    #[tracing::instrument(level = "debug", skip_all, fields(manifests = sources.len()))]
    fn scan(&self, sources: &SourceMap) -> PassResult<Vec<AnnotatedField>> {
        let mut fields = Vec::new();
        let mut diag = Diagnostics::new();

        for source in sources.iter() {
            let entries = viewbind_core::parse_manifest(source.content)?;
            tracing::debug!(
                manifest = source.kind.display_name(),
                entries = entries.len(),
                "read manifest"
            );

            for (index, entry) in entries.into_iter().enumerate() {
                match field_from_entry(entry) {
                    Ok(field) => fields.push(field),
                    Err(detail) => diag
                        .report_unspanned(DiagnosticKind::InvalidManifestEntry)
                        .message(format!(
                            "{} entry {index}: {detail}",
                            source.kind.display_name()
                        ))
                        .emit(),
                }
            }
        }

        Ok((fields, diag))
    }
}

fn field_from_entry(entry: RawField) -> Result<AnnotatedField, String> {
    let declaring_type = match &entry.package {
        Some(package) => {
            if !utils::is_package_name(package) {
                return Err(format!("`{package}` is not a package name"));
            }
            let nesting: Vec<String> = entry
                .declaring_type
                .split('.')
                .map(str::to_owned)
                .collect();
            if !nesting.iter().all(|segment| utils::is_java_identifier(segment)) {
                return Err(format!("`{}` is not a type name", entry.declaring_type));
            }
            TypeName::from_parts(package.as_str(), nesting)
        }
        None => TypeName::best_guess(&entry.declaring_type),
    }
    .ok_or_else(|| format!("`{}` is not a type name", entry.declaring_type))?;

    if !utils::is_java_identifier(&entry.field_name) {
        return Err(format!("`{}` is not a valid field name", entry.field_name));
    }

    let field_type = utils::normalize_type_text(&entry.field_type);
    if field_type.is_empty() {
        return Err(format!("field `{}` has no type", entry.field_name));
    }

    let view_id = ViewId::try_from(entry.view_id)
        .map_err(|_| format!("view id {} does not fit in an `int`", entry.view_id))?;

    Ok(AnnotatedField::new(
        declaring_type,
        entry.field_name,
        FieldType::new(field_type),
        view_id,
    ))
}
