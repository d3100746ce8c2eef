#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for viewbind.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON field manifest
//! - **Model layer**: Java type names and view ids shared by every stage

pub mod colors;
pub mod utils;


pub use colors::Colors;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw field entry from a binding manifest.
///
/// Hosts with their own declaration model describe annotated fields in JSON
/// instead of handing us Java sources.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    /// Qualified (`app.ui.Main`) or, when `package` is set, package-relative name.
    pub declaring_type: String,
    #[serde(default)]
    pub package: Option<String>,
    pub field_name: String,
    pub field_type: String,
    /// Wider than `ViewId` so out-of-range values reach validation.
    pub view_id: i64,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum RawManifest {
    Fields(Vec<RawField>),
    Wrapped { fields: Vec<RawField> },
}

/// Parse manifest content: either a bare array or `{"fields": [...]}`.
pub fn parse_manifest(json: &str) -> Result<Vec<RawField>, serde_json::Error> {
    let manifest: RawManifest = serde_json::from_str(json)?;
    Ok(match manifest {
        RawManifest::Fields(fields) | RawManifest::Wrapped { fields } => fields,
    })
}

// ============================================================================
// Model Layer
// ============================================================================

/// Widget identifier carried by `@BindView` (a Java `int`).
pub type ViewId = i32;

/// Name of a Java type: its package plus the chain of enclosing type names.
///
/// `app.ui.Outer.Inner` is package `app.ui`, nesting `[Outer, Inner]`.
/// The nesting chain is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    package: String,
    nesting: Vec<String>,
}

impl TypeName {
    /// A top-level type. `package` is empty for the default package.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            nesting: vec![simple_name.into()],
        }
    }

    /// Build from a package and a nesting chain; `None` if the chain is empty.
    pub fn from_parts(package: impl Into<String>, nesting: Vec<String>) -> Option<Self> {
        if nesting.is_empty() {
            return None;
        }
        Some(Self {
            package: package.into(),
            nesting,
        })
    }

    /// A member type declared inside `self`.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut nesting = self.nesting.clone();
        nesting.push(simple_name.into());
        Self {
            package: self.package.clone(),
            nesting,
        }
    }

    /// Split a dotted name into package and types by capitalization.
    ///
    /// Leading segments starting lowercase form the package; every remaining
    /// segment must start uppercase.
    ///
    /// # Examples
    /// ```
    /// use viewbind_core::TypeName;
    /// let name = TypeName::best_guess("app.ui.Outer.Inner").unwrap();
    /// assert_eq!(name.package(), "app.ui");
    /// assert_eq!(name.relative_name(), "Outer.Inner");
    /// assert!(TypeName::best_guess("app.ui").is_none());
    /// ```
    pub fn best_guess(s: &str) -> Option<Self> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.iter().any(|seg| !utils::is_java_identifier(seg)) {
            return None;
        }

        let split = segments
            .iter()
            .position(|seg| seg.starts_with(|c: char| c.is_ascii_uppercase()))?;
        let (package, types) = segments.split_at(split);
        if !types
            .iter()
            .all(|seg| seg.starts_with(|c: char| c.is_ascii_uppercase()))
        {
            return None;
        }

        Self::from_parts(
            package.join("."),
            types.iter().map(|seg| (*seg).to_owned()).collect(),
        )
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn nesting(&self) -> &[String] {
        &self.nesting
    }

    pub fn simple_name(&self) -> &str {
        self.nesting.last().map(String::as_str).unwrap_or_default()
    }

    /// Name as written from inside the same package: `Outer.Inner`.
    pub fn relative_name(&self) -> String {
        self.nesting.join(".")
    }

    /// Canonical name: `app.ui.Outer.Inner`.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name()
        } else {
            format!("{}.{}", self.package, self.relative_name())
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified_name())
    }
}
