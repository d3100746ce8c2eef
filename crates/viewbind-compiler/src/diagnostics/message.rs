use crate::source_map::Span;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Source level
    SyntaxError,

    // `@BindView` payload
    MissingViewId,
    NonConstantViewId,
    ViewIdOutOfRange,

    // Field shape: the generated class must be able to assign the field
    PrivateField,
    StaticField,
    FinalField,
    UnsupportedEnclosingType,

    // Manifest front end
    InvalidManifestEntry,

    // Grouping and synthesis
    DuplicateViewId,
    DuplicateGeneratedType,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::SyntaxError | Self::DuplicateViewId => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::NonConstantViewId => Some(
                "use an integer literal or a `static final int` constant declared in the same file",
            ),
            Self::MissingViewId => Some("e.g., `@BindView(100)`"),
            Self::PrivateField => Some("make the field package-private"),
            Self::StaticField => Some("bind an instance field instead"),
            Self::FinalField => Some("remove the `final` modifier"),
            Self::DuplicateViewId => Some("the later field wins; give each field its own id"),
            Self::DuplicateGeneratedType => {
                Some("rename one of the types; companion types are named after the simple name")
            }
            _ => None,
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::SyntaxError => "source contains syntax errors",

            Self::MissingViewId => "`@BindView` requires a view id",
            Self::NonConstantViewId => "view id is not an integer constant",
            Self::ViewIdOutOfRange => "view id does not fit in an `int`",

            Self::PrivateField => "cannot bind a private field",
            Self::StaticField => "cannot bind a static field",
            Self::FinalField => "cannot bind a final field",
            Self::UnsupportedEnclosingType => {
                "`@BindView` fields must be declared in a class, enum, or record"
            }

            Self::InvalidManifestEntry => "invalid manifest entry",

            Self::DuplicateViewId => "duplicate view id",
            Self::DuplicateGeneratedType => "duplicate generated type",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::NonConstantViewId => "view id `{}` is not an integer constant".to_string(),
            Self::ViewIdOutOfRange => "view id `{}` does not fit in an `int`".to_string(),
            Self::PrivateField => "cannot bind private field `{}`".to_string(),
            Self::StaticField => "cannot bind static field `{}`".to_string(),
            Self::FinalField => "cannot bind final field `{}`".to_string(),
            Self::DuplicateViewId => "{}".to_string(),
            Self::DuplicateGeneratedType => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Where the problem is. `None` for entries without a source position
    /// (manifest entries are not tracked byte by byte).
    pub(crate) span: Option<Span>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Option<Span>, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity())?;
        if let Some(span) = self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        write!(f, ": {}", self.message)?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.span.start, related.span.end
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
