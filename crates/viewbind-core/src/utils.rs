/// Suffix appended to a declaring type's simple name to name its companion type.
pub const BINDING_TYPE_SUFFIX: &str = "ViewBinding";

/// Name of the generated static method.
pub const BIND_METHOD_NAME: &str = "bind";

/// Lower-case the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// use viewbind_core::utils::lower_first_char;
/// assert_eq!(lower_first_char("SampleActivity"), "sampleActivity");
/// assert_eq!(lower_first_char("URLView"), "uRLView");
/// assert_eq!(lower_first_char(""), "");
/// ```
pub fn lower_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parameter name of the generated `bind` method for a declaring type.
///
/// The leading underscore keeps names like `Class` or `Package` clear of
/// Java keywords once lower-cased.
///
/// # Examples
/// ```
/// use viewbind_core::utils::binding_param_name;
/// assert_eq!(binding_param_name("SampleActivity"), "_sampleActivity");
/// ```
pub fn binding_param_name(simple_name: &str) -> String {
    format!("_{}", lower_first_char(simple_name))
}

/// Companion type name for a declaring type: `Main` → `MainViewBinding`.
pub fn binding_type_name(simple_name: &str) -> String {
    format!("{simple_name}{BINDING_TYPE_SUFFIX}")
}

/// Check whether `s` is a legal Java identifier (ASCII letters, digits, `_`, `$`).
///
/// Reserved keywords and the literals `true`, `false`, `null` are rejected.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !is_java_keyword(s)
}

pub fn is_java_keyword(s: &str) -> bool {
    matches!(
        s,
        "abstract"
            | "assert"
            | "boolean"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "class"
            | "const"
            | "continue"
            | "default"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "extends"
            | "final"
            | "finally"
            | "float"
            | "for"
            | "goto"
            | "if"
            | "implements"
            | "import"
            | "instanceof"
            | "int"
            | "interface"
            | "long"
            | "native"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "short"
            | "static"
            | "strictfp"
            | "super"
            | "switch"
            | "synchronized"
            | "this"
            | "throw"
            | "throws"
            | "transient"
            | "try"
            | "void"
            | "volatile"
            | "while"
            | "_"
            | "true"
            | "false"
            | "null"
    )
}

/// Check whether `s` is a dotted package name (`app.ui`). Empty means the default package.
pub fn is_package_name(s: &str) -> bool {
    s.is_empty() || s.split('.').all(is_java_identifier)
}

/// Collapse runs of whitespace into one space and drop spaces next to
/// `.`, `<`, `>`, `[`, `]`.
///
/// Normalizes type text copied from source: `Map< String ,View >` → `Map<String, View>`.
pub fn normalize_type_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space
            && !out.is_empty()
            && !matches!(c, '.' | '<' | '>' | '[' | ']' | ',')
            && !out.ends_with(['.', '<', '[', '(', ' '])
        {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
        if c == ',' {
            pending_space = true;
        }
    }
    out
}
