//! Small helpers over the tree-sitter Java syntax tree.

use tree_sitter::Node;

const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "enum_declaration",
    "record_declaration",
    "interface_declaration",
    "annotation_type_declaration",
];

/// Source text covered by `node`.
pub(super) fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

pub(super) fn is_type_declaration(node: Node<'_>) -> bool {
    TYPE_DECLARATION_KINDS.contains(&node.kind())
}

/// Interfaces and annotation types: members are implicitly `static final`.
pub(super) fn is_interface_like(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "interface_declaration" | "annotation_type_declaration"
    )
}

pub(super) fn is_comment(node: Node<'_>) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

pub(super) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !is_comment(*child))
        .collect()
}

/// Members of a type body. Enum bodies hide theirs one level deeper.
pub(super) fn body_members<'t>(decl: Node<'t>) -> Vec<Node<'t>> {
    let Some(body) = decl.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut members = Vec::new();
    for child in named_children(body) {
        if child.kind() == "enum_body_declarations" {
            members.extend(named_children(child));
        } else {
            members.push(child);
        }
    }
    members
}

/// The `modifiers` node of a declaration. It is a child, not a field.
pub(super) fn modifiers<'t>(member: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = member.walk();
    member
        .children(&mut cursor)
        .find(|child| child.kind() == "modifiers")
}

/// The keyword node (`private`, `static`, ...) inside `modifiers`, if present.
pub(super) fn modifier_keyword<'t>(modifiers: Node<'t>, keyword: &str) -> Option<Node<'t>> {
    let mut cursor = modifiers.walk();
    modifiers
        .children(&mut cursor)
        .find(|child| child.kind() == keyword)
}

pub(super) fn declarators<'t>(member: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = member.walk();
    member
        .children_by_field_name("declarator", &mut cursor)
        .collect()
}
