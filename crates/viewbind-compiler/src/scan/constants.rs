//! Compile-time evaluation of view id expressions.
//!
//! A view id is an `int` constant expression: integer literals, unary and
//! binary arithmetic, and references to `static final int` constants declared
//! in the same file. Arithmetic follows Java `int` semantics (two's complement
//! wrap-around); only literals can be out of range.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;

use tree_sitter::Node;
use viewbind_core::ViewId;

use super::syntax::{self, text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EvalError {
    NotConstant { range: Range<usize>, text: String },
    OutOfRange { range: Range<usize>, text: String },
}

/// Owner (package-relative type name, `Main.Ids`) and constant name.
type ConstantKey = (String, String);

enum Folded {
    InProgress,
    Done(Result<i32, EvalError>),
}

/// `static final int` initializers of one file, keyed by owner and name.
pub(crate) struct ConstantTable<'t> {
    source: &'t str,
    package: String,
    values: HashMap<ConstantKey, Node<'t>>,
    /// Every constant is folded at most once.
    folded: RefCell<HashMap<ConstantKey, Folded>>,
    /// Package-relative names of every declared type, in document order.
    types: Vec<String>,
}

impl<'t> ConstantTable<'t> {
    pub(crate) fn collect(root: Node<'t>, source: &'t str, package: &str) -> Self {
        let mut table = Self {
            source,
            package: package.to_owned(),
            values: HashMap::new(),
            folded: RefCell::new(HashMap::new()),
            types: Vec::new(),
        };

        let mut scope = Vec::new();
        for decl in syntax::named_children(root) {
            if syntax::is_type_declaration(decl) {
                table.collect_type(decl, &mut scope);
            }
        }
        table
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Package-relative names of the types declared in this file.
    pub(crate) fn types(&self) -> &[String] {
        &self.types
    }

    fn collect_type(&mut self, decl: Node<'t>, scope: &mut Vec<String>) {
        let Some(name) = decl.child_by_field_name("name") else {
            return;
        };
        scope.push(text(name, self.source).to_owned());
        let owner = scope.join(".");
        self.types.push(owner.clone());

        let implicit = syntax::is_interface_like(decl);
        for member in syntax::body_members(decl) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    self.collect_constant(member, &owner, implicit);
                }
                _ if syntax::is_type_declaration(member) => self.collect_type(member, scope),
                _ => {}
            }
        }

        scope.pop();
    }

    fn collect_constant(&mut self, member: Node<'t>, owner: &str, implicit: bool) {
        let is_constant = implicit
            || syntax::modifiers(member).is_some_and(|m| {
                syntax::modifier_keyword(m, "static").is_some()
                    && syntax::modifier_keyword(m, "final").is_some()
            });
        if !is_constant {
            return;
        }

        let is_int = member
            .child_by_field_name("type")
            .is_some_and(|ty| text(ty, self.source) == "int");
        if !is_int {
            return;
        }

        for declarator in syntax::declarators(member) {
            if declarator.child_by_field_name("dimensions").is_some() {
                continue;
            }
            let (Some(name), Some(value)) = (
                declarator.child_by_field_name("name"),
                declarator.child_by_field_name("value"),
            ) else {
                continue;
            };
            self.values.insert(
                (owner.to_owned(), text(name, self.source).to_owned()),
                value,
            );
        }
    }

    /// Evaluate `expr` as written inside the type whose nesting chain is `scope`.
    pub(crate) fn eval(&self, expr: Node<'t>, scope: &[String]) -> Result<ViewId, EvalError> {
        self.eval_at(expr, scope)
    }

    fn eval_at(&self, node: Node<'t>, scope: &[String]) -> Result<i32, EvalError> {
        match node.kind() {
            "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal" => self.literal(node, node, false),

            "parenthesized_expression" => {
                let inner = syntax::named_children(node)
                    .into_iter()
                    .next()
                    .ok_or_else(|| self.not_constant(node))?;
                self.eval_at(inner, scope)
            }

            "unary_expression" => {
                let (Some(operator), Some(operand)) = (
                    node.child_by_field_name("operator"),
                    node.child_by_field_name("operand"),
                ) else {
                    return Err(self.not_constant(node));
                };
                let operator = text(operator, self.source);

                // `-2147483648` is only legal as a negated literal.
                if operator == "-" && operand.kind() == "decimal_integer_literal" {
                    return self.literal(operand, node, true);
                }

                let value = self.eval_at(operand, scope)?;
                match operator {
                    "-" => Ok(value.wrapping_neg()),
                    "+" => Ok(value),
                    "~" => Ok(!value),
                    _ => Err(self.not_constant(node)),
                }
            }

            "binary_expression" => self.binary(node, scope),

            "identifier" => {
                let name = text(node, self.source);
                let key = self
                    .resolve_simple(name, scope)
                    .ok_or_else(|| self.not_constant(node))?;
                self.fold(node, key)
            }

            "field_access" | "scoped_identifier" => {
                let (object, field) = match node.kind() {
                    "field_access" => (
                        node.child_by_field_name("object"),
                        node.child_by_field_name("field"),
                    ),
                    _ => (
                        node.child_by_field_name("scope"),
                        node.child_by_field_name("name"),
                    ),
                };
                let (Some(object), Some(field)) = (object, field) else {
                    return Err(self.not_constant(node));
                };
                let key = self
                    .resolve_qualified(text(object, self.source), text(field, self.source))
                    .ok_or_else(|| self.not_constant(node))?;
                self.fold(node, key)
            }

            _ => Err(self.not_constant(node)),
        }
    }

    /// Value of the constant `key`, referenced at `reference`.
    ///
    /// A reference back to a constant still being folded is a cycle.
    fn fold(&self, reference: Node<'t>, key: ConstantKey) -> Result<i32, EvalError> {
        match self.folded.borrow().get(&key) {
            Some(Folded::Done(result)) => return result.clone(),
            Some(Folded::InProgress) => return Err(self.not_constant(reference)),
            None => {}
        }
        let Some(&value) = self.values.get(&key) else {
            return Err(self.not_constant(reference));
        };

        self.folded
            .borrow_mut()
            .insert(key.clone(), Folded::InProgress);
        let scope: Vec<String> = key.0.split('.').map(str::to_owned).collect();
        let result = self.eval_at(value, &scope);
        self.folded
            .borrow_mut()
            .insert(key, Folded::Done(result.clone()));
        result
    }

    fn binary(&self, node: Node<'t>, scope: &[String]) -> Result<i32, EvalError> {
        let (Some(left), Some(operator), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("operator"),
            node.child_by_field_name("right"),
        ) else {
            return Err(self.not_constant(node));
        };

        let lhs = self.eval_at(left, scope)?;
        let rhs = self.eval_at(right, scope)?;

        let value = match text(operator, self.source) {
            "+" => lhs.wrapping_add(rhs),
            "-" => lhs.wrapping_sub(rhs),
            "*" => lhs.wrapping_mul(rhs),
            "/" | "%" if rhs == 0 => return Err(self.not_constant(node)),
            "/" => lhs.wrapping_div(rhs),
            "%" => lhs.wrapping_rem(rhs),
            "|" => lhs | rhs,
            "&" => lhs & rhs,
            "^" => lhs ^ rhs,
            "<<" => lhs.wrapping_shl(rhs as u32),
            ">>" => lhs.wrapping_shr(rhs as u32),
            ">>>" => (lhs as u32).wrapping_shr(rhs as u32) as i32,
            _ => return Err(self.not_constant(node)),
        };
        Ok(value)
    }

    /// Parse an integer literal. `reported` is the node blamed on failure.
    fn literal(&self, node: Node<'t>, reported: Node<'t>, negated: bool) -> Result<i32, EvalError> {
        let raw = text(node, self.source).replace('_', "");
        if raw.ends_with(['l', 'L']) {
            return Err(self.not_constant(reported));
        }

        // Non-decimal literals denote the 32-bit pattern, so `0xFFFFFFFF` is -1.
        let bits = |digits: Option<&str>, radix| {
            digits
                .and_then(|d| u32::from_str_radix(d, radix).ok())
                .map(|v| i64::from(v as i32))
        };

        let value = match node.kind() {
            "hex_integer_literal" => bits(raw.get(2..), 16),
            "binary_integer_literal" => bits(raw.get(2..), 2),
            "octal_integer_literal" => bits(
                raw.strip_prefix("0o")
                    .or_else(|| raw.strip_prefix("0O"))
                    .or_else(|| raw.strip_prefix('0')),
                8,
            ),
            _ => raw.parse::<i64>().ok(),
        };

        let value = match (value, negated) {
            (None, _) => return Err(self.out_of_range(reported)),
            (Some(v), true) if node.kind() == "decimal_integer_literal" => -v,
            (Some(v), true) => i64::from((v as i32).wrapping_neg()),
            (Some(v), false) => v,
        };

        i32::try_from(value).map_err(|_| self.out_of_range(reported))
    }

    fn resolve_simple(&self, name: &str, scope: &[String]) -> Option<ConstantKey> {
        (1..=scope.len()).rev().find_map(|depth| {
            let key = (scope[..depth].join("."), name.to_owned());
            self.values.contains_key(&key).then_some(key)
        })
    }

    fn resolve_qualified(&self, object: &str, name: &str) -> Option<ConstantKey> {
        let object: String = object.chars().filter(|c| !c.is_whitespace()).collect();
        let relative = if self.package.is_empty() {
            object.as_str()
        } else {
            object
                .strip_prefix(self.package.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(&object)
        };

        let suffix = format!(".{relative}");
        let owner = self
            .types
            .iter()
            .find(|ty| ty.as_str() == relative || ty.ends_with(&suffix))?;
        let key = (owner.clone(), name.to_owned());
        self.values.contains_key(&key).then_some(key)
    }

    fn not_constant(&self, node: Node<'_>) -> EvalError {
        EvalError::NotConstant {
            range: node.byte_range(),
            text: text(node, self.source).to_owned(),
        }
    }

    fn out_of_range(&self, node: Node<'_>) -> EvalError {
        EvalError::OutOfRange {
            range: node.byte_range(),
            text: text(node, self.source).to_owned(),
        }
    }
}
