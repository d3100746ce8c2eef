//! The static `bind` method of a companion type.

use std::fmt;

use viewbind_core::{Colors, ViewId};
use viewbind_core::utils::{BIND_METHOD_NAME, binding_param_name};

use crate::index::GroupedType;

/// The single parameter of `bind`: the declaring type instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Package-relative declaring type name (`Outer.Inner`).
    pub ty: String,
    pub name: String,
}

/// `<param>.<field> = (<type>)(<param>.findViewById(<id>));`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub field_name: String,
    pub field_type: String,
    pub view_id: ViewId,
}

impl Assignment {
    /// The statement text with the cast type and view id painted.
    pub fn render(&self, colors: Colors) -> String {
        format!(
            "{target}.{field} = ({ty})({target}.findViewById({id}));",
            target = self.target,
            field = self.field_name,
            ty = colors.paint(colors.ty, &self.field_type),
            id = colors.paint(colors.literal, &self.view_id.to_string()),
        )
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Colors::OFF))
    }
}

/// `public static void bind(<Type> <param>)` with one assignment per view id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMethod {
    pub name: String,
    pub param: Parameter,
    /// In ascending view id order.
    pub statements: Vec<Assignment>,
}

/// Build the `bind` method for one declaring type. `None` when it has no fields.
pub fn synthesize_method(grouped: &GroupedType) -> Option<BindMethod> {
    if grouped.is_empty() {
        return None;
    }

    let declaring_type = grouped.declaring_type();
    let param = Parameter {
        ty: declaring_type.relative_name(),
        name: binding_param_name(declaring_type.simple_name()),
    };

    let statements = grouped
        .iter()
        .map(|(view_id, field)| Assignment {
            target: param.name.clone(),
            field_name: field.field_name.clone(),
            field_type: field.field_type.name.clone(),
            view_id,
        })
        .collect();

    Some(BindMethod {
        name: BIND_METHOD_NAME.to_owned(),
        param,
        statements,
    })
}
