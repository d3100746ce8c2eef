use std::path::PathBuf;

use viewbind_core::{Colors, TypeName};

use super::{Assignment, synthesize, synthesize_method, synthesize_type};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::index::{GroupedType, GroupingIndex};
use crate::model::FieldType;
use crate::source_map::{SourceId, Span};
use crate::test_utils::{field, kinds};

fn grouped(fields: Vec<crate::AnnotatedField>) -> GroupedType {
    let mut diag = Diagnostics::new();
    let index = GroupingIndex::build(fields, &mut diag);
    index.iter().next().cloned().expect("one declaring type")
}

#[test]
fn assignment_statement() {
    let assignment = Assignment {
        target: "_main".to_owned(),
        field_name: "title".to_owned(),
        field_type: "TextView".to_owned(),
        view_id: -3,
    };
    insta::assert_snapshot!(
        assignment.to_string(),
        @"_main.title = (TextView)(_main.findViewById(-3));"
    );
}

#[test]
fn colored_statement_matches_plain_text() {
    let assignment = Assignment {
        target: "_main".to_owned(),
        field_name: "title".to_owned(),
        field_type: "TextView".to_owned(),
        view_id: 100,
    };

    let colored = assignment.render(Colors::ON);
    assert_eq!(
        colored,
        "_main.title = (\x1b[34mTextView\x1b[0m)(_main.findViewById(\x1b[32m100\x1b[0m));"
    );
    assert_eq!(assignment.render(Colors::OFF), assignment.to_string());
}

#[test]
fn sample_activity_method() {
    let grouped = grouped(vec![
        field("app.ui.SampleActivity", "subtitleView", "TextView", 101),
        field("app.ui.SampleActivity", "titleView", "TextView", 100),
    ]);

    let method = synthesize_method(&grouped).expect("method");
    assert_eq!(method.name, "bind");
    assert_eq!(method.param.ty, "SampleActivity");
    assert_eq!(method.param.name, "_sampleActivity");

    let statements: Vec<_> = method.statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        statements,
        [
            "_sampleActivity.titleView = (TextView)(_sampleActivity.findViewById(100));",
            "_sampleActivity.subtitleView = (TextView)(_sampleActivity.findViewById(101));",
        ]
    );
}

#[test]
fn param_name_does_not_depend_on_field_count() {
    let one = grouped(vec![field("app.Main", "a", "View", 1)]);
    let many = grouped(vec![
        field("app.Main", "a", "View", 1),
        field("app.Main", "b", "View", 2),
        field("app.Main", "c", "View", 3),
    ]);

    let one = synthesize_method(&one).expect("method");
    let many = synthesize_method(&many).expect("method");
    assert_eq!(one.param, many.param);
    assert_eq!(one.param.name, "_main");
}

#[test]
fn nested_declaring_type_uses_relative_name() {
    let grouped = grouped(vec![field("app.Outer.Holder", "icon", "ImageView", 4)]);
    let unit = synthesize_type(&grouped).expect("unit");

    assert_eq!(unit.method.param.ty, "Outer.Holder");
    assert_eq!(unit.method.param.name, "_holder");
    assert_eq!(unit.type_name, "HolderViewBinding");
    assert_eq!(unit.qualified_name(), "app.HolderViewBinding");
}

#[test]
fn empty_group_synthesizes_nothing() {
    let empty = GroupedType::new(TypeName::new("app", "Main"));
    assert!(synthesize_method(&empty).is_none());
    assert!(synthesize_type(&empty).is_none());
}

#[test]
fn unit_location() {
    let unit = synthesize_type(&grouped(vec![field("app.ui.Main", "a", "View", 1)]))
        .expect("unit");
    assert_eq!(unit.package_name, "app.ui");
    assert_eq!(
        unit.relative_path(),
        PathBuf::from("app").join("ui").join("MainViewBinding.java")
    );

    let default_package = synthesize_type(&grouped(vec![field("Main", "a", "View", 1)]))
        .expect("unit");
    assert_eq!(default_package.qualified_name(), "MainViewBinding");
    assert_eq!(
        default_package.relative_path(),
        PathBuf::from("MainViewBinding.java")
    );
}

#[test]
fn on_demand_imports_are_merged() {
    let mut a = field("app.ui.Main", "a", "TextView", 1);
    a.field_type = FieldType::new("TextView")
        .with_on_demand_imports(vec!["android.widget".to_owned(), "app.ui".to_owned()]);
    let mut b = field("app.ui.Main", "b", "View", 2);
    b.field_type = FieldType::new("View").with_on_demand_imports(vec![
        "android.widget".to_owned(),
        "android.view".to_owned(),
    ]);

    let unit = synthesize_type(&grouped(vec![a, b])).expect("unit");
    assert_eq!(unit.imports, ["android.view", "android.widget"]);
}

#[test]
fn one_unit_per_declaring_type() {
    let mut diag = Diagnostics::new();
    let index = GroupingIndex::build(
        vec![
            field("app.A", "a", "View", 1),
            field("app.B", "b", "View", 1),
            field("app.A", "c", "View", 2),
        ],
        &mut diag,
    );

    let units = synthesize(&index, &mut diag);
    assert!(diag.is_empty());
    let names: Vec<_> = units.iter().map(|u| u.qualified_name()).collect();
    assert_eq!(names, ["app.AViewBinding", "app.BViewBinding"]);
    assert_eq!(units[0].method.statements.len(), 2);
    assert_eq!(units[1].method.statements.len(), 1);
}

#[test]
fn same_simple_name_in_one_package_is_an_error() {
    let first = Span::new(SourceId(0), 0..1);
    let second = Span::new(SourceId(0), 5..6);
    let mut diag = Diagnostics::new();
    let index = GroupingIndex::build(
        vec![
            field("app.A.Holder", "a", "View", 1).with_span(first),
            field("app.B.Holder", "b", "View", 1).with_span(second),
        ],
        &mut diag,
    );

    let units = synthesize(&index, &mut diag);
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].declaring_type.relative_name(), "A.Holder");

    assert_eq!(kinds(&diag), [DiagnosticKind::DuplicateGeneratedType]);
    let diag = diag.iter().next().expect("diagnostic");
    assert_eq!(
        diag.message(),
        "`app.HolderViewBinding` would be generated for both `A.Holder` and `B.Holder`"
    );
    assert_eq!(diag.span, Some(second));
    assert_eq!(diag.related[0].span, first);
}

#[test]
fn same_simple_name_in_other_packages_is_fine() {
    let mut diag = Diagnostics::new();
    let index = GroupingIndex::build(
        vec![
            field("app.a.Holder", "a", "View", 1),
            field("app.b.Holder", "b", "View", 1),
        ],
        &mut diag,
    );

    let units = synthesize(&index, &mut diag);
    assert!(diag.is_empty());
    assert_eq!(units.len(), 2);
}
