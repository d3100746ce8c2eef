use indoc::indoc;

use super::{JavaScanner, Scanner};
use crate::diagnostics::DiagnosticKind;
use crate::source_map::SourceMap;
use crate::test_utils::{kinds, scan_java};

#[test]
fn sample_activity() {
    let (fields, diag) = scan_java(indoc! {"
        package app.ui;

        import android.app.Activity;
        import android.widget.*;

        public class SampleActivity extends Activity {
          @BindView(100)
          TextView titleView;

          @BindView(101)
          TextView subtitleView;

          @Override
          protected void onCreate(Bundle state) {
            super.onCreate(state);
          }
        }
    "});

    assert!(diag.is_empty(), "{:?}", kinds(&diag));
    assert_eq!(fields.len(), 2);

    let title = &fields[0];
    assert_eq!(title.declaring_type.qualified_name(), "app.ui.SampleActivity");
    assert_eq!(title.field_name, "titleView");
    assert_eq!(title.field_type.name, "TextView");
    assert_eq!(title.field_type.on_demand_imports, ["android.widget"]);
    assert_eq!(title.view_id, 100);

    let subtitle = &fields[1];
    assert_eq!(subtitle.field_name, "subtitleView");
    assert_eq!(subtitle.view_id, 101);
}

#[test]
fn default_package() {
    let (fields, _) = scan_java("class Main { @BindView(1) View root; }");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].declaring_type.package(), "");
    assert_eq!(fields[0].declaring_type.qualified_name(), "Main");
}

#[test]
fn span_covers_field_name() {
    let src = "class Main { @BindView(1) View root; }";
    let (fields, _) = scan_java(src);
    let span = fields[0].span.expect("span");
    assert_eq!(&src[span.range()], "root");
}

#[test]
fn nested_types() {
    let (fields, diag) = scan_java(indoc! {"
        package app;

        class Outer {
          @BindView(1) View outerView;

          static class Inner {
            @BindView(2) View innerView;

            class Deepest {
              @BindView(3) View deepView;
            }
          }
        }
    "});

    assert!(diag.is_empty());
    let owners: Vec<_> = fields
        .iter()
        .map(|f| f.declaring_type.relative_name())
        .collect();
    assert_eq!(owners, ["Outer", "Outer.Inner", "Outer.Inner.Deepest"]);
    assert_eq!(fields[2].declaring_type.simple_name(), "Deepest");
}

#[test]
fn enum_and_record_bodies() {
    let (fields, diag) = scan_java(indoc! {"
        enum Mode {
          ON, OFF;

          @BindView(1) View indicator;
        }

        record Point(int x, int y) {
          @BindView(2) static View label;
        }
    "});

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].declaring_type.relative_name(), "Mode");
    assert_eq!(kinds(&diag), [DiagnosticKind::StaticField]);
}

#[test]
fn one_field_per_declarator() {
    let (fields, _) = scan_java("class A { @BindView(5) View first, second; }");
    let names: Vec<_> = fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
    assert!(fields.iter().all(|f| f.view_id == 5));
}

#[test]
fn qualified_annotation_name() {
    let (fields, _) = scan_java("class A { @com.example.BindView(3) View v; }");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].view_id, 3);
}

#[test]
fn other_annotations_are_ignored() {
    let (fields, diag) = scan_java(indoc! {"
        class A {
          @Nullable View plain;
          @Deprecated @BindView(4) View bound;
          @BindViews(5) View lookalike;
        }
    "});

    assert!(diag.is_empty());
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field_name, "bound");
}

#[test]
fn method_bodies_are_not_entered() {
    let (fields, diag) = scan_java(indoc! {"
        class A {
          void setUp() {
            @BindView(1) View local = null;

            class Local {
              @BindView(2) View nested;
            }
          }
        }
    "});

    assert!(diag.is_empty());
    assert!(fields.is_empty());
}

#[test]
fn unbindable_modifiers() {
    let (fields, diag) = scan_java(indoc! {"
        class A {
          @BindView(1) private View hidden;
          @BindView(2) static View shared;
          @BindView(3) final View fixed;
          @BindView(4) private static View both;
          @BindView(5) protected View ok;
        }
    "});

    assert_eq!(
        kinds(&diag),
        [
            DiagnosticKind::PrivateField,
            DiagnosticKind::StaticField,
            DiagnosticKind::FinalField,
            DiagnosticKind::PrivateField,
            DiagnosticKind::StaticField,
        ]
    );
    let names: Vec<_> = fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(names, ["ok"]);
}

#[test]
fn modifier_diagnostic_points_at_keyword() {
    let src = "class A { @BindView(1) private View hidden; }";
    let (_, diag) = scan_java(src);
    let diag = diag.iter().next().expect("diagnostic");
    assert_eq!(diag.message(), "cannot bind private field `hidden`");
    assert_eq!(&src[diag.span.expect("span").range()], "private");
}

#[test]
fn missing_view_id() {
    let (fields, diag) = scan_java(indoc! {"
        class A {
          @BindView View marker;
          @BindView() View empty;
          @BindView(id = 3) View named;
        }
    "});

    assert!(fields.is_empty());
    assert_eq!(
        kinds(&diag),
        [
            DiagnosticKind::MissingViewId,
            DiagnosticKind::MissingViewId,
            DiagnosticKind::MissingViewId,
        ]
    );
    let last = diag.iter().last().expect("diagnostic");
    assert_eq!(
        last.message(),
        "`@BindView` requires a view id: found element `id`"
    );
}

#[test]
fn interface_members_are_rejected() {
    let (fields, diag) = scan_java(indoc! {"
        interface Screen {
          @BindView(1) View title = null;
        }
    "});

    assert!(fields.is_empty());
    assert_eq!(kinds(&diag), [DiagnosticKind::UnsupportedEnclosingType]);
    assert_eq!(
        diag.iter().next().expect("diagnostic").message(),
        "`@BindView` fields must be declared in a class, enum, or record: `Screen` is an interface"
    );
}

#[test]
fn single_type_import_qualifies_field_type() {
    let (fields, _) = scan_java(indoc! {"
        package app;

        import android.widget.TextView;
        import java.util.*;

        class A {
          @BindView(1) TextView title;
          @BindView(2) List<TextView> titles;
          @BindView(3) android.view.View root;
        }
    "});

    assert_eq!(fields[0].field_type.name, "android.widget.TextView");
    assert!(fields[0].field_type.on_demand_imports.is_empty());

    assert_eq!(fields[1].field_type.name, "List<android.widget.TextView>");
    assert_eq!(fields[1].field_type.on_demand_imports, ["java.util"]);

    assert_eq!(fields[2].field_type.name, "android.view.View");
    assert!(fields[2].field_type.on_demand_imports.is_empty());
}

#[test]
fn static_imports_are_ignored() {
    let (fields, _) = scan_java(indoc! {"
        import static android.widget.TextView.BufferType;
        import static android.R.id.*;

        class A {
          @BindView(1) BufferType kind;
        }
    "});

    assert_eq!(fields[0].field_type.name, "BufferType");
    assert!(fields[0].field_type.on_demand_imports.is_empty());
}

#[test]
fn member_types_become_package_relative() {
    let (fields, _) = scan_java(indoc! {"
        package app;

        class Screen {
          static class Header extends View {}

          static class Body {
            @BindView(1) Header header;
          }

          @BindView(2) Header top;
        }
    "});

    assert_eq!(fields[0].field_type.name, "Screen.Header");
    assert_eq!(fields[1].field_type.name, "Screen.Header");
}

#[test]
fn type_text_is_normalized() {
    let (fields, _) = scan_java(indoc! {"
        class A {
          @BindView(1) Map< String ,View > byName;
          @BindView(2) View grid[];
          @BindView(3) View [] row;
        }
    "});

    assert_eq!(fields[0].field_type.name, "Map<String, View>");
    assert_eq!(fields[1].field_type.name, "View[]");
    assert_eq!(fields[2].field_type.name, "View[]");
}

#[test]
fn syntax_errors_are_warnings() {
    let (_, diag) = scan_java(indoc! {"
        class A {
          @BindView(1) View v
        }
    "});

    assert!(!diag.has_errors());
    assert!(kinds(&diag).contains(&DiagnosticKind::SyntaxError));
}

#[test]
fn sources_are_scanned_in_order() {
    let mut sources = SourceMap::new();
    let b = sources.add_file("B.java", "class B { @BindView(2) View b; }");
    let a = sources.add_file("A.java", "class A { @BindView(1) View a; }");

    let (fields, diag) = JavaScanner::new().scan(&sources).expect("scan");
    assert!(diag.is_empty());

    let seen: Vec<_> = fields
        .iter()
        .map(|f| (f.declaring_type.simple_name().to_owned(), f.span.map(|s| s.source)))
        .collect();
    assert_eq!(
        seen,
        [("B".to_owned(), Some(b)), ("A".to_owned(), Some(a))]
    );
}
