use indoc::indoc;

use super::{Config, render, render_with_config};
use crate::diagnostics::Diagnostics;
use crate::index::GroupingIndex;
use crate::model::FieldType;
use crate::synth::{GeneratedUnit, synthesize};
use crate::test_utils::field;

fn units(fields: Vec<crate::AnnotatedField>) -> Vec<GeneratedUnit> {
    let mut diag = Diagnostics::new();
    let index = GroupingIndex::build(fields, &mut diag);
    synthesize(&index, &mut diag)
}

fn sample_activity() -> GeneratedUnit {
    units(vec![
        field("app.ui.SampleActivity", "titleView", "TextView", 100),
        field("app.ui.SampleActivity", "subtitleView", "TextView", 101),
    ])
    .remove(0)
}

#[test]
fn default_layout() {
    insta::assert_snapshot!(render(&sample_activity()), @r"
    // Generated by viewbind. Do not edit.
    package app.ui;

    public class SampleActivityViewBinding {
      public static void bind(SampleActivity _sampleActivity) {
        _sampleActivity.titleView = (TextView)(_sampleActivity.findViewById(100));
        _sampleActivity.subtitleView = (TextView)(_sampleActivity.findViewById(101));
      }
    }
    ");
}

#[test]
fn without_header() {
    let config = Config::new().header(false);
    let out = render_with_config(&sample_activity(), &config);
    assert!(out.starts_with("package app.ui;\n\npublic class"));
}

#[test]
fn default_package_and_imports() {
    let mut bound = field("Main", "title", "TextView", 7);
    bound.field_type =
        FieldType::new("TextView").with_on_demand_imports(vec!["android.widget".to_owned()]);
    let unit = units(vec![bound]).remove(0);

    let out = render_with_config(&unit, &Config::new().header(false));
    assert_eq!(
        out,
        indoc! {"
            import android.widget.*;

            public class MainViewBinding {
              public static void bind(Main _main) {
                _main.title = (TextView)(_main.findViewById(7));
              }
            }
        "}
    );
}

#[test]
fn custom_indent() {
    let unit = units(vec![field("app.Outer.Inner", "v", "View", 1)]).remove(0);
    let out = render_with_config(&unit, &Config::new().header(false).indent("\t"));
    assert_eq!(
        out,
        "package app;\n\npublic class InnerViewBinding {\n\tpublic static void bind(Outer.Inner _inner) {\n\t\t_inner.v = (View)(_inner.findViewById(1));\n\t}\n}\n"
    );
}

#[test]
fn colored_output_keeps_the_text() {
    let unit = sample_activity();
    let plain = render(&unit);
    let colored = render_with_config(&unit, &Config::new().colored(true));

    assert!(colored.contains("\x1b[35mpackage\x1b[0m app.ui;"));
    assert!(colored.contains("\x1b[32m100\x1b[0m"));

    let stripped = colored
        .replace("\x1b[35m", "")
        .replace("\x1b[34m", "")
        .replace("\x1b[32m", "")
        .replace("\x1b[2m", "")
        .replace("\x1b[0m", "");
    assert_eq!(stripped, plain);
}
