//! Command builders for the CLI.
//!
//! Every command accepts the same inputs. `check` also accepts the render
//! flags so a `generate` invocation can be turned into a `check` by swapping
//! the subcommand; they are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add the shared input and policy args.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(paths_arg())
        .arg(source_text_arg())
        .arg(manifest_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Add hidden render args (for commands that don't render).
fn with_hidden_render_args(cmd: Command) -> Command {
    cmd.arg(no_header_arg().hide(true))
        .arg(indent_arg().hide(true))
        .arg(output_dir_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("viewbind")
        .about("Generate view binding classes for @BindView fields")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Scan, synthesize, and write one `<Type>ViewBinding.java` per declaring type.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Write binding classes to an output directory")
        .override_usage(
            "\
  viewbind generate <PATH>... -o <DIR>
  viewbind generate --manifest <FILE> -o <DIR>
  viewbind generate -s <TEXT> -o <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  viewbind generate src/main/java -o build/generated
  viewbind generate Main.java --manifest ids.json -o out
  viewbind generate src --strict -o out        # fail on warnings"#,
        )
        .arg(output_dir_arg())
        .arg(no_header_arg())
        .arg(indent_arg());

    with_input_args(cmd)
}

/// Validate bindings without writing anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report binding diagnostics")
        .override_usage(
            "\
  viewbind check <PATH>...
  viewbind check --manifest <FILE>
  viewbind check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  viewbind check src/main/java
  viewbind check -s 'class A { @BindView(1) View v; }'
  cat ids.json | viewbind check --manifest -"#,
        );

    with_hidden_render_args(with_input_args(cmd))
}

/// Print generated sources to stdout.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print generated binding classes")
        .override_usage(
            "\
  viewbind dump <PATH>...
  viewbind dump -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  viewbind dump Main.java
  viewbind dump src --no-header --indent 4
  viewbind dump -s 'class A { @BindView(1) View v; }'"#,
        )
        .arg(no_header_arg())
        .arg(indent_arg())
        .arg(output_dir_arg().hide(true));

    with_input_args(cmd)
}
