//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! with per-command visibility set via `.hide(true)`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Java source files or directories (positional, repeatable).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .num_args(0..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Java files or directories (`-` reads stdin)")
}

/// Inline Java source (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline Java source")
}

/// JSON binding manifest (--manifest, repeatable).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .long("manifest")
        .value_name("FILE")
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("JSON binding manifest (`-` reads stdin)")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Omit the generated-file header comment (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the generated-file header comment")
}

/// Indentation width of generated sources (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(u8).range(0..=16))
        .help("Spaces per indentation level")
}

/// Output directory for generated sources (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory to write generated sources to")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log progress to stderr (-v debug, -vv trace)")
}
