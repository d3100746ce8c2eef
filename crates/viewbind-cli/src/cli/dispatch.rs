//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields (ignoring hidden ones)
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::input_loader::Inputs;

pub struct GenerateParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub manifests: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub no_header: bool,
    pub indent: u8,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m, "paths"),
            source_text: m.get_one::<String>("source_text").cloned(),
            manifests: parse_paths(m, "manifest"),
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            no_header: m.get_flag("no_header"),
            indent: parse_indent(m),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            inputs: Inputs {
                paths: p.paths,
                source_text: p.source_text,
                manifests: p.manifests,
            },
            output: p.output,
            strict: p.strict,
            header: !p.no_header,
            indent: p.indent,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub manifests: Vec<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
    // Note: no_header, indent, output are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m, "paths"),
            source_text: m.get_one::<String>("source_text").cloned(),
            manifests: parse_paths(m, "manifest"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            inputs: Inputs {
                paths: p.paths,
                source_text: p.source_text,
                manifests: p.manifests,
            },
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub manifests: Vec<PathBuf>,
    pub strict: bool,
    pub no_header: bool,
    pub indent: u8,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m, "paths"),
            source_text: m.get_one::<String>("source_text").cloned(),
            manifests: parse_paths(m, "manifest"),
            strict: m.get_flag("strict"),
            no_header: m.get_flag("no_header"),
            indent: parse_indent(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            inputs: Inputs {
                paths: p.paths,
                source_text: p.source_text,
                manifests: p.manifests,
            },
            strict: p.strict,
            header: !p.no_header,
            indent: p.indent,
            color: p.color.should_colorize(),
        }
    }
}

/// Number of `-v` flags on a subcommand.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_paths(m: &ArgMatches, id: &str) -> Vec<PathBuf> {
    m.get_many::<PathBuf>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_indent(m: &ArgMatches) -> u8 {
    m.get_one::<u8>("indent").copied().unwrap_or(2)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
