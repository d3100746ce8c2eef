//! Shared logic for generate, check and dump.

use std::fmt::Display;

use viewbind_compiler::render::Config;
use viewbind_compiler::{Round, RoundBuilder};

use super::input_loader::{Inputs, LoadedInputs, load_inputs};

/// Load inputs, scan them and synthesize the round. Fatal errors exit.
pub fn load_round(inputs: &Inputs, strict: bool) -> Round {
    let LoadedInputs { sources, manifests } = load_inputs(inputs).unwrap_or_else(|e| fail(e));

    RoundBuilder::new(sources)
        .with_manifests(manifests)
        .strict(strict)
        .scan()
        .unwrap_or_else(|e| fail(e))
        .synthesize()
}

/// Print the round's diagnostics to stderr, then exit if the round failed.
pub fn report(round: &Round, color: bool) {
    let diagnostics = round.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(round.source_map(), color));
    }

    if !round.is_valid() {
        std::process::exit(1);
    }
}

pub fn render_config(header: bool, indent: u8, color: bool) -> Config {
    Config::new()
        .header(header)
        .indent(" ".repeat(indent as usize))
        .colored(color)
}

pub fn fail(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1)
}
