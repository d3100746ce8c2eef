use std::path::PathBuf;

use viewbind_compiler::DirFiler;

use super::input_loader::Inputs;
use super::run_common::{fail, load_round, render_config, report};

pub struct GenerateArgs {
    pub inputs: Inputs,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub header: bool,
    pub indent: u8,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let Some(output) = args.output else {
        fail("output directory is required: use -o/--output");
    };

    let round = load_round(&args.inputs, args.strict);
    report(&round, args.color);

    // Generated sources are files, never colored.
    let config = render_config(args.header, args.indent, false);
    let mut filer = DirFiler::new(output);
    match round.emit(&config, &mut filer) {
        Ok(written) => {
            tracing::info!(units = written.len(), root = %filer.root().display(), "generation finished");
        }
        Err(e) => fail(e),
    }
}
