use viewbind_compiler::GeneratedUnit;
use viewbind_compiler::render::{Config, render_with_config};
use viewbind_core::Colors;

use super::input_loader::Inputs;
use super::run_common::{load_round, render_config, report};

pub struct DumpArgs {
    pub inputs: Inputs,
    pub strict: bool,
    pub header: bool,
    pub indent: u8,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let round = load_round(&args.inputs, args.strict);
    report(&round, args.color);

    let config = render_config(args.header, args.indent, args.color);
    print!("{}", dump(round.units(), &config));
}

/// Every unit preceded by a `// ==> path` banner, separated by blank lines.
pub fn dump(units: &[GeneratedUnit], config: &Config) -> String {
    let colors = Colors::new(config.colors.is_enabled());
    let mut out = String::new();

    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let banner = format!("// ==> {}", unit.relative_path().display());
        out.push_str(&colors.paint(colors.dim, &banner));
        out.push('\n');
        out.push_str(&render_with_config(unit, config));
    }

    out
}
