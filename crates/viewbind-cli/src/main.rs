mod cli;
mod commands;

use cli::{CheckParams, DumpParams, GenerateParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };

    commands::logging::init(verbosity(m));

    match name {
        "generate" => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
