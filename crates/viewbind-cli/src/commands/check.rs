use super::input_loader::Inputs;
use super::run_common::{load_round, report};

pub struct CheckArgs {
    pub inputs: Inputs,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let round = load_round(&args.inputs, args.strict);
    report(&round, args.color);

    // Silent on success (like cargo check)
}
