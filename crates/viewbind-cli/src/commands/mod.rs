pub mod check;
pub mod dump;
pub mod generate;
pub mod input_loader;
pub mod logging;
pub mod run_common;
