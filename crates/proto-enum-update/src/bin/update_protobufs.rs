use clap::Parser;
use proto_enum_update::logging::init_logging;
use proto_enum_update::{CliArgs, run};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    init_logging();
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
