use std::process::ExitCode;

use csp_signtool_sign::command::SigntoolSignCommand;
use csp_signtool_sign::config::SigntoolSignConfig;
use csp_signtool_sign::{error, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let config = match SigntoolSignConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let command = match SigntoolSignCommand::new(config) {
        Ok(command) => command,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
