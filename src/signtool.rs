//! Location of the signtool executable.

use std::path::PathBuf;

use crate::config::SigntoolSignConfig;
use crate::error::{Result, SignError};

/// Executable name looked up on `PATH` when no override is given.
const SIGNTOOL_EXE: &str = "signtool";

/// Resolve the signtool executable for this run.
///
/// An explicit `SIGNTOOL_PATH` override wins and must point at an existing
/// file; otherwise signtool is looked up on `PATH`.
pub fn locate(config: &SigntoolSignConfig) -> Result<PathBuf> {
    if let Some(path) = &config.signtool_path {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(SignError::InvalidConfig(format!(
            "SIGNTOOL_PATH does not point to an executable: {}",
            path.display()
        )));
    }

    which::which(SIGNTOOL_EXE).map_err(|_| {
        SignError::MissingDependency(
            "signtool not found on PATH.\n\
             \n\
             Install the Windows SDK:\n\
             https://developer.microsoft.com/en-us/windows/downloads/windows-sdk/\n\
             \n\
             Or set SIGNTOOL_PATH to the executable's location."
                .to_string(),
        )
    })
}
