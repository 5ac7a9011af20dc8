//! Lifecycle of one signing run.

use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::config::SigntoolSignConfig;
use crate::error::{Result, SignError};

/// One signtool invocation against CodeSign Protect.
///
/// Construction validates cross-field consistency; `run` owns the scratch
/// directory for the duration of the invocation and removes it on every
/// exit path.
#[derive(Debug)]
pub struct SigntoolSignCommand {
    config: SigntoolSignConfig,
}

impl SigntoolSignCommand {
    /// Validate the configuration and build the command.
    ///
    /// The two certificate selectors are mutually exclusive: signtool can
    /// pick a certificate by subject name or by thumbprint, not both.
    pub fn new(config: SigntoolSignConfig) -> Result<Self> {
        if config.certificate_subject_name.is_some() && config.certificate_sha1.is_some() {
            return Err(SignError::InvalidConfig(
                "Only one of 'CERTIFICATE_SUBJECT_NAME' or 'CERTIFICATE_SHA1' may be set, \
                 but not both"
                    .to_string(),
            ));
        }

        Ok(Self { config })
    }

    /// Execute the signing workflow.
    ///
    /// Creates a scratch directory before any signing work and removes it
    /// whether the workflow succeeds or fails. The directory path stays
    /// internal to this invocation.
    pub async fn run(self) -> Result<()> {
        let scratch = TempDir::new()?;
        debug!(path = %scratch.path().display(), "created scratch directory");

        let result = self.execute(scratch.path()).await;

        // close() reports removal failures that Drop would swallow; Drop
        // remains the backstop if execute panics.
        if let Err(e) = scratch.close() {
            warn!("failed to remove scratch directory: {e}");
        }

        result
    }

    async fn execute(&self, _scratch: &Path) -> Result<()> {
        info!(
            input = %self.config.input.display(),
            digests = ?self.config.signature_digest_algos,
            machine_configuration = self.config.machine_configuration,
            "preparing signtool invocation"
        );

        // TODO: build the signtool argument list from the configuration and
        // drive the executable through the CSP driver, using the scratch
        // directory for intermediate artifacts.
        Ok(())
    }
}
