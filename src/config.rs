//! Environment-driven configuration for the sign command.
//!
//! Every setting arrives through environment variables, the way CI pipelines
//! deliver them. The loader snapshots the environment once, reads each
//! variable exactly once, and reports every missing or malformed variable in
//! a single error so a pipeline run surfaces all problems at once.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use zeroize::Zeroizing;

use crate::error::{Result, SignError};

/// Digest algorithm used when `SIGNATURE_DIGEST_ALGOS` is not set.
pub const DEFAULT_DIGEST_ALGO: &str = "sha256";

/// Immutable configuration for one signing run.
///
/// A variable that is set to the empty string counts as unset: required
/// variables reject it, optional ones fall back to their default.
pub struct SigntoolSignConfig {
    /// TPP authentication service base URL (`TPP_AUTH_URL`).
    pub tpp_auth_url: String,
    /// TPP HSM/signing service base URL (`TPP_HSM_URL`).
    pub tpp_hsm_url: String,
    /// Credential principal (`TPP_USERNAME`).
    pub tpp_username: String,
    /// Credential secret (`TPP_PASSWORD`); zeroed on drop.
    pub tpp_password: Zeroizing<String>,
    /// File to be signed (`INPUT`).
    pub input: PathBuf,
    /// Certificate selection by subject name (`CERTIFICATE_SUBJECT_NAME`).
    pub certificate_subject_name: Option<String>,
    /// Certificate selection by SHA-1 thumbprint (`CERTIFICATE_SHA1`).
    pub certificate_sha1: Option<String>,
    /// Timestamping server URLs, in order (`TIMESTAMPING_SERVERS`).
    pub timestamping_servers: Vec<String>,
    /// Signature digest algorithms, in order (`SIGNATURE_DIGEST_ALGOS`).
    pub signature_digest_algos: Vec<String>,
    /// Append rather than replace existing signatures (`APPEND_SIGNATURES`).
    pub append_signatures: bool,
    /// Arguments passed through to signtool verbatim (`EXTRA_CLI_ARGS`).
    pub extra_cli_args: Vec<String>,
    /// Explicit signtool executable override (`SIGNTOOL_PATH`).
    pub signtool_path: Option<PathBuf>,
    /// Installation root of the CSP client tools (`VENAFI_CLIENT_TOOLS_DIR`).
    pub venafi_client_tools_dir: PathBuf,
    /// Use the machine-wide CSP configuration (`MACHINE_CONFIGURATION`).
    pub machine_configuration: bool,
}

impl SigntoolSignConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build configuration from an environment snapshot.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut env = EnvReader::new(vars);

        let config = Self {
            tpp_auth_url: env.require("TPP_AUTH_URL"),
            tpp_hsm_url: env.require("TPP_HSM_URL"),
            tpp_username: env.require("TPP_USERNAME"),
            tpp_password: Zeroizing::new(env.require("TPP_PASSWORD")),
            input: env.require("INPUT").into(),
            certificate_subject_name: env.optional("CERTIFICATE_SUBJECT_NAME"),
            certificate_sha1: env.optional("CERTIFICATE_SHA1"),
            timestamping_servers: env.list("TIMESTAMPING_SERVERS", &[]),
            signature_digest_algos: env.list("SIGNATURE_DIGEST_ALGOS", &[DEFAULT_DIGEST_ALGO]),
            append_signatures: env.flag("APPEND_SIGNATURES"),
            extra_cli_args: env.list("EXTRA_CLI_ARGS", &[]),
            signtool_path: env.optional("SIGNTOOL_PATH").map(PathBuf::from),
            venafi_client_tools_dir: env.require("VENAFI_CLIENT_TOOLS_DIR").into(),
            machine_configuration: env.flag("MACHINE_CONFIGURATION"),
        };

        env.finish()?;
        Ok(config)
    }
}

impl fmt::Debug for SigntoolSignConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigntoolSignConfig")
            .field("tpp_auth_url", &self.tpp_auth_url)
            .field("tpp_hsm_url", &self.tpp_hsm_url)
            .field("tpp_username", &self.tpp_username)
            .field("tpp_password", &"<redacted>")
            .field("input", &self.input)
            .field("certificate_subject_name", &self.certificate_subject_name)
            .field("certificate_sha1", &self.certificate_sha1)
            .field("timestamping_servers", &self.timestamping_servers)
            .field("signature_digest_algos", &self.signature_digest_algos)
            .field("append_signatures", &self.append_signatures)
            .field("extra_cli_args", &self.extra_cli_args)
            .field("signtool_path", &self.signtool_path)
            .field("venafi_client_tools_dir", &self.venafi_client_tools_dir)
            .field("machine_configuration", &self.machine_configuration)
            .finish()
    }
}

/// Collects every problem found while reading variables instead of failing
/// on the first one. Accessors return placeholder values once a problem is
/// recorded; `finish` rejects the whole load before a placeholder can leak.
struct EnvReader<'a> {
    vars: &'a HashMap<String, String>,
    problems: Vec<String>,
}

impl<'a> EnvReader<'a> {
    fn new(vars: &'a HashMap<String, String>) -> Self {
        Self {
            vars,
            problems: Vec::new(),
        }
    }

    fn get(&self, name: &str) -> Option<&'a String> {
        self.vars.get(name).filter(|value| !value.is_empty())
    }

    fn require(&mut self, name: &str) -> String {
        match self.get(name) {
            Some(value) => value.clone(),
            None => {
                self.problems
                    .push(format!("{name}: required environment variable is not set"));
                String::new()
            }
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    /// Comma-delimited list; elements are trimmed, empty elements dropped.
    fn list(&self, name: &str, default: &[&str]) -> Vec<String> {
        match self.get(name) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|element| !element.is_empty())
                .map(String::from)
                .collect(),
            None => default.iter().map(|element| (*element).to_string()).collect(),
        }
    }

    /// Boolean flag defaulting to `false` when unset.
    fn flag(&mut self, name: &str) -> bool {
        let Some(raw) = self.get(name) else {
            return false;
        };
        match parse_bool(raw) {
            Some(value) => value,
            None => {
                self.problems.push(format!(
                    "{name}: expected a boolean such as 'true' or 'false' (got {raw:?})"
                ));
                false
            }
        }
    }

    fn finish(self) -> Result<()> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(SignError::InvalidConfig(self.problems.join("\n")))
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" => Some(true),
        "0" | "false" | "no" | "off" | "n" => Some(false),
        _ => None,
    }
}
