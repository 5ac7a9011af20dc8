//! Configuration loading from a real process environment.

use csp_signtool_sign::{SigntoolSignCommand, SigntoolSignConfig};

fn pipeline_env(extra: &[(&str, Option<&str>)]) -> Vec<(&'static str, Option<String>)> {
    let mut vars: Vec<(&'static str, Option<String>)> = vec![
        ("TPP_AUTH_URL", Some("https://tpp.example.com/vedauth".into())),
        ("TPP_HSM_URL", Some("https://tpp.example.com/vedhsm".into())),
        ("TPP_USERNAME", Some("signer".into())),
        ("TPP_PASSWORD", Some("hunter2".into())),
        ("INPUT", Some("build/installer.exe".into())),
        (
            "VENAFI_CLIENT_TOOLS_DIR",
            Some("/opt/venafi/codesign".into()),
        ),
        // Force-unset the optional knobs so ambient values cannot leak in.
        ("CERTIFICATE_SUBJECT_NAME", None),
        ("CERTIFICATE_SHA1", None),
        ("TIMESTAMPING_SERVERS", None),
        ("SIGNATURE_DIGEST_ALGOS", None),
        ("APPEND_SIGNATURES", None),
        ("EXTRA_CLI_ARGS", None),
        ("SIGNTOOL_PATH", None),
        ("MACHINE_CONFIGURATION", None),
    ];
    for (name, value) in extra {
        if let Some(slot) = vars.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.map(String::from);
        }
    }
    vars
}

#[test]
fn minimal_pipeline_environment_yields_defaults() {
    temp_env::with_vars(pipeline_env(&[]), || {
        let config = SigntoolSignConfig::from_env().unwrap();

        assert!(!config.append_signatures);
        assert!(!config.machine_configuration);
        assert_eq!(config.signature_digest_algos, vec!["sha256"]);
        assert!(config.timestamping_servers.is_empty());
        assert!(config.extra_cli_args.is_empty());
    });
}

#[test]
fn timestamping_servers_come_through_in_order() {
    temp_env::with_vars(
        pipeline_env(&[("TIMESTAMPING_SERVERS", Some("http://a,http://b"))]),
        || {
            let config = SigntoolSignConfig::from_env().unwrap();
            assert_eq!(config.timestamping_servers, vec!["http://a", "http://b"]);
        },
    );
}

#[test]
fn missing_required_variable_is_reported() {
    temp_env::with_vars(pipeline_env(&[("TPP_AUTH_URL", None)]), || {
        let err = SigntoolSignConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("TPP_AUTH_URL"));
    });
}

#[test]
fn conflicting_certificate_selectors_fail_at_construction() {
    temp_env::with_vars(
        pipeline_env(&[
            ("CERTIFICATE_SUBJECT_NAME", Some("Example Corp")),
            ("CERTIFICATE_SHA1", Some("0123456789abcdef")),
        ]),
        || {
            // Loading succeeds; the cross-field check belongs to the command.
            let config = SigntoolSignConfig::from_env().unwrap();
            assert!(SigntoolSignCommand::new(config).is_err());
        },
    );
}
