//! Parse tests for check-deps, config and global options.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check_deps_defaults() {
    match parse(&["rparams", "check-deps"]) {
        CliCommand::CheckDeps {
            active_plugins,
            classes,
            constants,
            no_admin,
            no_capability,
        } => {
            assert!(active_plugins.is_empty());
            assert!(classes.is_empty());
            assert!(constants.is_empty());
            assert!(!no_admin);
            assert!(!no_capability);
        }
        _ => panic!("expected CheckDeps"),
    }
}

#[test]
fn cli_parse_check_deps_repeated() {
    match parse(&[
        "rparams",
        "check-deps",
        "--active-plugin",
        "akismet/akismet.php",
        "--active-plugin",
        "redirection/redirection.php",
        "--class",
        "Red_Item",
        "--constant",
        "REDIRECTION_FILE",
        "--no-admin",
    ]) {
        CliCommand::CheckDeps {
            active_plugins,
            classes,
            constants,
            no_admin,
            no_capability,
        } => {
            assert_eq!(
                active_plugins,
                ["akismet/akismet.php", "redirection/redirection.php"]
            );
            assert_eq!(classes, ["Red_Item"]);
            assert_eq!(constants, ["REDIRECTION_FILE"]);
            assert!(no_admin);
            assert!(!no_capability);
        }
        _ => panic!("expected CheckDeps with flags"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["rparams", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_global_config_path() {
    let cli = Cli::try_parse_from(["rparams", "merge", "/t", "/s", "--config", "/tmp/r.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/r.toml")));
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["rparams", "status"]).is_err());
}
