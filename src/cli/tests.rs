use super::*;
use std::path::PathBuf;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_arguments_defaults_to_chat() {
    let args = parse_args(&["chatline"]);
    assert!(args.command.is_none());
    assert!(args.config.is_none());
    assert!(args.log.is_none());
}

#[test]
fn config_and_log_flags_are_global() {
    let argv = ["chatline", "chat", "--config", "/tmp/c.json", "-l", "chat.log"];
    let args = parse_args(&argv);
    assert_eq!(args.command, Some(Commands::Chat));
    assert_eq!(args.config, Some(PathBuf::from("/tmp/c.json")));
    assert_eq!(args.log, Some(PathBuf::from("chat.log")));
}

#[test]
fn config_subcommand_parses() {
    let args = parse_args(&["chatline", "-c", "alt.json", "config"]);
    assert_eq!(args.command, Some(Commands::Config));
    assert_eq!(args.config, Some(PathBuf::from("alt.json")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Args::try_parse_from(["chatline", "auth"]).is_err());
}

#[test]
fn long_version_includes_package_version() {
    assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}
