#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["generate", "normalize", "check-format", "resolve"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "--format",
        "--separator",
        "--allow-uppercase",
        "--ascii-only",
        "--max-increment",
        "--max-length",
        "--config",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `slugkit generate --help` must mention `--ascii`, `--language` and `TEXT`.
#[test]
fn test_generate_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("generate")
        .expect("generate subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--ascii"), "generate help should mention --ascii");
    assert!(
        help.contains("--language"),
        "generate help should mention --language"
    );
    assert!(help.contains("TEXT"), "generate help should mention TEXT");
}

/// `slugkit resolve --help` must mention `--existing` and `FILE`.
#[test]
fn test_resolve_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("resolve")
        .expect("resolve subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(
        help.contains("--existing"),
        "resolve help should mention --existing"
    );
    assert!(help.contains("FILE"), "resolve help should mention FILE");
}

#[test]
fn test_generate_parses_flags() {
    let cli = Cli::try_parse_from([
        "slugkit",
        "generate",
        "--ascii",
        "--language",
        "de",
        "Über Straße",
    ])
    .expect("should parse generate");
    match cli.command {
        Command::Generate {
            text,
            ascii,
            language,
        } => {
            assert_eq!(text, "Über Straße");
            assert!(ascii);
            assert_eq!(language.as_deref(), Some("de"));
        }
        _ => panic!("expected Generate subcommand"),
    }
}

#[test]
fn test_generate_accepts_leading_hyphen_text() {
    let cli = Cli::try_parse_from(["slugkit", "generate", "--", "-leading"])
        .expect("should parse hyphenated text");
    match cli.command {
        Command::Generate { text, .. } => assert_eq!(text, "-leading"),
        _ => panic!("expected Generate subcommand"),
    }
}

#[test]
fn test_check_format_parses() {
    let cli = Cli::try_parse_from(["slugkit", "check-format", "blog/{slug}"])
        .expect("should parse check-format");
    match cli.command {
        Command::CheckFormat { uri_format } => assert_eq!(uri_format, "blog/{slug}"),
        _ => panic!("expected CheckFormat subcommand"),
    }
}

#[test]
fn test_path_or_stdin_parses_dash_as_stdin() {
    let cli = Cli::try_parse_from(["slugkit", "resolve", "-"]).expect("should parse resolve -");
    match cli.command {
        Command::Resolve { file, existing } => {
            assert!(matches!(file, PathOrStdin::Stdin));
            assert!(existing.is_none());
        }
        _ => panic!("expected Resolve subcommand"),
    }
}

#[test]
fn test_path_or_stdin_parses_real_path() {
    let cli = Cli::try_parse_from(["slugkit", "resolve", "records.json", "--existing", "taken.json"])
        .expect("should parse resolve with a path");
    match cli.command {
        Command::Resolve { file, existing } => {
            match file {
                PathOrStdin::Path(p) => assert_eq!(p, PathBuf::from("records.json")),
                PathOrStdin::Stdin => panic!("expected Path, got Stdin"),
            }
            assert_eq!(existing, Some(PathBuf::from("taken.json")));
        }
        _ => panic!("expected Resolve subcommand"),
    }
}

#[test]
fn test_quiet_verbose_conflict() {
    let result = Cli::try_parse_from(["slugkit", "--quiet", "--verbose", "normalize", "x"]);
    assert!(result.is_err(), "--quiet and --verbose should conflict");
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "slugkit",
        "normalize",
        "x",
        "--separator=_",
        "--allow-uppercase",
        "--max-increment",
        "5",
        "--max-length",
        "64",
    ])
    .expect("global flags should be accepted after the subcommand");
    assert_eq!(cli.separator.as_deref(), Some("_"));
    assert!(cli.allow_uppercase);
    assert_eq!(cli.max_increment, Some(5));
    assert_eq!(cli.max_length, Some(64));
}

#[test]
fn test_slug_flags_default_to_unset() {
    let cli = Cli::try_parse_from(["slugkit", "normalize", "x"]).expect("should parse");
    assert!(cli.separator.is_none());
    assert!(!cli.allow_uppercase);
    assert!(!cli.ascii_only);
    assert!(cli.max_increment.is_none());
    assert!(cli.max_length.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn test_max_file_size_default() {
    let cli = Cli::try_parse_from(["slugkit", "resolve", "-"]).expect("should parse");
    assert_eq!(cli.max_file_size, 16_777_216);
}

#[test]
fn test_format_flag_json() {
    let cli = Cli::try_parse_from(["slugkit", "--format", "json", "normalize", "x"])
        .expect("should parse --format json");
    assert!(matches!(cli.format, OutputFormat::Json));
}

#[test]
fn test_format_flag_default_is_human() {
    let cli = Cli::try_parse_from(["slugkit", "normalize", "x"]).expect("should parse");
    assert!(matches!(cli.format, OutputFormat::Human));
}

#[test]
fn test_max_increment_rejects_negative() {
    let result = Cli::try_parse_from(["slugkit", "--max-increment", "-1", "normalize", "x"]);
    assert!(result.is_err(), "negative max-increment should be rejected");
}

#[test]
fn test_cli_debug_assert() {
    Cli::command().debug_assert();
}
