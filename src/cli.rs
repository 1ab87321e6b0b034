//! Command-line interface.

use crate::policy::Policy;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Tokens which print the usage wherever they appear.
const HELP_TOKENS: [&str; 3] = ["help", "-h", "--help"];
/// Tokens which skip the confirmation wherever they appear.
const FORCE_TOKENS: [&str; 3] = ["force", "-f", "--force"];

/// Updates a local TinyTest header from the official repository.
///
/// The version declared by the local file is compared with the version
/// published in the `main` branch of the official repository and, when the
/// upgrade type allows it, the local file is replaced by the online one.
#[derive(Parser, Debug)]
#[command(
    name = "tinytest-updater",
    version,
    disable_help_flag = true,
    override_usage = "tinytest-updater [help|-h] [force|-f] <PATH> [major|minor|patch]",
    after_long_help = r#"Non-positional arguments:
  help, -h    Shows this message
  force, -f   Runs the program without user input, and forces the upgrade/overwrite of existing files

Example:
  tinytest-updater "include/testing/tinytest.hpp" minor

Upgrades TinyTest at the specified location to the next minor version, e.g. if
the local version is 1.1.3, and online versions 2.0.2, 1.2.7, and 1.1.5 exist,
the local install is upgraded to version 1.2.7."#
)]
struct App {
    /// The path to your local TinyTest file.
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// One of the following:
    /// 'major' (upgrade to the next major version, default behaviour),
    /// 'minor' (upgrade to the next minor version),
    /// 'patch' (upgrade to the next patch).
    #[arg(value_name = "UPGRADE_TYPE", allow_hyphen_values = true)]
    upgrade_type: Option<Policy>,

    #[arg(hide = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

/// The interpretation of the command-line arguments.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    /// The usage must be shown and nothing else done.
    Help,
    /// An update must be run with the options.
    Run(Options),
}

/// Options of an update run.
#[derive(Debug, PartialEq)]
pub struct Options {
    /// The local TinyTest file.
    pub path: PathBuf,
    /// Which version differences justify the upgrade.
    pub policy: Policy,
    /// When true, the upgrade is applied without asking for confirmation.
    pub force: bool,
}

/// Interprets the process arguments, `args` excludes the program name.
///
/// A help token anywhere wins over everything else. Force tokens are removed
/// before parsing the positional arguments so they are never taken as the path
/// or the upgrade type.
pub fn interpret<I>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    if args.iter().any(|a| HELP_TOKENS.contains(&a.as_str())) {
        return Ok(Invocation::Help);
    }

    let force = args.iter().any(|a| FORCE_TOKENS.contains(&a.as_str()));
    let positionals = args
        .into_iter()
        .filter(|a| !FORCE_TOKENS.contains(&a.as_str()));

    let app =
        App::try_parse_from(std::iter::once(String::from("tinytest-updater")).chain(positionals))?;

    Ok(Invocation::Run(Options {
        path: app.path,
        policy: app.upgrade_type.unwrap_or_default(),
        force,
    }))
}

/// Returns the full usage text.
pub fn usage() -> String {
    App::command().render_long_help().to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    use clap::error::ErrorKind;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_only_defaults_to_major() {
        assert_eq!(
            interpret(args(&["include/tinytest.hpp"])).expect("valid arguments"),
            Invocation::Run(Options {
                path: PathBuf::from("include/tinytest.hpp"),
                policy: Policy::Major,
                force: false,
            })
        );
    }

    #[test]
    fn test_policy_case_insensitive() {
        assert_eq!(
            interpret(args(&["tinytest.hpp", "MiNoR"])).expect("valid arguments"),
            Invocation::Run(Options {
                path: PathBuf::from("tinytest.hpp"),
                policy: Policy::Minor,
                force: false,
            })
        );
    }

    #[test]
    fn test_help_anywhere() {
        for a in [
            vec!["help"],
            vec!["-h"],
            vec!["tinytest.hpp", "patch", "help"],
            vec!["-f", "-h", "tinytest.hpp"],
            vec!["tinytest.hpp", "not-a-policy", "--help"],
        ] {
            assert_eq!(
                interpret(args(&a)).expect("help must not fail"),
                Invocation::Help,
                "args: {:?}",
                a
            );
        }
    }

    #[test]
    fn test_force_anywhere() {
        for a in [
            vec!["force", "tinytest.hpp", "patch"],
            vec!["tinytest.hpp", "-f", "patch"],
            vec!["tinytest.hpp", "patch", "--force"],
        ] {
            assert_eq!(
                interpret(args(&a)).expect("valid arguments"),
                Invocation::Run(Options {
                    path: PathBuf::from("tinytest.hpp"),
                    policy: Policy::Patch,
                    force: true,
                }),
                "args: {:?}",
                a
            );
        }
    }

    #[test]
    fn test_missing_path() {
        let err = interpret(args(&[])).expect_err("path is required");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = interpret(args(&["force"])).expect_err("force isn't a path");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_policy() {
        let err = interpret(args(&["tinytest.hpp", "latest"])).expect_err("invalid upgrade type");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(
            err.to_string().contains("latest"),
            "error must name the offending value, got: {}",
            err
        );
    }

    #[test]
    fn test_extra_positionals_ignored() {
        assert_eq!(
            interpret(args(&["tinytest.hpp", "minor", "extra"])).expect("valid arguments"),
            Invocation::Run(Options {
                path: PathBuf::from("tinytest.hpp"),
                policy: Policy::Minor,
                force: false,
            })
        );
    }

    #[test]
    fn test_hyphen_prefixed_positionals() {
        assert_eq!(
            interpret(args(&["-x.hpp", "minor", "-y"])).expect("valid arguments"),
            Invocation::Run(Options {
                path: PathBuf::from("-x.hpp"),
                policy: Policy::Minor,
                force: false,
            })
        );

        let err = interpret(args(&["tinytest.hpp", "-x"])).expect_err("invalid upgrade type");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("-x"), "got: {}", err);
    }

    #[test]
    fn test_double_dash_ends_flags() {
        // `--` is consumed as the end of the flags, it's never taken as the path.
        assert_eq!(
            interpret(args(&["--", "tinytest.hpp", "patch"])).expect("valid arguments"),
            Invocation::Run(Options {
                path: PathBuf::from("tinytest.hpp"),
                policy: Policy::Patch,
                force: false,
            })
        );
    }

    #[test]
    fn test_version_flag() {
        let err = interpret(args(&["--version"])).expect_err("version is reported as an error");
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr(), "version must go to stdout");
    }

    #[test]
    fn test_usage() {
        let usage = usage();
        assert!(usage.contains("force, -f"), "usage: {}", usage);
        assert!(usage.contains("'patch'"), "usage: {}", usage);
    }

    #[test]
    fn test_app_definition() {
        App::command().debug_assert();
    }
}
