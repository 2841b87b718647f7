//! CLI argument parsing.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Flags also accepted with a single leading dash (`-conf`, `-run=/deploy`).
const SINGLE_DASH_FLAGS: &[&str] = &["conf", "test", "run"];

/// Minimal webhook receiver
#[derive(Debug, Parser)]
#[command(
    name = "watchandlisten",
    version,
    about = "Minimal webhook receiver",
    long_about = "Listens for GitHub webhooks and runs the shell command configured \
                  for the requested path. GET / returns the log."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long = "conf", value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub conf: PathBuf,

    /// Validate the configuration and log file, then exit
    #[arg(long, conflicts_with = "run")]
    pub test: bool,

    /// Run the hook registered at this path once and exit
    #[arg(long, value_name = "WEBHOOK_PATH")]
    pub run: Option<String>,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known flags.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| match arg.to_str() {
            Some(s) if i > 0 && is_single_dash_flag(s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(name) = arg.strip_prefix('-') else {
        return false;
    };
    if name.starts_with('-') {
        return false;
    }
    let name = name.split_once('=').map_or(name, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let args = std::iter::once("watchandlisten")
            .chain(args.iter().copied())
            .map(OsString::from);
        Cli::try_parse_from(normalize_args(args))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.conf, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!cli.test);
        assert!(cli.run.is_none());
    }

    #[test]
    fn test_single_dash_flags() {
        let cli = parse(&["-conf", "/tmp/conf.json", "-run", "/deploy"]).unwrap();
        assert_eq!(cli.conf, PathBuf::from("/tmp/conf.json"));
        assert_eq!(cli.run.as_deref(), Some("/deploy"));

        let cli = parse(&["-conf=/tmp/c.json", "-test"]).unwrap();
        assert_eq!(cli.conf, PathBuf::from("/tmp/c.json"));
        assert!(cli.test);
    }

    #[test]
    fn test_double_dash_flags() {
        let cli = parse(&["--conf", "/tmp/conf.json", "--run=/deploy"]).unwrap();
        assert_eq!(cli.conf, PathBuf::from("/tmp/conf.json"));
        assert_eq!(cli.run.as_deref(), Some("/deploy"));
    }

    #[test]
    fn test_values_are_not_rewritten() {
        let args = normalize_args(["bin", "-run", "/-conf"].map(OsString::from));
        assert_eq!(args[2], OsString::from("/-conf"));
    }

    #[test]
    fn test_test_and_run_conflict() {
        assert!(parse(&["-test", "-run", "/deploy"]).is_err());
    }

    #[test]
    fn test_unknown_single_dash_flag_rejected() {
        assert!(parse(&["-verbose"]).is_err());
    }
}
