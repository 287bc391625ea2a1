//! Command-line arguments.

use clap::Parser;
use node_config::DEFAULT_CONFIG_PATH;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "node-config", version)]
#[command(about = "Load and check the node configuration file")]
pub struct Cli {
    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        allow_hyphen_values = true,
        help = "Path to configuration file"
    )]
    pub config: PathBuf,
}

impl Cli {
    /// Parse arguments, accepting `-config` as a spelling of `--config`.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Rewrite single-dash `-config` flags into the double-dash form clap expects.
///
/// The value following a bare `--config`/`-config` is never rewritten, and
/// arguments after a `--` terminator are passed through untouched.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut terminated = false;
    let mut takes_value = false;

    for arg in args.into_iter().map(Into::into) {
        if terminated || takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                terminated = true;
                None
            }
            Some("--config") => {
                takes_value = true;
                None
            }
            Some("-config") => {
                takes_value = true;
                Some(OsString::from("--config"))
            }
            Some(s) if s.starts_with("-config=") => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_args(["node-config"]);
        assert_eq!(cli.config, PathBuf::from("./config.json"));
    }

    #[test]
    fn test_double_dash_flag() {
        let cli = Cli::parse_args(["node-config", "--config", "/etc/node.json"]);
        assert_eq!(cli.config, PathBuf::from("/etc/node.json"));

        let cli = Cli::parse_args(["node-config", "--config=/etc/node.json"]);
        assert_eq!(cli.config, PathBuf::from("/etc/node.json"));
    }

    #[test]
    fn test_single_dash_flag() {
        let cli = Cli::parse_args(["node-config", "-config", "custom.json"]);
        assert_eq!(cli.config, PathBuf::from("custom.json"));

        let cli = Cli::parse_args(["node-config", "-config=custom.json"]);
        assert_eq!(cli.config, PathBuf::from("custom.json"));
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let args = normalize_args(["node-config", "-configx", "--", "-config"]);
        assert_eq!(args, vec!["node-config", "-configx", "--", "-config"]);
    }

    #[test]
    fn test_flag_value_spelled_like_flag() {
        let cli = Cli::parse_args(["node-config", "--config", "-config"]);
        assert_eq!(cli.config, PathBuf::from("-config"));

        let cli = Cli::parse_args(["node-config", "-config", "-config"]);
        assert_eq!(cli.config, PathBuf::from("-config"));
    }

    #[test]
    fn test_normalize_skips_flag_value() {
        let args = normalize_args(["node-config", "--config", "-config=x"]);
        assert_eq!(args, vec!["node-config", "--config", "-config=x"]);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["node-config", "--port", "1"]);
        assert!(result.is_err());
    }
}
