use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hostid/hostid.yaml";

#[derive(Parser)]
#[command(about)]
pub struct Cli {
    /// Enable verbose output. (Specify twice for more verbosity.)
    #[arg(global = true, short = 'v', long, action = ArgAction::Count, default_value_t = 0)]
    verbose: u8,

    /// Path to the configuration file.
    ///
    /// A missing or unreadable file is ignored. Settings can also be provided through `HOSTID_`-prefixed environment
    /// variables, which take precedence over the file.
    #[arg(global = true, short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub action: Action,
}

impl Cli {
    /// Gets the log level override based on the user-supplied verbosity level, if any.
    pub fn log_level_override(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// Resolves the host identifier and prints it.
    ///
    /// Prints an empty line when the host identity could not be resolved.
    #[command(name = "resolve")]
    Resolve(ResolveConfig),

    /// Checks whether the given value is a valid host identifier.
    #[command(name = "check")]
    Check(CheckConfig),

    /// Runs the entity host enrichment transform over a sample batch of telemetry and prints the result.
    #[command(name = "enrich")]
    Enrich,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ResolveConfig {
    /// Properties file to probe. (Can be specified multiple times; replaces the default list.)
    #[arg(long = "properties-path", value_name = "PATH")]
    pub properties_paths: Vec<PathBuf>,

    /// Single-line identifier file to probe. (Can be specified multiple times; replaces the default list.)
    #[arg(long = "ruxit-path", value_name = "PATH")]
    pub ruxit_paths: Vec<PathBuf>,

    /// Host identifier to return verbatim instead of probing any files.
    #[arg(long = "override", value_name = "ID")]
    pub host_id_override: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct CheckConfig {
    /// Value to check.
    #[arg(value_name = "CANDIDATE")]
    pub candidate: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_arguments() {
        let cli = Cli::parse_from([
            "hostid-probe",
            "resolve",
            "--properties-path",
            "/a.properties",
            "--properties-path",
            "/b.properties",
            "--ruxit-path",
            "/ruxit.conf",
        ]);

        let Action::Resolve(config) = cli.action else {
            panic!("expected resolve action");
        };
        assert_eq!(
            config.properties_paths,
            vec![PathBuf::from("/a.properties"), PathBuf::from("/b.properties")]
        );
        assert_eq!(config.ruxit_paths, vec![PathBuf::from("/ruxit.conf")]);
        assert_eq!(config.host_id_override, None);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn global_arguments_after_subcommand() {
        let cli = Cli::parse_from(["hostid-probe", "enrich", "--config", "/tmp/hostid.yaml", "-vv"]);
        assert!(matches!(cli.action, Action::Enrich));
        assert_eq!(cli.config, PathBuf::from("/tmp/hostid.yaml"));
        assert_eq!(cli.log_level_override(), Some("trace"));
    }

    #[test]
    fn check_requires_candidate() {
        assert!(Cli::try_parse_from(["hostid-probe", "check"]).is_err());

        let cli = Cli::parse_from(["hostid-probe", "check", "HOST-ABC"]);
        assert_eq!(cli.log_level_override(), None);

        let Action::Check(config) = cli.action else {
            panic!("expected check action");
        };
        assert_eq!(config.candidate, "HOST-ABC");
    }
}
