//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// rtcheck - audit a Linux host for real-time audio work.
#[derive(Debug, Parser)]
#[command(name = "rtcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML file with audit thresholds
    #[arg(short, long, global = true, env = "RTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read /proc, /sys and /boot under this directory instead of /
    #[arg(short, long, global = true, env = "RTCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every check and print the report (default if no command specified)
    Scan(ScanArgs),

    /// Run every check and browse the results interactively
    View(ViewArgs),

    /// List the registered checks
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Probe selection shared by `scan` and `view`.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Run only these checks (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these checks (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the `view` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["rtcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn scan_selection_splits_on_commas() {
        let cli = Cli::try_parse_from(["rtcheck", "scan", "--only", "swappiness,irqs"]).unwrap();
        match cli.command {
            Some(Commands::Scan(args)) => {
                assert_eq!(args.selection.only, vec!["swappiness", "irqs"]);
                assert!(args.selection.skip.is_empty());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["rtcheck", "scan", "--json", "--root", "/tmp/host", "--no-color"])
                .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/host")));
        assert!(cli.no_color);
    }

    #[test]
    fn completions_requires_a_shell() {
        assert!(Cli::try_parse_from(["rtcheck", "completions"]).is_err());
        let cli = Cli::try_parse_from(["rtcheck", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }
}
