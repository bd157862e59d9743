//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Load OID definition trees from XML files and translate between numeric and symbolic OIDs
#[derive(Parser, Debug)]
#[command(name = "oidtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Base directory containing conf/ (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the loaded forest as a tree
    Tree {
        /// Include code descriptions
        #[arg(long)]
        descriptions: bool,
    },

    /// List discovered definition files and code tables
    Files,

    /// Translate a numeric OID to its symbolic name
    Lookup {
        /// Numeric OID, e.g. 1.3.6.1.1.0
        oid: String,
    },

    /// Translate a symbolic name to its numeric OID
    Resolve {
        /// Full symbolic name, e.g. device.status
        name: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show config file locations
    Path,
}
