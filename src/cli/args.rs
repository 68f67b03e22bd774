//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::PathPosition;

#[derive(Parser)]
#[command(name = "shelledit")]
#[command(about = "Manage and lint zsh/bash shell configuration files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: <config dir>/shelledit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a file and show what was parsed
    Load {
        /// Shell config file
        file: PathBuf,
    },

    /// Manage environment variables
    Env {
        #[command(subcommand)]
        env_command: EnvCommands,
    },

    /// Manage PATH entries
    Path {
        #[command(subcommand)]
        path_command: PathCommands,
    },

    /// Check a file for duplicate and contradictory definitions
    Lint {
        /// Shell config file
        file: PathBuf,
    },

    /// Print the file re-rendered in a given format
    Export {
        /// Shell config file
        file: PathBuf,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List available output formats
    Formats,

    /// Manage the shelledit settings file
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum EnvCommands {
    /// List all environment variables
    #[command(visible_alias = "ls")]
    List {
        file: PathBuf,
    },
    /// Print the effective value of a variable
    Get {
        file: PathBuf,
        name: String,
    },
    /// Set a variable and save
    Set {
        file: PathBuf,
        name: String,
        value: String,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Remove every assignment of a variable and save
    #[command(visible_alias = "rm")]
    Remove {
        file: PathBuf,
        name: String,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PathCommands {
    /// List all PATH entries
    #[command(visible_alias = "ls")]
    List {
        file: PathBuf,
    },
    /// Add a directory to PATH and save
    Add {
        file: PathBuf,
        /// Directory to add
        dir: String,
        /// Where to place the directory
        #[arg(short, long, value_enum, default_value = "prepend")]
        position: PositionArg,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Remove a directory from PATH and save
    #[command(visible_alias = "rm")]
    Remove {
        file: PathBuf,
        dir: String,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Change whether a directory is prepended or appended, and save
    #[command(visible_alias = "mv")]
    Move {
        file: PathBuf,
        dir: String,
        #[arg(value_enum)]
        position: PositionArg,
        /// Output format (zsh, bash, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Print the settings file location
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PositionArg {
    Prepend,
    Append,
}

impl From<PositionArg> for PathPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Prepend => PathPosition::Prepend,
            PositionArg::Append => PathPosition::Append,
        }
    }
}
