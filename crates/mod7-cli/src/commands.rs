//! CLI command definitions.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate keys
    Generate {
        /// Which key family to generate
        #[arg(short, long, value_enum, default_value_t = KeyKind::Both)]
        kind: KeyKind,

        /// Number of keys (or pairs, with `both`) to generate; values below 1 mean 1
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Show how long the generation took
        #[arg(short, long)]
        time: bool,
    },

    /// Validate a CD or OEM key
    Validate {
        /// Key to validate
        key: String,
    },

    /// Validate every key in a .txt file, one key per line
    Batch {
        /// Path to the key file
        path: PathBuf,

        /// Show how long the validation took
        #[arg(short, long)]
        time: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyKind {
    /// 10-digit CD key (XXX-XXXXXXX)
    #[value(alias = "cd")]
    TenDigit,
    /// OEM key (XXXXX-OEM-XXXXXXX-XXXXX)
    Oem,
    /// One of each
    Both,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Key
        key: String,

        /// Value
        value: String,
    },
}
