//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the nak CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Help heading shared by every filter selector.
const FILTER_ATTRIBUTES: &str = "Filter attributes";

/// nak - Nostr army knife
#[derive(Parser, Debug)]
#[command(name = "nak")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only the result line and errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an encoded REQ message to be sent to a relay
    #[command(after_help = "Example (with 'nostcat'):\n  \
        nak req -k 1 -a 3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d \
        | nostcat wss://nostr-pub.wellorder.net")]
    Req(ReqArgs),

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Selectors for the req command.
#[derive(Args, Debug, Default)]
pub struct ReqArgs {
    /// Only accept events from these authors (pubkey as hex)
    #[arg(short, long = "author", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub authors: Vec<String>,

    /// Only accept events with these ids (hex)
    #[arg(short, long = "id", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub ids: Vec<String>,

    /// Only accept events with these kind numbers (0-65535)
    #[arg(short, long = "kind", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub kinds: Vec<u16>,

    /// Takes a tag like -t e=<id>, only accept events with these tags
    #[arg(short, long = "tag", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub tags: Vec<String>,

    /// Shortcut for --tag e=<value>
    #[arg(short, long = "event-tag", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub event_tags: Vec<String>,

    /// Shortcut for --tag p=<value>
    #[arg(short, long = "pubkey-tag", value_delimiter = ',', help_heading = FILTER_ATTRIBUTES)]
    pub pubkey_tags: Vec<String>,

    /// Only accept events newer than this (unix timestamp)
    #[arg(short, long, allow_negative_numbers = true, help_heading = FILTER_ATTRIBUTES)]
    pub since: Option<i64>,

    /// Only accept events older than this (unix timestamp)
    #[arg(short, long, allow_negative_numbers = true, help_heading = FILTER_ATTRIBUTES)]
    pub until: Option<i64>,

    /// Only accept up to this number of events
    #[arg(short, long, help_heading = FILTER_ATTRIBUTES)]
    pub limit: Option<u64>,

    /// Print just the filter, not enveloped in a ["REQ", ...] array
    ///
    /// Without this flag the `req.bare` setting from the config file decides.
    /// A config file that exists but cannot be parsed makes the command fail.
    #[arg(long)]
    pub bare: bool,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
