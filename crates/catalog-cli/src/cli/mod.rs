//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "catalog",
    bin_name = "catalog",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Catalog administration for genres",
    long_about = "Create, update, inspect and list genres. Every write is \
                  validated as a whole: name rules and category references \
                  are checked together and reported in one go.",
    after_help = "EXAMPLES:\n\
        \x20 catalog category add 123 456\n\
        \x20 catalog genre create --name Action --category 123 --category 456\n\
        \x20 catalog genre list --search act --sort createdAt --dir desc\n\
        \x20 catalog completions bash > /usr/share/bash-completion/completions/catalog",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage genres.
    #[command(visible_alias = "g", about = "Manage genres", subcommand)]
    Genre(GenreCommands),

    /// Manage the known category ids.
    #[command(about = "Manage known categories", subcommand)]
    Category(CategoryCommands),

    /// Initialise configuration and the data file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 catalog init\n\
            \x20 catalog init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 catalog completions bash > ~/.local/share/bash-completion/completions/catalog\n\
            \x20 catalog completions zsh  > ~/.zfunc/_catalog\n\
            \x20 catalog completions fish > ~/.config/fish/completions/catalog.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 catalog config get storage.data_file\n\
            \x20 catalog config list"
    )]
    Config(ConfigCommands),
}

// ── genre ─────────────────────────────────────────────────────────────────────

/// Subcommands for `catalog genre`.
#[derive(Debug, Subcommand)]
pub enum GenreCommands {
    /// Create a genre.
    #[command(
        after_help = "EXAMPLES:\n\
            \x20 catalog genre create --name Action\n\
            \x20 catalog genre create --name Drama --inactive --category 123"
    )]
    Create(GenreWriteArgs),

    /// Replace a genre's name, active flag and categories.
    #[command(
        after_help = "EXAMPLES:\n\
            \x20 catalog genre update 2f6c... --name Action --category 123"
    )]
    Update {
        /// Genre id.
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        fields: GenreWriteArgs,
    },

    /// Show one genre.
    Get {
        /// Genre id.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete a genre. Unknown ids are ignored.
    #[command(visible_alias = "rm")]
    Delete {
        /// Genre id.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List genres, one page at a time.
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n\
            \x20 catalog genre list\n\
            \x20 catalog genre list --search dra --page 1 --per-page 5\n\
            \x20 catalog genre list --sort createdAt --dir desc"
    )]
    List(ListArgs),
}

/// Fields shared by `genre create` and `genre update`.
#[derive(Debug, Args)]
pub struct GenreWriteArgs {
    /// Genre name. Omitting it is reported as a validation error.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Genre name")]
    pub name: Option<String>,

    /// Store the genre as inactive.
    #[arg(long = "inactive", help = "Mark the genre inactive")]
    pub inactive: bool,

    /// Category id; repeat for several.
    #[arg(
        short = 'C',
        long = "category",
        value_name = "ID",
        action = clap::ArgAction::Append,
        help = "Category id (repeatable)"
    )]
    pub categories: Vec<String>,
}

/// Arguments for `catalog genre list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name filter.
    #[arg(short = 's', long = "search", value_name = "TERMS", default_value = "")]
    pub search: String,

    /// Zero-based page index.
    #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 0)]
    pub page: usize,

    /// Page size (defaults to `listing.per_page`).
    #[arg(long = "per-page", value_name = "N")]
    pub per_page: Option<usize>,

    /// Sort field: name, createdAt or updatedAt (defaults to `listing.sort`).
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort direction (defaults to `listing.direction`).
    #[arg(long = "dir", value_enum, value_name = "DIR")]
    pub direction: Option<SortDirection>,
}

/// Sort direction as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

// ── category ──────────────────────────────────────────────────────────────────

/// Subcommands for `catalog category`.
#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// Register category ids so genres can reference them.
    Add {
        /// One or more category ids.
        #[arg(value_name = "ID", required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Print every known category id.
    #[command(visible_alias = "ls")]
    List,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `catalog init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `catalog completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `catalog config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `listing.per_page`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
