//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use domainsmith_core::domain::GenerationFlags;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "domainsmith",
    bin_name = "domainsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Domain-driven scaffolding for Laravel projects",
    long_about = "domainsmith generates entities, repositories, domain services, \
                  data objects, models, policies, observers, factories, migrations \
                  and CRUD actions for a domain, and registers the repository \
                  binding in your service provider.",
    after_help = "EXAMPLES:\n\
        \x20 domainsmith generate-domain Users --migration --soft-deletes\n\
        \x20 domainsmith generate-subdomain Users Profiles\n\
        \x20 domainsmith generate-value-object EmailAddress --domain Users\n\
        \x20 domainsmith completions bash > /usr/share/bash-completion/completions/domainsmith",
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
    /// Generate a complete domain.
    #[command(
        visible_alias = "domain",
        about = "Generate a domain",
        after_help = "EXAMPLES:\n\
            \x20 domainsmith generate-domain Users\n\
            \x20 domainsmith generate-domain BlogPosts --migration --soft-deletes --force\n\
            \x20 domainsmith generate-domain Orders --dry-run"
    )]
    GenerateDomain(DomainArgs),

    /// Generate a subdomain inside an existing domain.
    #[command(
        visible_alias = "subdomain",
        about = "Generate a subdomain",
        after_help = "EXAMPLES:\n\
            \x20 domainsmith generate-subdomain Users Profiles\n\
            \x20 domainsmith generate-subdomain Users Addresses --migration"
    )]
    GenerateSubdomain(SubdomainArgs),

    /// Generate a value object.
    #[command(
        visible_alias = "value-object",
        about = "Generate a value object",
        after_help = "EXAMPLES:\n\
            \x20 domainsmith generate-value-object Money\n\
            \x20 domainsmith generate-value-object EmailAddress --domain Users\n\
            \x20 domainsmith generate-value-object Phone --domain Users --subdomain Profiles"
    )]
    GenerateValueObject(ValueObjectArgs),

    /// Initialise a domainsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 domainsmith init           # ./domainsmith.toml\n\
            \x20 domainsmith init --global  # per-user config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 domainsmith completions bash > ~/.local/share/bash-completion/completions/domainsmith\n\
            \x20 domainsmith completions zsh  > ~/.zfunc/_domainsmith\n\
            \x20 domainsmith completions fish > ~/.config/fish/completions/domainsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 domainsmith config get namespace.root\n\
            \x20 domainsmith config list\n\
            \x20 domainsmith config path"
    )]
    Config(ConfigCommands),
}

// ── generation ────────────────────────────────────────────────────────────────

/// Flags shared by the domain and subdomain commands.
#[derive(Debug, Clone, Args)]
pub struct GenerationArgs {
    /// Also generate a create-table migration.
    #[arg(long = "migration", help = "Generate a migration")]
    pub migration: bool,

    /// Use the soft-delete variants and add Restore/ForceDelete actions.
    #[arg(long = "soft-deletes", help = "Add soft delete support")]
    pub soft_deletes: bool,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Print the plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

impl GenerationArgs {
    pub fn flags(&self) -> GenerationFlags {
        GenerationFlags {
            migration: self.migration,
            soft_deletes: self.soft_deletes,
            force: self.force,
        }
    }
}

/// Arguments for `domainsmith generate-domain`.
#[derive(Debug, Args)]
pub struct DomainArgs {
    /// Domain name, conventionally plural (e.g. `Users`).
    #[arg(value_name = "NAME", help = "Domain name")]
    pub name: String,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

/// Arguments for `domainsmith generate-subdomain`.
#[derive(Debug, Args)]
pub struct SubdomainArgs {
    /// Existing parent domain.
    #[arg(value_name = "PARENT", help = "Parent domain name")]
    pub parent: String,

    /// Subdomain name.
    #[arg(value_name = "NAME", help = "Subdomain name")]
    pub name: String,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

/// Arguments for `domainsmith generate-value-object`.
#[derive(Debug, Args)]
pub struct ValueObjectArgs {
    /// Value object name; `ValueObject` is appended when missing.
    #[arg(value_name = "NAME", help = "Value object name")]
    pub name: String,

    /// Place it inside this domain.
    #[arg(long = "domain", value_name = "DOMAIN", help = "Target domain")]
    pub domain: Option<String>,

    /// Place it inside this subdomain (requires --domain).
    #[arg(long = "subdomain", value_name = "SUBDOMAIN", help = "Target subdomain")]
    pub subdomain: Option<String>,

    /// Overwrite an existing file without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,

    /// Print the plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `domainsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of the project.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `domainsmith completions`.
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

/// Subcommands for `domainsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `namespace.root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
