//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::ExportFormat;

pub mod action;
pub mod args;
pub mod audit;
pub mod completions;
pub mod context;
pub mod export;
pub mod export_profile;
pub mod group;
pub mod init;
pub mod response_set;
pub mod status;
pub mod template;
pub mod user;

pub use args::{CompletedArg, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// sc - command line client for the SafetyCulture inspection platform
#[derive(Parser, Debug)]
#[command(name = "sc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "SC_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SC_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API token (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "SC_API_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true, env = "SC_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SC_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store an API token
    Init,

    /// Show configuration and token status
    Status,

    /// Display version information
    Version,

    /// Discover templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Discover and fetch audits
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Export audits as PDF or Word documents
    #[command(after_help = "EXAMPLES:\n  \
        sc export audit_0123...                         # PDF into ./exports\n  \
        sc export audit_a audit_b --doc-format docx   # Several audits\n  \
        sc export audit_a --timezone Australia/Sydney -o reports")]
    Export(ExportArgs),

    /// Inspect export profiles
    #[command(subcommand, name = "export-profile")]
    ExportProfile(ExportProfileCommands),

    /// Search actions
    #[command(subcommand)]
    Action(ActionCommands),

    /// Manage response sets
    #[command(subcommand, name = "response-set")]
    ResponseSet(ResponseSetCommands),

    /// List groups and their users
    #[command(subcommand)]
    Group(GroupCommands),

    /// Show the organisation of the current user
    Org,

    /// Manage users
    #[command(subcommand)]
    User(UserCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   sc completion bash > /etc/bash_completion.d/sc
  zsh:    sc completion zsh > \"${fpath[1]}/_sc\"
  fish:   sc completion fish > ~/.config/fish/completions/sc.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates
    #[command(visible_alias = "ls")]
    List {
        /// Only templates modified after this date (ISO or 7d, 1w, 12h)
        #[arg(long)]
        modified_after: Option<String>,

        /// Only templates modified before this date
        #[arg(long)]
        modified_before: Option<String>,
    },
}

/// Audit subcommands
#[derive(Subcommand, Debug)]
pub enum AuditCommands {
    /// Discover audits, oldest modification first
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            sc audit list                                # Completed audits\n  \
            sc audit list --template template_a,template_b\n  \
            sc audit list --modified-after 7d --completed both"
    )]
    List {
        /// Restrict to these templates, comma-separated or repeated
        #[arg(long, short = 't', value_delimiter = ',')]
        template: Vec<String>,

        /// Only audits modified after this date (ISO or 7d, 1w, 12h)
        #[arg(long)]
        modified_after: Option<String>,

        /// Completion filter
        #[arg(long, value_enum, default_value = "true")]
        completed: CompletedArg,
    },

    /// Fetch a full audit document
    Get {
        /// Audit ID
        audit_id: String,
    },

    /// Print the web report link of an audit
    #[command(name = "web-report")]
    WebReport {
        /// Audit ID
        audit_id: String,
    },

    /// Download a media item attached to an audit
    Media {
        /// Audit ID
        audit_id: String,

        /// Media ID
        media_id: String,

        /// Directory to write into
        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,
    },
}

/// Arguments of `sc export`
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Audits to export
    #[arg(required = true)]
    pub audit_ids: Vec<String>,

    /// Document format (defaults to the config file, then pdf)
    #[arg(long = "doc-format", short = 'f', value_enum)]
    pub doc_format: Option<ExportFormat>,

    /// IANA timezone for timestamps in the document
    #[arg(long)]
    pub timezone: Option<String>,

    /// Export profile ID
    #[arg(long)]
    pub profile: Option<String>,

    /// Directory to write into (defaults to the config file, then ./exports)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,
}

/// Export profile subcommands
#[derive(Subcommand, Debug)]
pub enum ExportProfileCommands {
    /// List export profiles
    List {
        /// Only profiles of this template
        #[arg(long, short = 't')]
        template: Option<String>,
    },

    /// Fetch one export profile
    Get {
        /// Export profile ID
        profile_id: String,
    },
}

/// Action subcommands
#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    /// List actions modified since a date
    List {
        /// Lower bound on modification (ISO or 7d, 1w, 12h)
        #[arg(long, default_value = "2000-01-01")]
        modified_after: String,
    },
}

/// Response set subcommands
#[derive(Subcommand, Debug)]
pub enum ResponseSetCommands {
    /// List response sets
    List,

    /// Fetch one response set
    Get {
        /// Response set ID
        response_set_id: String,
    },

    /// Create a response set from labels
    Create {
        /// Response set name
        name: String,

        /// Response labels, comma-separated or repeated
        #[arg(long, short = 'r', value_delimiter = ',', required = true)]
        response: Vec<String>,
    },

    /// Add a response to a response set
    #[command(name = "add-response")]
    AddResponse {
        /// Response set ID
        response_set_id: String,

        /// Response label
        label: String,
    },

    /// Delete a response from a response set
    #[command(name = "delete-response")]
    DeleteResponse {
        /// Response set ID
        response_set_id: String,

        /// Response ID
        response_id: String,
    },
}

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// List groups of the organisation
    List,

    /// List users of a group
    Users {
        /// Group ID
        group_id: String,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Add a user to the organisation
    Add {
        /// User document as JSON
        #[arg(long)]
        data: String,
    },

    /// Add a user to a group
    #[command(name = "add-to-group")]
    AddToGroup {
        /// Group ID
        group_id: String,

        /// Membership document as JSON
        #[arg(long)]
        data: String,
    },

    /// Update a user
    Update {
        /// User ID
        user_id: String,

        /// Fields to change as JSON
        #[arg(long)]
        data: String,
    },

    /// Remove a user from a group or the organisation
    Remove {
        /// Group or organisation ID
        role_id: String,

        /// User ID
        user_id: String,
    },
}

/// Parse a `--data` argument
pub(crate) fn parse_data(data: &str) -> crate::error::Result<serde_json::Value> {
    serde_json::from_str(data)
        .map_err(|e| crate::error::Error::Other(format!("--data is not valid JSON: {}", e)))
}
