//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rounded tables for people
    #[default]
    Table,
    /// JSON wrapped in `{data, meta}` for scripts
    Json,
}

/// Completion filter accepted by `sc audit list --completed`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletedArg {
    #[default]
    True,
    False,
    Both,
}

impl From<CompletedArg> for crate::client::models::CompletedFilter {
    fn from(arg: CompletedArg) -> Self {
        use crate::client::models::CompletedFilter;
        match arg {
            CompletedArg::True => CompletedFilter::Completed,
            CompletedArg::False => CompletedFilter::Incomplete,
            CompletedArg::Both => CompletedFilter::Both,
        }
    }
}
