//! Shared CLI argument types

mod common;
mod dates;
mod global;

pub use common::{CompletedArg, OutputFormat};
pub use dates::parse_instant;
pub use global::GlobalOptions;
