//! Client library for the SafetyCulture inspection platform API.
//!
//! [`client::SafetyCultureClient`] discovers templates and audits, drives
//! report exports to completion, pages through actions, and manages response
//! sets, groups and users. The `sc` binary in this crate is a thin CLI over
//! the same client.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::{ClientLogger, SafetyCultureApi, SafetyCultureClient};
pub use error::{Error, Result};
