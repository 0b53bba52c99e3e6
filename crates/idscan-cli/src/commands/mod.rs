//! Subcommands of the `idscan` binary.

pub mod batch;
pub mod config;
pub mod output;
pub mod process;
pub mod text;
