//! Subcommands of the `ji` binary.
pub mod generate;
