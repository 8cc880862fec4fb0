//! # matjip-admin
//!
//! Operator tool for the badge engine: schema migrations, catalog seeding,
//! the out-of-band tag ranking run, and per-user maintenance.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{build_context, error_body, execute, exit_code, run};
