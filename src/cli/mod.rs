//! CLI module for Minicart
//!
//! Provides subcommands for running the backend:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Minicart - minimal e-commerce backend
#[derive(Parser)]
#[command(name = "minicart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
