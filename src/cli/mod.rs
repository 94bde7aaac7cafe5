//! CLI module - Command-line interface for the anime catalog
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Anime Catalog - CRUD API for an anime catalog
#[derive(Parser)]
#[command(name = "anime-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to load instead of the default search paths
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "init")]
    InitConfig,
}
