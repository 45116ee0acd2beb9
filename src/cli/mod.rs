//! CLI module - Command-line interface for cinedex
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// cinedex - a small movie catalogue REST API
#[derive(Parser)]
#[command(name = "cinedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until interrupted (default)
    #[command(alias = "web")]
    Serve,

    /// Manage database schema migrations
    Migrate {
        #[command(subcommand)]
        command: MigrateCommands,
    },

    /// Replace all movies with the fixture rows
    Seed,

    /// Roll back, migrate, and seed in one step
    Reset,

    /// Print every movie in the catalogue
    #[command(alias = "ls")]
    List,

    /// Create a default config.toml if none exists
    Init,
}

#[derive(Subcommand)]
pub enum MigrateCommands {
    /// Apply all pending migrations
    Up,
    /// Roll back all applied migrations
    Down,
    /// Drop every table and reapply all migrations
    Fresh,
    /// Show applied and pending migrations
    Status,
}

pub use commands::*;
