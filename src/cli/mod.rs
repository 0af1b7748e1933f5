//! CLI module - command-line interface for Imobix.

use clap::{Parser, Subcommand};

/// Imobix - back-office de imobiliária
#[derive(Parser)]
#[command(name = "imobix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server
    #[command(alias = "daemon", alias = "-d")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Issue a fresh temporary password for a broker and print it once
    ResetarSenha {
        /// Broker ID
        id: i32,
    },
}
