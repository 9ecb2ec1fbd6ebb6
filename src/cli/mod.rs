//! Command-line interface for dbxref.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Print the external URL for a database and accession
//! - **sources**: List the supported databases and their URL templates
//! - **serve**: Start the cross-reference web service
//!
//! ## Usage
//!
//! ```text
//! # Resolve a cross-reference
//! dbxref resolve ecocyc G7954
//!
//! # Same, written as stored on a gene record
//! dbxref resolve ECOCYC:G7954
//!
//! # JSON output for scripting
//! dbxref resolve pubmed 9278503 --format json
//!
//! # Start the web service
//! dbxref serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod resolve;
pub mod sources;

#[derive(Parser)]
#[command(name = "dbxref")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve biological database cross-references to external URLs")]
#[command(
    long_about = "dbxref turns DATABASE:ACCESSION cross-references, as found on gene and organism records, into links to the external database entry.\n\nIt can be used from the command line or run as a web service that redirects to the entry or describes it as text, HTML, XML or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the external URL of a cross-reference
    Resolve(resolve::ResolveArgs),

    /// List the supported databases
    Sources,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "DBXREF_PORT", default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "DBXREF_ADDRESS", default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Request timeout in seconds
    #[arg(long, env = "DBXREF_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Maximum number of requests handled at once
    #[arg(long, default_value = "100")]
    pub max_concurrent: usize,

    /// Seconds for a client to earn back one request of its rate-limit quota
    #[arg(long, default_value = "1")]
    pub rate_period: u64,

    /// Requests a client may burst before being rate limited
    #[arg(long, default_value = "50")]
    pub rate_burst: u32,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
