//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Login provider with provider-state hooks for contract verification
#[derive(Parser, Debug)]
#[command(name = "login-provider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the instrumented provider
    Serve(ServeArgs),

    /// Start the provider on a free port and verify it against its pacts
    Verify(VerifyArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Provider state to start in (e.g. "User jmarie exists")
    #[arg(short, long)]
    pub state: Option<String>,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Directory holding local pact files
    #[arg(long)]
    pub pact_dir: Option<PathBuf>,

    /// Directory the verifier output log is written to
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Verification engine executable
    #[arg(long)]
    pub verifier_bin: Option<String>,

    /// Also verify against published pacts on the broker
    #[arg(long)]
    pub integrated: bool,

    /// Print verification reports as JSON
    #[arg(long)]
    pub json: bool,
}
