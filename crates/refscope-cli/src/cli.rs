//! CLI argument definitions for refscope.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "refscope",
    version,
    about = "Detect assembly reference version conflicts in .NET deployment directories",
    long_about = "refscope inspects a directory of compiled .NET assemblies, aggregates every \
                  declared assembly reference by name, and reports where assemblies in the same \
                  deployment request different versions of the same dependency."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report reference version conflicts
    Scan {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Also report references with a single requested version
        #[arg(short, long)]
        all: bool,
        /// Include System and mscorlib references
        #[arg(long)]
        system: bool,
        /// Append binding-redirect fragments for installed assemblies
        #[arg(long)]
        redirects: bool,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit binding-redirect fragments for conflicting references
    Redirects {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Include System and mscorlib references
        #[arg(long)]
        system: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
