use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Front end of the Thrice compiler")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    /// Verbosity of the log output on stderr
    #[arg(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Lex every source in a workspace and report unrecognised characters
    Check { workspace: PathBuf },
    /// Print the lexemes of every source in a workspace
    Lex { workspace: PathBuf },
    /// Print the packages, modules and sources found in a workspace
    Tree { workspace: PathBuf },
    /// Run the built-in probes
    SelfTest,
}
