//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Hierarchical classification builder: merge taxonomy rows into a tree,
/// render outline and leaf reports
#[derive(Parser, Debug)]
#[command(name = "taxotree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the numbered outline report
    Outline {
        /// Taxonomy CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print all scientific names (leaves), sorted
    Names {
        /// Taxonomy CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show the hierarchy as a tree
    Tree {
        /// Taxonomy CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show table and tree statistics
    Stats {
        /// Taxonomy CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
