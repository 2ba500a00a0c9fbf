use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::Base;

/// Validates that the base is within 2..=36
fn validate_base(s: &str) -> Result<Base, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Base::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "sharecrack")]
#[command(about = "Recover the secret constant of a polynomial from base-encoded shares")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from one or more JSON share documents
    Recover {
        /// Share documents to solve; reads one document from stdin when omitted
        files: Vec<PathBuf>,

        /// Check the shares beyond the threshold against the recovered polynomial
        #[arg(long)]
        verify: bool,

        /// Print one JSON object per document instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Decode a single value written in the given base
    Decode {
        /// Base of the value (2-36)
        #[arg(short, long, value_parser = validate_base)]
        base: Base,

        /// Digits of the value
        value: String,
    },
}
