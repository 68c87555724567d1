//! # CLI Interface
//!
//! Defines the command-line argument structure for `lumen` using `clap`
//! derive. Supports two subcommands: `analyse` and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LUMEN transaction signature analysis.
///
/// Attributes the signatures attached to a Stellar transaction (or
/// fee-bump envelope) to the signers of the accounts it touches, entirely
/// offline: the account directory is a JSON snapshot on disk, not a
/// network call.
#[derive(Parser, Debug)]
#[command(
    name = "lumen",
    about = "Stellar transaction signature analysis",
    version,
    propagate_version = true
)]
pub struct LumenCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `lumen` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse the signatures on a transaction envelope.
    Analyse(AnalyseArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `analyse` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyseArgs {
    /// Path to the transaction envelope JSON file.
    ///
    /// The file holds either `{"type": "transaction", ...}` or
    /// `{"type": "fee_bump", ...}`, as produced by a decoder.
    #[arg(long, short = 'e', env = "LUMEN_ENVELOPE")]
    pub envelope: PathBuf,

    /// Path to the account-directory snapshot JSON file.
    ///
    /// A JSON object mapping account addresses to their signer lists:
    /// `{"G...": [{"key": "G...", "weight": 1}]}`.
    #[arg(long, short = 'd', env = "LUMEN_DIRECTORY")]
    pub directory: PathBuf,

    /// Pretty-print the report instead of emitting compact JSON.
    #[arg(long)]
    pub pretty: bool,
}
