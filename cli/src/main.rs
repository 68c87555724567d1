// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # LUMEN CLI
//!
//! Entry point for the `lumen` binary. Parses CLI arguments, initializes
//! logging, and runs the signature analysis over JSON inputs.
//!
//! The binary supports two subcommands:
//!
//! - `analyse` — attribute the signatures on a transaction envelope
//! - `version` — print build version information
//!
//! Analysis is fully offline: the account directory is a JSON snapshot of
//! signer lists, so the same inputs always produce the same report. Point
//! a decoder at the network once, save its output, and interrogate the
//! envelope as many times as you like.

mod cli;
mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use lumen_core::analysis::SignatureAnalyzer;
use lumen_core::directory::StaticDirectory;
use lumen_core::transaction::TransactionEnvelope;

use cli::{AnalyseArgs, Commands, LumenCli};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = LumenCli::parse();

    match cli.command {
        Commands::Analyse(args) => {
            logging::init_logging("lumen_cli=info,lumen_core=info", LogFormat::Pretty);
            let report = analyse(&args).await?;
            println!("{}", report);
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs the analysis described by the `analyse` arguments and returns the
/// serialized report.
async fn analyse(args: &AnalyseArgs) -> Result<String> {
    let envelope = load_envelope(&args.envelope)?;
    let directory = load_directory(&args.directory)?;
    tracing::info!(
        envelope = %args.envelope.display(),
        accounts = directory.len(),
        "inputs loaded"
    );

    let analyzer = SignatureAnalyzer::new(directory);

    // The two envelope flavors produce differently-shaped reports, so
    // serialize inside each arm rather than forcing a common type on them.
    let report = match &envelope {
        TransactionEnvelope::Transaction(tx) => {
            let verdicts = analyzer
                .analyse_transaction_signatures(tx)
                .await
                .context("signature analysis failed")?;
            to_json(&verdicts, args.pretty)?
        }
        TransactionEnvelope::FeeBump(fbtx) => {
            let report = analyzer
                .analyse_fee_bump_transaction_signatures(fbtx)
                .await
                .context("fee-bump signature analysis failed")?;
            to_json(&report, args.pretty)?
        }
    };

    Ok(report)
}

/// Reads and deserializes the transaction envelope file.
fn load_envelope(path: &Path) -> Result<TransactionEnvelope> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read envelope file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse envelope JSON: {}", path.display()))
}

/// Reads and deserializes the account-directory snapshot file.
fn load_directory(path: &Path) -> Result<StaticDirectory> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read directory file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse directory JSON: {}", path.display()))
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Prints build version information.
fn print_version() {
    println!("lumen {}", env!("CARGO_PKG_VERSION"));
    println!("  core  : lumen-core {}", env!("CARGO_PKG_VERSION"));
}
