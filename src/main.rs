//! qfxpatch - stamp account ids and stable FITIDs into QFX credit card exports
//! ---
//!
//! Some banks ship QFX files with no account number and with FITIDs that change between
//! downloads, which makes importers either reject the file or double count transactions.
//! qfxpatch writes a `*.pat.QFX` copy that carries both.
//!

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod batch;
mod config;
mod patch;

#[derive(Debug, Parser)]
#[command(name = "qfxpatch", version, about = "Patch account ids and FITIDs into QFX exports")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Patch a single export, writing `<name>.pat.<ext>` next to it
    Patch {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Account id to stamp, asked for on stdin when omitted
        #[arg(short, long)]
        account_id: Option<String>,
    },
    /// Patch the newest export of every account listed in a config file
    Batch {
        #[arg(short, long, default_value = "secret.yaml")]
        config: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Patch { file, account_id } => {
            let account_id = match account_id {
                Some(id) => id,
                None => prompt_account_id(io::stdin().lock(), io::stdout())?,
            };
            patch::patch_file(&file, &account_id)?;
        }
        Command::Batch { config } => run_batch(&config)?,
    }
    Ok(())
}

fn run_batch(path: &Path) -> Result<()> {
    let config = config::Config::load(path)?;
    let report = batch::run(&config);
    info!(
        "{} patched, {} skipped, {} failed",
        report.patched.len(),
        report.skipped.len(),
        report.failed.len()
    );

    if !report.failed.is_empty() {
        bail!("failed accounts: {}", report.failed.join(", "));
    }
    Ok(())
}

fn prompt_account_id(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    write!(output, "Input the account id to be patched >")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read account id")?;
    let account_id = line.trim();
    if account_id.is_empty() {
        bail!("no account id given");
    }
    Ok(account_id.to_string())
}
