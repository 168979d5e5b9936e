//! UCI front end: reads commands on stdin, answers on stdout, logs to stderr.

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use classical_engine::{ClassicalEngine, EngineConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

#[derive(Parser)]
#[command(name = "uci_engine")]
#[command(about = "Classical alpha-beta chess engine speaking UCI", long_about = None)]
struct Args {
    /// TOML file with search and time settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter for stderr, e.g. "debug" or "classical_engine=trace".
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.print_config {
        let text = config
            .to_toml_string()
            .context("serialising engine config")?;
        print!("{text}");
        return Ok(());
    }
    info!(config = ?args.config, "engine ready");

    let mut session = Session::new(ClassicalEngine::with_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let keep_going = session
            .handle(&line, &mut stdout)
            .context("writing to stdout")?;
        stdout.flush().context("flushing stdout")?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}

fn init_logging(level: &str) {
    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
