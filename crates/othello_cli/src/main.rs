use anyhow::{Context, Result};
use othello_cli::{Flow, Session};
use othello_core::EngineConfig;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<EngineConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a path")?;
            EngineConfig::load(Path::new(path))
                .with_context(|| format!("loading configuration from {path}"))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;

    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        max_depth = config.search.max_depth,
        pruning = config.search.pruning,
        "othello engine ready"
    );

    let mut session = Session::new(config.search);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if session.handle(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
