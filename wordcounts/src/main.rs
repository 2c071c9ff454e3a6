// src/main.rs
use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

use wordcounts::run_from_args;

fn main() -> Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from_args(env::args_os(), &mut out)
}

// Diagnostics go to stderr so stdout only ever carries the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
