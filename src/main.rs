//! student-db: interactive student record manager
//!
//! Startup sequence:
//!   1. Init logger (`RUST_LOG` or the configured fallback level)
//!   2. Load `students.txt`, or start from the seed set if it is absent/empty
//!   3. Run the menu loop on stdin/stdout
//!
//! A malformed data file aborts startup so it is never overwritten.

use std::io;

use anyhow::Context;
use tracing::info;

use student_db::codec::Origin;
use student_db::config::Config;
use student_db::shell::Shell;
use student_db::{codec, logger, seed};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::default();
    logger::init(config.level())?;

    let (store, origin) = codec::load_or_seed(config.data_file(), seed::default_students)
        .with_context(|| format!("failed to load {}", config.data_file().display()))?;
    if origin == Origin::Seed {
        println!("No existing data found. Starting with the default list of students.");
    }
    info!(records = store.len(), ?origin, "store ready");

    let stdin = io::stdin();
    let mut shell = Shell::new(store, config, stdin.lock(), io::stdout());
    let exit = shell.run()?;
    info!(?exit, "session ended");
    Ok(())
}
