//! Interactive note shell.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open storage.
//! - Hand stdin/stdout to the shell loop.

mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, Cli, StorageTarget};
use jotter_core::db::open_db;
use jotter_core::{
    init_logging, KeyValueRepository, MemoryKeyValueRepository, NoteStore, RepoResult,
    SqliteKeyValueRepository,
};
use log::{info, warn};
use shell::Shell;
use std::path::Path;

fn main() -> Result<()> {
    let config = Cli::parse().resolve()?;
    start_logging(&config)?;

    match &config.storage {
        StorageTarget::Memory => run_shell(MemoryKeyValueRepository::new()),
        StorageTarget::File(path) => match open_file_storage(path) {
            Ok(repo) => run_shell(repo),
            Err(err) => {
                warn!("event=storage_open module=cli status=error fallback=memory error={err}");
                eprintln!(
                    "warning: cannot open {} ({err}); notes will not be saved this session",
                    path.display()
                );
                run_shell(MemoryKeyValueRepository::new())
            }
        },
    }
}

fn start_logging(config: &AppConfig) -> Result<()> {
    let Some(logging) = &config.logging else {
        return Ok(());
    };
    let dir = logging
        .dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    init_logging(&logging.level, dir)
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    Ok(())
}

fn open_file_storage(path: &Path) -> RepoResult<SqliteKeyValueRepository> {
    let conn = open_db(path)?;
    SqliteKeyValueRepository::try_new(conn)
}

fn run_shell<R: KeyValueRepository>(repo: R) -> Result<()> {
    let store = NoteStore::open(repo);
    info!(
        "event=shell_start module=cli status=ok version={} notes={}",
        jotter_core::core_version(),
        store.len()
    );
    println!("jotter {}. Type `help` for commands.", jotter_core::core_version());

    let mut shell = Shell::new(store);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut shell, &mut stdin.lock(), &mut stdout.lock())
        .context("terminal input/output failed")?;
    info!(
        "event=shell_exit module=cli status=ok notes={}",
        shell.store().len()
    );
    Ok(())
}
