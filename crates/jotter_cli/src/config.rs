//! Command-line and environment configuration.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "jotter";
const DB_FILE_NAME: &str = "jotter.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "jotter", version)]
#[command(about = "Create, search and edit short notes from the terminal")]
pub struct Cli {
    /// SQLite file holding the notes
    #[arg(long, env = "JOTTER_DB", conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Keep notes in memory only; nothing is written to disk
    #[arg(long)]
    pub memory: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "JOTTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, env = "JOTTER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long)]
    pub no_log: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub dir: PathBuf,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageTarget,
    pub logging: Option<LogSettings>,
}

impl Cli {
    /// Fills defaults from the platform data directory.
    pub fn resolve(self) -> Result<AppConfig> {
        self.resolve_with(dirs::data_dir().as_deref())
    }

    fn resolve_with(self, data_dir: Option<&Path>) -> Result<AppConfig> {
        let app_dir = data_dir.map(|dir| dir.join(APP_DIR_NAME));

        let storage = if self.memory {
            StorageTarget::Memory
        } else {
            let path = match self.db {
                Some(path) => path,
                None => app_dir
                    .as_ref()
                    .map(|dir| dir.join(DB_FILE_NAME))
                    .context("cannot determine a data directory; pass --db or --memory")?,
            };
            StorageTarget::File(path)
        };

        let logging = if self.no_log {
            None
        } else {
            let dir = match self.log_dir {
                Some(dir) => absolutize(dir)?,
                None => app_dir
                    .as_ref()
                    .map(|dir| dir.join("logs"))
                    .context("cannot determine a log directory; pass --log-dir or --no-log")?,
            };
            let level = self
                .log_level
                .unwrap_or_else(|| jotter_core::default_log_level().to_string());
            Some(LogSettings { level, dir })
        };

        Ok(AppConfig { storage, logging })
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
