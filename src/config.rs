use anyhow::Result;
use std::path::PathBuf;

pub(crate) const LOG_ENV_VAR: &str = "TXEDIT_LOG";
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "txedit.log";

/// Startup settings, resolved once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) ledger_path: Option<PathBuf>,
    pub(crate) data_dir: PathBuf,
    pub(crate) log_filter: String,
}

impl Config {
    /// `ledger_arg` is the positional argument, if it was not a CLI subcommand.
    pub(crate) fn load(ledger_arg: Option<&str>) -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "txedit", "txedit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self::resolve(
            proj_dirs.data_dir().to_path_buf(),
            std::env::var(LOG_ENV_VAR).ok(),
            ledger_arg,
        ))
    }

    pub(crate) fn resolve(
        data_dir: PathBuf,
        log_filter: Option<String>,
        ledger_arg: Option<&str>,
    ) -> Self {
        let log_filter = log_filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        Self {
            ledger_path: ledger_arg.map(|p| PathBuf::from(shellexpand(p))),
            data_dir,
            log_filter,
        }
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
