//! Location of the per-user `pnl` directory holding `config.toml`.

use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// `$PNL_HOME` if set and non-empty, else `$HOME/.pnl`.
pub fn pnl_home() -> Result<PathBuf> {
    resolve_home(std::env::var_os("PNL_HOME"), std::env::var_os("HOME"))
}

fn resolve_home(pnl_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    match (pnl_home.filter(|v| !v.is_empty()), home.filter(|v| !v.is_empty())) {
        (Some(dir), _) => Ok(PathBuf::from(dir)),
        (None, Some(home)) => Ok(PathBuf::from(home).join(".pnl")),
        (None, None) => bail!("neither PNL_HOME nor HOME is set"),
    }
}

/// Create the `pnl` directory if needed and return it.
pub fn ensure_pnl_home() -> Result<PathBuf> {
    let dir = pnl_home()?;
    if !dir.is_dir() {
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(dir)
}
