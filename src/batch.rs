use crate::config::Config;
use crate::patch::patch_file;
use anyhow::{Context, Result};
use tracing::{error, info};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const EXTENSION: &str = "qfx";

/// Outcome of one batch run.
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    pub patched: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

/// Most recently modified `*.QFX` file directly inside `dir`, if any.
/// Files named `*.pat.QFX` are outputs and never picked.
pub fn find_newest(dir: &Path) -> Result<Option<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot list `{}'", dir.display()))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let path = entry?.path();
        let is_qfx = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(EXTENSION));
        // Our own output from an earlier run.
        let is_patched = path
            .file_stem()
            .map_or(false, |stem| stem.to_string_lossy().ends_with(".pat"));
        if !is_qfx || is_patched || !path.is_file() {
            continue;
        }

        let modified = fs::metadata(&path)?.modified()?;
        if newest.as_ref().map_or(true, |(time, _)| modified > *time) {
            newest = Some((modified, path));
        }
    }

    Ok(newest.map(|(_, path)| path))
}

/// Patch the newest export of every configured account.
///
/// Accounts without any export are skipped; a failing account does not stop the others.
pub fn run(config: &Config) -> Report {
    let mut report = Report::default();

    for task in &config.tasks {
        let dir = task.directory(&config.global_prefix);
        let newest = match find_newest(&dir) {
            Ok(Some(path)) => path,
            Ok(None) => {
                error!("no QFX files found in directory {}", dir.display());
                report.skipped.push(task.nickname.clone());
                continue;
            }
            Err(e) => {
                error!("{}: {:#}", task.nickname, e);
                report.failed.push(task.nickname.clone());
                continue;
            }
        };

        info!("{}: patching {}", task.nickname, newest.display());
        match patch_file(&newest, &task.account_id) {
            Ok(output) => report.patched.push(output),
            Err(e) => {
                error!("{}: {:#}", task.nickname, e);
                report.failed.push(task.nickname.clone());
            }
        }
    }

    report
}
