//! Versioned job files: everything needed to rebuild and re-export a pack

use crate::Result;
use crate::error::PackError;
use crate::model::{ExportSettings, SheetOverride, TitleBlock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Current job file format version
pub const JOB_FILE_VERSION: u32 = 1;

/// Persisted job state: the source file list, per-sheet overrides keyed by
/// stable label, export settings and the global title block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    pub version: u32,
    pub files: Vec<PathBuf>,
    pub overrides_by_label: BTreeMap<String, SheetOverride>,
    pub settings: ExportSettings,
    pub title_block: TitleBlock,
}

impl Default for JobFile {
    fn default() -> Self {
        Self {
            version: JOB_FILE_VERSION,
            files: Vec::new(),
            overrides_by_label: BTreeMap::new(),
            settings: ExportSettings::default(),
            title_block: TitleBlock::default(),
        }
    }
}

/// Write a job file as pretty-printed JSON
pub fn save_job(job: &JobFile, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(job).map_err(|e| PackError::Job(e.to_string()))?;
    std::fs::write(path.as_ref(), json)?;
    debug!("saved job file {}", path.as_ref().display());
    Ok(())
}

/// Load a job file, failing hard on malformed JSON or a version mismatch
pub fn load_job(path: impl AsRef<Path>) -> Result<JobFile> {
    let data = std::fs::read_to_string(path.as_ref())?;
    let job: JobFile =
        serde_json::from_str(&data).map_err(|e| PackError::Job(format!("malformed job file: {e}")))?;

    if job.version != JOB_FILE_VERSION {
        return Err(PackError::Job(format!(
            "unsupported job file version {} (expected {})",
            job.version, JOB_FILE_VERSION
        )));
    }

    Ok(job)
}
