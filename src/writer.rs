use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::error::{GenError, Result};

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<GenError>,
}

/// Writes every file into `dir` concurrently. A failed file does not stop the others.
pub async fn write_outputs(dir: &Path, files: IndexMap<String, String>) -> Result<WriteReport> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| GenError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut tasks = JoinSet::new();
    for (file_name, text) in files {
        let path = dir.join(file_name);
        tasks.spawn(async move {
            match tokio::fs::write(&path, text).await {
                Ok(()) => Ok(path),
                Err(source) => Err(GenError::Write { path, source }),
            }
        });
    }

    let mut report = WriteReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined.map_err(GenError::from).and_then(|written| written) {
            Ok(path) => {
                info!(path = %path.display(), "File is created successfully.");
                report.written.push(path);
            }
            Err(err) => {
                error!(error = %err, "Failed to write output file.");
                report.failures.push(err);
            }
        }
    }
    Ok(report)
}
