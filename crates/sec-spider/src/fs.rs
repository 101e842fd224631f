use crate::analysis::Classification;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};

/// `analysis_YYYYMMDD_HHMMSS.json`
pub const ANALYSIS_FILE_FORMAT: &str = "analysis_%Y%m%d_%H%M%S.json";

/// File name for an analysis written at `now`; second granularity.
pub fn analysis_file_name(now: NaiveDateTime) -> String {
    now.format(ANALYSIS_FILE_FORMAT).to_string()
}

/// Write `analysis` to `dir`, named after the current local time, and return the path.
///
/// Two writes within the same second share a name; the later one replaces the earlier.
pub async fn write_analysis(
    dir: impl AsRef<Path>,
    analysis: &Classification,
) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();

    // ensure the directory exists
    trace!("checking directory path: {dir:?}");
    tokio::fs::create_dir_all(dir).await.map_err(|err| {
        error!("failed to create directory {dir:?}, error({err})");
        err
    })?;

    let path = dir.join(analysis_file_name(Local::now().naive_local()));
    write_json(&path, analysis).await?;
    debug!("analysis written to {path:?}");

    Ok(path)
}

/// Writes `data` to a `.json` file at `path`, pretty-printed with 2-space indentation.
pub async fn write_json<T: Serialize>(path: impl AsRef<Path>, data: &T) -> anyhow::Result<()> {
    let path = path.as_ref();
    trace!("serializing data for {path:?}");
    let bytes = serde_json::to_vec_pretty(data)?;
    tokio::fs::write(path, bytes).await.map_err(|err| {
        error!("failed to write file at {path:?}, error({err})");
        err
    })?;
    Ok(())
}

/// Reads a `.json` file from `path`.
pub async fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    trace!("reading file path: {path:?}");
    let file = tokio::fs::read(path).await?;
    trace!("file read; deserializing bytes ...");
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}
