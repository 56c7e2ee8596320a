//! Ordered load/save helpers for pipeline artifacts.
//!
//! Raw input arrives as line-delimited JSON (one record per line);
//! staged and final artifacts are persisted as whole-file JSON
//! collections. Both directions preserve input order.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::error::AppError;

/// Load an ordered sequence of records from a JSONL file.
///
/// Blank lines are skipped; a line that fails to decode is fatal and
/// reported with its line number, since a corrupt dump is a config
/// problem rather than label noise.
pub fn load_jsonl<T>(path: &Path) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Err(AppError::MissingArtifact(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).map_err(|err| {
            AppError::Validation(format!(
                "parsing record on line {} of {}: {err}",
                line_idx + 1,
                path.display()
            ))
        })?;
        records.push(record);
    }

    info!(records = records.len(), path = %path.display(), "Loaded JSONL records");
    Ok(records)
}

/// Load a previously saved collection artifact (a JSON array).
pub fn load_collection<T>(path: &Path) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Err(AppError::MissingArtifact(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records: Vec<T> = serde_json::from_reader(reader)?;

    info!(records = records.len(), path = %path.display(), "Loaded collection artifact");
    Ok(records)
}

/// Persist a collection as a JSON array, creating parent directories
/// as needed. Write failures surface as errors; there is no silent
/// no-op path.
pub fn save_collection<T>(records: &[T], path: &Path) -> Result<(), AppError>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;

    info!(records = records.len(), path = %path.display(), "Saved collection artifact");
    Ok(())
}

/// Fail when the artifact at `path` already exists. Orchestrators call
/// this before doing any work so a completed run is never overwritten.
pub fn ensure_absent(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::ArtifactExists(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Probe {
        id: u32,
        label: String,
    }

    fn probes() -> Vec<Probe> {
        vec![
            Probe {
                id: 1,
                label: "alpha".to_string(),
            },
            Probe {
                id: 2,
                label: "beta".to_string(),
            },
        ]
    }

    #[test]
    fn jsonl_load_preserves_order_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{{\"id\":1,\"label\":\"alpha\"}}").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{\"id\":2,\"label\":\"beta\"}}").unwrap();

        let loaded: Vec<Probe> = load_jsonl(&path).unwrap();
        assert_eq!(loaded, probes());
    }

    #[test]
    fn jsonl_decode_failure_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{{\"id\":1,\"label\":\"alpha\"}}").unwrap();
        writeln!(file, "not json").unwrap();

        let err = load_jsonl::<Probe>(&path).unwrap_err();
        match err {
            AppError::Validation(message) => assert!(message.contains("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_input_is_reported_as_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        assert!(matches!(
            load_jsonl::<Probe>(&path),
            Err(AppError::MissingArtifact(_))
        ));
        assert!(matches!(
            load_collection::<Probe>(&path),
            Err(AppError::MissingArtifact(_))
        ));
    }

    #[test]
    fn collection_round_trip_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output/collection.json");

        save_collection(&probes(), &path).unwrap();
        let loaded: Vec<Probe> = load_collection(&path).unwrap();
        assert_eq!(loaded, probes());
    }

    #[test]
    fn ensure_absent_rejects_existing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.json");
        assert!(ensure_absent(&path).is_ok());

        save_collection(&probes(), &path).unwrap();
        assert!(matches!(
            ensure_absent(&path),
            Err(AppError::ArtifactExists(_))
        ));
    }
}
