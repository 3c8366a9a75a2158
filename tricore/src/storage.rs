//! Config file locations and loading
//!
//! Files are only ever read. Nothing a calculator session does is written
//! back to disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "tricalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file. A missing file is `NotFound` so callers
/// can fall back to defaults without treating it as a failure.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        size: u32,
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tricore-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let path = scratch_file("sample.json", r#"{ "name": "calc", "size": 15 }"#);
        let sample: Sample = load_json(&path).unwrap();
        assert_eq!(sample, Sample { name: "calc".to_string(), size: 15 });
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("tricore-definitely-missing.json");
        match load_json::<Sample>(&path) {
            Err(StorageError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let path = scratch_file("broken.json", "{ name: ");
        assert!(matches!(load_json::<Sample>(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_config_dir_mentions_app() {
        let dir = config_dir("tricalc");
        assert!(dir.to_string_lossy().contains("tricalc") || dir == PathBuf::from("."));
    }
}
