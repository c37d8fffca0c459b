//! Pre-run artifact cleanup
//!
//! Aggregation reads whatever JSON files sit in the platform artifact
//! directories, so stale files from an earlier run would silently mix into
//! the new report. Every run therefore starts by deleting the previous
//! run's artifacts. Deletion failures are logged and skipped rather than
//! aborting: an incomplete reset only reduces how clean the slate is.

use crate::config::ArtifactConfig;
use crate::platform::Platform;
use std::path::Path;

/// Clears every platform's artifact directory
pub fn reset_artifacts(config: &ArtifactConfig) {
    for platform in Platform::ALL {
        clear_artifact_dir(Path::new(config.dir_for(platform)));
    }
}

/// Deletes all JSON artifact files directly inside a directory
///
/// Non-recursive: subdirectories and non-JSON files are left alone. A
/// missing directory is not an error; there is simply nothing to clear.
pub fn clear_artifact_dir(dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
        Err(e) => {
            tracing::error!("Failed to read artifact directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Failed to read entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match std::fs::remove_file(&path) {
            Ok(()) => tracing::info!("Deleted stale artifact: {}", path.display()),
            Err(e) => tracing::error!("Failed to delete {}: {}", path.display(), e),
        }
    }
}
