//! Session snapshot persistence for the selection state and document cache.
//!
//! The browser front end keeps this state in session storage, cleared on
//! refresh; headless embeddings round-trip the same state through a JSON
//! snapshot under `<root>/.listomer`, written atomically with a backup of
//! the previous snapshot kept for recovery.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::CoreError;
use crate::selection::SelectionState;

pub const SESSION_SCHEMA_VERSION: u32 = 1;

const SNAPSHOT_FILE: &str = "session.json";

/// Everything the front end persists between callback invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub selection: SelectionState,
    pub document: Document,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new(selection: SelectionState, document: Document, saved_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            saved_at,
            selection,
            document,
        }
    }
}

/// Where a recovered snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoverySource {
    #[default]
    None,
    Primary,
    Backup,
}

/// Result of a recovery attempt. Degraded steps surface as warnings rather
/// than errors so a torn snapshot never blocks startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionRecovery {
    pub snapshot: Option<SessionSnapshot>,
    pub source: RecoverySource,
    pub warnings: Vec<String>,
}

/// Store rooted at `<root>/.listomer`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new(root: &Path) -> Result<Self, CoreError> {
        if root.as_os_str().is_empty() {
            return Err(CoreError::Snapshot("store root required".to_owned()));
        }
        Ok(Self {
            root: root.join(".listomer"),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILE)
    }

    fn backup_path(&self) -> PathBuf {
        self.root.join(format!("{SNAPSHOT_FILE}.bak"))
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!("{SNAPSHOT_FILE}.tmp"))
    }

    /// Write the snapshot atomically, keeping the previous one as backup.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), CoreError> {
        let encoded = serde_json::to_string_pretty(snapshot)
            .map_err(|err| CoreError::Snapshot(format!("encode snapshot: {err}")))?;

        fs::create_dir_all(&self.root).map_err(|err| {
            CoreError::Snapshot(format!("create store dir {}: {err}", self.root.display()))
        })?;

        let path = self.snapshot_path();
        if path.exists() {
            fs::copy(&path, self.backup_path()).map_err(|err| {
                CoreError::Snapshot(format!("back up snapshot {}: {err}", path.display()))
            })?;
        }

        let temp = self.temp_path();
        write_file(&temp, encoded.as_bytes())?;
        if let Err(err) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(CoreError::Snapshot(format!(
                "rename snapshot {} -> {}: {err}",
                temp.display(),
                path.display()
            )));
        }
        Ok(())
    }

    /// Recover the latest usable snapshot, falling back to the backup.
    #[must_use]
    pub fn load(&self) -> SessionRecovery {
        let mut warnings = Vec::new();

        if let Some(snapshot) = try_load(&self.snapshot_path(), "snapshot", &mut warnings) {
            return SessionRecovery {
                snapshot: Some(snapshot),
                source: RecoverySource::Primary,
                warnings,
            };
        }

        if let Some(snapshot) = try_load(&self.backup_path(), "backup snapshot", &mut warnings) {
            warnings.push("recovered session from backup snapshot".to_owned());
            return SessionRecovery {
                snapshot: Some(snapshot),
                source: RecoverySource::Backup,
                warnings,
            };
        }

        SessionRecovery {
            snapshot: None,
            source: RecoverySource::None,
            warnings,
        }
    }

    /// Drop the persisted session, mirroring the host's clear-on-refresh.
    pub fn clear(&self) -> Result<(), CoreError> {
        remove_if_present(&self.snapshot_path())?;
        remove_if_present(&self.backup_path())?;
        Ok(())
    }
}

fn try_load(path: &Path, label: &str, warnings: &mut Vec<String>) -> Option<SessionSnapshot> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            warnings.push(format!("read {label} {}: {err}", path.display()));
            return None;
        }
    };

    let snapshot: SessionSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warnings.push(format!("parse {label} {}: {err}", path.display()));
            return None;
        }
    };

    if snapshot.schema_version != SESSION_SCHEMA_VERSION {
        warnings.push(format!(
            "{label} {} has schema version {}, expected {SESSION_SCHEMA_VERSION}",
            path.display(),
            snapshot.schema_version
        ));
        return None;
    }

    Some(snapshot)
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), CoreError> {
    let mut file = fs::File::create(path)
        .map_err(|err| CoreError::Snapshot(format!("create {}: {err}", path.display())))?;
    file.write_all(data)
        .map_err(|err| CoreError::Snapshot(format!("write {}: {err}", path.display())))?;
    file.sync_all()
        .map_err(|err| CoreError::Snapshot(format!("sync {}: {err}", path.display())))?;
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), CoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(CoreError::Snapshot(format!(
            "remove {}: {err}",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::{RecoverySource, SessionSnapshot, SessionStore};
    use crate::document::Document;
    use crate::selection::SelectionState;
    use chrono::{TimeZone, Utc};

    fn snapshot() -> SessionSnapshot {
        let saved_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        SessionSnapshot::new(SelectionState::default(), Document::default(), saved_at)
    }

    #[test]
    fn empty_root_is_refused() {
        assert!(SessionStore::new(std::path::Path::new("")).is_err());
    }

    #[test]
    fn load_without_a_store_is_clean_and_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path()).expect("store");
        let recovery = store.load();
        assert!(recovery.snapshot.is_none());
        assert_eq!(recovery.source, RecoverySource::None);
        assert!(recovery.warnings.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path()).expect("store");
        store.save(&snapshot()).expect("save");

        let recovery = store.load();
        assert_eq!(recovery.source, RecoverySource::Primary);
        assert_eq!(recovery.snapshot, Some(snapshot()));
    }

    #[test]
    fn unknown_schema_version_is_refused_with_a_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path()).expect("store");
        let mut stale = snapshot();
        stale.schema_version = 99;
        store.save(&stale).expect("save");

        let recovery = store.load();
        assert!(recovery.snapshot.is_none());
        assert!(recovery.warnings.iter().any(|w| w.contains("schema version 99")));
    }
}
