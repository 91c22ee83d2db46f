// src/store.rs

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::data::{MemberIdentity, MemberRecord, Snapshot};
use crate::loge;
use crate::progress::Progress;

/// Which half of the per-date pipeline gave up on the date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Parse,
}

impl FailureKind {
    fn message(self) -> &'static str {
        match self {
            FailureKind::Fetch => "Error during fetch.",
            FailureKind::Parse => {
                "Could not parse server response, or server sent no response at all."
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot list snapshot dir {dir}: {source}")]
    DirUnreadable { dir: PathBuf, source: io::Error },
    #[error("unreadable snapshot {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

/// Owns the snapshot directory and the error log. One JSON unit per date,
/// keyed yyyy-mm-dd so that filename order is date order; load_all and
/// the downstream dedupe depend on that.
pub struct SnapshotStore {
    dir: PathBuf,
    error_log: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, error_log: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            error_log: error_log.into(),
        }
    }

    /// Write one dated snapshot. Rerunning the same date overwrites it.
    pub fn save(&self, date: NaiveDate, members: Vec<MemberRecord>) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", date.format("%Y-%m-%d")));
        let snap = Snapshot { date, members };
        let json = serde_json::to_string(&snap).map_err(io::Error::other)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Append one timestamped line to the error log and mirror it to
    /// stderr. Never fails: a broken error log must not take the walk
    /// down with it.
    pub fn record_failure(&self, date: NaiveDate, kind: FailureKind) {
        let line = format!(
            "[{}] {date}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            kind.message()
        );
        eprintln!("\n{}", line.trim_end());

        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.error_log)
            .and_then(|mut f| f.write_all(line.as_bytes()));
        if written.is_err() {
            loge!("could not append to {}", self.error_log.display());
        }
    }

    /// Read every persisted snapshot back, in filename (= date) order.
    /// Any unit that fails to read or deserialize aborts the whole load.
    pub fn load_all(
        &self,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<Snapshot>, CorpusError> {
        let dir_err = |source| CorpusError::DirUnreadable { dir: self.dir.clone(), source };
        let entries = fs::read_dir(&self.dir).map_err(dir_err)?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry.map_err(dir_err)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            files.push(path);
        }
        files.sort();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(files.len());
        }

        let mut snapshots = Vec::with_capacity(files.len());
        for (i, path) in files.iter().enumerate() {
            let unreadable = |reason: String| CorpusError::Unreadable {
                path: path.clone(),
                reason,
            };
            let text = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
            let snap: Snapshot =
                serde_json::from_str(&text).map_err(|e| unreadable(e.to_string()))?;
            snapshots.push(snap);

            if i % 123 == 0 {
                if let Some(p) = progress.as_deref_mut() {
                    p.update_status(&format!("{}/{}", i, files.len()));
                }
            }
        }
        Ok(snapshots)
    }
}

/// Serialize the consolidated identities as one JSON array.
pub fn save_identities(path: &Path, identities: &[MemberIdentity]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string(identities).map_err(io::Error::other)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("mdl_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn member(name: &str) -> MemberRecord {
        MemberRecord::from_cells(&[s!(name)])
    }

    fn store(dir: &Path) -> SnapshotStore {
        SnapshotStore::new(dir, dir.join("error.log"))
    }

    #[test]
    fn save_then_load_all_in_date_order() {
        let dir = tmp_dir("roundtrip");
        let store = store(&dir);

        // Save out of order; load must come back chronological.
        store.save(d(2020, 1, 2), vec![member("Meier, Anna")]).unwrap();
        store.save(d(2019, 12, 31), vec![member("Schmidt, Hans")]).unwrap();

        let snaps = store.load_all(None).unwrap();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].date, d(2019, 12, 31));
        assert_eq!(snaps[1].date, d(2020, 1, 2));
        assert_eq!(snaps[0].members[0].name, "Schmidt, Hans");
    }

    #[test]
    fn save_is_idempotent_per_date() {
        let dir = tmp_dir("idem");
        let store = store(&dir);

        store.save(d(2020, 1, 1), vec![member("Schmidt, Hans")]).unwrap();
        store.save(d(2020, 1, 1), vec![member("Meier, Anna")]).unwrap();

        let snaps = store.load_all(None).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].members[0].name, "Meier, Anna");
    }

    #[test]
    fn record_failure_appends_date_and_category() {
        let dir = tmp_dir("failures");
        let store = store(&dir);

        store.record_failure(d(2020, 1, 1), FailureKind::Fetch);
        store.record_failure(d(2020, 1, 2), FailureKind::Parse);

        let log = fs::read_to_string(dir.join("error.log")).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("2020-01-01"));
        assert!(lines[0].contains("fetch"));
        assert!(lines[1].contains("2020-01-02"));
        assert!(lines[1].contains("parse"));
    }

    #[test]
    fn load_all_skips_foreign_files() {
        let dir = tmp_dir("foreign");
        let store = store(&dir);
        store.save(d(2020, 1, 1), vec![member("Schmidt, Hans")]).unwrap();
        fs::write(dir.join("README.txt"), "not a snapshot").unwrap();

        assert_eq!(store.load_all(None).unwrap().len(), 1);
    }

    #[test]
    fn load_all_aborts_on_malformed_unit() {
        let dir = tmp_dir("malformed");
        let store = store(&dir);
        store.save(d(2020, 1, 1), vec![member("Schmidt, Hans")]).unwrap();
        fs::write(dir.join("2020-01-02.json"), "{ not json").unwrap();

        let err = store.load_all(None).unwrap_err();
        assert!(matches!(err, CorpusError::Unreadable { .. }));
    }

    #[test]
    fn identities_roundtrip() {
        let dir = tmp_dir("identities");
        let out = dir.join("clean_names.json");
        let identities = vec![
            MemberIdentity {
                name: s!("Hans Schmidt"),
                external_id: Some(s!("/wiki/Q123")),
                first_seen: d(2020, 1, 1),
            },
            MemberIdentity {
                name: s!("Anna Meier"),
                external_id: None,
                first_seen: d(2020, 1, 2),
            },
        ];

        save_identities(&out, &identities).unwrap();
        let back: Vec<MemberIdentity> =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(back, identities);
    }
}
