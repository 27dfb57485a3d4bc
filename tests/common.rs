//! Shared test helpers for the rollback integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use filetime::{set_file_mtime, FileTime};
use serde_json::Value;

use analizador_rollback::logging::FactsEmitter;
use analizador_rollback::types::Layout;

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

impl TestEmitter {
    pub fn stage(&self, stage: &str) -> Vec<Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, ev, _, _)| ev == stage)
            .map(|(_, _, _, f)| f.clone())
            .collect()
    }
}

/// A per-test project root with `backups/` and `backend/` builders.
#[derive(Debug)]
pub struct TestRoot {
    td: tempfile::TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        let td = tempfile::TempDir::new().expect("tempdir");
        std::fs::create_dir_all(td.path().join("backend")).unwrap();
        Self { td }
    }

    pub fn path(&self) -> &Path {
        self.td.path()
    }

    pub fn layout(&self) -> Layout {
        Layout::rooted(self.path())
    }

    pub fn target(&self) -> PathBuf {
        self.path().join("backend/analizador_optimizado.py")
    }

    pub fn write_target(&self, content: &str) {
        std::fs::write(self.target(), content).unwrap();
    }

    pub fn read_target(&self) -> String {
        std::fs::read_to_string(self.target()).unwrap()
    }

    /// Create `backups/<name>/` holding the payload (when given) with mtime `secs`.
    pub fn backup(&self, name: &str, payload: Option<&str>, secs: i64) -> PathBuf {
        let dir = self.path().join("backups").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        if let Some(p) = payload {
            std::fs::write(dir.join("analizador_optimizado.py"), p).unwrap();
        }
        // Set after writing: adding the payload bumps the directory mtime.
        set_file_mtime(&dir, FileTime::from_unix_time(secs, 0)).unwrap();
        dir
    }
}
