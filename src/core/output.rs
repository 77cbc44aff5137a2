//! Report persistence: every finished report becomes `<name>.json`.

use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::Result;

/// Destination for finished reports. `name` identifies the report.
pub trait ReportSink {
    fn write(&mut self, name: &str, document: &Value) -> Result<()>;
}

/// Writes each document to `<dir>/<name>.json`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for JsonDirSink {
    fn write(&mut self, name: &str, document: &Value) -> Result<()> {
        let path = self.path_for(name);
        write_string(&path, &serde_json::to_string_pretty(document)?)?;
        debug!(path = %path.display(), "report document written");
        self.written.push(path);
        Ok(())
    }
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Keeps documents in memory; for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub documents: std::collections::BTreeMap<String, Value>,
}

#[cfg(test)]
impl ReportSink for MemorySink {
    fn write(&mut self, name: &str, document: &Value) -> Result<()> {
        self.documents.insert(name.to_string(), document.clone());
        Ok(())
    }
}
