use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Box<[u8]>>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_bytes(&bytes);
        tracing::debug!(
            file = %path.display(),
            size_bytes = bytes.len(),
            line_count = store.len(),
            "file opened"
        );
        Ok(store)
    }

    /// Splits on `\n`, treating a `\r` right before it as part of the
    /// terminator. A trailing newline does not start an extra line.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::new();
        }

        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let lines = body
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line).into())
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(|line| &line[..])
    }
}
