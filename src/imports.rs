//! Accumulating set of external package import paths.
//!
//! Built up during translation whenever a struct value's owning package
//! must be qualified, then rendered as a Go grouped import block to sit
//! alongside the emitted literal. Entries are only ever added during a
//! pass, never removed, and rendering order is lexicographic so the same
//! set always produces the same block.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of import paths the generated literal depends on.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSet {
    paths: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Render the set as a grouped import declaration, one quoted path per
    /// line, tab-indented. Empty set renders as the empty string.
    pub fn generate(&self) -> String {
        if self.paths.is_empty() {
            return String::new();
        }

        let entries: Vec<String> = self.paths.iter().map(|path| format!("\t\"{path}\"")).collect();
        format!("import (\n{}\n)", entries.join("\n"))
    }
}
