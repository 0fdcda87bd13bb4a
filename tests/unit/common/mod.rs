//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing sitetool components.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary firmware-project tree with a standard layout
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new test tree with standard structure:
    /// ```text
    /// /
    /// ├── src/
    /// │   ├── engine/
    /// │   │   ├── engine.c
    /// │   │   └── engine.h
    /// │   ├── backend/
    /// │   │   └── nl80211.c
    /// │   └── main.c
    /// └── README.md
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("src/engine")).unwrap();
        fs::create_dir_all(dir.path().join("src/backend")).unwrap();

        fs::write(dir.path().join("src/engine/engine.c"), "int engine;\n").unwrap();
        fs::write(dir.path().join("src/engine/engine.h"), "extern int engine;\n").unwrap();
        fs::write(dir.path().join("src/backend/nl80211.c"), "int backend;\n").unwrap();
        fs::write(dir.path().join("src/main.c"), "int main(void) { return 0; }\n").unwrap();
        fs::write(dir.path().join("README.md"), "# Test\n").unwrap();

        Self { dir }
    }

    /// Create an empty test tree
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the test tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file to the test tree
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Add an empty directory
    pub fn add_dir(&self, path: &str) {
        fs::create_dir_all(self.dir.path().join(path)).unwrap();
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
