//! Test utilities for kape2toml
//!
//! Helpers for laying out throwaway KAPE trees in temporary directories.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A KAPE folder in a temporary directory that is removed on drop
pub struct KapeTree {
    temp_dir: TempDir,
}

impl KapeTree {
    pub fn new() -> Result<Self> {
        Ok(KapeTree {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a definition at `relative` below the root, creating folders
    pub fn add(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        write_definition(&path, content)?;
        Ok(path)
    }
}

/// Write a file, creating its parent directories
pub fn write_definition(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A single-target definition without compound targets
pub fn simple_definition(name: &str) -> String {
    format!(
        r#"Description: {name} files
Author: Test
Version: 1.0
Id: 00000000-0000-4000-8000-000000000000
RecreateDirectories: true
Targets:
    -
        Name: {name}
        Category: Test
        Path: C:\Evidence\{name}\
"#
    )
}

/// Capture `info!` and louder messages logged on the current thread
pub mod logging {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Info
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                CAPTURED.with(|captured| captured.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    /// Run `f` and return its result with the messages it logged
    pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Info);
        });

        CAPTURED.with(|captured| captured.borrow_mut().clear());
        let result = f();
        let messages = CAPTURED.with(|captured| captured.borrow_mut().drain(..).collect());
        (result, messages)
    }
}
