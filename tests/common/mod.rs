//! Test helpers for password file integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Contents of the reference password file used across tests.
pub const SAMPLE_PASSWD: &str = "jdelgad,pass,Admin\nnewUser,pass2\n";

/// A password file inside its own temporary directory.
pub struct TestPasswd {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestPasswd {
    /// Create a password file with the given contents.
    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("passwd");
        fs::write(&path, contents).expect("write passwd");
        Self { _dir: dir, path }
    }

    /// Create the reference password file.
    pub fn sample() -> Self {
        Self::with_contents(SAMPLE_PASSWD)
    }

    /// Path next to the password file that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.path.with_file_name("fakePasswd")
    }

    /// Read the raw file back.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read passwd")
    }
}
