//! src/test_utils.rs
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn scratch_dir() -> PathBuf {
    let dir = PathBuf::from(format!("/tmp/wordfreq/{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
