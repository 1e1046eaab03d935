//! Shared helpers for the engine's tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A small, valid exercise used across io tests.
pub const SAMPLE_EXERCISE: &str = r#"
prompt = "Print a 3-line triangle of stars"
language = "python"

[[blocks]]
id = 1
code = "for i in range(1, 4):"
correct_index = 0

[[blocks]]
id = 2
code = "print('*' * i)"
correct_index = 1
correct_indent = 1

[[blocks]]
id = 3
code = "print(i * '-')"
"#;

pub fn create_test_exercises_dir() -> TempDir {
    TempDir::new().expect("failed to create temp exercises dir")
}

pub fn create_exercise_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    fs::write(&path, content).expect("failed to write exercise file");
    assert!(Path::new(&path).exists());
}
