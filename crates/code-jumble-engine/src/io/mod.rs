use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

use crate::models::{ExerciseError, JumbleExercise};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Exercise file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse exercise file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid exercise: {0}")]
    Invalid(#[from] ExerciseError),
    #[error("Invalid exercises directory: {0}")]
    InvalidExercisesDir(String),
}

/// Read and validate one exercise file, relative to the exercises root.
pub fn read_exercise(
    relative_path: &RelativePath,
    exercises_root: &Path,
) -> Result<JumbleExercise, IoError> {
    let absolute_path = relative_path.to_path(exercises_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    let exercise: JumbleExercise = toml::from_str(&content).map_err(|source| IoError::Parse {
        path: absolute_path,
        source,
    })?;
    exercise.validate()?;
    Ok(exercise)
}

/// Scan for exercise files (`.toml`) in the exercises directory.
pub fn scan_exercise_files(exercises_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !exercises_root.exists() {
        return Err(IoError::InvalidExercisesDir(
            "exercises directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(exercises_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "toml"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_exercises_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidExercisesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_exercise_file, create_test_exercises_dir, SAMPLE_EXERCISE};
    use relative_path::RelativePathBuf;

    #[test]
    fn test_scan_finds_exercise_files() {
        let dir = create_test_exercises_dir();
        create_exercise_file(&dir, "triangle.toml", SAMPLE_EXERCISE);
        create_exercise_file(&dir, "week2/loops.toml", SAMPLE_EXERCISE);
        create_exercise_file(&dir, "notes.txt", "not an exercise");

        let files = scan_exercise_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("triangle.toml")));
        assert!(files.iter().any(|f| f.ends_with("week2/loops.toml")));
    }

    #[test]
    fn test_read_exercise_round_trip() {
        let dir = create_test_exercises_dir();
        create_exercise_file(&dir, "triangle.toml", SAMPLE_EXERCISE);

        let exercise =
            read_exercise(&RelativePathBuf::from("triangle.toml"), dir.path()).unwrap();

        assert_eq!(exercise.prompt, "Print a 3-line triangle of stars");
        assert_eq!(exercise.blocks.len(), 3);
    }

    #[test]
    fn test_read_missing_exercise_is_not_found() {
        let dir = create_test_exercises_dir();
        let err = read_exercise(&RelativePathBuf::from("nope.toml"), dir.path()).unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
    }

    #[test]
    fn test_read_syntactically_broken_exercise_is_parse_error() {
        let dir = create_test_exercises_dir();
        create_exercise_file(&dir, "broken.toml", "prompt = ");

        let err = read_exercise(&RelativePathBuf::from("broken.toml"), dir.path()).unwrap_err();
        assert!(matches!(err, IoError::Parse { .. }));
    }

    #[test]
    fn test_read_semantically_broken_exercise_is_invalid() {
        let dir = create_test_exercises_dir();
        create_exercise_file(
            &dir,
            "gap.toml",
            r#"
            prompt = "gap in indices"

            [[blocks]]
            id = 1
            code = "a = 1"
            correct_index = 0

            [[blocks]]
            id = 2
            code = "b = 2"
            correct_index = 2
            "#,
        );

        let err = read_exercise(&RelativePathBuf::from("gap.toml"), dir.path()).unwrap_err();
        assert!(matches!(err, IoError::Invalid(_)));
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_exercise_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidExercisesDir(_))));
    }
}
