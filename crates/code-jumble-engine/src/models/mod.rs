pub mod exercise;

pub use exercise::{ExerciseError, JumbleBlock, JumbleExercise};
