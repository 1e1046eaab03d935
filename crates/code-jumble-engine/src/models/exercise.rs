use serde::{Deserialize, Serialize};

use crate::editing::{BlockId, MAX_INDENT};

/// One code line of an exercise, as authored.
///
/// `correct_index` of -1 marks a distractor: a block that belongs in the
/// Trash in the correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumbleBlock {
    pub id: BlockId,
    pub code: String,
    #[serde(default = "distractor_index")]
    pub correct_index: i32,
    #[serde(default)]
    pub correct_indent: u8,
}

fn distractor_index() -> i32 {
    -1
}

impl JumbleBlock {
    pub fn is_distractor(&self) -> bool {
        self.correct_index < 0
    }
}

/// An authored code-jumble question: a prompt and its shuffled blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumbleExercise {
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub blocks: Vec<JumbleBlock>,
}

fn default_language() -> String {
    "python".to_string()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("exercise has no blocks")]
    NoBlocks,
    #[error("correct indices must form 0..{expected} exactly, got {found:?}")]
    BrokenIndexSequence { expected: usize, found: Vec<i32> },
    #[error("block {id} has correct_indent {indent}, outside 0..={MAX_INDENT}")]
    IndentOutOfRange { id: BlockId, indent: u8 },
}

impl JumbleExercise {
    /// Every block id, in authored order: the initial Workspace contents
    /// of a freshly rendered question.
    pub fn block_ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    /// The authored code for a block.
    pub fn code_of(&self, id: BlockId) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.code.as_str())
    }

    /// Check the authoring rules: at least one block, non-distractor
    /// `correct_index` values form a contiguous 0..n-1 sequence, and every
    /// `correct_indent` is within range.
    pub fn validate(&self) -> Result<(), ExerciseError> {
        if self.blocks.is_empty() {
            return Err(ExerciseError::NoBlocks);
        }

        for block in &self.blocks {
            if block.correct_indent > MAX_INDENT {
                return Err(ExerciseError::IndentOutOfRange {
                    id: block.id,
                    indent: block.correct_indent,
                });
            }
        }

        let mut in_answer: Vec<i32> = self
            .blocks
            .iter()
            .filter(|b| !b.is_distractor())
            .map(|b| b.correct_index)
            .collect();
        in_answer.sort_unstable();
        let expected = in_answer.len();
        if in_answer.iter().enumerate().any(|(i, &v)| v != i as i32) {
            return Err(ExerciseError::BrokenIndexSequence {
                expected,
                found: in_answer,
            });
        }

        Ok(())
    }
}
