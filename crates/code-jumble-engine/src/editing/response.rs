//! The submission wire format shared with the grader.
//!
//! The grader receives the Workspace container as a bracketed list of
//! `(block_id, indent)` pairs. The exact text is a compatibility contract:
//! every pair, including the last, is followed by `", "`, so a non-empty
//! response ends in `"), ]"` and an empty Workspace is just `"[]"`.

use std::fmt::Write;

use crate::editing::{BlockId, BlockRegistry, ContainerKind, MAX_INDENT};

/// Render the current Workspace as the grader's wire text.
///
/// Trash blocks are excluded entirely; their retained indent levels never
/// appear here. An empty Workspace renders as `[]`, a legal (if likely
/// wrong) answer.
pub fn render(registry: &BlockRegistry) -> String {
    let mut out = String::from("[");
    for (id, indent) in registry.ordered(ContainerKind::Workspace) {
        // Writing to a String can't fail.
        write!(out, "({id}, {indent}), ").unwrap();
    }
    out.push(']');
    out
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response is not a bracketed list: {0:?}")]
    NotAList(String),
    #[error("malformed pair in response: {0:?}")]
    MalformedPair(String),
    #[error("indent level {0} outside 0..={MAX_INDENT}")]
    IndentOutOfRange(i64),
}

/// Parse the wire text back into `(block_id, indent)` pairs.
///
/// This is the server side of the same contract; it tolerates arbitrary
/// whitespace and the trailing comma `render` emits, and rejects indent
/// levels outside the widget's 0..=4 range.
pub fn parse(text: &str) -> Result<Vec<(BlockId, u8)>, ResponseError> {
    let body = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ResponseError::NotAList(text.to_string()))?;

    let mut pairs = Vec::new();
    let mut rest = body.trim_start();
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('(')
            .ok_or_else(|| ResponseError::MalformedPair(rest.to_string()))?;
        let (pair, tail) = inner
            .split_once(')')
            .ok_or_else(|| ResponseError::MalformedPair(rest.to_string()))?;

        let (id, indent) = pair
            .split_once(',')
            .ok_or_else(|| ResponseError::MalformedPair(pair.to_string()))?;
        let id: i64 = id
            .trim()
            .parse()
            .map_err(|_| ResponseError::MalformedPair(pair.to_string()))?;
        let indent: i64 = indent
            .trim()
            .parse()
            .map_err(|_| ResponseError::MalformedPair(pair.to_string()))?;
        if !(0..=MAX_INDENT as i64).contains(&indent) {
            return Err(ResponseError::IndentOutOfRange(indent));
        }
        pairs.push((BlockId(id), indent as u8));

        rest = tail.trim_start();
        rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
    }
    Ok(pairs)
}
