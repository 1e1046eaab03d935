use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, externally assigned identifier for one draggable code block.
///
/// The server assigns these when it renders an exercise; the engine treats
/// them as opaque and never invents new ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockId(pub i64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for BlockId {
    fn from(id: i64) -> Self {
        BlockId(id)
    }
}

/// Which of the two lists a block currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Blocks the learner has chosen for their answer, in answer order.
    Workspace,
    /// Unused blocks; order is irrelevant to grading.
    Trash,
}

/// Maximum nesting depth a block can be given.
pub const MAX_INDENT: u8 = 4;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate block id {0} in initial block lists")]
    DuplicateBlock(BlockId),
    #[error("initial block lists contain no blocks")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: BlockId,
    indent: u8,
}

/// Owns both block lists and every block's indent level.
///
/// Positions are always derived from the actual sequence order, never cached
/// separately, so they stay contiguous and 0-based through any sequence of
/// moves. `move_block` and `set_indent` are the only mutators; everything
/// else in the engine reads through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRegistry {
    workspace: Vec<Entry>,
    trash: Vec<Entry>,
}

impl BlockRegistry {
    /// Build a registry from the two ordered id lists supplied at widget
    /// construction. Every block starts at indent 0.
    ///
    /// A duplicate id (within or across the lists) or an entirely empty
    /// exercise is a construction-time error rather than a silently broken
    /// widget.
    pub fn new(workspace: &[BlockId], trash: &[BlockId]) -> Result<Self, RegistryError> {
        if workspace.is_empty() && trash.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for &id in workspace.iter().chain(trash) {
            if !seen.insert(id) {
                return Err(RegistryError::DuplicateBlock(id));
            }
        }

        let entry = |&id: &BlockId| Entry { id, indent: 0 };
        Ok(Self {
            workspace: workspace.iter().map(entry).collect(),
            trash: trash.iter().map(entry).collect(),
        })
    }

    fn list(&self, kind: ContainerKind) -> &Vec<Entry> {
        match kind {
            ContainerKind::Workspace => &self.workspace,
            ContainerKind::Trash => &self.trash,
        }
    }

    fn list_mut(&mut self, kind: ContainerKind) -> &mut Vec<Entry> {
        match kind {
            ContainerKind::Workspace => &mut self.workspace,
            ContainerKind::Trash => &mut self.trash,
        }
    }

    /// The container a block currently lives in.
    pub fn container_of(&self, id: BlockId) -> Option<ContainerKind> {
        self.position_of(id).map(|(kind, _)| kind)
    }

    /// Current container and 0-based position of a block.
    pub fn position_of(&self, id: BlockId) -> Option<(ContainerKind, usize)> {
        for kind in [ContainerKind::Workspace, ContainerKind::Trash] {
            if let Some(i) = self.list(kind).iter().position(|e| e.id == id) {
                return Some((kind, i));
            }
        }
        None
    }

    /// Current indent level of a block.
    pub fn indent_of(&self, id: BlockId) -> Option<u8> {
        let (kind, i) = self.position_of(id)?;
        Some(self.list(kind)[i].indent)
    }

    /// Blocks of one container in current order, with their indent levels.
    pub fn ordered(&self, kind: ContainerKind) -> impl Iterator<Item = (BlockId, u8)> + '_ {
        self.list(kind).iter().map(|e| (e.id, e.indent))
    }

    /// Ids of one container in current order.
    pub fn ids(&self, kind: ContainerKind) -> Vec<BlockId> {
        self.list(kind).iter().map(|e| e.id).collect()
    }

    /// Total number of blocks across both containers.
    pub fn len(&self) -> usize {
        self.workspace.len() + self.trash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move a block to `target` at `index`, shifting subsequent positions.
    /// The block's indent travels with it (moving never resets indent, even
    /// into Trash). `index` is clamped to the target's length.
    ///
    /// Returns `false` for an unknown block id, leaving the registry
    /// untouched.
    pub fn move_block(&mut self, id: BlockId, target: ContainerKind, index: usize) -> bool {
        let Some((source, from)) = self.position_of(id) else {
            return false;
        };
        let entry = self.list_mut(source).remove(from);
        let list = self.list_mut(target);
        let at = index.min(list.len());
        list.insert(at, entry);
        true
    }

    /// Set a block's indent level. Levels above [`MAX_INDENT`] are clamped;
    /// callers that want out-of-range requests ignored entirely check the
    /// bound themselves (see `Jumble::apply`).
    pub fn set_indent(&mut self, id: BlockId, level: u8) -> bool {
        let Some((kind, i)) = self.position_of(id) else {
            return false;
        };
        self.list_mut(kind)[i].indent = level.min(MAX_INDENT);
        true
    }
}
