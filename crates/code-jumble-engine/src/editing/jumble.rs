use crate::editing::{
    BlockId, BlockRegistry, Cmd, ContainerKind, DragSession, MAX_INDENT, Patch, RegistryError,
    reorder, response,
};
use crate::models::JumbleExercise;

/// One live jumble widget: the registry, the drag session, and the cached
/// submission string.
///
/// All mutation flows through [`Jumble::apply`]: the page (or any other
/// frontend) translates input events into [`Cmd`] values, applies them
/// synchronously, and re-renders from [`Jumble::snapshot`]. Each command
/// completes, registry mutation plus re-serialization, before the next
/// one is seen, so no two mutations ever interleave.
#[derive(Debug, Clone, PartialEq)]
pub struct Jumble {
    registry: BlockRegistry,
    session: DragSession,
    response: String,
    version: u64,
}

impl Jumble {
    /// Build a widget from the two ordered id lists the page supplies at
    /// construction. Fails on duplicate ids or an empty exercise.
    pub fn new(workspace: &[BlockId], trash: &[BlockId]) -> Result<Self, RegistryError> {
        let registry = BlockRegistry::new(workspace, trash)?;
        let response = response::render(&registry);
        Ok(Self {
            registry,
            session: DragSession::default(),
            response,
            version: 0,
        })
    }

    /// Build a widget with every block of an exercise in the Workspace, in
    /// exercise order, and an empty Trash: the state a freshly rendered
    /// question starts in.
    pub fn from_exercise(exercise: &JumbleExercise) -> Result<Self, RegistryError> {
        Self::new(&exercise.block_ids(), &[])
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The submission string as of the last mutation, the value the
    /// page's hidden `response` field carries.
    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one user gesture.
    ///
    /// Registry changes re-render the response before returning; session
    /// transitions only bump the version so subscribers re-read highlight
    /// state. Out-of-range indents, drops on the dragged block itself, and
    /// gestures on unknown blocks are silent no-ops.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let before = self.session.clone();
        let changed = match cmd {
            Cmd::DragStart { block } => {
                if let Some(kind) = self.registry.container_of(block) {
                    self.session.start(block, self.registry.ids(kind));
                }
                false
            }
            Cmd::DragEnter { block } => {
                if self.registry.container_of(block).is_some() {
                    self.session.enter(block);
                }
                false
            }
            Cmd::DragLeave { block } => {
                self.session.leave(block);
                false
            }
            Cmd::DragEnd => {
                self.session.end();
                false
            }
            Cmd::Drop { target } => self.drop_on(target),
            Cmd::ChangeIndent { block, delta } => self.change_indent(block, delta),
        };

        if changed {
            self.response = response::render(&self.registry);
        }
        if changed || self.session != before {
            self.version += 1;
        }

        Patch {
            changed,
            version: self.version,
            response: self.response.clone(),
        }
    }

    /// Project current render state for the UI.
    pub fn snapshot(&self) -> crate::editing::Snapshot {
        crate::editing::snapshot::create_snapshot(self)
    }

    fn drop_on(&mut self, target: BlockId) -> bool {
        let moved = if let (Some(selected), Some(placement)) = (
            self.session.selected(),
            reorder::place(&self.registry, &self.session, target),
        ) {
            self.registry
                .move_block(selected, placement.container, placement.index)
        } else {
            false
        };
        // Drop completion destroys the session either way; the page's
        // drag-end that follows becomes a no-op.
        self.session.end();
        moved
    }

    fn change_indent(&mut self, block: BlockId, delta: i8) -> bool {
        // Only Workspace blocks are indentable; Trash blocks are a no-op.
        if self.registry.container_of(block) != Some(ContainerKind::Workspace) {
            return false;
        }
        let Some(current) = self.registry.indent_of(block) else {
            return false;
        };
        let new_level = current as i16 + delta as i16;
        if !(0..=MAX_INDENT as i16).contains(&new_level) {
            return false;
        }
        if new_level == current as i16 {
            return false;
        }
        self.registry.set_indent(block, new_level as u8)
    }
}
