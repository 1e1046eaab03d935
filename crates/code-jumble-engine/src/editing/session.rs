use crate::editing::BlockId;

/// Named states of the drag gesture.
///
/// In a DOM widget these states only exist implicitly, smeared across a
/// shared `selected` variable and CSS classes mutated from event-handler
/// closures; here they are an explicit machine testable without a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A block has been picked up; nothing is under the pointer.
    Selected { block: BlockId },
    /// The picked-up block is over another block (the "active" red
    /// highlight in the page's terms).
    Hovering { block: BlockId, target: BlockId },
}

/// Transient state of one drag gesture.
///
/// At most one session exists per widget. It is created on drag-start,
/// mutated on drag-enter/leave, and destroyed on drag-end or drop
/// completion; it never outlives the widget. The "hinted" marks on all
/// non-selected blocks are derived from `selected()` at render time rather
/// than stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragSession {
    state: DragState,
    /// Order of the selected block's container, captured once at drag
    /// start. Same-container drops compare positions in this snapshot, not
    /// live positions (see `reorder`).
    origin: Vec<BlockId>,
}

impl DragSession {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// The block being dragged, if a drag is in progress.
    pub fn selected(&self) -> Option<BlockId> {
        match self.state {
            DragState::Idle => None,
            DragState::Selected { block } | DragState::Hovering { block, .. } => Some(block),
        }
    }

    /// The block currently marked "active" under the pointer, if any.
    pub fn hover_target(&self) -> Option<BlockId> {
        match self.state {
            DragState::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Idle → Selected. Starting a new drag while one is in progress
    /// replaces it (the page can only ever deliver one gesture at a time,
    /// but a missed drag-end shouldn't wedge the machine).
    pub fn start(&mut self, block: BlockId, origin_order: Vec<BlockId>) {
        self.state = DragState::Selected { block };
        self.origin = origin_order;
    }

    /// Selected → Hovering. Entering the selected block itself is ignored;
    /// entering a new block while already hovering replaces the target.
    pub fn enter(&mut self, target: BlockId) {
        if let Some(block) = self.selected()
            && block != target
        {
            self.state = DragState::Hovering { block, target };
        }
    }

    /// Hovering → Selected, but only when leaving the block that is
    /// currently the hover target.
    pub fn leave(&mut self, left: BlockId) {
        if let DragState::Hovering { block, target } = self.state
            && target == left
        {
            self.state = DragState::Selected { block };
        }
    }

    /// Any → Idle: clears the selection, the hover target, and with them
    /// every hinted/active mark, whether or not a drop happened.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
        self.origin.clear();
    }

    /// Position of a block in the origin-order snapshot taken at drag
    /// start.
    pub fn origin_index(&self, id: BlockId) -> Option<usize> {
        self.origin.iter().position(|&b| b == id)
    }
}
