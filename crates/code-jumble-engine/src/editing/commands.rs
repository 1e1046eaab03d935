use crate::editing::BlockId;

/// User gestures, in the vocabulary the page's event handlers use.
///
/// Every mutation of a jumble flows through one of these; the page (or the
/// TUI standing in for it) translates raw input events into commands and
/// hands them to `Jumble::apply`. Drag-over never reaches the engine; its
/// only job in the page is suppressing the platform's default drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Pointer started dragging `block`.
    DragStart { block: BlockId },
    /// Pointer entered `block` while dragging.
    DragEnter { block: BlockId },
    /// Pointer left `block` while dragging.
    DragLeave { block: BlockId },
    /// The dragged block was released over `target`.
    Drop { target: BlockId },
    /// The drag gesture ended without (or after) a drop.
    DragEnd,
    /// Indent button clicked: adjust `block`'s indent by `delta` levels.
    ChangeIndent { block: BlockId, delta: i8 },
}
