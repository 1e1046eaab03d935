//! Immutable render-state projection.
//!
//! The engine, not the page, is the source of truth: order, indent and
//! highlight state never live in DOM attributes or CSS classes. The UI
//! subscribes instead, taking a fresh [`Snapshot`] after every command and
//! rendering the flags it finds, never mutating engine state itself.

use crate::editing::{BlockId, ContainerKind, Jumble};

/// Left padding of an un-indented block, matching the page stylesheet.
const BASE_PADDING_PX: u16 = 15;
/// Additional padding per indent level.
const INDENT_STEP_PX: u16 = 20;

/// One block as the UI should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBlock {
    pub id: BlockId,
    pub indent: u8,
    /// `indent * 20 + 15`, the pixel padding the page applies.
    pub padding_px: u16,
    /// Candidate drop target while a drag is live (yellow highlight).
    pub hinted: bool,
    /// Currently under the pointer during a drag (red highlight).
    pub active: bool,
    /// The block being dragged.
    pub dragged: bool,
}

/// Full render state of one widget at one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub workspace: Vec<RenderBlock>,
    pub trash: Vec<RenderBlock>,
    pub version: u64,
    pub response: String,
}

/// Project a jumble's current state for rendering.
pub fn create_snapshot(jumble: &Jumble) -> Snapshot {
    let selected = jumble.session().selected();
    let active = jumble.session().hover_target();

    let project = |kind: ContainerKind| {
        jumble
            .registry()
            .ordered(kind)
            .map(|(id, indent)| RenderBlock {
                id,
                indent,
                padding_px: indent as u16 * INDENT_STEP_PX + BASE_PADDING_PX,
                // Every non-selected block is a candidate target while a
                // drag is live, exactly the page's "hint" class.
                hinted: selected.is_some_and(|s| s != id),
                active: active == Some(id),
                dragged: selected == Some(id),
            })
            .collect()
    };

    Snapshot {
        workspace: project(ContainerKind::Workspace),
        trash: project(ContainerKind::Trash),
        version: jumble.version(),
        response: jumble.response().to_string(),
    }
}

/// Format a snapshot as a readable string for snapshot testing.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (label, blocks) in [
        ("workspace", &snapshot.workspace),
        ("trash", &snapshot.trash),
    ] {
        out.push_str(label);
        out.push(':');
        for b in blocks {
            let mut flags = String::new();
            if b.dragged {
                flags.push('*');
            }
            if b.hinted {
                flags.push('~');
            }
            if b.active {
                flags.push('!');
            }
            out.push_str(&format!(" ({} i{}{})", b.id, b.indent, flags));
        }
        out.push('\n');
    }
    out.push_str(&format!("response: {}\n", snapshot.response));
    out
}
