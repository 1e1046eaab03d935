/*!
 * # Jumble Editing Core
 *
 * The interactive heart of a code-jumble exercise: a learner drags code
 * blocks between a Workspace list and a Trash list, reorders them, and
 * assigns each Workspace block an indent level, producing a serialized
 * answer for the grader.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the Block Registry
 * - All ordering and indent state lives in [`BlockRegistry`], two owned,
 *   indexed sequences, never in the presentation layer.
 * - Positions are re-derived from sequence order after every mutation;
 *   they are never cached separately.
 *
 * ### 2. Command-Based Editing
 * - Every user gesture is a [`Cmd`] applied through
 *   [`Jumble::apply`], which returns a [`Patch`] describing what changed.
 * - Commands are synchronous and non-reentrant: each one completes
 *   (mutation plus response re-serialization) before the next is seen.
 *
 * ### 3. Explicit Drag State Machine
 * - [`DragSession`] gives the drag gesture named states instead of
 *   burying them in event handlers: `Idle → Selected → Hovering → Idle`.
 * - Highlight marks ("hinted", "active") are presentational and derived,
 *   cleared wholesale when the gesture ends.
 *
 * ### 4. Read API: Immutable Snapshots
 * - [`Snapshot`] projects render state ([`RenderBlock`] with highlight
 *   flags and indent padding) so a UI can subscribe to engine state
 *   instead of owning it.
 *
 * ### 5. The Response Contract
 * - [`response`] renders the Workspace as the grader's exact wire text
 *   (`[(id, indent), …]` with a trailing comma) and parses it back.
 *
 * ## Module Structure
 *
 * - **`registry`**: `BlockRegistry`, `BlockId`, `ContainerKind`
 * - **`session`**: the `DragSession` state machine
 * - **`reorder`**: drop-placement computation (snapshot-order policy)
 * - **`commands`**: the `Cmd` gesture vocabulary
 * - **`jumble`**: the `Jumble` widget root and its apply loop
 * - **`snapshot`**: immutable render projection
 * - **`response`**: grader wire format, render and parse
 * - **`patch`**: per-command change summary
 */

pub mod commands;
pub mod jumble;
pub mod patch;
pub mod registry;
pub(crate) mod reorder;
pub mod response;
pub mod session;
pub mod snapshot;

pub use commands::Cmd;
pub use jumble::Jumble;
pub use patch::Patch;
pub use registry::{BlockId, BlockRegistry, ContainerKind, MAX_INDENT, RegistryError};
pub use session::{DragSession, DragState};
pub use snapshot::{RenderBlock, Snapshot};
