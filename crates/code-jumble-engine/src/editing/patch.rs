/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Whether block order or indent changed (and the response with them).
    pub changed: bool,
    /// Version after the command; bumps on any observable change,
    /// including pure highlight transitions.
    pub version: u64,
    /// The submission string as of this command.
    pub response: String,
}
