use thiserror::Error;

/// Errors that can arise while assembling a case or evaluating an accusation.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Wrapper around IO errors (reading case files, talking to the terminal).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON parse errors for case files.
    #[error("case file parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A link or lookup referenced a room that was never added.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// Two rooms were declared with the same name.
    #[error("duplicate room: {0}")]
    DuplicateRoom(String),

    /// The parent already has a child on that side.
    #[error("room {parent} already has a {side} path")]
    SideTaken { parent: String, side: &'static str },

    /// The child is already reachable from another room (shared children are not allowed).
    #[error("room {0} already has a parent")]
    AlreadyLinked(String),

    /// The link would make the map loop back on itself.
    #[error("linking {parent} -> {child} would create a cycle")]
    Cycle { parent: String, child: String },

    /// A case needs at least one room to start in.
    #[error("case has no rooms")]
    EmptyMap,

    /// A room was never wired into the tree that hangs from the root.
    #[error("room {0} is not reachable from the entrance")]
    Unreachable(String),

    /// Accusation was blank once the line terminator was removed.
    #[error("no name given for the accusation")]
    EmptyAccusation,

    /// The accusation line could not be read (stream closed).
    #[error("accusation could not be read")]
    UnreadableAccusation,
}
