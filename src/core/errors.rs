use thiserror::Error;

/// A structurally invalid level layout. Parsing is all-or-nothing: a failed
/// parse produces no partial grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedLevel {
    #[error("level layout has no rows")]
    Empty,
    #[error("first row of level layout is empty")]
    EmptyFirstRow,
    #[error("level layout has no player start marker ('@' or '+')")]
    MissingPlayer,
    #[error("level layout has more than one player start marker")]
    DuplicatePlayer,
    /// Characters outside the grammar `# . @ + $ * ~ space` are rejected
    /// rather than skipped, so a typo in a layout fails loudly.
    #[error("unknown tile character {tile:?} at column {column}, row {row}")]
    UnknownTile { tile: char, column: usize, row: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Level(#[from] MalformedLevel),
    #[error("level index {index} out of bounds for catalog of {len} levels")]
    InvalidIndex { index: usize, len: usize },
}
