use std::collections::HashSet;

use bimap::BiHashMap;

use crate::core::bounds::Bounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// The adjacent cell one step in `direction`. Coordinates may go
    /// negative; the grid has no implicit border.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Up increases y, matching the parser's axis flip: the first line of a
/// layout is the topmost (highest y) row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Stable identity of a box, assigned in parse scan order. Survives pushes,
/// so presentation can track which box moved between snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxId(pub u32);

/// The full state of one level in play. Walls, floors, goals and bounds are
/// fixed at parse time; only the player and box positions change, and only
/// through copy-on-write transitions in [`crate::core::try_move`] or a full
/// reload. A caller holding an earlier snapshot is never affected by a later
/// move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    pub(crate) walls: HashSet<Position>,
    pub(crate) floors: HashSet<Position>,
    pub(crate) goals: HashSet<Position>,
    pub(crate) boxes: BiHashMap<Position, BoxId>,
    pub(crate) player: Position,
    pub(crate) bounds: Bounds,
}

/// Result of resolving a single move intent against a [`GridState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move cannot legally proceed; the input state is unchanged.
    Blocked,
    /// The player stepped onto a free cell; no box moved.
    PlayerMoved(GridState),
    /// Exactly one box was pushed one cell; the player took its old cell.
    BoxPushed(GridState),
}

/// The outcome tag of an accepted move, surfaced to presentation so it can
/// drive player-only vs push animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    PlayerMoved,
    BoxPushed,
}
