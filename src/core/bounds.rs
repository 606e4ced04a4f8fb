use crate::core::models::Position;

/// The authored extent of a level, one corner fixed at (0,0) with positive
/// extent. Used by rendering and inspection only; move resolution never
/// bounds-checks, so cells outside the rectangle are walkable wherever no
/// wall blocks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Bounds {
        Bounds { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}
