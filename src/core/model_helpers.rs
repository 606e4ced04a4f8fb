use crate::core::bounds::Bounds;
use crate::core::models::{BoxId, GridState, Position};

impl GridState {
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    /// Whether the cell carries a floor tile. Presentation only: movement
    /// never checks floors, so empty (' ') cells are walkable too.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.floors.contains(&pos)
    }

    pub fn is_goal(&self, pos: Position) -> bool {
        self.goals.contains(&pos)
    }

    pub fn box_at(&self, pos: Position) -> Option<BoxId> {
        self.boxes.get_by_left(&pos).copied()
    }

    pub fn position_of_box(&self, id: BoxId) -> Option<Position> {
        self.boxes.get_by_right(&id).copied()
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn boxes(&self) -> impl Iterator<Item = (Position, BoxId)> + '_ {
        self.boxes.iter().map(|(&pos, &id)| (pos, id))
    }

    pub fn goals_total(&self) -> usize {
        self.goals.len()
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.boxes
            .left_values()
            .filter(|pos| self.goals.contains(pos))
            .count()
    }

    /// Solved iff every box sits on a goal. A goal with no box on it does
    /// not block the win: only boxes ⊆ goals is checked, so a level with
    /// more goals than boxes is solvable without filling every goal.
    pub fn is_solved(&self) -> bool {
        self.boxes.left_values().all(|pos| self.goals.contains(pos))
    }

    /// Renders the grid back into the layout grammar, first output line =
    /// highest y row. For any layout whose rows all have the authored width,
    /// `parse` and `to_layout_string` round-trip exactly.
    pub fn to_layout_string(&self) -> String {
        let mut result = String::new();
        for y in (0..self.bounds.height).rev() {
            for x in 0..self.bounds.width {
                let pos = Position::new(x, y);
                let goal = self.is_goal(pos);
                let ch = if self.is_wall(pos) {
                    '#'
                } else if pos == self.player {
                    if goal { '+' } else { '@' }
                } else if self.box_at(pos).is_some() {
                    if goal { '*' } else { '$' }
                } else if goal {
                    '~'
                } else if self.is_floor(pos) {
                    '.'
                } else {
                    ' '
                };
                result.push(ch);
            }
            result.push('\n');
        }
        result
    }
}
