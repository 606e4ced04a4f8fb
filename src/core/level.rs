use std::collections::HashSet;

use bimap::BiHashMap;
use serde::{Deserialize, Serialize};

use crate::core::bounds::Bounds;
use crate::core::errors::MalformedLevel;
use crate::core::models::{BoxId, GridState, Position};

/// One level's textual layout as an ordered sequence of row strings. The
/// first row is the topmost row of the grid. Immutable once built; the
/// session re-parses it for every load and reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub rows: Vec<String>,
}

impl LevelDefinition {
    pub fn new(rows: Vec<String>) -> LevelDefinition {
        LevelDefinition { rows }
    }

    /// Splits a raw layout string into rows, stripping carriage returns and
    /// dropping blank leading/trailing lines so that `r#"..."#` literals can
    /// start and end with a newline. Interior rows keep their indentation:
    /// column positions are significant.
    pub fn from_layout(layout: &str) -> LevelDefinition {
        let rows: Vec<String> = layout
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        let start = rows
            .iter()
            .position(|r| !r.trim().is_empty())
            .unwrap_or(rows.len());
        let end = rows
            .iter()
            .rposition(|r| !r.trim().is_empty())
            .map_or(start, |i| i + 1);
        LevelDefinition {
            rows: rows[start..end].to_vec(),
        }
    }
}

/// Parses a layout into the initial [`GridState`]. Pure and deterministic:
/// reparsing the same definition yields an equal grid, including box id
/// assignment (scan order, top row first).
///
/// Grammar, per cell:
///   `#` wall, `.` floor, `@` floor + player, `+` goal + player,
///   `$` floor + box, `*` goal + box, `~` goal, ` ` empty (no cell).
///
/// The grid width is the length of the first row. Shorter rows are
/// implicitly empty beyond their length; characters past the first-row width
/// are ignored. Row `y` of the input maps to grid y `height - 1 - y`, so the
/// first input line is the highest row.
pub fn parse(definition: &LevelDefinition) -> Result<GridState, MalformedLevel> {
    let rows = &definition.rows;
    if rows.is_empty() {
        return Err(MalformedLevel::Empty);
    }
    let width = rows[0].chars().count();
    if width == 0 {
        return Err(MalformedLevel::EmptyFirstRow);
    }
    let height = rows.len();

    let mut walls: HashSet<Position> = HashSet::new();
    let mut floors: HashSet<Position> = HashSet::new();
    let mut goals: HashSet<Position> = HashSet::new();
    let mut boxes: BiHashMap<Position, BoxId> = BiHashMap::new();
    let mut player: Option<Position> = None;
    let mut next_box = 0u32;

    for (row_index, row) in rows.iter().enumerate() {
        let y = (height - 1 - row_index) as i32;
        for (column, tile) in row.chars().take(width).enumerate() {
            let pos = Position::new(column as i32, y);
            match tile {
                '#' => {
                    walls.insert(pos);
                }
                '.' => {
                    floors.insert(pos);
                }
                ' ' => {}
                '@' => {
                    floors.insert(pos);
                    set_player(&mut player, pos)?;
                }
                '+' => {
                    floors.insert(pos);
                    goals.insert(pos);
                    set_player(&mut player, pos)?;
                }
                '$' => {
                    floors.insert(pos);
                    boxes.insert(pos, BoxId(next_box));
                    next_box += 1;
                }
                '*' => {
                    floors.insert(pos);
                    goals.insert(pos);
                    boxes.insert(pos, BoxId(next_box));
                    next_box += 1;
                }
                '~' => {
                    floors.insert(pos);
                    goals.insert(pos);
                }
                other => {
                    return Err(MalformedLevel::UnknownTile {
                        tile: other,
                        column,
                        row: row_index,
                    });
                }
            }
        }
    }

    let player = player.ok_or(MalformedLevel::MissingPlayer)?;
    Ok(GridState {
        walls,
        floors,
        goals,
        boxes,
        player,
        bounds: Bounds::new(width as i32, height as i32),
    })
}

fn set_player(player: &mut Option<Position>, pos: Position) -> Result<(), MalformedLevel> {
    if player.is_some() {
        return Err(MalformedLevel::DuplicatePlayer);
    }
    *player = Some(pos);
    Ok(())
}
