use crate::core::errors::SessionError;
use crate::core::level::{LevelDefinition, parse};
use crate::core::models::{Direction, GridState, MoveKind, MoveOutcome};
use crate::core::update::try_move;

/// Where the session is in its title/playing/end lifecycle.
///
/// `LevelCleared` is transient: the win-triggered advance loads the next
/// level in the same call, so the session never rests in it. It exists so
/// presentation can match the full lifecycle exhaustively; its observable
/// form is the [`LevelTransition::LevelAdvanced`] notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    TitleScreen,
    Playing,
    LevelCleared,
    AllLevelsCleared,
}

/// What a single `move_player` call did, with fresh grid snapshots for
/// presentation to animate from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The session was not accepting moves (title or end screen).
    Ignored,
    /// The move could not legally proceed; nothing changed.
    Blocked,
    Moved {
        kind: MoveKind,
        /// Snapshot after the move, before any level transition.
        grid: GridState,
        transition: Option<LevelTransition>,
    },
}

/// A level transition triggered as a side effect of a winning move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelTransition {
    LevelAdvanced {
        level_index: usize,
        grid: GridState,
    },
    AllLevelsCleared,
}

/// Orchestrates level sequencing over an injected catalog and owns the live
/// [`GridState`]. The sole entry point for input and rendering layers: every
/// command completes synchronously, and each transition hands out fresh
/// snapshots, never live references that a later move would mutate.
pub struct GameSession {
    catalog: Vec<LevelDefinition>,
    state: SessionState,
    level_index: usize,
    grid: Option<GridState>,
}

impl GameSession {
    pub fn new(catalog: Vec<LevelDefinition>) -> GameSession {
        GameSession {
            catalog,
            state: SessionState::TitleScreen,
            level_index: 0,
            grid: None,
        }
    }

    pub fn current_state(&self) -> SessionState {
        self.state
    }

    pub fn current_grid(&self) -> Option<&GridState> {
        self.grid.as_ref()
    }

    pub fn current_level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    /// True only while a level is in play. Callers in other states should
    /// not route directional input; a routed move is ignored, not an error.
    pub fn accepts_moves(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Leaves the title screen: resets to level 0 and starts playing.
    pub fn start_game(&mut self) -> Result<&GridState, SessionError> {
        self.begin()
    }

    /// Restart after `AllLevelsCleared`; identical effect to `start_game`.
    pub fn restart_game(&mut self) -> Result<&GridState, SessionError> {
        self.begin()
    }

    fn begin(&mut self) -> Result<&GridState, SessionError> {
        let grid = self.load_level(0)?;
        self.level_index = 0;
        self.state = SessionState::Playing;
        Ok(&*self.grid.insert(grid))
    }

    /// Applies one move intent. On an accepted move the session adopts the
    /// resolver's state and then runs the win check: winning the last level
    /// transitions to `AllLevelsCleared`, winning any other level loads the
    /// next one and stays in `Playing`. A malformed next level propagates
    /// the parse error and leaves the already-adopted grid in place.
    pub fn move_player(&mut self, direction: Direction) -> Result<SessionUpdate, SessionError> {
        if !self.accepts_moves() {
            return Ok(SessionUpdate::Ignored);
        }
        let Some(current) = self.grid.as_ref() else {
            return Ok(SessionUpdate::Ignored);
        };

        let (kind, next) = match try_move(current, direction) {
            MoveOutcome::Blocked => return Ok(SessionUpdate::Blocked),
            MoveOutcome::PlayerMoved(next) => (MoveKind::PlayerMoved, next),
            MoveOutcome::BoxPushed(next) => (MoveKind::BoxPushed, next),
        };

        self.grid = Some(next.clone());
        if !next.is_solved() {
            return Ok(SessionUpdate::Moved {
                kind,
                grid: next,
                transition: None,
            });
        }

        let transition = if self.level_index + 1 < self.catalog.len() {
            let fresh = self.load_level(self.level_index + 1)?;
            self.level_index += 1;
            self.grid = Some(fresh.clone());
            LevelTransition::LevelAdvanced {
                level_index: self.level_index,
                grid: fresh,
            }
        } else {
            self.state = SessionState::AllLevelsCleared;
            self.grid = None;
            LevelTransition::AllLevelsCleared
        };

        Ok(SessionUpdate::Moved {
            kind,
            grid: next,
            transition: Some(transition),
        })
    }

    /// Re-parses the current level, discarding all progress on it. The level
    /// index is unchanged. No-op outside `Playing`.
    pub fn reload_current_level(&mut self) -> Result<(), SessionError> {
        if !self.accepts_moves() {
            return Ok(());
        }
        let fresh = self.load_level(self.level_index)?;
        self.grid = Some(fresh);
        Ok(())
    }

    /// The non-win-triggered advance: skips to the next level, wrapping to
    /// level 0 past the end of the catalog. Distinct from the win-triggered
    /// advance, which terminates in `AllLevelsCleared` instead of wrapping.
    /// No-op outside `Playing`, returning `None`.
    pub fn request_next_level(&mut self) -> Result<Option<&GridState>, SessionError> {
        if !self.accepts_moves() {
            return Ok(None);
        }
        let next_index = (self.level_index + 1) % self.catalog.len();
        let fresh = self.load_level(next_index)?;
        self.level_index = next_index;
        self.grid = Some(fresh);
        Ok(self.grid.as_ref())
    }

    fn load_level(&self, index: usize) -> Result<GridState, SessionError> {
        let definition = self
            .catalog
            .get(index)
            .ok_or(SessionError::InvalidIndex {
                index,
                len: self.catalog.len(),
            })?;
        Ok(parse(definition)?)
    }
}
