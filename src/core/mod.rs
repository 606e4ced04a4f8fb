mod bounds;
mod errors;
mod level;
mod model_helpers;
mod models;
mod session;
mod update;

pub use bounds::Bounds;
pub use errors::{MalformedLevel, SessionError};
pub use level::{LevelDefinition, parse};
pub use models::{BoxId, Direction, GridState, MoveKind, MoveOutcome, Position};
pub use session::{GameSession, LevelTransition, SessionState, SessionUpdate};
pub use update::try_move;
