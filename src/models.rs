use crate::core::SessionUpdate;

/// Presentation-side scratch state: the last session update and any surfaced
/// error, rendered alongside the board in the status bar.
pub struct GameRenderState {
    pub last_update: Option<SessionUpdate>,
    pub error: Option<String>,
}

impl GameRenderState {
    pub fn empty() -> GameRenderState {
        GameRenderState {
            last_update: None,
            error: None,
        }
    }
}
