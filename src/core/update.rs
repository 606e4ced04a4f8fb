use crate::core::models::{Direction, GridState, MoveOutcome};

/// Resolves one move intent against `state`. Pure: the input state is never
/// mutated, and the same state and direction always yield the same outcome.
///
/// Evaluation is a single step: `target = player + direction`. A wall at the
/// target blocks. A free target moves the player. A box at the target is
/// pushed to `beyond = target + direction` if that cell holds neither wall
/// nor box; at most one box moves per call, so pushing into a second box
/// blocks rather than chaining. Goals are never consulted here; win
/// detection is a separate downstream check.
pub fn try_move(state: &GridState, direction: Direction) -> MoveOutcome {
    let target = state.player().step(direction);
    if state.is_wall(target) {
        return MoveOutcome::Blocked;
    }

    let Some(pushed) = state.box_at(target) else {
        let mut next = state.clone();
        next.player = target;
        return MoveOutcome::PlayerMoved(next);
    };

    let beyond = target.step(direction);
    if state.is_wall(beyond) || state.box_at(beyond).is_some() {
        return MoveOutcome::Blocked;
    }

    let mut next = state.clone();
    next.boxes.remove_by_left(&target);
    next.boxes.insert(beyond, pushed);
    next.player = target;
    MoveOutcome::BoxPushed(next)
}
