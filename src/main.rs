// Terminal Sokoban over the pure session core.
// Enter starts, WASD/arrows move, R reloads the level, N skips, Q quits.

use std::path::Path;

use sokoban_core::catalog::{built_in_levels, load_catalog};
use sokoban_core::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_session, setup_terminal,
};
use sokoban_core::core::{GameSession, SessionState};
use sokoban_core::models::GameRenderState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let levels = match std::env::args().nth(1) {
        Some(path) => load_catalog(Path::new(&path))?,
        None => built_in_levels(),
    };

    let mut session = GameSession::new(levels);
    let mut terminal = setup_terminal()?;
    let result = run(&mut session, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run(
    session: &mut GameSession,
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut render = GameRenderState::empty();
    render_session(terminal, session, &render)?;

    loop {
        let input = match handle_input() {
            Ok(input) => input,
            Err(err) => {
                render.error = Some(err.to_string());
                render_session(terminal, session, &render)?;
                continue;
            }
        };

        match input {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
            ConsoleInput::Start => {
                let outcome = match session.current_state() {
                    SessionState::TitleScreen => session.start_game().map(|_| ()),
                    SessionState::AllLevelsCleared => session.restart_game().map(|_| ()),
                    _ => Ok(()),
                };
                render = GameRenderState::empty();
                if let Err(err) = outcome {
                    render.error = Some(err.to_string());
                }
            }
            ConsoleInput::Reload => {
                render = GameRenderState::empty();
                if let Err(err) = session.reload_current_level() {
                    render.error = Some(err.to_string());
                }
            }
            ConsoleInput::NextLevel => {
                render = GameRenderState::empty();
                if let Err(err) = session.request_next_level() {
                    render.error = Some(err.to_string());
                }
            }
            ConsoleInput::Move(direction) => match session.move_player(direction) {
                Ok(update) => {
                    render.error = None;
                    render.last_update = Some(update);
                }
                Err(err) => {
                    render.error = Some(err.to_string());
                }
            },
        }

        render_session(terminal, session, &render)?;
    }

    Ok(())
}
