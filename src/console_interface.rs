use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use crate::core::{Direction, GameSession, LevelTransition, MoveKind, SessionState, SessionUpdate};
use crate::models::GameRenderState;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub enum ConsoleInput {
    Move(Direction),
    Start,
    Reload,
    NextLevel,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Enter | KeyCode::Char(' ') => ConsoleInput::Start,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reload,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NextLevel,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &GameSession,
    render: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let (title, body) = match session.current_state() {
            SessionState::TitleScreen => (
                "Sokoban".to_string(),
                "\nSOKOBAN\n\nPush every box onto a goal.\n\nPress Enter to start.".to_string(),
            ),
            SessionState::Playing => (
                format!(
                    "Sokoban | level {}/{}",
                    session.current_level_index() + 1,
                    session.level_count(),
                ),
                playing_body(session, render),
            ),
            SessionState::LevelCleared => ("Sokoban".to_string(), "\nLevel cleared!".to_string()),
            SessionState::AllLevelsCleared => (
                "Sokoban".to_string(),
                "\nAll levels cleared!\n\nPress Enter to play again, Q to quit.".to_string(),
            ),
        };

        let board = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board, chunks[0]);

        let status = Paragraph::new(status_line(session, render))
            .block(Block::default().borders(Borders::ALL).title("Controls"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[1]);
    })?;
    Ok(())
}

fn playing_body(session: &GameSession, render: &GameRenderState) -> String {
    let Some(grid) = session.current_grid() else {
        return String::new();
    };
    let mut body = format!(
        "\n{}\nBoxes on goals: {}/{}",
        grid.to_layout_string(),
        grid.boxes_on_goals(),
        grid.box_count(),
    );
    if let Some(SessionUpdate::Moved {
        transition: Some(LevelTransition::LevelAdvanced { level_index, .. }),
        ..
    }) = &render.last_update
    {
        body.push_str(&format!("\nLevel {} cleared!", level_index));
    }
    body
}

fn status_line(session: &GameSession, render: &GameRenderState) -> String {
    let base = if session.accepts_moves() {
        "WASD/arrows move | R reload | N skip level | Q quit"
    } else {
        "Enter start | Q quit"
    };

    let mut line = base.to_string();
    match &render.last_update {
        Some(SessionUpdate::Blocked) => line.push_str(" | Blocked"),
        Some(SessionUpdate::Moved { kind, .. }) => {
            line.push_str(match kind {
                MoveKind::PlayerMoved => " | Last: step",
                MoveKind::BoxPushed => " | Last: push",
            });
        }
        _ => {}
    }
    if let Some(err) = &render.error {
        line.push_str(&format!(" | Error: {}", err));
    }
    line
}
