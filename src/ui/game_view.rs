use crate::game::{GameOutcome, GameSnapshot, OpponentMode, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, Overlay};

pub fn render(
    frame: &mut Frame,
    snapshot: &GameSnapshot,
    overlay: &Overlay,
    message: &Option<String>,
    show_prompt: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board(frame, snapshot, overlay, chunks[1]);
    render_message(frame, snapshot, message, show_prompt, chunks[2]);
    render_controls(frame, snapshot.is_game_over(), chunks[3]);
}

fn mode_label(mode: OpponentMode) -> &'static str {
    match mode {
        OpponentMode::Computer => "vs Computer",
        OpponentMode::Human => "Two Players",
    }
}

/// Whose move it is, worded for the seat that is playing.
pub fn turn_banner(snapshot: &GameSnapshot) -> String {
    match (snapshot.mode, snapshot.current_player) {
        (OpponentMode::Computer, Player::One) => "Your turn!".to_string(),
        (OpponentMode::Computer, Player::Two) => "Computer's turn!".to_string(),
        (OpponentMode::Human, player) => format!("{}'s turn", player.name()),
    }
}

/// End-of-game announcement, `None` while the game is running.
pub fn result_message(snapshot: &GameSnapshot) -> Option<String> {
    let text = match snapshot.outcome? {
        GameOutcome::Winner(Player::Two) if snapshot.mode == OpponentMode::Computer => {
            "Computer wins!".to_string()
        }
        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
        GameOutcome::Draw => "It's a draw!".to_string(),
    };
    Some(text)
}

fn render_header(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let color = board_widget::player_color(snapshot.current_player);

    let status = if snapshot.is_game_over() {
        format!("Game Over  |  {}", mode_label(snapshot.mode))
    } else {
        format!("{}  |  {}", turn_banner(snapshot), mode_label(snapshot.mode))
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, snapshot: &GameSnapshot, overlay: &Overlay, area: Rect) {
    let lines = board_widget::board_lines(snapshot, overlay);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(
    frame: &mut Frame,
    snapshot: &GameSnapshot,
    message: &Option<String>,
    show_prompt: bool,
    area: Rect,
) {
    let text = match result_message(snapshot) {
        Some(result) if show_prompt => format!("{result}  Play again? (y/n)"),
        _ => message.clone().unwrap_or_default(),
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_over: bool, area: Rect) {
    let line = if game_over {
        Line::from(vec![
            Span::styled("Y", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": Play again  |  "),
            Span::styled("N", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": Quit  |  C: vs Computer  |  H: Two Players"),
        ])
    } else {
        Line::from("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
