use crate::ai::{Agent, PriorityAgent};
use crate::config::{AppConfig, TimingConfig};
use crate::error::MoveError;
use crate::game::{GameState, MoveResult, MoveStatus, OpponentMode, Phase, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::animation::DropAnimation;
use super::board_widget::Overlay;

const START_COLUMN: usize = COLS / 2;

pub struct App {
    game_state: GameState,
    agent: Box<dyn Agent>,
    timing: TimingConfig,
    selected_column: usize,
    animation: Option<DropAnimation>,
    /// Time the computer has been on move.
    computer_wait: Duration,
    /// Set once the computer fails to move; it is not asked again this game.
    computer_stalled: bool,
    /// Time since the game ended.
    result_elapsed: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_agent(config, Box::new(PriorityAgent::new()))
    }

    /// Create an app whose computer opponent is `agent`.
    pub fn with_agent(config: &AppConfig, agent: Box<dyn Agent>) -> Self {
        App {
            game_state: GameState::new(config.game.mode()),
            agent,
            timing: config.timing.clone(),
            selected_column: START_COLUMN, // Start in middle
            animation: None,
            computer_wait: Duration::ZERO,
            computer_stalled: false,
            result_elapsed: Duration::ZERO,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;

            let now = Instant::now();
            self.tick(now.duration_since(last_frame));
            last_frame = now;
        }
        Ok(())
    }

    /// Handle keyboard events, waiting at most one frame for input
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.timing.frame_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let game_over = self.game_state.phase() == Phase::GameOver;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if game_over => {
                self.should_quit = true;
            }
            KeyCode::Char('y') | KeyCode::Char('r') => {
                self.restart(self.game_state.mode());
            }
            KeyCode::Char('c') => self.restart(OpponentMode::Computer),
            KeyCode::Char('h') => self.restart(OpponentMode::Human),
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c) => {
                if let Some(col) = column_for_digit(c) {
                    self.drop_piece(col);
                }
            }
            _ => {}
        }
    }

    /// Advance animations and timers by one frame.
    pub fn tick(&mut self, dt: Duration) {
        // A frame spent animating does not count toward other timers
        if let Some(animation) = self.animation.as_mut() {
            if animation.advance(dt) {
                self.animation = None;
                if let Some(result) = self.game_state.animation_landed() {
                    self.on_move(result);
                }
            }
            return;
        }

        match self.game_state.phase() {
            Phase::WaitingForInput
                if self.game_state.is_computer_turn() && !self.computer_stalled =>
            {
                self.computer_wait += dt;
                if self.computer_wait >= self.timing.computer_delay() {
                    self.computer_wait = Duration::ZERO;
                    self.play_computer();
                }
            }
            Phase::GameOver => self.result_elapsed += dt,
            _ => {}
        }
    }

    fn play_computer(&mut self) {
        match self.game_state.play_computer_turn(self.agent.as_mut()) {
            Ok(Some(result)) => self.on_move(result),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%err, agent = self.agent.name(), "computer could not move");
                self.computer_stalled = true;
                self.message = Some(format!("Computer error: {err}"));
            }
        }
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.human_selects_column(column) {
            Ok(Some(drop)) => {
                self.selected_column = drop.column;
                self.animation = Some(DropAnimation::new(drop, self.timing.drop_step()));
            }
            Ok(None) => {
                if self.game_state.is_game_over() {
                    self.message = Some("Game over! Press 'y' to play again.".to_string());
                }
            }
            Err(MoveError::ColumnFull(col)) => {
                tracing::warn!(column = col, "column is full");
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                tracing::warn!(%err, "move rejected");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    fn on_move(&mut self, result: MoveResult) {
        match result.status {
            MoveStatus::Continue { .. } => {}
            MoveStatus::Win { .. } | MoveStatus::Draw => {
                self.result_elapsed = Duration::ZERO;
            }
        }
    }

    fn restart(&mut self, mode: OpponentMode) {
        if self.game_state.restart_requested(mode) {
            self.selected_column = START_COLUMN;
            self.animation = None;
            self.computer_wait = Duration::ZERO;
            self.computer_stalled = false;
            self.result_elapsed = Duration::ZERO;
            self.message = Some("New game started!".to_string());
        }
    }

    /// The play-again prompt appears once the winning line has been on show
    /// for a while.
    pub fn show_prompt(&self) -> bool {
        self.game_state.is_game_over() && self.result_elapsed >= self.timing.result_pause()
    }

    fn overlay(&self) -> Overlay {
        let hover_column = (self.game_state.phase() == Phase::WaitingForInput
            && self.game_state.is_human_turn())
        .then_some(self.selected_column);

        Overlay {
            hover_column,
            falling: self
                .animation
                .as_ref()
                .map(|animation| (animation.column(), animation.current_row())),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state.snapshot(),
            &self.overlay(),
            &self.message,
            self.show_prompt(),
        );
    }
}

fn column_for_digit(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    (1..=COLS).contains(&digit).then(|| digit - 1)
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
