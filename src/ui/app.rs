use crate::game::{GameState, MoveError, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::text::result_message;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let column = c as usize - '0' as usize;
                if column < COLS {
                    self.selected_column = column;
                    self.drop_piece();
                } else {
                    self.message = Some(format!("Columns are 0-{}", COLS - 1));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.try_place_chip(self.selected_column) {
            Ok(_) => {
                self.message = result_message(self.game_state.outcome());
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameOutcome, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrows_move_selection_within_board() {
        let mut app = App::new();
        assert_eq!(app.selected_column, 3);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state().board().get(3, 0), Cell::Yellow);
        assert_eq!(app.game_state().current_player(), Player::Red);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_digit_drops_directly() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.selected_column, 5);
        assert_eq!(app.game_state().board().get(5, 0), Cell::Yellow);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game_state().move_count(), 1);
        assert_eq!(app.message.as_deref(), Some("Columns are 0-6"));
    }

    #[test]
    fn test_full_column_reports_message() {
        let mut app = App::new();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('0'));
        }
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.game_state().move_count(), 6);
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::new();
        for c in ['0', '1', '0', '1', '0', '1', '0'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(
            app.game_state().outcome(),
            GameOutcome::Winner(Player::Yellow)
        );
        assert_eq!(app.message.as_deref(), Some("Yellow wins!"));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().move_count(), 0);
        assert_eq!(app.game_state().outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_current_player() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('3'));

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Current Player: Red"));
    }
}
