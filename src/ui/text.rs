//! Line-based frontend: prints the board, prompts for a column, and feeds it
//! to the engine until the game ends.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::config::DisplayConfig;
use crate::error::InputError;
use crate::game::{Board, Cell, GameOutcome, GameState, COLS, ROWS};

const INVALID_INPUT: &str = "Invalid input. Please enter a number between 0 and 6.";

pub struct TextUi<R, W> {
    game: GameState,
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> TextUi<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self::with_game(GameState::initial(), input, output, display)
    }

    /// Continue an existing game instead of starting from an empty board.
    pub fn with_game(game: GameState, input: R, output: W, display: DisplayConfig) -> Self {
        TextUi {
            game,
            input,
            output,
            display,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Play until the game reaches a terminal outcome.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if input runs out first.
    pub fn play(&mut self) -> io::Result<GameOutcome> {
        while !self.game.is_terminal() {
            self.display_board()?;
            writeln!(
                self.output,
                "Current player: {}",
                self.game.current_player().name()
            )?;
            let column = self.read_column()?;
            self.game.place_chip(column);
        }

        self.display_board()?;
        if let Some(message) = result_message(self.game.outcome()) {
            writeln!(self.output, "{message}")?;
        }
        self.output.flush()?;
        Ok(self.game.outcome())
    }

    fn display_board(&mut self) -> io::Result<()> {
        let rendered = render_board(self.game.board(), &self.display);
        self.output.write_all(rendered.as_bytes())
    }

    /// Prompt until a well-formed column number is entered.
    fn read_column(&mut self) -> io::Result<usize> {
        loop {
            write!(
                self.output,
                "Enter the column (0-{}) to place your chip: ",
                COLS - 1
            )?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let line = match std::str::from_utf8(&raw) {
                Ok(line) => line,
                Err(err) => {
                    debug!("rejected non-UTF-8 input {raw:?}: {err}");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                    continue;
                }
            };

            match parse_column(line.trim_end_matches(['\r', '\n'])) {
                Ok(column) => return Ok(column),
                Err(err) => {
                    debug!("rejected input {line:?}: {err}");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                }
            }
        }
    }
}

/// Parse a column number: exactly one ASCII digit naming a board column.
pub fn parse_column(input: &str) -> Result<usize, InputError> {
    let mut chars = input.chars();
    let digit = match (chars.next(), chars.next()) {
        (None, _) => return Err(InputError::Empty),
        (Some(c), None) => c.to_digit(10),
        (Some(_), Some(_)) => None,
    };

    let column = digit.ok_or_else(|| InputError::NotADigit(input.to_string()))? as usize;
    if column >= COLS {
        return Err(InputError::OutOfRange {
            column,
            max: COLS - 1,
        });
    }
    Ok(column)
}

/// Draw the board with the top row first, one text line per row.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();

    for row in (0..ROWS).rev() {
        let line: Vec<String> = (0..COLS)
            .map(|column| cell_symbol(board.get(column, row), display).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    if display.column_labels {
        let labels: Vec<String> = (0..COLS).map(|column| column.to_string()).collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
    }

    out
}

fn cell_symbol(cell: Cell, display: &DisplayConfig) -> char {
    match cell {
        Cell::Empty => display.empty_symbol,
        Cell::Yellow => display.yellow_symbol,
        Cell::Red => display.red_symbol,
    }
}

/// Final line announcing a finished game; `None` while play continues.
pub fn result_message(outcome: GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Winner(player) => Some(format!("{} wins!", player.name())),
        GameOutcome::Tie => Some("It's a tie!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use std::io::Cursor;

    fn run<T: AsRef<[u8]>>(input: T) -> (io::Result<GameOutcome>, String) {
        let mut output = Vec::new();
        let mut ui = TextUi::new(Cursor::new(input), &mut output, DisplayConfig::default());
        let result = ui.play();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_column_accepts_single_digits() {
        assert_eq!(parse_column("0"), Ok(0));
        assert_eq!(parse_column("3"), Ok(3));
        assert_eq!(parse_column("6"), Ok(6));
    }

    #[test]
    fn test_parse_column_rejects_everything_else() {
        assert_eq!(parse_column(""), Err(InputError::Empty));
        assert_eq!(
            parse_column("7"),
            Err(InputError::OutOfRange { column: 7, max: 6 })
        );
        for bad in ["-1", "a", "10", " 3", "3 ", "٣"] {
            assert!(
                matches!(parse_column(bad), Err(InputError::NotADigit(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_render_board_puts_row_zero_at_bottom() {
        let mut game = GameState::initial();
        game.place_chip(1);
        game.place_chip(1);

        let rendered = render_board(game.board(), &DisplayConfig::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ". . . . . . .");
        assert_eq!(lines[ROWS - 2], ". R . . . . .");
        assert_eq!(lines[ROWS - 1], ". Y . . . . .");
    }

    #[test]
    fn test_render_board_uses_configured_symbols() {
        let display = DisplayConfig {
            empty_symbol: '_',
            yellow_symbol: 'O',
            red_symbol: 'X',
            column_labels: true,
        };
        let mut game = GameState::initial();
        game.place_chip(6);

        let rendered = render_board(game.board(), &display);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[ROWS - 1], "_ _ _ _ _ _ O");
        assert_eq!(lines[ROWS], "0 1 2 3 4 5 6");
    }

    #[test]
    fn test_result_message() {
        assert_eq!(
            result_message(GameOutcome::Winner(Player::Yellow)).as_deref(),
            Some("Yellow wins!")
        );
        assert_eq!(
            result_message(GameOutcome::Winner(Player::Red)).as_deref(),
            Some("Red wins!")
        );
        assert_eq!(
            result_message(GameOutcome::Tie).as_deref(),
            Some("It's a tie!")
        );
        assert_eq!(result_message(GameOutcome::InProgress), None);
    }

    #[test]
    fn test_play_until_vertical_win() {
        let (result, output) = run("0\n1\n0\n1\n0\n1\n0\n");

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Yellow));
        assert!(output.contains("Current player: Yellow"));
        assert!(output.contains("Current player: Red"));
        assert!(output.ends_with("Yellow wins!\n"));
    }

    #[test]
    fn test_play_reprompts_on_invalid_input() {
        let (result, output) = run("x\n9\n\n0\n1\n0\n1\n0\n1\n0\n");

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Yellow));
        assert_eq!(output.matches(INVALID_INPUT).count(), 3);
    }

    #[test]
    fn test_play_reprompts_on_invalid_utf8() {
        let mut input = vec![0xff, b'\n'];
        input.extend_from_slice(b"0\n1\n0\n1\n0\n1\n0\n");
        let mut output = Vec::new();
        let mut ui = TextUi::new(Cursor::new(input), &mut output, DisplayConfig::default());

        assert_eq!(ui.play().unwrap(), GameOutcome::Winner(Player::Yellow));
        assert_eq!(ui.game().move_count(), 7);
        assert_eq!(ui.game().current_player(), Player::Yellow);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(INVALID_INPUT).count(), 1);
    }

    #[test]
    fn test_play_ignores_full_column_and_asks_again() {
        // Column 2 fills after six moves; the seventh entry is refused by the engine.
        let (result, output) = run("2\n2\n2\n2\n2\n2\n2\n0\n1\n0\n1\n0\n1\n0\n");

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Yellow));
        assert_eq!(output.matches("Enter the column (0-6)").count(), 14);
    }

    #[test]
    fn test_play_fails_when_input_ends_early() {
        let (result, _) = run("3\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_finished_game_only_prints_result() {
        let mut game = GameState::initial();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            game.place_chip(column);
        }
        let mut output = Vec::new();
        let mut ui = TextUi::with_game(game, Cursor::new(""), &mut output, DisplayConfig::default());

        assert_eq!(ui.play().unwrap(), GameOutcome::Winner(Player::Yellow));
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Enter the column"));
        assert!(text.ends_with("Yellow wins!\n"));
    }
}
