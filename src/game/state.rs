use log::{debug, info, trace};

use super::board::{self, COLS};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {0} is off the board")]
    InvalidColumn(usize),
    #[error("the game is already over")]
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull(column) => MoveError::ColumnFull(column),
            board::MoveError::InvalidColumn(column) => MoveError::InvalidColumn(column),
        }
    }
}

/// A chip that was successfully placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Grid, turn marker and outcome of one game.
///
/// All mutation goes through [`GameState::place_chip`]; once the outcome is
/// terminal the state never changes again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::FIRST,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Resume from an existing position with `current_player` to move.
    ///
    /// The outcome is derived from the position: an existing four-in-a-row
    /// ends the game, as does a full board.
    pub fn with_board(board: Board, current_player: Player) -> Self {
        let outcome = match board.find_winner() {
            Some(player) => GameOutcome::Winner(player),
            None if board.is_full() => GameOutcome::Tie,
            None => GameOutcome::InProgress,
        };

        GameState {
            board,
            current_player,
            outcome,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.board.chip_count()
    }

    /// Drop the current player's chip into `column`.
    ///
    /// Moves after the game ended, off the board, or into a full column are
    /// ignored and leave the state untouched.
    pub fn place_chip(&mut self, column: usize) {
        if let Err(err) = self.try_place_chip(column) {
            debug!("ignoring move in column {column}: {err}");
        }
    }

    /// Like [`GameState::place_chip`], but reports why a move was refused.
    pub fn try_place_chip(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        trace!("{player} placed a chip at column {column}, row {row}");

        self.outcome = match self.board.winning_axis(column, row) {
            Some(axis) => {
                info!("{player} wins with a {axis:?} run through ({column}, {row})");
                GameOutcome::Winner(player)
            }
            None if self.board.is_full() => {
                info!("board is full, game tied");
                GameOutcome::Tie
            }
            None => GameOutcome::InProgress,
        };

        if !self.is_terminal() {
            self.current_player = player.other();
        }

        Ok(Placement {
            column,
            row,
            player,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
