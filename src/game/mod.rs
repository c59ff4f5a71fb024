//! Core Connect Four game logic: the gravity grid, players, and the turn
//! engine with incremental win detection.

mod board;
mod player;
mod state;

pub use board::{Axis, Board, BoardError, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Placement};
