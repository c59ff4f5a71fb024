use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Yellow,
    Red,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::Yellow;

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Yellow => Player::Red,
            Player::Red => Player::Yellow,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Yellow => Cell::Yellow,
            Player::Red => Cell::Red,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Yellow => "Yellow",
            Player::Red => "Red",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
