use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a run that wins the game.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Yellow,
    Red,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Yellow => Some(Player::Yellow),
            Cell::Red => Some(Player::Red),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A line through the board along which runs are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Column and row both increase.
    Diagonal,
    /// Column increases while row decreases.
    AntiDiagonal,
}

impl Axis {
    /// Evaluation order used by win detection.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// (column, row) step in the axis' positive direction.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {0} is off the board")]
    InvalidColumn(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("chip at column {column}, row {row} sits above an empty cell")]
    FloatingChip { column: usize, row: usize },
}

/// The 7x6 grid, stored column by column with row 0 at the bottom.
///
/// Within a column the occupied cells always form a contiguous run starting
/// at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    columns: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Build a board from explicit column contents (bottom to top).
    pub fn from_columns(columns: [[Cell; ROWS]; COLS]) -> Result<Self, BoardError> {
        for (column, cells) in columns.iter().enumerate() {
            let height = cells.iter().take_while(|c| !c.is_empty()).count();
            if let Some(offset) = cells[height..].iter().position(|c| !c.is_empty()) {
                return Err(BoardError::FloatingChip {
                    column,
                    row: height + offset,
                });
            }
        }
        Ok(Board { columns })
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if `column >= COLS` or `row >= ROWS`.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.columns[column][row]
    }

    /// Cells of one column, bottom first.
    pub fn column(&self, column: usize) -> Option<&[Cell; ROWS]> {
        self.columns.get(column)
    }

    /// Number of chips stacked in a column; also the row the next chip lands on.
    pub fn column_height(&self, column: usize) -> usize {
        self.columns[column]
            .iter()
            .position(|c| c.is_empty())
            .unwrap_or(ROWS)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        !self.columns[column][ROWS - 1].is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    pub fn chip_count(&self) -> usize {
        (0..COLS).map(|column| self.column_height(column)).sum()
    }

    /// Drop a chip in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }

        let row = self.column_height(column);
        self.columns[column][row] = player.to_cell();
        Ok(row)
    }

    /// Length of the same-owner run through `(column, row)` along `axis`,
    /// counting in both directions. Zero for an empty cell.
    ///
    /// Panics if `column >= COLS` or `row >= ROWS`.
    pub fn run_length(&self, column: usize, row: usize, axis: Axis) -> usize {
        let cell = self.get(column, row);
        if cell.is_empty() {
            return 0;
        }

        let (dc, dr) = axis.step();
        1 + self.count_from(column, row, dc, dr, cell) + self.count_from(column, row, -dc, -dr, cell)
    }

    /// First axis, in [`Axis::ALL`] order, on which the chip at
    /// `(column, row)` completes a winning run.
    ///
    /// Panics if `column >= COLS` or `row >= ROWS`.
    pub fn winning_axis(&self, column: usize, row: usize) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|&axis| self.run_length(column, row, axis) >= CONNECT)
    }

    /// Check if the chip at (column, row) is part of a winning run
    pub fn check_win(&self, column: usize, row: usize) -> bool {
        self.winning_axis(column, row).is_some()
    }

    /// Scan the whole board for a winning run. Only needed when adopting a
    /// position that was not built move by move.
    pub fn find_winner(&self) -> Option<Player> {
        (0..COLS)
            .flat_map(|column| (0..self.column_height(column)).map(move |row| (column, row)))
            .find(|&(column, row)| self.check_win(column, row))
            .and_then(|(column, row)| self.get(column, row).owner())
    }

    /// Count matching cells walking away from (column, row), excluding it.
    fn count_from(&self, column: usize, row: usize, dc: isize, dr: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut c = column as isize + dc;
        let mut r = row as isize + dr;
        while (0..COLS as isize).contains(&c)
            && (0..ROWS as isize).contains(&r)
            && self.columns[c as usize][r as usize] == cell
        {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
