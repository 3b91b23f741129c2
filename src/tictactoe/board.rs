//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target: zero-indexed `(row, col)`.
///
/// Coordinates are signed so that callers can express (and have rejected)
/// positions such as `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: i32,
    pub col: i32,
}

impl Action {
    pub const fn new(row: i32, col: i32) -> Self {
        Action { row, col }
    }

    /// Row-major cell index, or `None` when the coordinates leave the board
    pub fn index(self) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < SIZE && col < SIZE).then_some(row * SIZE + col)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        // index < CELLS, so both casts are lossless
        Action::new((index / SIZE) as i32, (index % SIZE) as i32)
    }
}

impl From<(i32, i32)> for Action {
    fn from((row, col): (i32, i32)) -> Self {
        Action::new(row, col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// An immutable 3x3 position.
///
/// `Board` is `Copy` (nine bytes), so every move produces a fresh value and
/// search branches never share cells. There is no mutating API: the only way
/// to derive a new position is [`apply`](super::rules::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// The empty starting position
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// No reachability check is made, so malformed positions (wrong piece
    /// counts, two winners) can be represented for analysis.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Board { cells }
    }

    /// Parse a board from text.
    ///
    /// Expects exactly nine cell characters once whitespace and `/` row
    /// separators are removed, e.g. `"XOX/OXO/OX."`.
    ///
    /// # Errors
    ///
    /// Returns error if the cleaned string does not hold exactly nine cells
    /// or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Cell at `(row, col)`, or `None` when off the board
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Action::new(row, col).index().map(|idx| self.cells[idx])
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Rows of the board
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, &cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = cell;
        }
        rows
    }

    pub fn counts(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Row-major indices of empty cells
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Copy of this board with `cell` written at `index`.
    ///
    /// Callers validate the index; the receiver is left untouched.
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    /// Compact single-line encoding, e.g. `"XO......."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
