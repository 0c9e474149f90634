mod cell;
mod error;

use std::ops::Deref;

pub use cell::*;
pub use error::*;

/// The largest supported width and height.
pub const MAX_BOARD_SIZE: u8 = 19;

/// A rectangular Go board plus the color that moves next.
///
/// Coordinates are `(x, y)` = `(column, row)`, both starting at 0 in the
/// upper left corner. Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Always exactly `width * height` entries.
    cells: Vec<CellState>,
    turn: Color,
}

impl Board {
    /// Creates an empty board with black to move.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width > MAX_BOARD_SIZE || height > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge { width, height });
        }
        if width == 0 || height == 0 {
            return Err(BoardError::Empty { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Empty; usize::from(width) * usize::from(height)],
            turn: Color::default(),
        })
    }

    /// Creates an empty `size` x `size` board.
    pub fn square(size: u8) -> Result<Self, BoardError> {
        Self::new(size, size)
    }

    /// Rebuilds a board from the output of [`Self::encode()`].
    ///
    /// This only fails if the dimensions are invalid. Bytes beyond what the
    /// board needs are ignored, and cells that are not covered by `bytes`
    /// stay empty. The turn is not part of the encoding and is reset to black.
    pub fn decode(width: u8, height: u8, bytes: &[u8]) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height)?;
        board.cells = unpack_cells(bytes, board.cells.len());
        Ok(board)
    }

    /// Packs the cells into 2 bits each, four per byte, row-major.
    ///
    /// The result is always [`Self::encoded_len()`] bytes long.
    pub fn encode(&self) -> Vec<u8> {
        pack_cells(&self.cells)
    }

    /// Length of the output of [`Self::encode()`] for a board of this size.
    pub fn encoded_len(width: u8, height: u8) -> usize {
        packed_len(usize::from(width) * usize::from(height))
    }

    /// Returns the board size in `(width, height)` form.
    pub fn size(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The color that moves next.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Hands the move to the other player.
    pub fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        self.index(x, y).is_some()
    }

    /// The state of the cell at `(x, y)`, or [`CellState::Empty`] if the
    /// coordinates are off the board.
    pub fn get(&self, x: i8, y: i8) -> CellState {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => CellState::Empty,
        }
    }

    /// Overwrites the cell at `(x, y)`. Does nothing if the coordinates are
    /// off the board.
    pub fn set(&mut self, x: i8, y: i8, state: CellState) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = state;
        }
    }

    /// How many stones of either color are on the board.
    pub fn num_stones(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates over `(x, y, state)` for every cell, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u8, u8, CellState)> + '_ {
        let width = usize::from(self.width);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % width) as u8, (idx / width) as u8, cell))
    }

    fn index(&self, x: i8, y: i8) -> Option<usize> {
        let x = u8::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u8::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

impl Deref for Board {
    type Target = [CellState];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}
