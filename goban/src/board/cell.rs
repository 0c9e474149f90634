use serde::{Deserialize, Serialize};

const CELL_BITS: usize = 2;
const CELL_MASK: u8 = 0b11;
const CELLS_PER_BYTE: usize = 8 / CELL_BITS;

/// One of the two players, identified by the color of their stones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Black always moves first.
    #[default]
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The single-letter tag used in move and button identifiers.
    pub fn tag(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'b' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }

    /// The stone this player puts on the board.
    pub fn stone(self) -> CellState {
        match self {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// The occupancy of a single intersection.
///
/// The discriminants are the 2-bit patterns used by the board codec. The
/// remaining pattern `0b11` is reserved and reads back as [`CellState::Empty`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0b00,
    Black = 0b01,
    White = 0b10,
}

impl CellState {
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// The owner of the stone on this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
        }
    }

    #[inline]
    fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    fn from_bits(bits: u8) -> Self {
        match bits & CELL_MASK {
            0b01 => CellState::Black,
            0b10 => CellState::White,
            _ => CellState::Empty,
        }
    }
}

/// Number of bytes needed to pack `num_cells` cells.
pub(crate) fn packed_len(num_cells: usize) -> usize {
    (num_cells * CELL_BITS).div_ceil(8)
}

/// Packs cells four to a byte, the first cell in the lowest two bits.
pub(crate) fn pack_cells(cells: &[CellState]) -> Vec<u8> {
    let mut bytes = vec![0u8; packed_len(cells.len())];
    for (idx, cell) in cells.iter().enumerate() {
        bytes[idx / CELLS_PER_BYTE] |= cell.bits() << ((idx % CELLS_PER_BYTE) * CELL_BITS);
    }
    bytes
}

/// Inverse of [`pack_cells()`].
///
/// Always yields exactly `num_cells` cells: surplus input is ignored and
/// missing input reads as empty.
pub(crate) fn unpack_cells(bytes: &[u8], num_cells: usize) -> Vec<CellState> {
    (0..num_cells)
        .map(|idx| match bytes.get(idx / CELLS_PER_BYTE) {
            Some(byte) => CellState::from_bits(byte >> ((idx % CELLS_PER_BYTE) * CELL_BITS)),
            None => CellState::Empty,
        })
        .collect()
}
