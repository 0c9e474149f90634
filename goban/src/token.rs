//! The state token: a whole [`Board`] as one opaque string.
//!
//! The token is the only place where game state is kept between two
//! interactions. It becomes the name of the rendered board image, and the next
//! interaction reads it back from there.
//!
//! Format: `<width>x<height>_<turn>_<r0>x<r1>_<r2>x<r3>_<cells>`, where `turn`
//! is `0` for black and `1` for white, the four `r` fields are reserved and
//! always written as `-1`, and `cells` is the standard base64 encoding of
//! [`Board::encode()`].

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{Board, BoardError, Color};

/// Value written into each of the four reserved fields.
pub const RESERVED_SENTINEL: i8 = -1;

/// Extension of the rendered board image whose name carries the token.
pub const ARTIFACT_EXTENSION: &str = ".png";

const FIELD_SEPARATOR: char = '_';
const PAIR_SEPARATOR: char = 'x';
const NUM_FIELDS: usize = 5;

/// The error type for [`deserialize()`].
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    MissingField { field: &'static str },
    InvalidSize { size: String },
    InvalidTurn { turn: String },
    InvalidCells(base64::DecodeError),
    InvalidBoard(BoardError),
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenError::InvalidCells(err) => Some(err),
            TokenError::InvalidBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingField { field } => write!(f, "State token has no {} field", field),
            TokenError::InvalidSize { size } => {
                write!(f, "State token has an invalid board size '{}'", size)
            }
            TokenError::InvalidTurn { turn } => {
                write!(f, "State token has an invalid turn '{}'", turn)
            }
            TokenError::InvalidCells(_) => write!(f, "State token has undecodable board data"),
            TokenError::InvalidBoard(err) => write!(f, "State token describes no valid board: {}", err),
        }
    }
}

impl From<BoardError> for TokenError {
    fn from(err: BoardError) -> Self {
        TokenError::InvalidBoard(err)
    }
}

/// Turns the board, including whose turn it is, into a state token.
pub fn serialize(board: &Board) -> String {
    let (width, height) = board.size();
    let turn = match board.turn() {
        Color::Black => 0,
        Color::White => 1,
    };
    // TODO: fill the reserved fields once ko and the last move are tracked
    format!(
        "{width}{p}{height}{s}{turn}{s}{r}{p}{r}{s}{r}{p}{r}{s}{cells}",
        s = FIELD_SEPARATOR,
        p = PAIR_SEPARATOR,
        r = RESERVED_SENTINEL,
        cells = STANDARD.encode(board.encode()),
    )
}

/// Inverse of [`serialize()`].
///
/// The reserved fields must be present but their contents are not looked at.
/// Board data that is too short to cover every cell leaves the rest empty.
pub fn deserialize(token: &str) -> Result<Board, TokenError> {
    let mut fields = token.splitn(NUM_FIELDS, FIELD_SEPARATOR);
    let mut next_field = |field: &'static str| fields.next().ok_or(TokenError::MissingField { field });

    let size = next_field("size")?;
    let turn = next_field("turn")?;
    let _reserved_0 = next_field("first reserved")?;
    let _reserved_1 = next_field("second reserved")?;
    let cells = next_field("board")?;

    let (width, height) = size
        .split_once(PAIR_SEPARATOR)
        .and_then(|(w, h)| Some((w.parse::<u8>().ok()?, h.parse::<u8>().ok()?)))
        .ok_or_else(|| TokenError::InvalidSize {
            size: String::from(size),
        })?;
    let turn = match turn {
        "0" => Color::Black,
        "1" => Color::White,
        _ => {
            return Err(TokenError::InvalidTurn {
                turn: String::from(turn),
            })
        }
    };
    let bytes = STANDARD
        .decode(cells)
        .map_err(TokenError::InvalidCells)?;

    let mut board = Board::decode(width, height, &bytes)?;
    board.set_turn(turn);
    Ok(board)
}

/// Builds a `size` x `size` board from base64 of [`Board::encode()`] output,
/// as typed in by a player who wants to continue from a known position.
pub fn board_from_data(size: u8, data: &str) -> Result<Board, TokenError> {
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(TokenError::InvalidCells)?;
    Ok(Board::decode(size, size, &bytes)?)
}

/// The name under which the rendered board is delivered.
pub fn artifact_name(board: &Board) -> String {
    serialize(board) + ARTIFACT_EXTENSION
}

/// Reads the board back from a name produced by [`artifact_name()`].
///
/// A name without the extension is accepted as a bare token.
pub fn board_from_artifact_name(name: &str) -> Result<Board, TokenError> {
    deserialize(name.strip_suffix(ARTIFACT_EXTENSION).unwrap_or(name))
}
