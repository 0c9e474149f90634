use std::str::FromStr;

use crate::Color;

const ROW_SEPARATOR: char = ':';

/// Numeric stand-in for a row that has not been picked yet.
pub const PENDING_ROW: i8 = -1;

/// A (possibly half-finished) move, as carried by a selection button.
///
/// Written as the color tag followed by the column, e.g. `b3`, and once the
/// row is known, by a colon and the row, e.g. `b3:4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveId {
    pub color: Color,
    pub column: u8,
    /// `None` while only the column has been selected.
    pub row: Option<u8>,
}

impl MoveId {
    /// A move for which only the column is known.
    pub fn column(color: Color, column: u8) -> Self {
        Self {
            color,
            column,
            row: None,
        }
    }

    pub fn cell(color: Color, column: u8, row: u8) -> Self {
        Self {
            color,
            column,
            row: Some(row),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.row.is_none()
    }

    /// The row, or [`PENDING_ROW`] if there is none yet.
    pub fn row_or_sentinel(&self) -> i8 {
        self.row.map_or(PENDING_ROW, |row| row as i8)
    }
}

/// Builds the identifier for a move; a negative `row` leaves it pending.
pub fn encode_move(column: u8, row: i8, color: Color) -> String {
    MoveId {
        color,
        column,
        row: u8::try_from(row).ok(),
    }
    .to_string()
}

/// Parses a move identifier into `(column, row, color)`, with
/// [`PENDING_ROW`] for a missing row.
pub fn decode_move(s: &str) -> Result<(u8, i8, Color), MoveIdError> {
    let move_id: MoveId = s.parse()?;
    Ok((move_id.column, move_id.row_or_sentinel(), move_id.color))
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.tag(), self.column)?;
        if let Some(row) = self.row {
            write!(f, "{}{}", ROW_SEPARATOR, row)?;
        }
        Ok(())
    }
}

/// The error type for the [`FromStr`] instance of [`MoveId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveIdError {
    Empty,
    InvalidColor { tag: char },
    InvalidColumn { column: String },
    InvalidRow { row: String },
}

impl std::error::Error for MoveIdError {}

impl std::fmt::Display for MoveIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveIdError::Empty => write!(f, "Move identifier is empty"),
            MoveIdError::InvalidColor { tag } => {
                write!(f, "Move identifier starts with '{}' instead of 'b' or 'w'", tag)
            }
            MoveIdError::InvalidColumn { column } => {
                write!(f, "Move identifier has an invalid column '{}'", column)
            }
            MoveIdError::InvalidRow { row } => {
                write!(f, "Move identifier has an invalid row '{}'", row)
            }
        }
    }
}

impl FromStr for MoveId {
    type Err = MoveIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let tag = chars.next().ok_or(MoveIdError::Empty)?;
        let color = Color::from_tag(tag).ok_or(MoveIdError::InvalidColor { tag })?;
        let rest = chars.as_str();

        let (column, row) = match rest.split_once(ROW_SEPARATOR) {
            Some((column, row)) => (column, Some(row)),
            None => (rest, None),
        };
        let column = column.parse().map_err(|_| MoveIdError::InvalidColumn {
            column: String::from(column),
        })?;
        let row = row
            .map(|row| {
                row.parse().map_err(|_| MoveIdError::InvalidRow {
                    row: String::from(row),
                })
            })
            .transpose()?;

        Ok(MoveId { color, column, row })
    }
}
