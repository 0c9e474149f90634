use crate::MAX_BOARD_SIZE;

/// The error type for creating a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    TooLarge { width: u8, height: u8 },
    Empty { width: u8, height: u8 },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::TooLarge { width, height } => write!(
                f,
                "Board of size {}x{} is too large, at most {}x{} is supported",
                width, height, MAX_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            BoardError::Empty { width, height } => {
                write!(f, "Board of size {}x{} has no intersections", width, height)
            }
        }
    }
}
