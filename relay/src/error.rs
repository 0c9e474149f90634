use goban::token::TokenError;
use goban::{BoardError, ButtonIdError};

/// Error type for a request that cannot be acted on at all.
///
/// This is different from a [`Rejection`](goban::Rejection), which is a
/// well-formed button press that the game does not allow.
#[derive(Debug)]
pub enum InvalidRequest {
    InvalidSize(BoardError),
    UnreadableArtifact(TokenError),
    UnreadableButton(ButtonIdError),
    UnreadableBoardData(TokenError),
}

impl std::error::Error for InvalidRequest {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidRequest::InvalidSize(err) => Some(err),
            InvalidRequest::UnreadableArtifact(err) => Some(err),
            InvalidRequest::UnreadableButton(err) => Some(err),
            InvalidRequest::UnreadableBoardData(err) => Some(err),
        }
    }
}

impl std::fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRequest::InvalidSize(err) => write!(f, "invalid board size: {}", err),
            InvalidRequest::UnreadableArtifact(err) => {
                write!(f, "could not read the game from the board image: {}", err)
            }
            InvalidRequest::UnreadableButton(err) => {
                write!(f, "could not understand the button: {}", err)
            }
            InvalidRequest::UnreadableBoardData(err) => {
                write!(f, "could not decode data: {}", err)
            }
        }
    }
}
