use serde::{Deserialize, Serialize};

use crate::Affordances;

/// Something a player did, as delivered by the chat front-end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to start a game.
    ///
    /// The response is an [`Response::Update`] with black to move.
    NewGame {
        /// Width and height of the board.
        size: u8,
        /// Base64 of a packed board to start from, instead of an empty one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<String>,
    },
    /// A button below a previously delivered board was pressed.
    Press {
        /// The name of the board image the button belongs to. It contains the
        /// state token.
        artifact: String,
        /// The identifier of the pressed button.
        button: String,
    },
}

/// What to show the players in return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Replace the game message with a new board and new buttons.
    Update {
        content: String,
        /// Name under which `image` is to be delivered.
        artifact: String,
        image: String,
        buttons: Affordances,
    },
    /// A notice only for the player who pressed the button. The game message
    /// stays as it was.
    Ephemeral { content: String },
}
