use goban::token::{artifact_name, board_from_artifact_name, board_from_data, TokenError};
use goban::{
    Board, ButtonId, Machine, Phase, Rejection, Renderer, Request, Response, Snapshot,
    TextRenderer,
};
use tracing::{debug, info};

use crate::error::InvalidRequest;
use crate::Config;

/// Answers requests from the chat front-end.
///
/// Holds no game state. Everything needed to answer a [`Request::Press`] is
/// in the request itself.
pub struct Relay {
    machine: Machine,
    renderer: TextRenderer,
}

impl Relay {
    pub fn new(config: &Config) -> Self {
        Self {
            machine: Machine::new(),
            renderer: TextRenderer {
                show_coords: config.show_coords,
            },
        }
    }

    /// Never fails: anything that goes wrong is reported back to the player.
    pub fn handle(&self, req: Request) -> Response {
        let result = match req {
            Request::NewGame { size, data } => self.new_game(size, data.as_deref()),
            Request::Press { artifact, button } => self.press(&artifact, &button),
        };
        result.unwrap_or_else(|err| {
            info!("Invalid request: {}", err);
            Response::Ephemeral {
                content: format!("Error: {}", err),
            }
        })
    }

    fn new_game(&self, size: u8, data: Option<&str>) -> Result<Response, InvalidRequest> {
        let board = match data {
            Some(data) => board_from_data(size, data).map_err(|err| match err {
                TokenError::InvalidBoard(err) => InvalidRequest::InvalidSize(err),
                err => InvalidRequest::UnreadableBoardData(err),
            })?,
            None => Board::square(size).map_err(InvalidRequest::InvalidSize)?,
        };
        info!(size, stones = board.num_stones(), "New game");
        Ok(self.update(&Snapshot::new(board)))
    }

    fn press(&self, artifact: &str, button: &str) -> Result<Response, InvalidRequest> {
        let board = board_from_artifact_name(artifact).map_err(InvalidRequest::UnreadableArtifact)?;
        let button: ButtonId = button.parse().map_err(InvalidRequest::UnreadableButton)?;
        let snapshot = Snapshot {
            board,
            phase: button.phase(),
        };

        match self.machine.step(&snapshot, button.action) {
            Ok(next) => Ok(self.update(&next)),
            Err(rejection) => {
                debug!(%rejection, "Button press rejected");
                Ok(Response::Ephemeral {
                    content: rejection_notice(&rejection),
                })
            }
        }
    }

    fn update(&self, snapshot: &Snapshot) -> Response {
        Response::Update {
            content: status_line(snapshot.phase),
            artifact: artifact_name(&snapshot.board),
            image: self.renderer.render(&snapshot.board),
            buttons: self.machine.affordances(snapshot),
        }
    }
}

fn status_line(phase: Phase) -> String {
    match phase {
        Phase::AwaitingColumn { color } | Phase::AwaitingRow { color, .. } => {
            format!("**{}** to move.", color)
        }
        Phase::Resigned { winner } => {
            format!("Opponent has resigned. {} has won.", winner)
        }
    }
}

fn rejection_notice(rejection: &Rejection) -> String {
    match rejection {
        Rejection::Illegal { .. } => String::from(":x: **Illegal move!**"),
        other => format!(":x: {}.", other),
    }
}
