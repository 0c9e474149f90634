use tracing::debug;

use crate::{
    cell_label, column_label, token, Affordances, Board, Color, Legality, MoveId, VacantCell,
};

/// Where a game stands between two interactions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `color` is to move and needs to pick a column (or pass).
    AwaitingColumn { color: Color },
    /// `color` has picked `column` and needs to pick a row (or go back).
    AwaitingRow { color: Color, column: u8 },
    /// The game is over. No action is accepted anymore.
    Resigned { winner: Color },
}

impl Phase {
    /// The color whose buttons are on offer, or `None` once the game is over.
    pub fn active_color(self) -> Option<Color> {
        match self {
            Phase::AwaitingColumn { color } | Phase::AwaitingRow { color, .. } => Some(color),
            Phase::Resigned { .. } => None,
        }
    }
}

/// A button press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// First half of a move.
    Column { color: Color, column: u8 },
    /// Second half of a move: puts a stone on `(column, row)`.
    Place { color: Color, column: u8, row: u8 },
    Pass(Color),
    Resign(Color),
    /// Undo the column selection.
    GoBack(Color),
}

impl Action {
    /// The color of the player pressing the button.
    pub fn color(self) -> Color {
        match self {
            Action::Column { color, .. } | Action::Place { color, .. } => color,
            Action::Pass(color) | Action::Resign(color) | Action::GoBack(color) => color,
        }
    }

    /// The move identifier of a selection, `None` for the control buttons.
    pub fn move_id(self) -> Option<MoveId> {
        match self {
            Action::Column { color, column } => Some(MoveId::column(color, column)),
            Action::Place { color, column, row } => Some(MoveId::cell(color, column, row)),
            _ => None,
        }
    }
}

impl From<MoveId> for Action {
    fn from(move_id: MoveId) -> Self {
        let MoveId { color, column, row } = move_id;
        match row {
            Some(row) => Action::Place { color, column, row },
            None => Action::Column { color, column },
        }
    }
}

/// Why an action was turned down. The game state is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    UnexpectedAction { phase: Phase, action: Action },
    OutOfTurn { turn: Color, color: Color },
    OutOfBounds { column: u8, row: Option<u8> },
    Illegal { column: u8, row: u8, color: Color },
}

impl std::error::Error for Rejection {}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GameOver => write!(f, "The game is already over"),
            Rejection::UnexpectedAction { phase, action } => {
                write!(f, "{} cannot ", action.color())?;
                match action {
                    Action::Column { column, .. } => write!(f, "pick column {}", column_label(*column))?,
                    Action::Place { column, row, .. } => write!(f, "play {}", cell_label(*column, *row))?,
                    Action::Pass(_) => write!(f, "pass")?,
                    Action::Resign(_) => write!(f, "resign")?,
                    Action::GoBack(_) => write!(f, "go back")?,
                }
                match phase {
                    Phase::AwaitingColumn { .. } => write!(f, " while a column is being picked"),
                    Phase::AwaitingRow { column, .. } => {
                        write!(f, " while a row in column {} is being picked", column_label(*column))
                    }
                    Phase::Resigned { .. } => write!(f, " after the game has ended"),
                }
            }
            Rejection::OutOfTurn { turn, color } => {
                write!(f, "{} tried to move, but it is {}'s turn", color, turn)
            }
            Rejection::OutOfBounds { column, row: None } => {
                write!(f, "Column {} is off the board", column)
            }
            Rejection::OutOfBounds {
                column,
                row: Some(row),
            } => write!(f, "Intersection ({}, {}) is off the board", column, row),
            Rejection::Illegal { column, row, color } => write!(
                f,
                "{} may not play on intersection ({}, {})",
                color, column, row
            ),
        }
    }
}

/// Everything the next interaction needs: the board and the phase.
///
/// Only the board survives into the state token. The phase is carried by the
/// button identifiers that are offered for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub phase: Phase,
}

impl Snapshot {
    /// Starts (or resumes) play on `board`, waiting for whoever's turn it is.
    pub fn new(board: Board) -> Self {
        let phase = Phase::AwaitingColumn {
            color: board.turn(),
        };
        Self { board, phase }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Resigned { .. })
    }

    /// The state token to embed into the next response.
    pub fn token(&self) -> String {
        token::serialize(&self.board)
    }
}

/// The interaction state machine.
///
/// It holds no game state of its own. Every call to [`Self::step()`] takes the
/// previous snapshot and either returns a new one or a [`Rejection`].
#[derive(Clone, Debug, Default)]
pub struct Machine<L = VacantCell> {
    legality: L,
}

impl Machine<VacantCell> {
    /// A machine that only forbids playing on occupied intersections.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Legality> Machine<L> {
    pub fn with_legality(legality: L) -> Self {
        Self { legality }
    }

    pub fn legality(&self) -> &L {
        &self.legality
    }

    /// The buttons to offer for `snapshot`.
    pub fn affordances(&self, snapshot: &Snapshot) -> Affordances {
        Affordances::for_snapshot(snapshot, &self.legality)
    }

    /// Applies `action` to `snapshot`.
    ///
    /// On success the returned snapshot is the next state of the game. A
    /// rejection leaves nothing changed, so the caller simply keeps the old
    /// snapshot (and its token).
    pub fn step(&self, snapshot: &Snapshot, action: Action) -> Result<Snapshot, Rejection> {
        let result = self.transition(snapshot, action);
        match &result {
            Ok(next) => debug!(from = ?snapshot.phase, to = ?next.phase, ?action, "Transition"),
            Err(rejection) => debug!(phase = ?snapshot.phase, ?action, %rejection, "Rejected"),
        }
        result
    }

    fn transition(&self, snapshot: &Snapshot, action: Action) -> Result<Snapshot, Rejection> {
        let phase = snapshot.phase;
        let active_color = phase.active_color().ok_or(Rejection::GameOver)?;

        if let Action::Resign(color) = action {
            return Ok(Snapshot {
                board: snapshot.board.clone(),
                phase: Phase::Resigned {
                    winner: color.opponent(),
                },
            });
        }

        let turn = snapshot.board.turn();
        if action.color() != turn {
            return Err(Rejection::OutOfTurn {
                turn,
                color: action.color(),
            });
        }
        if action.color() != active_color {
            return Err(Rejection::UnexpectedAction { phase, action });
        }

        let (width, height) = snapshot.board.size();
        match (phase, action) {
            (Phase::AwaitingColumn { color }, Action::Column { column, .. }) => {
                if column >= width {
                    return Err(Rejection::OutOfBounds { column, row: None });
                }
                Ok(Snapshot {
                    board: snapshot.board.clone(),
                    phase: Phase::AwaitingRow { color, column },
                })
            }
            (Phase::AwaitingColumn { .. }, Action::Pass(_)) => {
                let mut board = snapshot.board.clone();
                board.flip_turn();
                Ok(Snapshot::new(board))
            }
            (Phase::AwaitingRow { color, column: selected }, Action::Place { column, row, .. })
                if column == selected =>
            {
                if column >= width || row >= height {
                    return Err(Rejection::OutOfBounds {
                        column,
                        row: Some(row),
                    });
                }
                if !self.legality.is_legal(&snapshot.board, column, row, color) {
                    return Err(Rejection::Illegal { column, row, color });
                }
                let mut board = snapshot.board.clone();
                board.set(column as i8, row as i8, color.stone());
                board.flip_turn();
                Ok(Snapshot::new(board))
            }
            (Phase::AwaitingRow { color, .. }, Action::GoBack(_)) => Ok(Snapshot {
                board: snapshot.board.clone(),
                phase: Phase::AwaitingColumn { color },
            }),
            _ => Err(Rejection::UnexpectedAction { phase, action }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    fn fresh(size: u8) -> Snapshot {
        Snapshot::new(Board::square(size).unwrap())
    }

    fn play(machine: &Machine, snapshot: &Snapshot, column: u8, row: u8) -> Snapshot {
        let color = snapshot.board.turn();
        let picked = machine
            .step(snapshot, Action::Column { color, column })
            .unwrap();
        machine
            .step(&picked, Action::Place { color, column, row })
            .unwrap()
    }

    #[test]
    fn column_then_row_places_stone() {
        let machine = Machine::new();
        let start = fresh(9);

        let picked = machine
            .step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 3,
                },
            )
            .unwrap();
        assert_eq!(
            picked.phase,
            Phase::AwaitingRow {
                color: Color::Black,
                column: 3
            }
        );
        assert_eq!(picked.board, start.board);

        let placed = machine
            .step(
                &picked,
                Action::Place {
                    color: Color::Black,
                    column: 3,
                    row: 5,
                },
            )
            .unwrap();
        assert_eq!(placed.board.get(3, 5), CellState::Black);
        assert_eq!(placed.board.num_stones(), 1);
        assert_eq!(placed.board.turn(), Color::White);
        assert_eq!(
            placed.phase,
            Phase::AwaitingColumn {
                color: Color::White
            }
        );
    }

    #[test]
    fn go_back_changes_nothing() {
        let machine = Machine::new();
        let start = fresh(9);
        let picked = machine
            .step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 3,
                },
            )
            .unwrap();
        let back = machine.step(&picked, Action::GoBack(Color::Black)).unwrap();
        assert_eq!(back, start);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let machine = Machine::new();
        let after_black = play(&machine, &fresh(9), 4, 4);
        let picked = machine
            .step(
                &after_black,
                Action::Column {
                    color: Color::White,
                    column: 4,
                },
            )
            .unwrap();
        let before = picked.clone();
        let result = machine.step(
            &picked,
            Action::Place {
                color: Color::White,
                column: 4,
                row: 4,
            },
        );
        assert_eq!(
            result,
            Err(Rejection::Illegal {
                column: 4,
                row: 4,
                color: Color::White
            })
        );
        assert_eq!(picked, before);
        assert_eq!(picked.token(), before.token());
        assert_eq!(picked.board.turn(), Color::White);
    }

    #[test]
    fn two_passes_return_the_turn() {
        let machine = Machine::new();
        let start = play(&machine, &fresh(9), 0, 0);
        let first = machine.step(&start, Action::Pass(Color::White)).unwrap();
        assert_eq!(first.board.turn(), Color::Black);
        let second = machine.step(&first, Action::Pass(Color::Black)).unwrap();
        assert_eq!(second.board, start.board);
        assert_eq!(second.phase, start.phase);
        assert!(!second.is_over());
    }

    #[test]
    fn resign_ends_the_game() {
        let machine = Machine::new();
        let picked = machine
            .step(
                &fresh(13),
                Action::Column {
                    color: Color::Black,
                    column: 0,
                },
            )
            .unwrap();
        let resigned = machine.step(&picked, Action::Resign(Color::Black)).unwrap();
        assert_eq!(
            resigned.phase,
            Phase::Resigned {
                winner: Color::White
            }
        );
        assert_eq!(resigned.board, picked.board);
        assert!(resigned.is_over());

        for action in [
            Action::Pass(Color::Black),
            Action::Resign(Color::White),
            Action::Column {
                color: Color::Black,
                column: 1,
            },
        ] {
            assert_eq!(machine.step(&resigned, action), Err(Rejection::GameOver));
        }
    }

    #[test]
    fn actions_outside_their_phase() {
        let machine = Machine::new();
        let start = fresh(9);
        assert!(matches!(
            machine.step(&start, Action::GoBack(Color::Black)),
            Err(Rejection::UnexpectedAction { .. })
        ));
        assert!(matches!(
            machine.step(
                &start,
                Action::Place {
                    color: Color::Black,
                    column: 1,
                    row: 1
                }
            ),
            Err(Rejection::UnexpectedAction { .. })
        ));

        let picked = machine
            .step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 2,
                },
            )
            .unwrap();
        // A row for a different column than the selected one
        assert!(matches!(
            machine.step(
                &picked,
                Action::Place {
                    color: Color::Black,
                    column: 3,
                    row: 1
                }
            ),
            Err(Rejection::UnexpectedAction { .. })
        ));
        assert!(matches!(
            machine.step(&picked, Action::Pass(Color::Black)),
            Err(Rejection::UnexpectedAction { .. })
        ));
    }

    #[test]
    fn unexpected_actions_read_as_sentences() {
        let machine = Machine::new();
        let start = fresh(9);
        let place = Action::Place {
            color: Color::Black,
            column: 3,
            row: 4,
        };
        let rejection = machine.step(&start, place).unwrap_err();
        assert_eq!(
            rejection.to_string(),
            "Black cannot play D5 while a column is being picked"
        );

        let picked = machine
            .step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 2,
                },
            )
            .unwrap();
        let rejection = machine.step(&picked, Action::Pass(Color::Black)).unwrap_err();
        assert_eq!(
            rejection.to_string(),
            "Black cannot pass while a row in column C is being picked"
        );

        // Columns from a foreign button id need not be on any board
        let far_off = Snapshot {
            board: Board::square(9).unwrap(),
            phase: Phase::AwaitingRow {
                color: Color::Black,
                column: 255,
            },
        };
        let rejection = machine.step(&far_off, Action::Pass(Color::Black)).unwrap_err();
        assert!(rejection.to_string().starts_with("Black cannot pass while a row in column "));
    }

    #[test]
    fn wrong_color_is_out_of_turn() {
        let machine = Machine::new();
        assert_eq!(
            machine.step(&fresh(9), Action::Pass(Color::White)),
            Err(Rejection::OutOfTurn {
                turn: Color::Black,
                color: Color::White
            })
        );
    }

    #[test]
    fn off_the_board() {
        let machine = Machine::new();
        let start = Snapshot::new(Board::new(5, 3).unwrap());
        assert_eq!(
            machine.step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 5
                }
            ),
            Err(Rejection::OutOfBounds {
                column: 5,
                row: None
            })
        );
        let picked = machine
            .step(
                &start,
                Action::Column {
                    color: Color::Black,
                    column: 4,
                },
            )
            .unwrap();
        assert_eq!(
            machine.step(
                &picked,
                Action::Place {
                    color: Color::Black,
                    column: 4,
                    row: 3
                }
            ),
            Err(Rejection::OutOfBounds {
                column: 4,
                row: Some(3)
            })
        );
    }

    #[test]
    fn custom_legality_hook() {
        let machine = Machine::with_legality(|_: &Board, x: u8, _: u8, _: Color| x != 0);
        let picked = machine
            .step(
                &fresh(9),
                Action::Column {
                    color: Color::Black,
                    column: 0,
                },
            )
            .unwrap();
        assert!(matches!(
            machine.step(
                &picked,
                Action::Place {
                    color: Color::Black,
                    column: 0,
                    row: 0
                }
            ),
            Err(Rejection::Illegal { .. })
        ));
    }

    #[test]
    fn move_ids_become_actions() {
        let action = Action::from(MoveId::cell(Color::White, 2, 7));
        assert_eq!(
            action,
            Action::Place {
                color: Color::White,
                column: 2,
                row: 7
            }
        );
        assert_eq!(action.move_id(), Some(MoveId::cell(Color::White, 2, 7)));
        assert_eq!(Action::Pass(Color::Black).move_id(), None);
    }
}
