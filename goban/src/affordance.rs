use serde::{Deserialize, Serialize};

use crate::{Action, ButtonId, Legality, Phase, Snapshot};

/// Most chat front-ends lay out at most five buttons side by side.
pub const BUTTONS_PER_ROW: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// A single button offered to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    /// A [`ButtonId`] in its wire form.
    pub id: String,
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// The buttons for one phase of the game, grouped into rows.
///
/// The first row holds the control buttons (pass, resign, go back), the
/// following rows the column or row selection, [`BUTTONS_PER_ROW`] at a time.
/// A finished game has no buttons at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Affordances {
    rows: Vec<Vec<Button>>,
}

impl Affordances {
    pub fn for_snapshot<L: Legality>(snapshot: &Snapshot, legality: &L) -> Self {
        let phase = snapshot.phase;
        let board = &snapshot.board;
        let button = |label: String, style, action, disabled| {
            ButtonId::issued_in(phase, action).map(|id| Button {
                label,
                id: id.to_string(),
                style,
                disabled,
            })
        };

        let (controls, selection): (Vec<_>, Vec<_>) = match phase {
            Phase::Resigned { .. } => return Self::default(),
            Phase::AwaitingColumn { color } => (
                vec![
                    button(String::from("Pass"), ButtonStyle::Success, Action::Pass(color), false),
                    button(String::from("Resign"), ButtonStyle::Danger, Action::Resign(color), false),
                ],
                (0..board.width())
                    .map(|column| {
                        button(
                            column_label(column).to_string(),
                            ButtonStyle::Secondary,
                            Action::Column { color, column },
                            false,
                        )
                    })
                    .collect(),
            ),
            Phase::AwaitingRow { color, column } => (
                vec![
                    button(String::from("Resign"), ButtonStyle::Danger, Action::Resign(color), false),
                    button(String::from("Go back"), ButtonStyle::Primary, Action::GoBack(color), false),
                ],
                (0..board.height())
                    .map(|row| {
                        button(
                            cell_label(column, row),
                            ButtonStyle::Secondary,
                            Action::Place { color, column, row },
                            !legality.is_legal(board, column, row, color),
                        )
                    })
                    .collect(),
            ),
        };

        let mut rows = vec![controls.into_iter().flatten().collect::<Vec<_>>()];
        let selection: Vec<Button> = selection.into_iter().flatten().collect();
        rows.extend(selection.chunks(BUTTONS_PER_ROW).map(<[Button]>::to_vec));
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// The button with the given label, if any.
    pub fn find(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|button| button.label == label)
    }
}

/// Columns are lettered from `A`.
///
/// Past `Z` the labels run on into the following code points. Boards never get
/// that wide, but button ids from outside may name any column.
pub(crate) fn column_label(column: u8) -> char {
    char::from_u32(u32::from(b'A') + u32::from(column)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Intersections are named like `C4`, with rows counted from 1.
pub(crate) fn cell_label(column: u8, row: u8) -> String {
    format!("{}{}", column_label(column), u16::from(row) + 1)
}
