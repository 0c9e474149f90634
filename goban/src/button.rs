use std::str::FromStr;

use crate::{Action, Color, MoveId, MoveIdError, Phase};

const SCOPE_SEPARATOR: char = '_';
const COLUMN_SCOPE: &str = "m";
const ROW_SCOPE_PREFIX: &str = "mr";
const PASS: &str = "pass";
const RESIGN: &str = "resign";
const GO_BACK: &str = "back";

/// The phase a button was issued in, minus the color (which the action carries).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Column,
    Row { column: u8 },
}

/// The wire identifier of a button: `<scope>_<body>`.
///
/// The scope is `m` for buttons offered while a column is awaited, and
/// `mr<column>` for buttons offered while a row in `column` is awaited. The
/// body is either a [`MoveId`], or one of `pass_<c>`, `resign_<c>` and
/// `back_<c>` with a color tag `c`.
///
/// Together with the board from the state token, this is enough to rebuild
/// the [`Phase`] that the button was pressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonId {
    pub scope: Scope,
    pub action: Action,
}

impl ButtonId {
    /// The identifier for offering `action` during `phase`, or `None` if
    /// nothing can be offered anymore.
    pub fn issued_in(phase: Phase, action: Action) -> Option<Self> {
        let scope = match phase {
            Phase::AwaitingColumn { .. } => Scope::Column,
            Phase::AwaitingRow { column, .. } => Scope::Row { column },
            Phase::Resigned { .. } => return None,
        };
        Some(Self { scope, action })
    }

    /// The phase in which this button was offered.
    pub fn phase(&self) -> Phase {
        let color = self.action.color();
        match self.scope {
            Scope::Column => Phase::AwaitingColumn { color },
            Scope::Row { column } => Phase::AwaitingRow { color, column },
        }
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scope {
            Scope::Column => write!(f, "{}", COLUMN_SCOPE)?,
            Scope::Row { column } => write!(f, "{}{}", ROW_SCOPE_PREFIX, column)?,
        }
        write!(f, "{}", SCOPE_SEPARATOR)?;
        match self.action {
            Action::Pass(color) => write!(f, "{}{}{}", PASS, SCOPE_SEPARATOR, color.tag()),
            Action::Resign(color) => write!(f, "{}{}{}", RESIGN, SCOPE_SEPARATOR, color.tag()),
            Action::GoBack(color) => write!(f, "{}{}{}", GO_BACK, SCOPE_SEPARATOR, color.tag()),
            Action::Column { color, column } => write!(f, "{}", MoveId::column(color, column)),
            Action::Place { color, column, row } => {
                write!(f, "{}", MoveId::cell(color, column, row))
            }
        }
    }
}

/// The error type for the [`FromStr`] instance of [`ButtonId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonIdError {
    MissingScope,
    InvalidScope { scope: String },
    InvalidColor { body: String },
    InvalidMove(MoveIdError),
}

impl std::error::Error for ButtonIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ButtonIdError::InvalidMove(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ButtonIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonIdError::MissingScope => write!(f, "Button identifier has no scope"),
            ButtonIdError::InvalidScope { scope } => {
                write!(f, "Button identifier has an unknown scope '{}'", scope)
            }
            ButtonIdError::InvalidColor { body } => {
                write!(f, "Button '{}' does not name a color", body)
            }
            ButtonIdError::InvalidMove(_) => write!(f, "Button identifier has an invalid move"),
        }
    }
}

impl From<MoveIdError> for ButtonIdError {
    fn from(err: MoveIdError) -> Self {
        ButtonIdError::InvalidMove(err)
    }
}

impl FromStr for ButtonId {
    type Err = ButtonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scope, body) = s
            .split_once(SCOPE_SEPARATOR)
            .ok_or(ButtonIdError::MissingScope)?;

        let scope = if scope == COLUMN_SCOPE {
            Scope::Column
        } else {
            scope
                .strip_prefix(ROW_SCOPE_PREFIX)
                .and_then(|column| column.parse().ok())
                .map(|column| Scope::Row { column })
                .ok_or_else(|| ButtonIdError::InvalidScope {
                    scope: String::from(scope),
                })?
        };

        let control = |word: &str| -> Option<Result<Color, ButtonIdError>> {
            let tag = body.strip_prefix(word)?.strip_prefix(SCOPE_SEPARATOR)?;
            let mut chars = tag.chars();
            Some(
                match (chars.next().and_then(Color::from_tag), chars.next()) {
                    (Some(color), None) => Ok(color),
                    _ => Err(ButtonIdError::InvalidColor {
                        body: String::from(body),
                    }),
                },
            )
        };

        let action = if let Some(color) = control(PASS) {
            Action::Pass(color?)
        } else if let Some(color) = control(RESIGN) {
            Action::Resign(color?)
        } else if let Some(color) = control(GO_BACK) {
            Action::GoBack(color?)
        } else {
            Action::from(body.parse::<MoveId>()?)
        };

        Ok(ButtonId { scope, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ButtonId {
        s.parse().unwrap()
    }

    #[test]
    fn wire_format() {
        let cases = [
            (
                "m_b3",
                Scope::Column,
                Action::Column {
                    color: Color::Black,
                    column: 3,
                },
            ),
            (
                "mr3_w3:12",
                Scope::Row { column: 3 },
                Action::Place {
                    color: Color::White,
                    column: 3,
                    row: 12,
                },
            ),
            ("m_pass_w", Scope::Column, Action::Pass(Color::White)),
            (
                "mr0_resign_b",
                Scope::Row { column: 0 },
                Action::Resign(Color::Black),
            ),
            (
                "mr18_back_w",
                Scope::Row { column: 18 },
                Action::GoBack(Color::White),
            ),
        ];
        for (wire, scope, action) in cases {
            let button = ButtonId { scope, action };
            assert_eq!(button.to_string(), wire);
            assert_eq!(parse(wire), button);
        }
    }

    #[test]
    fn phase_of_button() {
        assert_eq!(
            parse("m_w4").phase(),
            Phase::AwaitingColumn {
                color: Color::White
            }
        );
        assert_eq!(
            parse("mr4_back_b").phase(),
            Phase::AwaitingRow {
                color: Color::Black,
                column: 4
            }
        );
        let phase = Phase::AwaitingRow {
            color: Color::Black,
            column: 4,
        };
        let button = ButtonId::issued_in(phase, Action::GoBack(Color::Black)).unwrap();
        assert_eq!(button.phase(), phase);
        assert_eq!(
            ButtonId::issued_in(
                Phase::Resigned {
                    winner: Color::Black
                },
                Action::Pass(Color::White)
            ),
            None
        );
    }

    #[test]
    fn malformed_buttons() {
        assert_eq!("b3".parse::<ButtonId>(), Err(ButtonIdError::MissingScope));
        assert_eq!(
            "x_b3".parse::<ButtonId>(),
            Err(ButtonIdError::InvalidScope {
                scope: String::from("x")
            })
        );
        assert_eq!(
            "mrq_b3:1".parse::<ButtonId>(),
            Err(ButtonIdError::InvalidScope {
                scope: String::from("mrq")
            })
        );
        assert_eq!(
            "m_pass_x".parse::<ButtonId>(),
            Err(ButtonIdError::InvalidColor {
                body: String::from("pass_x")
            })
        );
        assert_eq!(
            "m_resign_bw".parse::<ButtonId>(),
            Err(ButtonIdError::InvalidColor {
                body: String::from("resign_bw")
            })
        );
        assert!(matches!(
            "m_q3".parse::<ButtonId>(),
            Err(ButtonIdError::InvalidMove(MoveIdError::InvalidColor { tag: 'q' }))
        ));
    }
}
