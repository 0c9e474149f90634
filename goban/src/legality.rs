use crate::{Board, Color};

/// Decides whether a stone may be placed.
///
/// This is the only place where game rules plug in. The interaction layer asks
/// it before every placement and when greying out row buttons, and never looks
/// at the board otherwise.
pub trait Legality {
    /// `(x, y)` is always on the board when this is called.
    fn is_legal(&self, board: &Board, x: u8, y: u8, color: Color) -> bool;
}

/// Allows any placement on an empty intersection.
///
/// Ko, suicide and the like are not checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct VacantCell;

impl Legality for VacantCell {
    fn is_legal(&self, board: &Board, x: u8, y: u8, _color: Color) -> bool {
        board.get(x as i8, y as i8).is_empty()
    }
}

impl<F> Legality for F
where
    F: Fn(&Board, u8, u8, Color) -> bool,
{
    fn is_legal(&self, board: &Board, x: u8, y: u8, color: Color) -> bool {
        self(board, x, y, color)
    }
}
