use crate::{column_label, Board, CellState};

/// Turns a board into something that can be shown to the players.
///
/// Implementations must not depend on anything but the board contents. Any
/// expensive resources (fonts and the like) belong to the implementation and
/// should be loaded once, not per call.
pub trait Renderer {
    type Image;

    fn render(&self, board: &Board) -> Self::Image;
}

const EMPTY: char = '·';
const STAR_POINT: char = '+';
const BLACK_STONE: char = '●';
const WHITE_STONE: char = '○';

static STAR_POINTS_9: [(u8, u8); 5] = [(2, 2), (6, 2), (4, 4), (2, 6), (6, 6)];
static STAR_POINTS_13: [(u8, u8); 5] = [(6, 6), (3, 3), (3, 9), (9, 3), (9, 9)];
static STAR_POINTS_19: [(u8, u8); 9] = [
    (3, 3),
    (9, 3),
    (15, 3),
    (3, 9),
    (9, 9),
    (15, 9),
    (3, 15),
    (9, 15),
    (15, 15),
];

/// The traditionally marked intersections for the common board sizes.
pub fn star_points(width: u8, height: u8) -> &'static [(u8, u8)] {
    match (width, height) {
        (9, 9) => &STAR_POINTS_9,
        (13, 13) => &STAR_POINTS_13,
        (19, 19) => &STAR_POINTS_19,
        _ => &[],
    }
}

/// Draws the board as lines of text, one character per intersection.
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer {
    /// Frame the grid with column letters and row numbers.
    pub show_coords: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { show_coords: true }
    }
}

impl Renderer for TextRenderer {
    type Image = String;

    fn render(&self, board: &Board) -> String {
        let (width, height) = board.size();
        let stars = star_points(width, height);

        let column_letters = {
            let letters: Vec<String> = (0..width).map(|x| column_label(x).to_string()).collect();
            format!("   {}", letters.join(" "))
        };

        let mut lines = Vec::with_capacity(usize::from(height) + 2);
        if self.show_coords {
            lines.push(column_letters.clone());
        }
        for y in 0..height {
            let cells: Vec<String> = (0..width)
                .map(|x| {
                    let symbol = match board.get(x as i8, y as i8) {
                        CellState::Black => BLACK_STONE,
                        CellState::White => WHITE_STONE,
                        CellState::Empty if stars.contains(&(x, y)) => STAR_POINT,
                        CellState::Empty => EMPTY,
                    };
                    symbol.to_string()
                })
                .collect();
            let mut line = cells.join(" ");
            if self.show_coords {
                line = format!("{:>2} {} {}", y + 1, line, y + 1);
            }
            lines.push(line);
        }
        if self.show_coords {
            lines.push(column_letters);
        }
        lines.join("\n")
    }
}
