use crate::{Board, CellState, Color, MoveId, MAX_BOARD_SIZE};

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::Black, Color::White]).unwrap()
    }
}

impl quickcheck::Arbitrary for CellState {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[CellState::Empty, CellState::Black, CellState::White])
            .unwrap()
    }
}

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let width = u8::arbitrary(g) % MAX_BOARD_SIZE + 1;
        let height = u8::arbitrary(g) % MAX_BOARD_SIZE + 1;
        let mut board = Board::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                board.set(x as i8, y as i8, CellState::arbitrary(g));
            }
        }
        board.set_turn(Color::arbitrary(g));
        board
    }
}

impl quickcheck::Arbitrary for MoveId {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            color: Color::arbitrary(g),
            column: u8::arbitrary(g),
            row: Option::<u8>::arbitrary(g),
        }
    }
}
