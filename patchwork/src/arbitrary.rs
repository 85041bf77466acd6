use crate::{Patch, QuiltBoard, Shape};

/// A board with a handful of randomly committed patches, plus a probe patch
/// and position for fitting properties.
#[derive(Clone, Debug)]
pub struct CrowdedBoard {
    pub board: QuiltBoard,
    pub probe: Patch,
    pub x: usize,
    pub y: usize,
}

impl quickcheck::Arbitrary for Shape {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let width = usize::arbitrary(g) % 5 + 1;
        let height = usize::arbitrary(g) % 5 + 1;
        let mut cells: Vec<bool> = (0..width * height).map(|_| bool::arbitrary(g)).collect();
        // Shapes are never fully empty.
        let pin = usize::arbitrary(g) % cells.len();
        cells[pin] = true;
        Shape::new(width, height, cells)
    }
}

impl quickcheck::Arbitrary for Patch {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Patch::new(
            u32::arbitrary(g) % 7,
            u32::arbitrary(g) % 12,
            u32::arbitrary(g) % 4,
            Shape::arbitrary(g),
        )
    }
}

impl quickcheck::Arbitrary for CrowdedBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::arbitrary(g) % 4 + 6;
        let mut board = QuiltBoard::new(size);
        let patch_count = usize::arbitrary(g) % 6;
        for _ in 0..patch_count {
            let patch = Patch::arbitrary(g);
            if let Some((x, y)) = board.find_first_fit(&patch) {
                board.commit(patch, x, y);
            }
        }
        CrowdedBoard {
            board,
            probe: Patch::arbitrary(g),
            x: usize::arbitrary(g) % size,
            y: usize::arbitrary(g) % size,
        }
    }
}
