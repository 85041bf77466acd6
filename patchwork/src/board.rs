use serde::{Deserialize, Serialize};

use crate::Patch;

/// Width and height of a quilt board.
pub const BOARD_SIZE: usize = 9;

/// Side length of the square a board must fill to claim the one-shot bonus.
pub const BONUS_SQUARE: usize = 7;

/// A patch frozen at the board position where it was committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchCoord {
    pub patch: Patch,
    pub x: usize,
    pub y: usize,
}

/// A player's personal grid of committed patches.
///
/// The occupancy grid is always the union of the committed patches' cells;
/// `remaining_space` and `button_income` are kept incrementally in sync.
#[derive(Clone, Debug)]
pub struct QuiltBoard {
    size: usize,
    cells: Vec<bool>,
    remaining_space: u32,
    button_income: u32,
    patches: Vec<PatchCoord>,
}

impl QuiltBoard {
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "quilt board size must be >= 1");
        Self {
            size,
            cells: vec![false; size * size],
            remaining_space: (size * size) as u32,
            button_income: 0,
            patches: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// How many empty cells remain.
    pub fn remaining_space(&self) -> u32 {
        self.remaining_space
    }

    /// Buttons earned per income cell of the time track.
    pub fn button_income(&self) -> u32 {
        self.button_income
    }

    /// The committed patches, in placement order.
    pub fn patches(&self) -> &[PatchCoord] {
        &self.patches
    }

    /// Whether the cell at `(x, y)` is covered. Out-of-bounds cells are not.
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y * self.size + x]
    }

    /// Whether every occupied cell of `patch`, placed with its top-left
    /// corner at `(x, y)`, lands on an empty cell inside the board.
    pub fn fits(&self, patch: &Patch, x: usize, y: usize) -> bool {
        let shape = &patch.shape;
        for py in 0..shape.height() {
            for px in 0..shape.width() {
                if !shape.tile_at(px, py) {
                    continue;
                }
                let (bx, by) = (x + px, y + py);
                if bx >= self.size || by >= self.size || self.cells[by * self.size + bx] {
                    return false;
                }
            }
        }
        true
    }

    /// The first position where `patch` fits, scanning x ascending in the
    /// outer loop and y ascending in the inner one.
    ///
    /// The scan order decides where auto-placed patches land, so it must
    /// stay exactly this way.
    pub fn find_first_fit(&self, patch: &Patch) -> Option<(usize, usize)> {
        for x in 0..self.size {
            for y in 0..self.size {
                if self.fits(patch, x, y) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Permanently places `patch` with its top-left corner at `(x, y)`.
    ///
    /// Panics if the patch does not fit there; callers re-check with
    /// [`Self::fits()`] immediately before committing.
    pub fn commit(&mut self, patch: Patch, x: usize, y: usize) {
        assert!(
            self.fits(&patch, x, y),
            "patch committed at ({x}, {y}) where it does not fit"
        );
        let shape = &patch.shape;
        for py in 0..shape.height() {
            for px in 0..shape.width() {
                if shape.tile_at(px, py) {
                    self.cells[(y + py) * self.size + (x + px)] = true;
                    self.remaining_space -= 1;
                }
            }
        }
        self.button_income += patch.button_income;
        self.patches.push(PatchCoord { patch, x, y });
    }

    /// Whether any 7×7 window of the board is fully covered.
    ///
    /// Re-evaluated after every commit; the patch that completes a full
    /// square cannot be known in advance, so nothing is cached.
    pub fn has_filled_bonus_square(&self) -> bool {
        if self.size < BONUS_SQUARE {
            return false;
        }
        for x in 0..=self.size - BONUS_SQUARE {
            for y in 0..=self.size - BONUS_SQUARE {
                let filled = (0..BONUS_SQUARE).all(|dy| {
                    (0..BONUS_SQUARE).all(|dx| self.cells[(y + dy) * self.size + (x + dx)])
                });
                if filled {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::CrowdedBoard;
    use crate::shape::shape;

    quickcheck! {
        fn fits_matches_cell_by_cell_check(input: CrowdedBoard) -> bool {
            let CrowdedBoard { board, probe, x, y } = input;
            let mut expected = true;
            for py in 0..probe.shape.height() {
                for px in 0..probe.shape.width() {
                    if !probe.shape.tile_at(px, py) {
                        continue;
                    }
                    if x + px >= board.size() || y + py >= board.size()
                        || board.occupied(x + px, y + py)
                    {
                        expected = false;
                    }
                }
            }
            board.fits(&probe, x, y) == expected
        }

        fn commit_accounts_for_every_cell(input: CrowdedBoard) -> bool {
            let CrowdedBoard { mut board, probe, .. } = input;
            let Some((x, y)) = board.find_first_fit(&probe) else {
                return true;
            };
            let space_before = board.remaining_space();
            board.commit(probe.clone(), x, y);
            let mut covered = true;
            for py in 0..probe.shape.height() {
                for px in 0..probe.shape.width() {
                    if probe.shape.tile_at(px, py) && !board.occupied(x + px, y + py) {
                        covered = false;
                    }
                }
            }
            covered
                && board.remaining_space()
                    == space_before - probe.shape.cell_count() as u32
        }

        fn first_fit_is_lexicographically_smallest(input: CrowdedBoard) -> bool {
            let CrowdedBoard { board, probe, .. } = input;
            match board.find_first_fit(&probe) {
                Some((x, y)) => {
                    if !board.fits(&probe, x, y) {
                        return false;
                    }
                    for (ex, ey) in (0..board.size())
                        .flat_map(|px| (0..board.size()).map(move |py| (px, py)))
                    {
                        if (ex, ey) == (x, y) {
                            break;
                        }
                        if board.fits(&probe, ex, ey) {
                            return false;
                        }
                    }
                    true
                }
                None => !(0..board.size()).any(|px| {
                    (0..board.size()).any(|py| board.fits(&probe, px, py))
                }),
            }
        }

        fn board_is_union_of_committed_patches(input: CrowdedBoard) -> bool {
            let CrowdedBoard { board, .. } = input;
            let mut union = vec![false; board.size() * board.size()];
            for pc in board.patches() {
                for py in 0..pc.patch.shape.height() {
                    for px in 0..pc.patch.shape.width() {
                        if pc.patch.shape.tile_at(px, py) {
                            union[(pc.y + py) * board.size() + (pc.x + px)] = true;
                        }
                    }
                }
            }
            (0..board.size()).all(|x| {
                (0..board.size()).all(|y| board.occupied(x, y) == union[y * board.size() + x])
            })
        }
    }

    #[test]
    fn patches_overlap_nothing() {
        let mut board = QuiltBoard::new(5);
        let corner = Patch::new(0, 0, 1, shape!("#.\n##"));
        assert!(board.fits(&corner, 0, 0));
        board.commit(corner.clone(), 0, 0);
        // At (1, 0) the top cell is free, but the bend lands on the taken (1, 1).
        assert!(!board.fits(&corner, 0, 0));
        assert!(!board.fits(&corner, 1, 0));
        assert!(board.fits(&corner, 2, 0));
        assert_eq!(board.remaining_space(), 25 - 3);
        assert_eq!(board.button_income(), 1);
    }

    #[test]
    fn fits_rejects_overhanging_patches() {
        let board = QuiltBoard::new(3);
        let bar = Patch::new(0, 0, 0, shape!("###"));
        assert!(board.fits(&bar, 0, 2));
        assert!(!board.fits(&bar, 1, 0));
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn commit_without_fit_is_a_caller_bug() {
        let mut board = QuiltBoard::new(3);
        let bar = Patch::new(0, 0, 0, shape!("###"));
        board.commit(bar.clone(), 0, 0);
        board.commit(bar, 0, 0);
    }

    #[test]
    fn bonus_square_detection() {
        let mut board = QuiltBoard::new(BOARD_SIZE);
        let row = Patch::new(0, 0, 0, shape!("#######"));
        for y in 0..BONUS_SQUARE - 1 {
            board.commit(row.clone(), 1, y);
        }
        assert!(!board.has_filled_bonus_square());
        board.commit(row, 1, BONUS_SQUARE - 1);
        assert!(board.has_filled_bonus_square());
    }

    #[test]
    fn small_boards_never_report_the_bonus() {
        let mut board = QuiltBoard::new(2);
        board.commit(Patch::new(0, 0, 0, shape!("##\n##")), 0, 0);
        assert_eq!(board.remaining_space(), 0);
        assert!(!board.has_filled_bonus_square());
    }
}
