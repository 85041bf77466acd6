/// The shared linear track that encodes turn order and passive income.
///
/// Each cell may carry a permanent button-income marker and/or a one-shot
/// leather marker that is consumed the first time a player passes it.
#[derive(Clone, Debug)]
pub struct TimeTrack {
    incomes: Vec<bool>,
    leathers: Vec<bool>,
}

impl TimeTrack {
    pub fn new(len: usize, income_cells: &[usize], leather_cells: &[usize]) -> Self {
        assert!(len >= 1, "time track must have at least one cell");
        let mut incomes = vec![false; len];
        let mut leathers = vec![false; len];
        for &cell in income_cells {
            incomes[cell] = true;
        }
        for &cell in leather_cells {
            leathers[cell] = true;
        }
        Self { incomes, leathers }
    }

    /// The 54-cell track of the published game.
    pub fn standard() -> Self {
        Self::new(
            54,
            &[5, 11, 17, 23, 29, 35, 41, 47, 53],
            &[20, 26, 32, 44, 50],
        )
    }

    pub fn len(&self) -> usize {
        self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
    }

    pub fn has_income(&self, cell: usize) -> bool {
        self.incomes.get(cell).copied().unwrap_or(false)
    }

    pub fn has_leather(&self, cell: usize) -> bool {
        self.leathers.get(cell).copied().unwrap_or(false)
    }

    /// Counts income cells strictly after `from`, up to and including `to`,
    /// clamped to the track length.
    ///
    /// The half-open-left range keeps a marker from firing twice across two
    /// successive moves that meet on its cell.
    pub fn count_income_cells(&self, from: usize, to: usize) -> u32 {
        let end = to.min(self.len() - 1);
        (from + 1..=end).filter(|&cell| self.incomes[cell]).count() as u32
    }

    /// Like [`Self::count_income_cells()`] for leather markers, but clears
    /// each counted marker so it can never be collected again.
    pub fn take_leather_cells(&mut self, from: usize, to: usize) -> u32 {
        let end = to.min(self.len() - 1);
        let mut count = 0;
        for cell in from + 1..=end {
            if self.leathers[cell] {
                self.leathers[cell] = false;
                count += 1;
            }
        }
        count
    }
}
