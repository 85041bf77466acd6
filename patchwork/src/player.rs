use crate::{Patch, QuiltBoard, TimeTrack};

/// How many buttons each player starts with.
pub const STARTING_BUTTONS: u32 = 5;

/// One player: their quilt board, buttons, and position on the time track.
#[derive(Clone, Debug)]
pub struct Player {
    number: u8,
    board: QuiltBoard,
    buttons: u32,
    position: usize,
    pending_leather: u32,
    bonus: bool,
}

impl Player {
    pub fn new(number: u8, board_size: usize, buttons: u32) -> Self {
        Self {
            number,
            board: QuiltBoard::new(board_size),
            buttons,
            position: 0,
            pending_leather: 0,
            bonus: false,
        }
    }

    /// The player's display number. Not an identifier.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn board(&self) -> &QuiltBoard {
        &self.board
    }

    pub fn buttons(&self) -> u32 {
        self.buttons
    }

    /// Current position on the time track.
    pub fn position(&self) -> usize {
        self.position
    }

    /// How many leather patches this player still owes to their board.
    pub fn pending_leather_count(&self) -> u32 {
        self.pending_leather
    }

    /// Whether this player claimed the one-shot 7×7 bonus.
    pub fn has_bonus(&self) -> bool {
        self.bonus
    }

    pub fn button_income(&self) -> u32 {
        self.board.button_income()
    }

    /// Whether the patch's button cost is within this player's means.
    /// Board space is not considered.
    pub fn can_afford(&self, patch: &Patch) -> bool {
        patch.button_cost <= self.buttons
    }

    /// Whether the patch fits somewhere on this player's board as oriented.
    pub fn can_place(&self, patch: &Patch) -> bool {
        self.board.find_first_fit(patch).is_some()
    }

    /// Commits a bought patch at `(x, y)`, pays its button cost, and
    /// advances along the time track by its time cost.
    ///
    /// Panics if the patch does not fit or the player cannot pay; both are
    /// caller bugs, since fit and affordability are validated beforehand.
    pub fn buy_and_place(&mut self, patch: Patch, x: usize, y: usize, track: &mut TimeTrack) {
        let time_cost = patch.time_cost as usize;
        let button_cost = patch.button_cost;
        self.board.commit(patch, x, y);
        self.buttons = self
            .buttons
            .checked_sub(button_cost)
            .expect("player bought an overpriced patch");
        self.advance(time_cost, track);
    }

    /// Like [`Self::buy_and_place()`], at the board's first-fit position.
    pub fn buy_and_place_auto(&mut self, patch: Patch, track: &mut TimeTrack) {
        let (x, y) = self
            .board
            .find_first_fit(&patch)
            .expect("no space available to place the patch");
        self.buy_and_place(patch, x, y, track);
    }

    /// Commits one owed leather patch at `(x, y)`. Free: no buttons, no
    /// movement.
    ///
    /// Panics if no leather is owed or the cell is taken.
    pub fn place_leather(&mut self, x: usize, y: usize) {
        assert!(self.pending_leather > 0, "no leather patch is owed");
        self.board.commit(Patch::leather(), x, y);
        self.pending_leather -= 1;
    }

    /// Drops all owed leather patches. Only sensible when the board has no
    /// empty cell left to put them on.
    pub(crate) fn forfeit_pending_leather(&mut self) {
        self.pending_leather = 0;
    }

    pub(crate) fn award_bonus(&mut self) {
        self.bonus = true;
    }

    /// Passes: moves to one square past the opponent and earns one button
    /// per square actually moved. Does nothing if already strictly ahead.
    pub fn end_turn(&mut self, opponent_position: usize, track: &mut TimeTrack) {
        if opponent_position >= self.position {
            let steps = opponent_position - self.position + 1;
            let moved = self.advance(steps, track);
            self.buttons += moved as u32;
        }
    }

    pub fn score(&self) -> i32 {
        self.buttons as i32 - self.board.remaining_space() as i32 * 2
            + if self.bonus { 7 } else { 0 }
    }

    /// Moves `steps` squares forward, collecting passive income and leather
    /// markers on the way. Movement is capped at the final square; returns
    /// the number of squares actually moved.
    fn advance(&mut self, steps: usize, track: &mut TimeTrack) -> usize {
        let destination = self.position + steps;
        self.buttons += track.count_income_cells(self.position, destination) * self.button_income();
        self.pending_leather += track.take_leather_cells(self.position, destination);
        let steps = steps.min(track.len() - 1 - self.position);
        self.position += steps;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shape;

    fn bare_track(len: usize) -> TimeTrack {
        TimeTrack::new(len, &[], &[])
    }

    #[test]
    fn buying_pays_and_moves() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, STARTING_BUTTONS);
        let patch = Patch::new(3, 2, 1, shape!("##\n##"));
        player.buy_and_place(patch, 0, 0, &mut track);
        assert_eq!(player.buttons(), STARTING_BUTTONS - 2);
        assert_eq!(player.position(), 3);
        assert_eq!(player.board().remaining_space(), 81 - 4);
        assert_eq!(player.button_income(), 1);
    }

    #[test]
    fn auto_placement_lands_at_the_first_fit() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, 5);
        player.board.commit(Patch::new(0, 0, 0, shape!("#")), 0, 0);
        player.buy_and_place_auto(Patch::new(2, 1, 0, shape!("#\n#")), &mut track);
        // x scans in the outer loop, so the domino fills the column under (0, 0).
        assert!(player.board().occupied(0, 1));
        assert!(player.board().occupied(0, 2));
        assert_eq!(player.buttons(), 4);
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn crossing_an_income_cell_pays_the_board_income() {
        let mut track = TimeTrack::new(10, &[5], &[]);
        let mut player = Player::new(1, 9, 0);
        player
            .board
            .commit(Patch::new(0, 0, 3, shape!("##")), 0, 0);
        player.advance(6, &mut track);
        assert_eq!(player.position(), 6);
        assert_eq!(player.buttons(), 3);
    }

    #[test]
    fn crossing_a_leather_cell_owes_a_patch() {
        let mut track = TimeTrack::new(10, &[], &[2]);
        let mut player = Player::new(1, 9, 5);
        let patch = Patch::new(4, 0, 0, shape!("#"));
        player.buy_and_place(patch, 0, 0, &mut track);
        assert_eq!(player.pending_leather_count(), 1);
        player.place_leather(1, 0);
        assert_eq!(player.pending_leather_count(), 0);
        assert!(player.board().occupied(1, 0));
    }

    #[test]
    fn end_turn_jumps_one_past_the_opponent() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, 0);
        player.end_turn(7, &mut track);
        assert_eq!(player.position(), 8);
        assert_eq!(player.buttons(), 8);
    }

    #[test]
    fn end_turn_from_a_tie_still_moves() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, 0);
        player.advance(4, &mut track);
        player.end_turn(4, &mut track);
        assert_eq!(player.position(), 5);
        assert_eq!(player.buttons(), 1);
    }

    #[test]
    fn end_turn_when_already_ahead_does_nothing() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, 3);
        player.advance(6, &mut track);
        player.end_turn(2, &mut track);
        assert_eq!(player.position(), 6);
        assert_eq!(player.buttons(), 3);
    }

    #[test]
    fn movement_is_capped_at_the_final_square() {
        let mut track = bare_track(10);
        let mut player = Player::new(1, 9, 0);
        player.end_turn(8, &mut track);
        assert_eq!(player.position(), 9);
        // Only 9 squares fit on the track, so only 9 buttons are credited.
        assert_eq!(player.buttons(), 9);
        player.end_turn(9, &mut track);
        assert_eq!(player.position(), 9);
        assert_eq!(player.buttons(), 9);
    }

    #[test]
    #[should_panic(expected = "overpriced")]
    fn overpaying_is_a_caller_bug() {
        let mut track = bare_track(20);
        let mut player = Player::new(1, 9, 1);
        player.buy_and_place(Patch::new(0, 3, 0, shape!("#")), 0, 0, &mut track);
    }

    #[test]
    fn score_counts_buttons_holes_and_bonus() {
        let mut player = Player::new(1, 3, 10);
        assert_eq!(player.score(), 10 - 9 * 2);
        player.board.commit(Patch::new(0, 0, 0, shape!("###")), 0, 0);
        assert_eq!(player.score(), 10 - 6 * 2);
        player.award_bonus();
        assert_eq!(player.score(), 10 - 6 * 2 + 7);
    }
}
