use crate::{QuiltBoard, TimeTrack};

/// Renders a quilt board's occupancy as a framed text block.
pub fn visualize_board(board: &QuiltBoard) -> String {
    let frame: String = format!("|{}|\n", "=".repeat(board.size()));
    let mut result = format!(
        "Quilt board (remaining space: {})\n",
        board.remaining_space()
    );
    result += &frame;
    for y in 0..board.size() {
        result.push('|');
        for x in 0..board.size() {
            result.push(if board.occupied(x, y) { '#' } else { '.' });
        }
        result += "|\n";
    }
    result += &frame;
    result
}

/// Renders the time track with both player positions above and below it.
///
/// `o` marks an income cell, `*` an unconsumed leather marker.
pub fn visualize_track(track: &TimeTrack, positions: [usize; 2]) -> String {
    let mut result = format!("{}|p1\n", " ".repeat(positions[0]));
    for cell in 0..track.len() {
        result.push(if track.has_income(cell) {
            'o'
        } else if track.has_leather(cell) {
            '*'
        } else {
            '='
        });
    }
    result += &format!("\n{}|p2", " ".repeat(positions[1]));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shape;
    use crate::Patch;

    #[test]
    fn board_rendering_marks_occupied_cells() {
        let mut board = QuiltBoard::new(3);
        board.commit(Patch::new(0, 0, 0, shape!("##")), 0, 1);
        let text = visualize_board(&board);
        assert_eq!(
            text,
            "Quilt board (remaining space: 7)\n|===|\n|...|\n|##.|\n|...|\n|===|\n"
        );
    }

    #[test]
    fn track_rendering_marks_markers_and_positions() {
        let track = TimeTrack::new(6, &[1], &[3]);
        let text = visualize_track(&track, [0, 4]);
        assert_eq!(text, "|p1\n=o=*==\n    |p2");
    }
}
