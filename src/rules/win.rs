//! Win condition checking: five or more stones in a row
//!
//! Overlines count as wins. Detection is local to the last placed stone.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Count same-colored stones from `pos` stepping by `(dx, dy)`, excluding `pos`
fn run_length(board: &Board, pos: Pos, dx: i8, dy: i8, color: Stone) -> usize {
    let mut count = 0;
    let mut x = pos.x as i16 + dx as i16;
    let mut y = pos.y as i16 + dy as i16;
    while (0..=u8::MAX as i16).contains(&x) && (0..=u8::MAX as i16).contains(&y) {
        let next = Pos::new(x as u8, y as u8);
        if !next.is_playable() || board.get(next) != color {
            break;
        }
        count += 1;
        x += dx as i16;
        y += dy as i16;
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, color) + run_length(board, pos, -dx, -dy, color) >= 5
    })
}

/// Find five consecutive winning stones through `pos`, for highlighting.
///
/// Returns the first five stones of the run in the positive direction order.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        let back = run_length(board, pos, -dx, -dy, color);
        let forward = run_length(board, pos, dx, dy, color);
        if 1 + back + forward < 5 {
            continue;
        }
        let start_x = pos.x as i16 - dx as i16 * back as i16;
        let start_y = pos.y as i16 - dy as i16 * back as i16;
        let line = std::array::from_fn(|k| {
            Pos::new(
                (start_x + dx as i16 * k as i16) as u8,
                (start_y + dy as i16 * k as i16) as u8,
            )
        });
        return Some(line);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn place_line(board: &mut Board, start: Pos, (dx, dy): (i8, i8), len: usize, color: Stone) -> Pos {
        let mut last = start;
        for k in 0..len as i16 {
            last = Pos::new(
                (start.x as i16 + dx as i16 * k) as u8,
                (start.y as i16 + dy as i16 * k) as u8,
            );
            board.place(last, color).unwrap();
        }
        last
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        let last = place_line(&mut board, Pos::new(9, 1), (0, 1), 5, Stone::Black);
        assert!(has_five_at_pos(&board, last, Stone::Black));
        assert!(!has_five_at_pos(&board, last, Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical_edge_column() {
        // (1,1)..(5,1)
        let mut board = Board::new();
        let last = place_line(&mut board, Pos::new(1, 1), (1, 0), 5, Stone::Black);
        assert_eq!(last, Pos::new(5, 1));
        assert!(board.check_win(last));
    }

    #[test]
    fn test_five_in_row_diagonal_down_left_at_far_edge() {
        // (11,15),(12,14),(13,13),(14,12),(15,11)
        let mut board = Board::new();
        let last = place_line(&mut board, Pos::new(11, 15), (1, -1), 5, Stone::White);
        assert_eq!(last, Pos::new(15, 11));
        assert!(board.check_win(last));
        assert!(board.check_win(Pos::new(13, 13)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        let last = place_line(&mut board, Pos::new(4, 4), (1, 1), 4, Stone::Black);
        assert!(!board.check_win(last));
    }

    #[test]
    fn test_gap_breaks_the_run() {
        let mut board = Board::new();
        for y in [2, 3, 5, 6] {
            board.place(Pos::new(7, y), Stone::Black).unwrap();
        }
        board.place(Pos::new(7, 4), Stone::White).unwrap();
        assert!(!board.check_win(Pos::new(7, 3)));
        assert!(!board.check_win(Pos::new(7, 5)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        let last = place_line(&mut board, Pos::new(3, 2), (0, 1), 6, Stone::Black);
        assert!(board.check_win(last));
    }

    #[test]
    fn test_win_from_middle_stone() {
        let mut board = Board::new();
        for y in [4, 5, 7, 8] {
            board.place(Pos::new(10, y), Stone::White).unwrap();
        }
        board.place(Pos::new(10, 6), Stone::White).unwrap();
        assert!(board.check_win(Pos::new(10, 6)));
    }

    #[test]
    fn test_find_five_line_returns_ordered_run() {
        let mut board = Board::new();
        for x in [6, 3, 5, 7, 4] {
            board.place(Pos::new(x, 9), Stone::Black).unwrap();
        }
        let line = find_five_line_at_pos(&board, Pos::new(4, 9)).unwrap();
        assert_eq!(
            line,
            [Pos::new(3, 9), Pos::new(4, 9), Pos::new(5, 9), Pos::new(6, 9), Pos::new(7, 9)]
        );
    }

    #[test]
    fn test_find_five_line_none_without_win() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();
        assert_eq!(find_five_line_at_pos(&board, Pos::new(8, 8)), None);
        assert_eq!(find_five_line_at_pos(&board, Pos::new(2, 2)), None);
    }

    fn line_start(dir: (i8, i8), len: u8) -> impl Strategy<Value = Pos> {
        let span = len - 1;
        match dir {
            (0, 1) => (1u8..=15, 1u8..=15 - span).prop_map(|(x, y)| Pos::new(x, y)).boxed(),
            (1, 0) => (1u8..=15 - span, 1u8..=15).prop_map(|(x, y)| Pos::new(x, y)).boxed(),
            (1, 1) => (1u8..=15 - span, 1u8..=15 - span).prop_map(|(x, y)| Pos::new(x, y)).boxed(),
            _ => (1u8..=15 - span, 1 + span..=15u8).prop_map(|(x, y)| Pos::new(x, y)).boxed(),
        }
    }

    fn line_case(len: u8) -> impl Strategy<Value = ((i8, i8), Pos, usize, bool)> {
        (0usize..4, any::<bool>(), 0..len as usize).prop_flat_map(move |(d, white, probe)| {
            let dir = DIRECTIONS[d];
            line_start(dir, len).prop_map(move |start| (dir, start, probe, white))
        })
    }

    proptest! {
        #[test]
        fn prop_line_of_four_never_wins(((dx, dy), start, probe, white) in line_case(4)) {
            let color = if white { Stone::White } else { Stone::Black };
            let mut board = Board::new();
            place_line(&mut board, start, (dx, dy), 4, color);
            let pos = Pos::new(
                (start.x as i16 + dx as i16 * probe as i16) as u8,
                (start.y as i16 + dy as i16 * probe as i16) as u8,
            );
            prop_assert!(!board.check_win(pos));
        }

        #[test]
        fn prop_line_of_five_wins_at_every_stone(((dx, dy), start, probe, white) in line_case(5)) {
            let color = if white { Stone::White } else { Stone::Black };
            let mut board = Board::new();
            place_line(&mut board, start, (dx, dy), 5, color);
            let pos = Pos::new(
                (start.x as i16 + dx as i16 * probe as i16) as u8,
                (start.y as i16 + dy as i16 * probe as i16) as u8,
            );
            prop_assert!(board.check_win(pos));
            prop_assert!(find_five_line_at_pos(&board, pos).is_some());
        }
    }
}
