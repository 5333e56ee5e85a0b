use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    assert_eq!(Stone::Empty.code(), 0);
    assert_eq!(Stone::Black.code(), 1);
    assert_eq!(Stone::White.code(), 2);
    assert_eq!(Stone::from_code(1), Some(Stone::Black));
    assert_eq!(Stone::from_code(2), Some(Stone::White));
    assert_eq!(Stone::from_code(0), None);
    assert_eq!(Stone::from_code(3), None);
}

#[test]
fn test_pos_playable_range() {
    assert!(Pos::new(1, 1).is_playable());
    assert!(Pos::new(15, 15).is_playable());
    assert!(!Pos::new(0, 5).is_playable());
    assert!(!Pos::new(5, 0).is_playable());
    assert!(!Pos::new(16, 5).is_playable());
    assert!(!Pos::new(5, 200).is_playable());
}

#[test]
fn test_playable_scan_order() {
    let cells: Vec<Pos> = Pos::playable().collect();
    assert_eq!(cells.len(), 15 * 15);
    assert_eq!(cells[0], Pos::new(1, 1));
    assert_eq!(cells[1], Pos::new(1, 2));
    assert_eq!(cells[15], Pos::new(2, 1));
    assert_eq!(*cells.last().unwrap(), Pos::new(15, 15));
}

#[test]
fn test_place_accepts_empty_cell() {
    let mut board = Board::new();
    assert_eq!(board.place(Pos::new(8, 8), Stone::Black), Ok(()));
    assert_eq!(board.get(Pos::new(8, 8)), Stone::Black);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_rejects_occupied_without_mutation() {
    let mut board = Board::new();
    board.place(Pos::new(8, 8), Stone::Black).unwrap();
    let before = board.snapshot();

    let err = board.place(Pos::new(8, 8), Stone::White);
    assert_eq!(err, Err(PlaceError::CellOccupied(Pos::new(8, 8))));
    assert_eq!(board.snapshot(), before);
    assert_eq!(board.get(Pos::new(8, 8)), Stone::Black);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_rejects_out_of_bounds_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();

    for pos in [Pos::new(0, 0), Pos::new(0, 7), Pos::new(7, 0), Pos::new(16, 3), Pos::new(255, 255)] {
        assert_eq!(board.place(pos, Stone::Black), Err(PlaceError::OutOfBounds(pos)));
    }
    assert_eq!(board, before);
    assert!(board.is_board_empty());
}

#[test]
fn test_is_full_only_counts_playable_cells() {
    let mut board = Board::new();
    let cells: Vec<Pos> = Pos::playable().collect();
    let (last, rest) = cells.split_last().unwrap();

    for (i, &pos) in rest.iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(pos, stone).unwrap();
    }
    assert!(!board.is_full());

    board.place(*last, Stone::Black).unwrap();
    assert!(board.is_full());
}

#[test]
fn test_snapshot_codes() {
    let mut board = Board::new();
    board.place(Pos::new(3, 4), Stone::Black).unwrap();
    board.place(Pos::new(4, 3), Stone::White).unwrap();

    let snapshot = board.snapshot();
    assert_eq!(snapshot.code(Pos::new(3, 4)), 1);
    assert_eq!(snapshot.code(Pos::new(4, 3)), 2);
    assert_eq!(snapshot.code(Pos::new(5, 5)), 0);
    assert!(snapshot.is_empty(Pos::new(5, 5)));
    assert!(!snapshot.is_empty(Pos::new(3, 4)));
}

#[test]
fn test_snapshot_from_rows_matches_board() {
    let mut rows = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    rows[2][9] = 2;
    rows[10][1] = 1;

    let mut board = Board::new();
    board.place(Pos::new(2, 9), Stone::White).unwrap();
    board.place(Pos::new(10, 1), Stone::Black).unwrap();

    assert_eq!(Snapshot::from_rows(&rows), board.snapshot());
}
