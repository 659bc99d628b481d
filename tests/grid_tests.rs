use squaredle_solver::{Grid, SquaredleError};

#[test]
fn test_dimensions() {
    let grid = Grid::new(&["abc", "def"]).unwrap();

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.usable_count(), 6);
}

#[test]
fn test_letter_at() {
    let grid = Grid::new(&["a c", "def"]).unwrap();

    assert_eq!(grid.letter_at(0, 0), Some('a'));
    assert_eq!(grid.letter_at(0, 1), None);
    assert_eq!(grid.letter_at(1, 2), Some('f'));
    assert_eq!(grid.letter_at(2, 0), None);
    assert_eq!(grid.letter_at(0, 3), None);
}

#[test]
fn test_is_usable() {
    let grid = Grid::new(&["a c", "def"]).unwrap();

    assert!(grid.is_usable(0, 0));
    assert!(!grid.is_usable(0, 1));
    assert!(!grid.is_usable(5, 5));
    assert_eq!(grid.usable_count(), 5);
}

#[test]
fn test_ragged_rows_rejected() {
    let result = Grid::new(&["abc", "de"]);
    assert!(matches!(result, Err(SquaredleError::MalformedGrid(_))));
}

#[test]
fn test_invalid_characters_rejected() {
    for rows in [["ab", "c1"], ["ab", "cD"], ["ab", "c-"], ["ab", "c."]] {
        let result = Grid::new(&rows);
        assert!(
            matches!(result, Err(SquaredleError::MalformedGrid(_))),
            "accepted {:?}",
            rows
        );
    }
}

#[test]
fn test_empty_grid_rejected() {
    let no_rows: [&str; 0] = [];
    assert!(matches!(Grid::new(&no_rows), Err(SquaredleError::MalformedGrid(_))));
    assert!(matches!(Grid::new(&["", ""]), Err(SquaredleError::MalformedGrid(_))));
}

#[test]
fn test_all_excluded_grid_is_valid() {
    let grid = Grid::new(&["  ", "  "]).unwrap();
    assert_eq!(grid.usable_count(), 0);
}

#[test]
fn test_parse_splits_rows_and_lowercases() {
    let grid = Grid::parse("A P N-ML SO-RSIOI-OD ZT-N E A\n").unwrap();

    assert_eq!(grid.rows(), 5);
    assert_eq!(grid.cols(), 5);
    assert_eq!(grid.letter_at(0, 0), Some('a'));
    assert_eq!(grid.letter_at(0, 1), None);
    assert_eq!(grid.letter_at(3, 4), Some('t'));
    assert_eq!(grid.usable_count(), 19);
}

#[test]
fn test_parse_rejects_ragged() {
    let result = Grid::parse("abc-de");
    assert!(matches!(result, Err(SquaredleError::MalformedGrid(_))));
}

#[test]
fn test_display() {
    let grid = Grid::new(&["a c", "def"]).unwrap();
    assert_eq!(grid.to_string(), "| a   c |\n| d e f |");
}
