//! Board codec tests: decode/encode round-trip, strictness, and the
//! default-board fixture's exact text form.

use snakesim_core::{board::Board, error::GameError, state::GameState};

const BORDER_ROW: &str = "####################";

#[test]
fn decode_then_encode_round_trips() {
    let text = "####\n#dD#\n####\n";
    let board = Board::parse(text).unwrap();
    assert_eq!(board.encode_to_string(), text);
}

#[test]
fn round_trip_preserves_ragged_rows() {
    // Rows of independent length are legal; nothing pads or trims them.
    let text = "###\n#w##\n##\n#\n";
    let board = Board::parse(text).unwrap();
    assert_eq!(board.encode_to_string(), text);
    let reparsed = Board::parse(&board.encode_to_string()).unwrap();
    assert_eq!(reparsed, board);
}

#[test]
fn default_board_matches_fixture() {
    let state = GameState::default_board();
    let text = state.board.encode_to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 18);
    assert_eq!(rows[0], BORDER_ROW);
    assert_eq!(rows[17], BORDER_ROW);
    assert_eq!(rows[1], "#                  #");
    assert_eq!(rows[2], "# d>D    *         #");
}

#[test]
fn decode_rejects_unknown_code() {
    let err = Board::parse("###\n#?#\n###\n").unwrap_err();
    assert!(
        matches!(err, GameError::CorruptBoard { row: 1, col: 1, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn every_cell_code_round_trips() {
    use snakesim_core::cell::Cell;
    let alphabet = " #*WSADx^v<>wsad";
    for ch in alphabet.chars() {
        let cell = Cell::from_char(ch).unwrap();
        assert_eq!(cell.to_char(), ch);
    }
    assert!(Cell::from_char('?').is_none());
    assert!(Cell::from_char('X').is_none());
}

#[test]
fn load_missing_file_is_io_error() {
    let err = GameState::load("/definitely/not/here/board.txt").unwrap_err();
    assert!(matches!(err, GameError::Io(_)), "unexpected error: {err}");
}

#[test]
fn save_then_load_round_trips_board_and_roster() {
    let state = GameState::default_board();
    let path = std::env::temp_dir().join("snakesim-save-load-test.txt");
    state.save(&path).unwrap();

    let loaded = GameState::load(&path).unwrap();
    assert_eq!(loaded.board, state.board);
    assert_eq!(loaded.snakes, state.snakes);

    std::fs::remove_file(&path).ok();
}
