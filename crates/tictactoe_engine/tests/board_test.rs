//! Tests for board state, move validation and win/draw detection.

use tictactoe_engine::{Board, Cell, WINNING_COMBOS};

#[test]
fn test_fresh_board_accepts_every_cell() {
    let board = Board::new();
    for number in 1..=9 {
        assert!(board.valid_move(number), "cell {number} should be open");
    }
}

#[test]
fn test_out_of_range_numbers_rejected() {
    let board = Board::new();
    assert!(!board.valid_move(0));
    assert!(!board.valid_move(10));
    assert!(!board.valid_move(usize::MAX));
}

#[test]
fn test_claimed_cell_stays_claimed() {
    let mut board = Board::new();
    board.update_board(4, 'O');
    assert!(!board.valid_move(5));

    for index in [0, 2, 8] {
        board.update_board(index, 'X');
        assert!(!board.valid_move(5));
    }
    assert_eq!(board.cells()[4], Cell::Marked('O'));
}

#[test]
fn test_full_only_after_all_cells_claimed() {
    let mut board = Board::new();
    assert!(!board.is_full());

    let order = [8, 0, 4, 2, 6, 1, 7, 3, 5];
    let symbols = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];
    for (step, (index, symbol)) in order.into_iter().zip(symbols).enumerate() {
        assert!(!board.is_full(), "board full too early at step {step}");
        board.update_board(index, symbol);
    }
    assert!(board.is_full());
}

#[test]
fn test_fresh_board_not_over() {
    assert!(!Board::new().is_game_over());
}

#[test]
fn test_uniform_combo_ends_game() {
    for combo in WINNING_COMBOS {
        let mut board = Board::new();
        for index in combo {
            board.update_board(index, '@');
        }
        assert!(board.is_game_over(), "combo {combo:?}");
    }
}

#[test]
fn test_distinct_symbols_do_not_end_game() {
    for combo in WINNING_COMBOS {
        let mut board = Board::new();
        for (index, symbol) in combo.into_iter().zip(['X', 'O', '+']) {
            board.update_board(index, symbol);
        }
        assert!(!board.is_game_over(), "combo {combo:?}");
    }
}

#[test]
fn test_top_row_win_on_partial_board() {
    let mut board = Board::new();
    for index in [0, 1, 2] {
        board.update_board(index, 'X');
    }
    assert!(board.is_game_over());
    assert!(!board.is_full());
    assert_eq!(board.winning_combo(), Some([0, 1, 2]));
    assert_eq!(board.winning_symbol(), Some('X'));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut board = Board::new();
    for (index, symbol) in "XOXXOOOXX".chars().enumerate() {
        board.update_board(index, symbol);
    }
    assert!(board.is_full());
    assert!(!board.is_game_over());
}

#[test]
fn test_queries_are_idempotent() {
    let mut board = Board::new();
    board.update_board(0, 'X');
    board.update_board(4, 'X');

    let full = board.is_full();
    let over = board.is_game_over();
    for _ in 0..5 {
        assert_eq!(board.is_full(), full);
        assert_eq!(board.is_game_over(), over);
    }
}
