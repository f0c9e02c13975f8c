#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use tictactoe::{GameHandle, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field must exist")
}

fn board_cells(state: &JsValue) -> Vec<u8> {
    Array::from(&field(state, "board"))
        .iter()
        .map(|cell| cell.as_f64().expect("cell must be a number") as u8)
        .collect()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn fresh_handle_serializes_an_empty_board() {
    let game = GameHandle::new();
    let state = game.state().unwrap();

    assert_eq!(board_cells(&state), vec![0u8; 9]);
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert_eq!(field(&state, "winner").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn place_and_ai_move_round_trip() {
    let mut game = GameHandle::new();

    let after_human = game.place(0).unwrap();
    let cells = board_cells(&after_human);
    assert_eq!(cells[0], 1);
    assert_eq!(field(&after_human, "current_player").as_f64(), Some(2.0));

    let response = game.ai_move().unwrap();
    assert_eq!(field(&response, "index").as_f64(), Some(4.0));
    assert!(field(&response, "elapsed_ms").as_f64().is_some());

    let state = field(&response, "state");
    let cells = board_cells(&state);
    assert_eq!(cells[4], 2);
    assert_eq!(field(&state, "last_move").as_f64(), Some(4.0));
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn rejected_move_comes_back_as_a_tagged_error() {
    let mut game = GameHandle::new();
    game.place(0).unwrap();
    game.ai_move().unwrap();

    let err = game.place(0).unwrap_err();

    assert_eq!(
        field(&err, "kind").as_string().as_deref(),
        Some("cell_occupied")
    );
    assert_eq!(field(&err, "index").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn ai_move_out_of_turn_is_rejected() {
    let mut game = GameHandle::new();

    let err = game.ai_move().unwrap_err();

    assert_eq!(
        field(&err, "kind").as_string().as_deref(),
        Some("out_of_turn")
    );
}

#[wasm_bindgen_test]
fn reset_restores_the_initial_snapshot() {
    let mut game = GameHandle::new();
    game.place(4).unwrap();
    game.ai_move().unwrap();

    game.reset();
    let state = game.state().unwrap();

    assert_eq!(board_cells(&state), vec![0u8; 9]);
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert!(!game.is_game_over());
}
