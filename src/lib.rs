use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use web_time::Instant;

pub mod ai;
pub mod board;
pub mod game;
pub mod types;

pub use ai::search::MinimaxSelector;
pub use game::{GameSession, MoveSelector};
pub use types::{GameSnapshot, GameStatus, Marker, MoveError};

#[wasm_bindgen(start)]
pub fn start() {
    set_panic_hook();
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

fn to_js_error(error: MoveError) -> JsValue {
    to_value(&error).unwrap_or_else(|_| JsValue::from_str(&error.to_string()))
}

fn serde_to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Computer move outcome handed back to the UI.
#[derive(Serialize)]
struct AiMoveResponse {
    index: u8,
    elapsed_ms: u64,
    state: GameSnapshot,
}

/// The game as seen from JavaScript. One handle per game; the UI reports
/// clicked cells and renders the snapshots it gets back.
#[wasm_bindgen]
pub struct GameHandle {
    session: GameSession,
}

#[wasm_bindgen]
impl GameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameHandle {
        GameHandle {
            session: GameSession::new_with_minimax(),
        }
    }

    /// Restart: clears the board and gives X the move.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Current state without mutating anything.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.snapshot()).map_err(serde_to_js_error)
    }

    /// Human (X) plays `index`. Returns the updated snapshot, or the
    /// rejection as a serialized error value.
    pub fn place(&mut self, index: u8) -> Result<JsValue, JsValue> {
        self.session.place(index as usize).map_err(to_js_error)?;
        self.state()
    }

    /// Computer (O) picks and plays its move. Returns the chosen index,
    /// the search duration and the updated snapshot.
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        let started = Instant::now();
        let index = self.session.do_ai_move().map_err(to_js_error)?;

        let response = AiMoveResponse {
            index: index as u8,
            elapsed_ms: started.elapsed().as_millis() as u64,
            state: self.session.snapshot(),
        };
        to_value(&response).map_err(serde_to_js_error)
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over
    }
}

impl Default for GameHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "console_error_panic_hook")]
fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn set_panic_hook() {}
