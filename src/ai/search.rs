use crate::board::Board;
use crate::game::MoveSelector;
use crate::types::Marker;

/// Position scores, always from the fixed convention: O maximizes.
pub const O_WIN: i8 = 1;
pub const X_WIN: i8 = -1;
pub const DRAW: i8 = 0;

/// Result of evaluating a position. Terminal positions carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub index: Option<usize>,
    pub score: i8,
}

impl Evaluation {
    fn leaf(score: i8) -> Self {
        Self { index: None, score }
    }
}

/// Searches the full game tree and returns the optimal move for `marker`,
/// assuming best play by both sides. Ties break to the smallest cell index.
///
/// Caller contract: the position must be non-terminal (no completed line,
/// at least one empty cell).
pub fn best_move(board: &Board, marker: Marker) -> Evaluation {
    debug_assert!(
        !board.has_win(Marker::X) && !board.has_win(Marker::O) && !board.is_full(),
        "best_move() requires a non-terminal position"
    );

    minimax(board, marker)
}

fn minimax(board: &Board, marker: Marker) -> Evaluation {
    if board.has_win(Marker::X) {
        return Evaluation::leaf(X_WIN);
    }
    if board.has_win(Marker::O) {
        return Evaluation::leaf(O_WIN);
    }

    let moves = board.empty_cells();
    if moves.is_empty() {
        return Evaluation::leaf(DRAW);
    }

    let mut best_index = moves[0];
    let mut best_score = match marker {
        Marker::O => i8::MIN,
        Marker::X => i8::MAX,
    };

    for mv in moves {
        let mut next = *board;
        let placed = next.place(mv, marker);
        debug_assert!(placed, "empty_cells() yielded an occupied cell");

        let score = minimax(&next, marker.opponent()).score;
        if is_improvement(marker, score, best_score) {
            best_score = score;
            best_index = mv;
        }
    }

    Evaluation {
        index: Some(best_index),
        score: best_score,
    }
}

// Strict comparison keeps the first-encountered move on ties.
fn is_improvement(marker: Marker, score: i8, best_score: i8) -> bool {
    match marker {
        Marker::O => score > best_score,
        Marker::X => score < best_score,
    }
}

/// The default computer opponent: exhaustive search, never loses.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, marker: Marker) -> Option<usize> {
        if board.has_win(Marker::X) || board.has_win(Marker::O) || board.is_full() {
            return None;
        }
        best_move(board, marker).index
    }
}
