use crate::ai::search::MinimaxSelector;
use crate::board::{Board, NUM_CELLS};
use crate::types::{GameSnapshot, GameStatus, Marker, MoveError};

/// Strategy seam for the computer opponent.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, marker: Marker) -> Option<usize>;
}

/// The authoritative game state: board, side to move, terminal flag.
/// The human plays X and moves first; the computer plays O through the
/// injected selector.
pub struct GameSession {
    board: Board,
    pub current_player: Marker,
    pub is_game_over: bool,
    pub last_move: Option<usize>,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: Marker::X,
            is_game_over: false,
            last_move: None,
            selector,
        }
    }

    pub fn new_with_minimax() -> Self {
        Self::new(Box::new(MinimaxSelector))
    }

    /// Returns the session to its initial state: empty board, X to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Marker::X;
        self.is_game_over = false;
        self.last_move = None;
    }

    /// Applies one move for `marker`. Rejected (state unchanged) when the
    /// game is over, it is not `marker`'s turn, the index is out of range
    /// or the cell is occupied.
    pub fn apply_move(&mut self, index: usize, marker: Marker) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if marker != self.current_player {
            return Err(MoveError::OutOfTurn);
        }
        if index >= NUM_CELLS {
            return Err(MoveError::OutOfRange { index });
        }
        if !self.board.place(index, marker) {
            return Err(MoveError::CellOccupied { index });
        }

        self.last_move = Some(index);
        if self.board.has_win(marker) || self.board.is_full() {
            self.is_game_over = true;
        }
        self.current_player = marker.opponent();

        Ok(())
    }

    /// Human (X) move entry point.
    pub fn place(&mut self, index: usize) -> Result<(), MoveError> {
        self.apply_move(index, Marker::X)
    }

    /// Computer (O) move entry point. The selected index goes through the
    /// same validation as a human move and is returned on success.
    pub fn do_ai_move(&mut self) -> Result<usize, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if self.current_player != Marker::O {
            return Err(MoveError::OutOfTurn);
        }

        let index = self
            .selector
            .select_move(&self.board, Marker::O)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.apply_move(index, Marker::O)?;

        Ok(index)
    }

    pub fn check_win(&self, marker: Marker) -> bool {
        self.board.has_win(marker)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// X win is reported before O win; both at once cannot arise from
    /// alternating play.
    pub fn status(&self) -> GameStatus {
        if self.board.has_win(Marker::X) {
            GameStatus::Won(Marker::X)
        } else if self.board.has_win(Marker::O) {
            GameStatus::Won(Marker::O)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.status();
        let winner = match status {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        };

        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            is_game_over: self.is_game_over,
            winner: winner.map(Marker::code).unwrap_or(0),
            is_draw: status == GameStatus::Draw,
            winning_line: winner
                .and_then(|marker| self.board.winning_line(marker))
                .map(|cells| cells.map(|pos| pos as u8)),
            last_move: self.last_move.map(|pos| pos as u8),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Marker) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.last_move = None;
    }
}
