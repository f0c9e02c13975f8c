use std::fmt;

use serde::Serialize;

/// A player's symbol. X always moves first; the computer plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Cell encoding used across the WASM boundary: 1=X, 2=O (0 is empty).
    pub fn code(self) -> u8 {
        match self {
            Self::X => 1,
            Self::O => 2,
        }
    }
}

/// Outcome of a position, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Marker),
    Draw,
}

/// Session state projected for the UI side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Cells 0..=8 row-major, each 0=empty, 1=X, 2=O.
    pub board: Vec<u8>,
    /// Side to move, as a marker code.
    pub current_player: u8,
    pub is_game_over: bool,
    /// Winner's marker code, 0 when nobody has won.
    pub winner: u8,
    pub is_draw: bool,
    /// Contract:
    /// - `Some` with the three cells of the first completed line when won.
    /// - `None` while in progress or drawn.
    pub winning_line: Option<[u8; 3]>,
    /// Cell of the most recent successful move, if any.
    pub last_move: Option<u8>,
}

/// Why a move attempt was rejected. State is left unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveError {
    GameOver,
    OutOfTurn,
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    NoMoveAvailable,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "game is already over"),
            Self::OutOfTurn => write!(f, "it is not that player's turn"),
            Self::OutOfRange { index } => write!(f, "cell index {index} is out of range"),
            Self::CellOccupied { index } => write!(f, "cell {index} is already occupied"),
            Self::NoMoveAvailable => write!(f, "no move could be selected"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
        assert_eq!(Marker::X.opponent().opponent(), Marker::X);
    }

    #[test]
    fn marker_codes_match_cell_encoding() {
        assert_eq!(Marker::X.code(), 1);
        assert_eq!(Marker::O.code(), 2);
    }

    #[test]
    fn move_error_messages_name_the_cell() {
        assert!(
            MoveError::CellOccupied { index: 4 }
                .to_string()
                .contains('4')
        );
        assert!(MoveError::OutOfRange { index: 9 }.to_string().contains('9'));
    }
}
