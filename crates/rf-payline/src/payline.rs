//! Payline definitions

use serde::{Deserialize, Serialize};

use crate::wild::SymbolId;

/// A payline definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Line id reported in winline records
    pub id: u32,
    /// Row position for each reel (e.g. `[1, 0, 0, 0, 1]`)
    pub positions: Vec<u8>,
}

impl Payline {
    pub fn new(id: u32, positions: Vec<u8>) -> Self {
        Self { id, positions }
    }

    /// Create a straight line (same row across all reels)
    pub fn straight(id: u32, row: u8, reel_count: u8) -> Self {
        Self {
            id,
            positions: vec![row; reel_count as usize],
        }
    }

    /// Number of reels the line spans
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Read the line's symbols from a board indexed `board[reel][row]`.
    ///
    /// Returns `None` if the line does not span exactly the board's reels or
    /// a row is out of range.
    pub fn extract(&self, board: &[Vec<SymbolId>]) -> Option<Vec<SymbolId>> {
        if self.positions.len() != board.len() {
            return None;
        }

        self.positions
            .iter()
            .zip(board)
            .map(|(&row, reel)| reel.get(row as usize).copied())
            .collect()
    }
}

/// One straight line per row, top row first, ids starting at 1
pub fn horizontal_paylines(rows: u8, reel_count: u8) -> Vec<Payline> {
    (0..rows)
        .map(|row| Payline::straight(row as u32 + 1, row, reel_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<Vec<SymbolId>> {
        vec![
            vec![0, 1, 2],
            vec![1, 0, 3],
            vec![1, 2, 0],
            vec![3, 1, 2],
            vec![2, 3, 1],
        ]
    }

    #[test]
    fn test_payline_straight() {
        let line = Payline::straight(1, 1, 5);
        assert_eq!(line.positions, vec![1, 1, 1, 1, 1]);
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_horizontal_paylines() {
        let lines = horizontal_paylines(3, 5);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Payline::straight(1, 0, 5));
        assert_eq!(lines[2], Payline::straight(3, 2, 5));
    }

    #[test]
    fn test_extract_rows() {
        let lines = horizontal_paylines(3, 5);
        let board = board();

        assert_eq!(lines[0].extract(&board), Some(vec![0, 1, 1, 3, 2]));
        assert_eq!(lines[1].extract(&board), Some(vec![1, 0, 2, 1, 3]));
        assert_eq!(lines[2].extract(&board), Some(vec![2, 3, 0, 2, 1]));
    }

    #[test]
    fn test_extract_v_shape() {
        let line = Payline::new(4, vec![0, 1, 2, 1, 0]);
        assert_eq!(line.extract(&board()), Some(vec![0, 0, 0, 1, 2]));
    }

    #[test]
    fn test_extract_mismatch() {
        let board = board();
        assert_eq!(Payline::straight(1, 0, 4).extract(&board), None);
        assert_eq!(Payline::straight(1, 3, 5).extract(&board), None);
    }
}
