//! Round ticket assembly

use serde::{Deserialize, Serialize};

/// Serializable summary of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTicket<T> {
    /// Total win for the round
    pub win: f64,
    /// What started the round (`normal`, `bonus`, `free_spin`, ...)
    #[serde(rename = "triggerType")]
    pub trigger_type: String,
    /// Board flattened outer-to-inner
    pub reels: Vec<T>,
    /// Individual line wins
    #[serde(rename = "spinWins")]
    pub spin_wins: Vec<f64>,
}

impl<T: Serialize> GameTicket<T> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Package a round's results into a [`GameTicket`].
///
/// The board is flattened row-major. `winlines` is accepted so callers can
/// pass their full round state, but it is not part of the ticket.
pub fn build_ticket<T: Clone, W>(
    total_win: f64,
    trigger_type: impl Into<String>,
    board: &[Vec<T>],
    _winlines: &[W],
    spin_wins: Vec<f64>,
) -> GameTicket<T> {
    GameTicket {
        win: total_win,
        trigger_type: trigger_type.into(),
        reels: board.iter().flatten().cloned().collect(),
        spin_wins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::WinlineRecord;

    #[test]
    fn test_build_ticket_flattens_board() {
        let board = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let winlines = [
            WinlineRecord { winline_id: 1, match_length: 3, symbol: 2, amount: 50.0 },
            WinlineRecord { winline_id: 2, match_length: 4, symbol: 5, amount: 100.0 },
        ];

        let ticket = build_ticket(150.0, "normal", &board, &winlines, vec![50.0, 100.0]);

        assert_eq!(ticket.win, 150.0);
        assert_eq!(ticket.trigger_type, "normal");
        assert_eq!(ticket.reels, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(ticket.spin_wins, vec![50.0, 100.0]);
    }

    #[test]
    fn test_build_ticket_empty_board() {
        let board: Vec<Vec<u32>> = Vec::new();
        let ticket = build_ticket(0.0, "bonus", &board, &[] as &[WinlineRecord], Vec::new());

        assert_eq!(ticket.win, 0.0);
        assert_eq!(ticket.trigger_type, "bonus");
        assert!(ticket.reels.is_empty());
        assert!(ticket.spin_wins.is_empty());
    }

    #[test]
    fn test_trigger_type_is_free_form() {
        let board = vec![vec![1, 2], vec![3, 4]];
        for trigger in ["normal", "bonus", "free_spin", "anything-goes"] {
            let ticket = build_ticket(100.0, trigger, &board, &[] as &[()], vec![100.0]);
            assert_eq!(ticket.trigger_type, trigger);
        }
    }

    #[test]
    fn test_ragged_board_keeps_order() {
        let board = vec![vec!["A"], vec!["B", "C", "D"], vec![]];
        let ticket = build_ticket(0.0, "normal", &board, &[] as &[()], Vec::new());
        assert_eq!(ticket.reels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_ticket_json_keys() {
        let board = vec![vec![5u32, 2], vec![2, 5]];
        let ticket = build_ticket(30.0, "normal", &board, &[] as &[()], vec![30.0]);
        let value: serde_json::Value = serde_json::from_str(&ticket.to_json().unwrap()).unwrap();

        assert_eq!(value["win"], 30.0);
        assert_eq!(value["triggerType"], "normal");
        assert_eq!(value["reels"], serde_json::json!([5, 2, 2, 5]));
        assert_eq!(value["spinWins"], serde_json::json!([30.0]));
        assert!(value.get("winlines").is_none());
    }
}
