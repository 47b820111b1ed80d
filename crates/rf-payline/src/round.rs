//! Whole-board round evaluation

use serde::{Deserialize, Serialize};

use crate::codec::WinlineRecord;
use crate::config::SlotRules;
use crate::evaluator::{WinResult, evaluate_line};
use crate::ticket::{GameTicket, build_ticket};
use crate::wild::{SymbolId, mark_wilds};

/// Everything produced by one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub ticket: GameTicket<SymbolId>,
    /// Winline records of the paying lines
    pub winlines: Vec<WinlineRecord>,
    /// Per-payline results in payline order, paying or not
    pub line_results: Vec<WinResult>,
}

impl RoundOutcome {
    pub fn total_win(&self) -> f64 {
        self.ticket.win
    }

    pub fn is_win(&self) -> bool {
        self.ticket.win > 0.0
    }
}

/// Evaluate every payline of `board` (indexed `board[reel][row]`) and build
/// the round ticket.
///
/// Paying lines add to the total, contribute their winline record and their
/// spin win. Paylines that do not fit the board are skipped.
pub fn evaluate_round(board: &[Vec<SymbolId>], rules: &SlotRules, trigger_type: &str) -> RoundOutcome {
    let mut total_win = 0.0;
    let mut winlines = Vec::new();
    let mut spin_wins = Vec::new();
    let mut line_results = Vec::with_capacity(rules.paylines.len());

    for payline in &rules.paylines {
        let Some(line) = payline.extract(board) else {
            log::warn!(
                "[Round] Payline {} does not fit a board of {} reels, skipping",
                payline.id,
                board.len()
            );
            continue;
        };

        let wild_mask = mark_wilds(&line, &rules.wild_ids);
        let result = evaluate_line(&line, payline.id, &wild_mask, &rules.wild_ids, &rules.pay_table);

        if result.is_win() {
            log::debug!("[Round] Payline {} pays {} ({})", payline.id, result.amount, result.code);
            total_win += result.amount;
            winlines.extend(result.winline);
            spin_wins.extend_from_slice(&result.spin_wins);
        }

        line_results.push(result);
    }

    let ticket = build_ticket(total_win, trigger_type, board, &winlines, spin_wins);

    RoundOutcome {
        ticket,
        winlines,
        line_results,
    }
}
