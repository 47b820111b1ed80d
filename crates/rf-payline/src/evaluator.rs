//! Single payline win evaluation

use serde::{Deserialize, Serialize};

use crate::codec::{ResultCode, WinlineRecord, decode_result_code};
use crate::paytable::PayTable;
use crate::wild::{SymbolId, wild_flag};

/// Outcome of evaluating one payline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinResult {
    /// Payout for the line (0 when nothing pays)
    pub amount: f64,
    /// Result code, e.g. `B-3-1-2`
    pub code: String,
    /// Decoded winline, `None` if the code failed to parse
    pub winline: Option<WinlineRecord>,
    /// Always `[amount]`
    pub spin_wins: Vec<f64>,
}

impl WinResult {
    fn from_code(line_id: u32, code: ResultCode, amount: f64) -> Self {
        let code = code.to_string();
        let (winline, spin_wins) = decode_result_code(line_id, &code, amount);
        Self {
            amount,
            code,
            winline,
            spin_wins,
        }
    }

    /// Check if this line paid
    pub fn is_win(&self) -> bool {
        self.amount > 0.0
    }
}

/// Candidate combination: match length, symbol, payout, wild flag
struct Candidate {
    match_length: usize,
    symbol: SymbolId,
    amount: f64,
    wild_flag: u8,
}

impl Candidate {
    fn into_result(self, line_id: u32) -> WinResult {
        let code = ResultCode::base(self.match_length, self.wild_flag, self.symbol);
        WinResult::from_code(line_id, code, self.amount)
    }
}

/// Evaluate the best paying left-anchored combination on a line.
///
/// Wilds substitute for the first non-wild symbol (the anchor). When two or
/// more wilds lead the line, the wild block priced on its own (using
/// `line[0]`) replaces the extended run if it pays strictly more. An
/// all-wild line is priced as a full-length run of `line[0]`.
///
/// `wild_mask` drives the run scan; `wild_ids` decides the wild flag written
/// into the code. Missing pay table entries pay zero.
pub fn evaluate_line(
    line: &[SymbolId],
    line_id: u32,
    wild_mask: &[bool],
    wild_ids: &[SymbolId],
    pay_table: &PayTable,
) -> WinResult {
    if wild_mask.len() != line.len() {
        log::warn!(
            "[WinEvaluator] Line {line_id}: wild mask length {} != line length {}",
            wild_mask.len(),
            line.len()
        );
    }

    let Some(&first_symbol) = line.first() else {
        return WinResult::from_code(line_id, ResultCode::base(0, 0, 0), 0.0);
    };

    let is_wild = |i: usize| wild_mask.get(i).copied().unwrap_or(false);
    let line_len = line.len();

    // All wilds
    let Some(anchor_pos) = (0..line_len).find(|&i| !is_wild(i)) else {
        return Candidate {
            match_length: line_len,
            symbol: first_symbol,
            amount: pay_table.pay_or_zero(line_len, first_symbol),
            wild_flag: 1,
        }
        .into_result(line_id);
    };

    let anchor = line[anchor_pos];
    let run_len = 1 + (anchor_pos + 1..line_len)
        .take_while(|&i| is_wild(i) || line[i] == anchor)
        .count();
    let match_length = anchor_pos + run_len;

    let main = Candidate {
        match_length,
        symbol: anchor,
        amount: pay_table.pay_or_zero(match_length, anchor),
        wild_flag: wild_flag(&line[..match_length], wild_ids),
    };

    // Leading wild block on its own
    if anchor_pos >= 2 {
        let alt_amount = pay_table.pay_or_zero(anchor_pos, first_symbol);
        if alt_amount > main.amount {
            return Candidate {
                match_length: anchor_pos,
                symbol: first_symbol,
                amount: alt_amount,
                wild_flag: wild_flag(&line[..anchor_pos], wild_ids),
            }
            .into_result(line_id);
        }
    }

    main.into_result(line_id)
}
