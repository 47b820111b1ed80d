//! Result code formatting and parsing
//!
//! A result code is a compact dash-separated description of one line win:
//!
//! ```text
//! <kind>-<matchLength>-<wildFlag>-<symbol>[-<multiplier>]
//! B-3-0-02-1
//! ```
//!
//! `kind` is a free tag (`B` for base game, `TF` for free spins, ...) and is
//! not validated. Only `matchLength` and `symbol` must be integers; leading
//! zeros are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodeParseError;
use crate::wild::SymbolId;

/// Kind tag written by the line evaluator
pub const BASE_KIND: &str = "B";

const SEPARATOR: char = '-';

const EXPECTED_FORMAT: &str =
    "<B or TF>-#combination-<1 if win is by wild, else 0>-symbol_id-multiplier  Example: B-3-0-02-1";

/// Structured form of a result code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCode {
    pub kind: String,
    pub match_length: u32,
    /// Raw wild flag segment, `"1"` when a wild took part in the win
    pub wild_flag: String,
    pub symbol: SymbolId,
    /// Segments after the symbol (usually a single multiplier)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<String>,
}

impl ResultCode {
    /// Code in the form the evaluator emits: `B-{len}-{flag}-{symbol}`
    pub fn base(match_length: usize, wild_flag: u8, symbol: SymbolId) -> Self {
        Self {
            kind: BASE_KIND.to_string(),
            match_length: match_length as u32,
            wild_flag: wild_flag.to_string(),
            symbol,
            trailing: Vec::new(),
        }
    }

    /// Append a multiplier segment
    pub fn with_multiplier(mut self, multiplier: impl fmt::Display) -> Self {
        self.trailing.push(multiplier.to_string());
        self
    }

    /// Parse a code string
    pub fn parse(code: &str) -> Result<Self, CodeParseError> {
        let parts: Vec<&str> = code.split(SEPARATOR).collect();
        if parts.len() < 4 {
            return Err(CodeParseError::TooFewSegments { found: parts.len() });
        }

        let match_length = parts[1]
            .trim()
            .parse::<u32>()
            .map_err(|_| CodeParseError::InvalidMatchLength(parts[1].to_string()))?;
        let symbol = parts[3]
            .trim()
            .parse::<SymbolId>()
            .map_err(|_| CodeParseError::InvalidSymbol(parts[3].to_string()))?;

        Ok(Self {
            kind: parts[0].to_string(),
            match_length,
            wild_flag: parts[2].to_string(),
            symbol,
            trailing: parts[4..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Did a wild take part in the win?
    pub fn is_wild_win(&self) -> bool {
        self.wild_flag.trim().parse::<u8>().is_ok_and(|flag| flag != 0)
    }

    /// First trailing segment, if numeric
    pub fn multiplier(&self) -> Option<f64> {
        self.trailing.first().and_then(|m| m.trim().parse().ok())
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.kind, self.match_length, self.wild_flag, self.symbol
        )?;
        for segment in &self.trailing {
            write!(f, "-{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for ResultCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Structured description of one paying line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinlineRecord {
    pub winline_id: u32,
    pub match_length: u32,
    pub symbol: SymbolId,
    pub amount: f64,
}

impl WinlineRecord {
    /// `[winlineId, matchLength, symbol, amount]` as a flat row
    pub fn to_row(&self) -> [f64; 4] {
        [
            self.winline_id as f64,
            self.match_length as f64,
            self.symbol as f64,
            self.amount,
        ]
    }
}

/// Decode a result code into a winline record plus the spin win list.
///
/// A malformed code is logged and yields `None`; the returned spin wins are
/// `[win_amount]` in every case so round totals never lose an amount.
pub fn decode_result_code(
    winline_id: u32,
    code: &str,
    win_amount: f64,
) -> (Option<WinlineRecord>, Vec<f64>) {
    let winline = match ResultCode::parse(code) {
        Ok(parsed) => Some(WinlineRecord {
            winline_id,
            match_length: parsed.match_length,
            symbol: parsed.symbol,
            amount: win_amount,
        }),
        Err(e) => {
            log::warn!("[ResultCodec] Error parsing code {code:?} ({e}). Expected format: {EXPECTED_FORMAT}");
            None
        }
    };

    (winline, vec![win_amount])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_code() {
        let (winline, spin_wins) = decode_result_code(1, "B-3-0-02-1", 50.0);

        assert_eq!(
            winline,
            Some(WinlineRecord {
                winline_id: 1,
                match_length: 3,
                symbol: 2,
                amount: 50.0,
            })
        );
        assert_eq!(spin_wins, vec![50.0]);
    }

    #[test]
    fn test_decode_free_spin_wild_code() {
        let (winline, spin_wins) = decode_result_code(5, "TF-5-1-10-2", 100.0);

        let winline = winline.unwrap();
        assert_eq!(winline.to_row(), [5.0, 5.0, 10.0, 100.0]);
        assert_eq!(spin_wins, vec![100.0]);
    }

    #[test]
    fn test_decode_invalid_keeps_spin_win() {
        for code in ["INVALID", "B-3", "B-x-0-2", "B-3-0-y", ""] {
            let (winline, spin_wins) = decode_result_code(1, code, 50.0);
            assert!(winline.is_none(), "{code:?} should not parse");
            assert_eq!(spin_wins, vec![50.0]);
        }
    }

    #[test]
    fn test_decode_is_pure() {
        let first = decode_result_code(7, "B-4-1-3", 12.5);
        let second = decode_result_code(7, "B-4-1-3", 12.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ResultCode::parse("INVALID"),
            Err(CodeParseError::TooFewSegments { found: 1 })
        );
        assert_eq!(
            ResultCode::parse("B-three-0-2"),
            Err(CodeParseError::InvalidMatchLength("three".into()))
        );
        assert_eq!(
            ResultCode::parse("B-3-0-"),
            Err(CodeParseError::InvalidSymbol(String::new()))
        );
    }

    #[test]
    fn test_parse_keeps_loose_segments() {
        let code: ResultCode = "XYZ-03-maybe-007-2x-extra".parse().unwrap();

        assert_eq!(code.kind, "XYZ");
        assert_eq!(code.match_length, 3);
        assert_eq!(code.symbol, 7);
        assert!(!code.is_wild_win());
        assert_eq!(code.trailing, vec!["2x", "extra"]);
        assert_eq!(code.multiplier(), None);
        assert_eq!(code.to_string(), "XYZ-3-maybe-7-2x-extra");
    }

    #[test]
    fn test_base_code_display() {
        assert_eq!(ResultCode::base(3, 0, 2).to_string(), "B-3-0-2");
        assert_eq!(ResultCode::base(5, 1, 5).to_string(), "B-5-1-5");

        let code = ResultCode::base(4, 1, 9).with_multiplier(2);
        assert_eq!(code.to_string(), "B-4-1-9-2");
        assert!(code.is_wild_win());
        assert_eq!(code.multiplier(), Some(2.0));
    }

    #[test]
    fn test_winline_json_field_names() {
        let record = WinlineRecord {
            winline_id: 2,
            match_length: 3,
            symbol: 2,
            amount: 30.0,
        };
        let json = serde_json::to_value(record).unwrap();

        assert_eq!(json["winlineId"], 2);
        assert_eq!(json["matchLength"], 3);
        assert_eq!(json["symbol"], 2);
        assert_eq!(json["amount"], 30.0);
    }
}
