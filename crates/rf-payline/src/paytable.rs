//! Pay table lookup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PayTableMiss;
use crate::wild::SymbolId;

/// Payout schedule keyed by match length, then symbol.
///
/// A missing entry means "no payout defined" and reads as zero through
/// [`PayTable::pay_or_zero`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayTable {
    entries: BTreeMap<usize, BTreeMap<SymbolId, f64>>,
}

impl PayTable {
    /// Create an empty pay table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payout for `match_length` of `symbol`
    pub fn insert(&mut self, match_length: usize, symbol: SymbolId, amount: f64) {
        self.entries
            .entry(match_length)
            .or_default()
            .insert(symbol, amount);
    }

    /// Builder form of [`PayTable::insert`] for a whole match-length row
    pub fn with_row(mut self, match_length: usize, pays: &[(SymbolId, f64)]) -> Self {
        for &(symbol, amount) in pays {
            self.insert(match_length, symbol, amount);
        }
        self
    }

    /// Look up a payout
    pub fn lookup(&self, match_length: usize, symbol: SymbolId) -> Result<f64, PayTableMiss> {
        self.entries
            .get(&match_length)
            .and_then(|row| row.get(&symbol))
            .copied()
            .ok_or(PayTableMiss { match_length, symbol })
    }

    /// Look up a payout, treating a missing entry as zero
    pub fn pay_or_zero(&self, match_length: usize, symbol: SymbolId) -> f64 {
        match self.lookup(match_length, symbol) {
            Ok(amount) => amount,
            Err(miss) => {
                log::debug!("[PayTable] {miss}, paying 0");
                0.0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(BTreeMap::is_empty)
    }

    /// Iterate `(match_length, symbol, amount)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, SymbolId, f64)> + '_ {
        self.entries.iter().flat_map(|(&len, row)| {
            row.iter().map(move |(&symbol, &amount)| (len, symbol, amount))
        })
    }
}

impl FromIterator<(usize, SymbolId, f64)> for PayTable {
    fn from_iter<I: IntoIterator<Item = (usize, SymbolId, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (len, symbol, amount) in iter {
            table.insert(len, symbol, amount);
        }
        table
    }
}
