//! Slot rules configuration
//!
//! Rules are loaded from JSON or YAML:
//!
//! ```yaml
//! wild_ids: [0]
//! pay_table:
//!   3: { 0: 50, 1: 30 }
//!   4: { 0: 100, 1: 60 }
//! paylines:
//!   - { id: 1, positions: [0, 0, 0, 0, 0] }
//! ```
//!
//! `paylines` defaults to the three horizontal lines of a 5×3 board.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::payline::{Payline, horizontal_paylines};
use crate::paytable::PayTable;
use crate::wild::SymbolId;

/// Wild ids, pay table and paylines for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRules {
    #[serde(default)]
    pub wild_ids: Vec<SymbolId>,
    pub pay_table: PayTable,
    #[serde(default = "default_paylines")]
    pub paylines: Vec<Payline>,
}

fn default_paylines() -> Vec<Payline> {
    horizontal_paylines(3, 5)
}

/// Validation limits
#[derive(Debug, Clone)]
pub struct RulesLimits {
    pub max_reels: usize,
    pub max_paylines: usize,
    pub max_match_length: usize,
    pub max_pay_value: f64,
}

impl Default for RulesLimits {
    fn default() -> Self {
        Self {
            max_reels: 10,
            max_paylines: 100,
            max_match_length: 10,
            max_pay_value: 1_000_000.0,
        }
    }
}

impl SlotRules {
    pub fn new(wild_ids: Vec<SymbolId>, pay_table: PayTable) -> Self {
        Self {
            wild_ids,
            pay_table,
            paylines: default_paylines(),
        }
    }

    pub fn with_paylines(mut self, paylines: Vec<Payline>) -> Self {
        self.paylines = paylines;
        self
    }

    /// Parse and validate JSON rules
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse and validate YAML rules
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let rules: Self = serde_yml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_with(&RulesLimits::default())
    }

    /// Validate against custom limits
    pub fn validate_with(&self, limits: &RulesLimits) -> ConfigResult<()> {
        if self.pay_table.is_empty() {
            return Err(ConfigError::Validation("Pay table is empty".into()));
        }

        for (match_length, symbol, amount) in self.pay_table.iter() {
            if match_length == 0 || match_length > limits.max_match_length {
                return Err(ConfigError::Validation(format!(
                    "Match length out of range: {} (1..={})",
                    match_length, limits.max_match_length
                )));
            }
            if !amount.is_finite() || amount < 0.0 || amount > limits.max_pay_value {
                return Err(ConfigError::Validation(format!(
                    "Invalid pay value for {} x symbol {}: {}",
                    match_length, symbol, amount
                )));
            }
        }

        if self.paylines.len() > limits.max_paylines {
            return Err(ConfigError::Validation(format!(
                "Too many paylines: {} > {}",
                self.paylines.len(),
                limits.max_paylines
            )));
        }

        let mut ids = HashSet::new();
        for payline in &self.paylines {
            if payline.is_empty() || payline.len() > limits.max_reels {
                return Err(ConfigError::Validation(format!(
                    "Payline {} spans {} reels (1..={})",
                    payline.id,
                    payline.len(),
                    limits.max_reels
                )));
            }
            if !ids.insert(payline.id) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate payline id: {}",
                    payline.id
                )));
            }
        }

        Ok(())
    }
}
