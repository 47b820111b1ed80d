//! # rf-payline — Payline win evaluation for slot games
//!
//! Stateless helpers that turn a payline's symbols into a payout, a compact
//! result code and a winline record, and package a round into a ticket.
//!
//! ## Architecture
//!
//! ```text
//! line ──► mark_wilds / has_any_wild        (wild)
//!            │
//!            v
//!          evaluate_line ◄── PayTable       (evaluator, paytable)
//!            │  "B-3-1-2"
//!            v
//!          decode_result_code               (codec)
//!            │  WinlineRecord + spin wins
//!            v
//!          build_ticket                     (ticket)
//! ```
//!
//! [`evaluate_round`] runs the whole chain for every payline of a board
//! described by [`SlotRules`].
//!
//! All functions are pure; every type is `Send + Sync`. Malformed codes and
//! pay table misses degrade to defined results and are reported through the
//! `log` facade.

pub mod codec;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod payline;
pub mod paytable;
pub mod round;
pub mod ticket;
pub mod wild;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use evaluator::*;
pub use payline::*;
pub use paytable::*;
pub use round::*;
pub use ticket::*;
pub use wild::*;
