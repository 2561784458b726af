// Classification rules for product IDs
// Each rule is a pure predicate over the decimal digits of an ID:
// - double_repetition.rs: the digits are one block written exactly twice
// - nfold_repetition.rs: the digits are one block written two or more times
// RuleKind names the rules so totals, stats and reports can refer to them.

pub mod double_repetition;
pub mod nfold_repetition;

pub use double_repetition::is_double_repetition;
pub use nfold_repetition::is_nfold_repetition;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two ways an ID can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Part 1: two identical halves ("123123")
    DoubleRepetition,
    /// Part 2: a block repeated N >= 2 times ("121212", "111")
    NFoldRepetition,
}

impl RuleKind {
    /// Rules in report order.
    pub const ALL: [RuleKind; 2] = [RuleKind::DoubleRepetition, RuleKind::NFoldRepetition];

    /// Puzzle part this rule answers.
    pub fn part(self) -> u8 {
        match self {
            RuleKind::DoubleRepetition => 1,
            RuleKind::NFoldRepetition => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::DoubleRepetition => "double-repetition",
            RuleKind::NFoldRepetition => "n-fold-repetition",
        }
    }

    pub fn matches(self, digits: &str) -> bool {
        match self {
            RuleKind::DoubleRepetition => is_double_repetition(digits),
            RuleKind::NFoldRepetition => is_nfold_repetition(digits),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
