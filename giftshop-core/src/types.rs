use crate::error::ScanError;
use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

// ===== RANGES =====

/// An inclusive range of product IDs, always stored with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdRange {
    low: i64,
    high: i64,
}

impl IdRange {
    /// Build a range from two endpoints given in either order.
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of IDs covered, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.high.abs_diff(self.low).saturating_add(1)
    }

    /// A normalized range always holds at least one ID.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn ids(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}

impl std::fmt::Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A range token the parser could not use, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedToken {
    pub token: String,
    pub reason: String,
}

/// Parser output: usable ranges in input order plus everything that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedInput {
    pub ranges: Vec<IdRange>,
    pub skipped: Vec<SkippedToken>,
}

// ===== ACCUMULATION =====

/// Running sums of invalid IDs, one per rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Totals {
    pub double_repetition: i64,
    pub nfold_repetition: i64,
}

impl Totals {
    pub fn new(double_repetition: i64, nfold_repetition: i64) -> Self {
        Self {
            double_repetition,
            nfold_repetition,
        }
    }

    pub fn get(&self, rule: RuleKind) -> i64 {
        match rule {
            RuleKind::DoubleRepetition => self.double_repetition,
            RuleKind::NFoldRepetition => self.nfold_repetition,
        }
    }

    /// Add `id` to the sum for `rule`.
    pub fn add(&mut self, rule: RuleKind, id: i64) -> Result<(), ScanError> {
        let slot = match rule {
            RuleKind::DoubleRepetition => &mut self.double_repetition,
            RuleKind::NFoldRepetition => &mut self.nfold_repetition,
        };
        *slot = slot.checked_add(id).ok_or(ScanError::Overflow { rule })?;
        Ok(())
    }

    pub fn merge(self, other: Totals) -> Result<Totals, ScanError> {
        let mut merged = self;
        merged.add(RuleKind::DoubleRepetition, other.double_repetition)?;
        merged.add(RuleKind::NFoldRepetition, other.nfold_repetition)?;
        Ok(merged)
    }
}

impl From<(i64, i64)> for Totals {
    fn from((double_repetition, nfold_repetition): (i64, i64)) -> Self {
        Self::new(double_repetition, nfold_repetition)
    }
}

/// Counters describing how much work a scan did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub ranges_scanned: usize,
    pub ids_scanned: u64,
    pub double_repetition_hits: u64,
    pub nfold_repetition_hits: u64,
}

impl ScanStats {
    pub fn merge(self, other: ScanStats) -> ScanStats {
        ScanStats {
            ranges_scanned: self.ranges_scanned.saturating_add(other.ranges_scanned),
            ids_scanned: self.ids_scanned.saturating_add(other.ids_scanned),
            double_repetition_hits: self
                .double_repetition_hits
                .saturating_add(other.double_repetition_hits),
            nfold_repetition_hits: self
                .nfold_repetition_hits
                .saturating_add(other.nfold_repetition_hits),
        }
    }

    pub fn hits(&self, rule: RuleKind) -> u64 {
        match rule {
            RuleKind::DoubleRepetition => self.double_repetition_hits,
            RuleKind::NFoldRepetition => self.nfold_repetition_hits,
        }
    }
}

// ===== INPUT & REPORT =====

/// Where the scanned text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputOrigin {
    /// Read from a file with usable content
    File { path: PathBuf },
    /// The file did not exist, the fallback input was used
    MissingFile { path: PathBuf },
    /// The file held only whitespace, the fallback input was used
    EmptyFile { path: PathBuf },
    Stdin,
    /// Stdin held only whitespace, the fallback input was used
    EmptyStdin,
    /// Supplied directly by the caller
    Inline,
}

impl InputOrigin {
    pub fn used_fallback(&self) -> bool {
        matches!(
            self,
            Self::MissingFile { .. } | Self::EmptyFile { .. } | Self::EmptyStdin
        )
    }

    /// One-line notice describing where the input came from.
    pub fn notice(&self) -> String {
        match self {
            Self::File { path } => {
                format!("The file {} has been read successfully.", path.display())
            }
            Self::MissingFile { path } => format!(
                "The file {} does not exist, so we will use the default input.",
                path.display()
            ),
            Self::EmptyFile { path } => format!(
                "The file {} is empty, so we will use the default input.",
                path.display()
            ),
            Self::Stdin => "Standard input has been read successfully.".to_string(),
            Self::EmptyStdin => {
                "Standard input is empty, so we will use the default input.".to_string()
            }
            Self::Inline => "Using the input supplied by the caller.".to_string(),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub origin: InputOrigin,
    pub totals: Totals,
    pub stats: ScanStats,
    pub skipped: Vec<SkippedToken>,
}
