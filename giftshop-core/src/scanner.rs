// Scan driver
//
// Walks every ID of every range, classifies it and accumulates one sum per
// rule. Ranges are independent and overlapping ranges are not deduplicated,
// so an ID listed twice is counted twice.

use crate::classifier::{Classification, IdClassifier};
use crate::error::ScanError;
use crate::parser::parse_ranges;
use crate::rules::RuleKind;
use crate::types::{IdRange, ScanStats, Totals};
use rayon::prelude::*;
use tracing::debug;

/// Partial result of a scan; merges associatively so ranges and ID chunks
/// can be reduced in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub totals: Totals,
    pub stats: ScanStats,
}

impl Tally {
    fn record(mut self, id: i64, verdict: Classification) -> Result<Self, ScanError> {
        self.stats.ids_scanned += 1;
        for rule in RuleKind::ALL {
            if verdict.matches(rule) {
                self.totals.add(rule, id)?;
                match rule {
                    RuleKind::DoubleRepetition => self.stats.double_repetition_hits += 1,
                    RuleKind::NFoldRepetition => self.stats.nfold_repetition_hits += 1,
                }
            }
        }
        Ok(self)
    }

    pub fn merge(self, other: Tally) -> Result<Self, ScanError> {
        Ok(Tally {
            totals: self.totals.merge(other.totals)?,
            stats: self.stats.merge(other.stats),
        })
    }
}

pub struct RangeScanner {
    classifier: IdClassifier,
    parallel: bool,
}

impl Default for RangeScanner {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RangeScanner {
    pub fn new(parallel: bool) -> Self {
        Self {
            classifier: IdClassifier::new(),
            parallel,
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Scan all ranges in input order and return the combined tally.
    pub fn scan(&self, ranges: &[IdRange]) -> Result<Tally, ScanError> {
        let mut tally = ranges
            .iter()
            .try_fold(Tally::default(), |acc, range| acc.merge(self.scan_range(range)?))?;
        tally.stats.ranges_scanned = ranges.len();
        Ok(tally)
    }

    /// Scan one inclusive range, low to high.
    pub fn scan_range(&self, range: &IdRange) -> Result<Tally, ScanError> {
        let tally = if self.parallel {
            self.scan_range_parallel(range)?
        } else {
            self.scan_range_sequential(range)?
        };

        debug!(
            "Range {range}: {} IDs, totals {:?}",
            tally.stats.ids_scanned, tally.totals
        );
        Ok(tally)
    }

    fn scan_range_sequential(&self, range: &IdRange) -> Result<Tally, ScanError> {
        let mut tally = Tally::default();
        for id in range.ids() {
            tally = tally.record(id, self.classifier.classify(id))?;
        }
        Ok(tally)
    }

    fn scan_range_parallel(&self, range: &IdRange) -> Result<Tally, ScanError> {
        range
            .ids()
            .into_par_iter()
            .try_fold(Tally::default, |tally, id| {
                tally.record(id, self.classifier.classify(id))
            })
            .try_reduce(Tally::default, Tally::merge)
    }
}

/// Parse `input` and return the two sums from a sequential scan.
///
/// Malformed tokens are skipped, so this only fails if a sum overflows.
pub fn solve(input: &str) -> Result<Totals, ScanError> {
    let parsed = parse_ranges(input);
    let tally = RangeScanner::new(false).scan(&parsed.ranges)?;
    Ok(tally.totals)
}
