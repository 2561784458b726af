// Gift Shop Core Library
//
// Scans inclusive ranges of product IDs and sums the IDs whose decimal
// digits are built from a repeated block.
// Main interface: parse a range list, scan it, report two totals.

pub mod types;
pub mod error;
pub mod rules;
pub mod parser;
pub mod classifier;
pub mod scanner;
pub mod config;
pub mod input;
pub mod processor;
pub mod report;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::{RangeParseError, ScanError};
pub use rules::{is_double_repetition, is_nfold_repetition, RuleKind};
pub use parser::{parse_range_token, parse_ranges};
pub use classifier::{Classification, IdClassifier};
pub use scanner::{solve, RangeScanner, Tally};
pub use config::{ScanConfig, DEFAULT_INPUT, DEFAULT_INPUT_FILE};
pub use input::{InputSource, LoadedInput};
pub use processor::{IdProcessor, ProfileSummary, StepProfiler, StepTiming};
pub use report::{OutputFormat, ReportDocument, SCHEMA_VERSION};
