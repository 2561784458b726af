// Range list parser
//
// Turns the raw puzzle input ("11-22,95-115,...") into normalized IdRanges.
// A bad token never stops the parse: it is logged, recorded as skipped and
// the next token is tried.

use crate::error::RangeParseError;
use crate::types::{IdRange, ParsedInput, SkippedToken};
use tracing::{debug, warn};

const RANGE_SEPARATOR: char = ',';
const ENDPOINT_SEPARATOR: char = '-';

/// Trim the whole input and drop every line break, so ranges may wrap
/// across lines.
pub fn normalize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect()
}

/// Parse a comma-separated list of `low-high` tokens.
///
/// Blank tokens are ignored. Malformed tokens are reported with a warning and
/// collected in [`ParsedInput::skipped`].
pub fn parse_ranges(input: &str) -> ParsedInput {
    let normalized = normalize_input(input);
    let mut parsed = ParsedInput::default();

    for token in normalized.split(RANGE_SEPARATOR) {
        if token.trim().is_empty() {
            continue;
        }

        match parse_range_token(token) {
            Ok(range) => parsed.ranges.push(range),
            Err(err) => {
                warn!("Error while parsing the range {}, skipping it: {err}", err.token());
                parsed.skipped.push(SkippedToken {
                    token: err.token().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        "Parsed {} ranges, skipped {} tokens",
        parsed.ranges.len(),
        parsed.skipped.len()
    );
    parsed
}

/// Parse one `a-b` token into a range with `low = min(a, b)`.
///
/// Trailing empty parts are dropped before the shape check, so `1-22-`
/// reads as `1-22` while `1-2-3` and `-5-3` stay malformed.
pub fn parse_range_token(token: &str) -> Result<IdRange, RangeParseError> {
    let trimmed = token.trim();
    let mut parts: Vec<&str> = trimmed.split(ENDPOINT_SEPARATOR).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    let [start, end] = parts.as_slice() else {
        return Err(RangeParseError::Shape {
            token: trimmed.to_string(),
            parts: parts.len(),
        });
    };

    let start = parse_endpoint(trimmed, start)?;
    let end = parse_endpoint(trimmed, end)?;
    Ok(IdRange::new(start, end))
}

fn parse_endpoint(token: &str, endpoint: &str) -> Result<i64, RangeParseError> {
    let endpoint = endpoint.trim();
    endpoint
        .parse::<i64>()
        .map_err(|source| RangeParseError::Endpoint {
            token: token.to_string(),
            endpoint: endpoint.to_string(),
            source,
        })
}
