/// True when `digits` is some prefix block written two or more whole times,
/// e.g. "111", "121212" or "123123".
///
/// Candidate block lengths run from 1 to half the length; only divisors of
/// the length can tile the string. The first block that tiles wins.
pub fn is_nfold_repetition(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let len = bytes.len();

    (1..=len / 2)
        .filter(|period| len % period == 0)
        .any(|period| tiles_with_prefix(bytes, period))
}

/// Whether repeating the first `period` bytes `len / period` times rebuilds `bytes`.
fn tiles_with_prefix(bytes: &[u8], period: usize) -> bool {
    let pattern = &bytes[..period];
    bytes.chunks_exact(period).all(|block| block == pattern)
}
