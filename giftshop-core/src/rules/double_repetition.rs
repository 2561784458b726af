/// True when `digits` is some block written exactly twice, e.g. "123123".
///
/// Odd-length strings can never split into two equal halves. The empty
/// string has no block to repeat and is rejected too.
pub fn is_double_repetition(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let len = bytes.len();
    if len == 0 || len % 2 != 0 {
        return false;
    }

    let (first_half, second_half) = bytes.split_at(len / 2);
    first_half == second_half
}
