use std::time::Duration;

/// Parses a compact duration string such as `30s`, `5m`, `12h`, `365d` or a
/// combination like `1d12h`.
///
/// Every number must be followed by one of the units `s`, `m`, `h` or `d`.
/// Returns `None` for empty input, a dangling number, an unknown unit or
/// an overflowing value.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use folio_config::time::parse_duration;
///
/// assert_eq!(parse_duration("1m30s"), Some(Duration::from_secs(90)));
/// assert_eq!(parse_duration("10"), None);
/// ```
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut total_secs: u64 = 0;
    let mut digits = String::new();

    for c in input.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        if digits.is_empty() {
            return None;
        }

        let unit = match c {
            's' => 1,
            'm' => 60,
            'h' => 60 * 60,
            'd' => 24 * 60 * 60,
            _ => return None,
        };

        let value: u64 = digits.parse().ok()?;
        total_secs = total_secs.checked_add(value.checked_mul(unit)?)?;
        digits.clear();
    }

    if !digits.is_empty() {
        return None;
    }

    Some(Duration::from_secs(total_secs))
}
