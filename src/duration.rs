//! Unit-suffixed duration text such as `"1h2m3.5s"` or `"-300ms"`.
//!
//! Durations are signed 64-bit nanosecond counts. The accepted units are `ns`,
//! `us` (also `µs` and `μs`), `ms`, `s`, `m` and `h`; every component may carry
//! a fraction.

use time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN` in nanoseconds.
const LIMIT: u64 = 1 << 63;

fn unit_scale(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parses duration text. Returns `None` for malformed input, unknown units and
/// values outside the 64-bit nanosecond range.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return None;
        }

        let (whole, after_whole) = leading_int(rest)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let (mut frac, mut scale, mut has_frac) = (0u64, 1f64, false);
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (f, s, after_frac) = leading_fraction(after_dot);
            has_frac = after_frac.len() != after_dot.len();
            (frac, scale, rest) = (f, s, after_frac);
        }
        if !has_whole && !has_frac {
            return None;
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return None;
        }
        let unit = unit_scale(&rest[..unit_len])?;
        rest = &rest[unit_len..];

        if whole > LIMIT / unit {
            return None;
        }
        let mut component = whole * unit;
        if frac > 0 {
            component += (frac as f64 * (unit as f64 / scale)) as u64;
            if component > LIMIT {
                return None;
            }
        }
        total = total.checked_add(component)?;
        if total > LIMIT {
            return None;
        }
    }

    if negative {
        // total <= 2^63, so the negation always fits in i128 and then in i64.
        Some(Duration::nanoseconds((-(total as i128)) as i64))
    } else if total > i64::MAX as u64 {
        None
    } else {
        Some(Duration::nanoseconds(total as i64))
    }
}

/// Consumes leading decimal digits.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(digit - b'0'))?;
        if value > LIMIT {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consumes fraction digits, keeping as much precision as fits in a `u64`.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (mut value, mut scale, mut overflow) = (0u64, 1f64, false);
    for digit in s[..end].bytes() {
        if overflow {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        {
            Some(next) if next <= LIMIT => {
                value = next;
                scale *= 10.0;
            }
            _ => overflow = true,
        }
    }
    (value, scale, &s[end..])
}

/// Formats a duration as text that [`parse_duration`] reads back.
///
/// Sub-second values use the largest fitting unit (`"1.5µs"`, `"300ms"`); longer
/// ones are written as hours, minutes and fractional seconds (`"1h0m2.5s"`).
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.whole_nanoseconds();
    if nanos == 0 {
        return "0s".to_string();
    }
    let sign = if nanos < 0 { "-" } else { "" };
    let magnitude = nanos.unsigned_abs();

    let second = u128::from(SECOND);
    if magnitude < second {
        let (unit, scale, digits) = if magnitude < u128::from(MICROSECOND) {
            ("ns", 1, 0)
        } else if magnitude < u128::from(MILLISECOND) {
            ("\u{b5}s", u128::from(MICROSECOND), 3)
        } else {
            ("ms", u128::from(MILLISECOND), 6)
        };
        let fraction = fraction_text(magnitude % scale, digits);
        return format!("{sign}{}{fraction}{unit}", magnitude / scale);
    }

    let seconds = magnitude / second;
    let fraction = fraction_text(magnitude % second, 9);
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}{fraction}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}{fraction}s")
    } else {
        format!("{sign}{seconds}{fraction}s")
    }
}

/// `".5"` for a remainder of 500 over 3 digits; empty when the remainder is zero.
fn fraction_text(remainder: u128, digits: usize) -> String {
    if remainder == 0 {
        return String::new();
    }
    let padded = format!("{remainder:0digits$}");
    format!(".{}", padded.trim_end_matches('0'))
}
