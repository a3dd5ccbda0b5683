//! Complex numbers and their `"(re+imi)"` text form.

use std::fmt;
use std::str::FromStr;

/// Complex number with real and imaginary parts of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    /// Builds `re + im*i`.
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

/// Formats as `(re+imi)`, the notation [`parse_complex`] reads back.
impl<T> fmt::Display for Complex<T>
where
    T: fmt::Display + Copy + Into<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im: f64 = self.im.into();
        // Display writes the '-' itself; NaN is printed unsigned.
        let sign = if im.is_sign_negative() && !im.is_nan() { "" } else { "+" };
        write!(f, "({}{}{}i)", self.re, sign, self.im)
    }
}

/// Parses textual complex notation.
///
/// Accepted forms, each optionally wrapped in parentheses: `"1+2i"`, `"1.5e3-2i"`,
/// `"3"` (pure real), `"2i"`, `"-i"` (pure imaginary). Returns `None` on any other input.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    let s = match s.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')')?,
        None => s,
    };
    if s.is_empty() {
        return None;
    }

    let Some(body) = s.strip_suffix('i') else {
        return Some(Complex::new(parse_part(s)?, 0.0));
    };

    match split_point(body) {
        Some(at) => {
            let re = parse_part(&body[..at])?;
            let im = parse_imaginary(&body[at..])?;
            Some(Complex::new(re, im))
        }
        None => Some(Complex::new(0.0, parse_imaginary(body)?)),
    }
}

/// Index of the sign separating the real and imaginary parts, skipping a leading
/// sign and exponent signs.
fn split_point(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_imaginary(s: &str) -> Option<f64> {
    match s {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_part(s),
    }
}

fn parse_part(s: &str) -> Option<f64> {
    // f64::from_str accepts a leading '+'; reject a doubled sign such as "+-1".
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with(['+', '-']) || unsigned.is_empty() {
        return None;
    }
    f64::from_str(s).ok()
}
