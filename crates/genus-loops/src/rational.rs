//! Exact rational scalars.
//!
//! All geometry in this crate is decided over `Rational`, an arbitrary
//! precision numerator/denominator pair kept in lowest terms with a positive
//! denominator. Equality and ordering are therefore exact and total.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Exact rational scalar used by every geometric type.
pub type Rational = num_rational::BigRational;

/// Errors produced while reading a rational from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RationalParseError {
    #[error("empty rational literal")]
    Empty,
    #[error("invalid rational literal `{0}`")]
    Invalid(String),
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// `n/d` for small constants. `d` must be non-zero.
#[inline]
pub fn rat(n: i64, d: i64) -> Rational {
    debug_assert!(d != 0, "rat: zero denominator");
    Rational::new(BigInt::from(n), BigInt::from(d))
}

/// Integer as a rational.
#[inline]
pub fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Parse `"12"`, `"-2/3"` or a decimal such as `"0.25"` exactly.
pub fn parse_rational(text: &str) -> Result<Rational, RationalParseError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(RationalParseError::Empty);
    }
    if let Some((num, den)) = s.split_once('/') {
        let num = parse_integer(num.trim(), s)?;
        let den = parse_integer(den.trim(), s)?;
        if den.is_zero() {
            return Err(RationalParseError::ZeroDenominator(s.to_string()));
        }
        return Ok(Rational::new(num, den));
    }
    if let Some((whole, frac)) = s.split_once('.') {
        return parse_decimal(whole, frac, s);
    }
    parse_integer(s, s).map(Rational::from_integer)
}

fn parse_integer(digits: &str, whole: &str) -> Result<BigInt, RationalParseError> {
    let unsigned = digits.strip_prefix(['-', '+']).unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RationalParseError::Invalid(whole.to_string()));
    }
    BigInt::from_str(digits).map_err(|_| RationalParseError::Invalid(whole.to_string()))
}

fn parse_decimal(whole: &str, frac: &str, text: &str) -> Result<Rational, RationalParseError> {
    let (negative, whole) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(RationalParseError::Invalid(text.to_string()));
    }
    let mut num = BigInt::zero();
    let ten = BigInt::from(10u32);
    for b in whole.bytes().chain(frac.bytes()) {
        num = num * &ten + BigInt::from(b - b'0');
    }
    let mut den = BigInt::one();
    for _ in 0..frac.len() {
        den *= &ten;
    }
    if negative {
        num = -num;
    }
    Ok(Rational::new(num, den))
}
