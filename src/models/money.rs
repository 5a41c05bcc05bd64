//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that summing many expenses
//! never drifts. Floating point only appears when computing percentages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude of a single amount: $1,000,000,000.00
///
/// Sums of up to ninety million such amounts still fit in an i64.
const MAX_CENTS: i64 = 100_000_000_000;

/// A signed amount in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input
    pub const MAX: Money = Money(MAX_CENTS);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// `from_dollars_cents(12, 5)` is $12.05
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a Money amount from a floating point dollar value
    ///
    /// Rounds to the nearest cent. NaN and infinities are rejected.
    pub fn from_f64(dollars: f64) -> Result<Self, MoneyParseError> {
        if !dollars.is_finite() {
            return Err(MoneyParseError::NonFinite);
        }
        let cents = (dollars * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(dollars.to_string()));
        }
        Ok(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional cents, always 0..=99
    pub const fn cents_part(&self) -> i64 {
        self.0.abs() % 100
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Whether the magnitude is above `Money::MAX`
    pub const fn exceeds_limit(&self) -> bool {
        self.0.unsigned_abs() > MAX_CENTS as u64
    }

    /// Take `percent` percent of this amount, rounding half away from zero
    ///
    /// ```
    /// use budget_buddy::models::Money;
    /// assert_eq!(Money::from_cents(25000).percent(30), Money::from_cents(7500));
    /// ```
    pub fn percent(&self, percent: u32) -> Self {
        let scaled = self.0 as i128 * percent as i128;
        let half = if scaled < 0 { -50 } else { 50 };
        Self(((scaled + half) / 100) as i64)
    }

    /// This amount as a percentage of `whole`; 0 when `whole` is zero
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Parse a typed amount.
    ///
    /// Accepts: "10.50", "-10.50", "$10.50", "10", ".5". Digits past
    /// the second decimal place round half away from zero. Anything above
    /// `Money::MAX` in magnitude is `OutOfRange`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let lowered = s.to_ascii_lowercase();
        if matches!(lowered.as_str(), "nan" | "inf" | "infinity") {
            return Err(MoneyParseError::NonFinite);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(MoneyParseError::InvalidFormat(s.into()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?
        };

        let digits: Vec<i64> = frac
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .chain(std::iter::repeat(0))
            .take(3)
            .collect();
        let mut cents_part = digits[0] * 10 + digits[1];
        if digits[2] >= 5 {
            cents_part += 1;
        }

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Two-decimal rendering with the sign ahead of the symbol (`-€12.50`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.0.unsigned_abs() / 100;
        format!("{}{}{}.{:02}", sign, symbol, units, self.cents_part())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

// Arithmetic saturates at the i64 bounds.
macro_rules! money_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $inner:ident) => {
        impl $op for Money {
            type Output = Money;

            fn $method(self, rhs: Money) -> Money {
                Money(self.0.$inner(rhs.0))
            }
        }

        impl $assign for Money {
            fn $assign_method(&mut self, rhs: Money) {
                *self = self.$method(rhs);
            }
        }
    };
}

money_binop!(Add, add, AddAssign, add_assign, saturating_add);
money_binop!(Sub, sub, SubAssign, sub_assign, saturating_sub);

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |total, m| total + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Why a typed amount was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    NonFinite,
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::NonFinite => write!(f, "Amount must be a finite number"),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_split() {
        let amount = Money::from_dollars_cents(12, 5);
        assert_eq!(amount.cents(), 1205);
        assert_eq!(amount.dollars(), 12);
        assert_eq!(amount.cents_part(), 5);
        assert_eq!((-amount).cents_part(), 5);
    }

    #[test]
    fn test_display_uses_dollars() {
        assert_eq!(Money::from_cents(4999).to_string(), "$49.99");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-20000).to_string(), "-$200.00");
        assert_eq!(Money::from_cents(-7).to_string(), "-$0.07");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "   $0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with_symbol("€"), "€1234.56");
        assert_eq!(Money::from_cents(-5).format_with_symbol("NZ$"), "-NZ$0.05");
    }

    #[test]
    fn test_parse_accepted_forms() {
        for (input, cents) in [
            ("150", 15_000),
            ("150.5", 15_050),
            ("$150.50", 15_050),
            ("-42.10", -4_210),
            (".5", 50),
            ("0.05", 5),
            (" 7 ", 700),
        ] {
            assert_eq!(Money::parse(input).unwrap().cents(), cents, "{}", input);
        }
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("10.005").unwrap().cents(), 1001);
        assert_eq!(Money::parse("10.004").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("NaN"), Err(MoneyParseError::NonFinite));
        assert_eq!(Money::parse("inf"), Err(MoneyParseError::NonFinite));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Money::from_f64(19.99).unwrap().cents(), 1999);
        assert_eq!(Money::from_f64(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_f64(f64::NAN), Err(MoneyParseError::NonFinite));
        assert_eq!(Money::from_f64(f64::INFINITY), Err(MoneyParseError::NonFinite));
        assert!(matches!(Money::from_f64(2e9), Err(MoneyParseError::OutOfRange(_))));
    }

    #[test]
    fn test_parse_enforces_limit() {
        assert_eq!(Money::parse("1000000000").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-1000000000").unwrap(), -Money::MAX);
        for input in ["1000000000.01", "50000000000000000", "-2000000000"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::OutOfRange(_))),
                "{}",
                input
            );
        }
        assert!(!Money::MAX.exceeds_limit());
        assert!(Money::from_cents(i64::MIN).exceeds_limit());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - huge).cents(), i64::MIN);
        let total: Money = [huge, huge, Money::from_cents(5)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::from_cents(25000).percent(30), Money::from_cents(7500));
        assert_eq!(Money::from_cents(33333).percent(30), Money::from_cents(10000));
        assert_eq!(Money::from_cents(-1005).percent(50), Money::from_cents(-503));
    }

    #[test]
    fn test_percent_of() {
        let total = Money::from_cents(120000);
        let income = Money::from_cents(100000);
        assert!((total.percent_of(income) - 120.0).abs() < 1e-9);
        assert_eq!(total.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_sum_has_no_drift() {
        let amounts = vec![Money::from_cents(10); 1000];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 10_000);
    }

    #[test]
    fn test_serializes_as_bare_cents() {
        assert_eq!(serde_json::to_string(&Money::from_cents(-250)).unwrap(), "-250");
        let parsed: Money = serde_json::from_str("99").unwrap();
        assert_eq!(parsed, Money::from_cents(99));
    }
}
