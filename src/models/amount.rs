use serde::{Serialize, Serializer};
use std::fmt;

/// Non-negative decimal with two fraction digits (liters, kilograms).
///
/// Stored as hundredths so that `72.50` written to disk reads back as the
/// exact same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(u64);

impl Amount {
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(&self) -> u64 {
        self.0
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse `"72.5"`, `"0.5"`, `"70"` or `"70.255"` (rounded half-up).
    ///
    /// Returns `None` for negative, signed, empty or non-numeric input.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };

        let digits: Vec<u64> = frac_part
            .bytes()
            .map(|b| u64::from(b - b'0'))
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let cents = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        whole
            .checked_mul(100)?
            .checked_add(tenths * 10 + cents + u64::from(round_up))
            .map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
