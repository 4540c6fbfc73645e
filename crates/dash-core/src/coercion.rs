//! Tolerant numeric coercion for untrusted spreadsheet cells.
//!
//! Malformed cells never fail an ingestion; they degrade to zero. The
//! degrade is tagged so callers (and tests) can tell a parsed zero from a
//! defaulted one and count how much of a dataset was silently zeroed.

/// Outcome of coercing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// The cell held a usable value.
    Parsed(T),
    /// The cell was missing or unparseable; the field default applies.
    Defaulted,
}

impl<T: Copy + Default> Coerced<T> {
    /// The coerced value, with `T::default()` standing in for a degrade.
    pub fn value(self) -> T {
        match self {
            Coerced::Parsed(v) => v,
            Coerced::Defaulted => T::default(),
        }
    }

    /// `true` when the cell actually parsed.
    pub fn was_parsed(self) -> bool {
        matches!(self, Coerced::Parsed(_))
    }
}

/// Coerce a spend cell to a non-negative float.
///
/// The trimmed cell must be a bare decimal number: embedded currency symbols
/// or thousands separators are not stripped, so `"£1,200.00"` degrades to
/// zero. Negative and non-finite values also degrade, keeping the
/// non-negative invariant on spend.
pub fn coerce_spend(cell: Option<&str>) -> Coerced<f64> {
    let Some(cell) = cell else {
        return Coerced::Defaulted;
    };
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Coerced::Parsed(v),
        _ => Coerced::Defaulted,
    }
}

/// Coerce a count cell to a non-negative integer.
///
/// Takes the leading base-10 digit run of the trimmed cell (after an
/// optional `+` sign), so `"12 approx"` parses as 12 while `"abc"` and
/// `"-3"` degrade to zero. Overflow past `u64::MAX` degrades as well.
pub fn coerce_count(cell: Option<&str>) -> Coerced<u64> {
    let Some(cell) = cell else {
        return Coerced::Defaulted;
    };
    let trimmed = cell.trim();
    let digits: &str = {
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        &unsigned[..end]
    };
    if digits.is_empty() {
        return Coerced::Defaulted;
    }
    match digits.parse::<u64>() {
        Ok(v) => Coerced::Parsed(v),
        Err(_) => Coerced::Defaulted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Coerced ───────────────────────────────────────────────────────────

    #[test]
    fn test_coerced_value_and_tag() {
        assert_eq!(Coerced::Parsed(7u64).value(), 7);
        assert!(Coerced::Parsed(7u64).was_parsed());
        assert_eq!(Coerced::<u64>::Defaulted.value(), 0);
        assert!(!Coerced::<u64>::Defaulted.was_parsed());
    }

    // ── coerce_spend ──────────────────────────────────────────────────────

    #[test]
    fn test_spend_plain_decimal() {
        assert_eq!(coerce_spend(Some("100.50")), Coerced::Parsed(100.50));
    }

    #[test]
    fn test_spend_integer_string() {
        assert_eq!(coerce_spend(Some("250")), Coerced::Parsed(250.0));
    }

    #[test]
    fn test_spend_surrounding_whitespace() {
        assert_eq!(coerce_spend(Some("  12.5 ")), Coerced::Parsed(12.5));
    }

    #[test]
    fn test_spend_missing_cell() {
        assert_eq!(coerce_spend(None), Coerced::Defaulted);
    }

    #[test]
    fn test_spend_currency_symbol_not_stripped() {
        assert_eq!(coerce_spend(Some("£100.50")), Coerced::Defaulted);
    }

    #[test]
    fn test_spend_thousands_separator_not_stripped() {
        assert_eq!(coerce_spend(Some("1,200.00")), Coerced::Defaulted);
    }

    #[test]
    fn test_spend_garbage() {
        assert_eq!(coerce_spend(Some("n/a")), Coerced::Defaulted);
    }

    #[test]
    fn test_spend_negative_degrades() {
        assert_eq!(coerce_spend(Some("-5.0")), Coerced::Defaulted);
    }

    #[test]
    fn test_spend_non_finite_degrades() {
        assert_eq!(coerce_spend(Some("inf")), Coerced::Defaulted);
        assert_eq!(coerce_spend(Some("NaN")), Coerced::Defaulted);
    }

    // ── coerce_count ──────────────────────────────────────────────────────

    #[test]
    fn test_count_plain_integer() {
        assert_eq!(coerce_count(Some("200")), Coerced::Parsed(200));
    }

    #[test]
    fn test_count_leading_digit_prefix() {
        assert_eq!(coerce_count(Some("12 approx")), Coerced::Parsed(12));
        assert_eq!(coerce_count(Some("1,200")), Coerced::Parsed(1));
    }

    #[test]
    fn test_count_plus_sign() {
        assert_eq!(coerce_count(Some("+15")), Coerced::Parsed(15));
    }

    #[test]
    fn test_count_no_digit_prefix() {
        assert_eq!(coerce_count(Some("abc")), Coerced::Defaulted);
    }

    #[test]
    fn test_count_negative_degrades() {
        assert_eq!(coerce_count(Some("-3")), Coerced::Defaulted);
    }

    #[test]
    fn test_count_missing_cell() {
        assert_eq!(coerce_count(None), Coerced::Defaulted);
    }

    #[test]
    fn test_count_empty_string() {
        assert_eq!(coerce_count(Some("")), Coerced::Defaulted);
        assert_eq!(coerce_count(Some("   ")), Coerced::Defaulted);
    }

    #[test]
    fn test_count_overflow_degrades() {
        // 21 digits, past u64::MAX.
        assert_eq!(
            coerce_count(Some("999999999999999999999")),
            Coerced::Defaulted
        );
    }

    #[test]
    fn test_count_fractional_truncates_at_dot() {
        assert_eq!(coerce_count(Some("10.9")), Coerced::Parsed(10));
    }
}
