/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Round to the requested decimal places. Add a tiny epsilon before
    // rounding to avoid IEEE 754 binary-representation issues at midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        format!("{}{}", grouped, &frac_str[1..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a monetary amount with the given currency symbol, two decimal
/// places and thousands separators.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_currency;
///
/// assert_eq!(format_currency(1234.56, "£"), "£1,234.56");
/// assert_eq!(format_currency(0.0, "$"),     "$0.00");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_number(amount.max(0.0), 2))
}

/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_count;
///
/// assert_eq!(format_count(1_234), "1,234");
/// assert_eq!(format_count(0), "0");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_no_thousands() {
        assert_eq!(format_number(123.456, 2), "123.46");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
    }

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }

    #[test]
    fn test_format_number_exact_thousands() {
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    #[test]
    fn test_format_number_rounds_up() {
        assert_eq!(format_number(1.005, 2), "1.01");
    }

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_pounds() {
        assert_eq!(format_currency(1_234.56, "£"), "£1,234.56");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(0.0, "£"), "£0.00");
    }

    #[test]
    fn test_format_currency_other_symbol() {
        assert_eq!(format_currency(99.9, "$"), "$99.90");
    }

    #[test]
    fn test_format_currency_cost_per_ticket() {
        // 100.50 spend over 10 tickets.
        assert_eq!(format_currency(10.05, "£"), "£10.05");
    }

    // ── format_count ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(5), "5");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_format_count_grouped() {
        assert_eq!(format_count(1_234), "1,234");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
