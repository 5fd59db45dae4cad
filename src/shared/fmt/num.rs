//! Number formatting helpers shared by the price formatters.

/// Inserts thousands separators into an already formatted number string.
///
/// The fractional part (if any) is left untouched, so callers choose the
/// number of decimal places before grouping.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Trims trailing fractional zeros (`"1.50"` → `"1.5"`, `"2.00"` → `"2"`).
pub fn trim_trailing_zeros(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_integers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_thousands_keeps_fraction() {
        assert_eq!(group_thousands("1234.50"), "1,234.50");
        assert_eq!(group_thousands("52.50"), "52.50");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1000"), "-1,000");
        assert_eq!(group_thousands("-123456.7"), "-123,456.7");
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(trim_trailing_zeros("1.50"), "1.5");
        assert_eq!(trim_trailing_zeros("2.00"), "2");
        assert_eq!(trim_trailing_zeros("100"), "100");
    }
}
