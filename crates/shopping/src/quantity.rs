/// Parse a textual quantity into a number
///
/// Supports formats:
/// - Whole numbers: "2" → 2.0
/// - Decimals: "0.5" → 0.5
/// - Pure fractions: "1/2" → 0.5
/// - Mixed fractions: "1 1/2" → 1.5
///
/// Anything else ("to taste", "a handful", "1/0") has no quantity.
pub fn parse_quantity(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Handle mixed fractions: "1 1/2"
    if let Some((whole, fraction)) = trimmed.split_once(char::is_whitespace) {
        let whole = whole.parse::<u32>().ok()?;
        let fraction = parse_fraction(fraction.trim())?;
        return Some(f64::from(whole) + fraction);
    }

    if trimmed.contains('/') {
        return parse_fraction(trimmed);
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_fraction(text: &str) -> Option<f64> {
    let (numerator, denominator) = text.split_once('/')?;
    let numerator = numerator.parse::<u32>().ok()?;
    let denominator = denominator.parse::<u32>().ok()?;

    if denominator == 0 {
        return None;
    }

    Some(f64::from(numerator) / f64::from(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(parse_quantity("2"), Some(2.0));
        assert_eq!(parse_quantity(" 1.5 "), Some(1.5));
        assert_eq!(parse_quantity("-3"), Some(-3.0));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_quantity("1/2"), Some(0.5));
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("1 1/2"), Some(1.5));
        assert_eq!(parse_quantity("2  1/4"), Some(2.25));
    }

    #[test]
    fn test_parse_rejects_free_text() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("to taste"), None);
        assert_eq!(parse_quantity("pinch"), None);
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("1/2/3"), None);
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_quantity("inf"), None);
    }
}
