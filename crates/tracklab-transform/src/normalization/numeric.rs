//! Numeric cell coercion.

/// Parses a decimal that may carry `,` thousands separators.
///
/// Returns None for empty or unparseable cells. A textual `NaN` also
/// counts as missing rather than as a measurement.
pub fn parse_grouped_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|parsed| !parsed.is_nan())
}

/// Rounds half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped() {
        assert_eq!(parse_grouped_f64("1,500"), Some(1500.0));
        assert_eq!(parse_grouped_f64("12,345.67"), Some(12345.67));
        assert_eq!(parse_grouped_f64("42"), Some(42.0));
        assert_eq!(parse_grouped_f64("3.14"), Some(3.14));
    }

    #[test]
    fn junk_is_rejected() {
        assert_eq!(parse_grouped_f64(""), None);
        assert_eq!(parse_grouped_f64("--"), None);
        assert_eq!(parse_grouped_f64("fast"), None);
        assert_eq!(parse_grouped_f64("4:35"), None);
        assert_eq!(parse_grouped_f64("NaN"), None);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-2.675), -2.68);
        assert_eq!(round2(5.0), 5.0);
    }
}
