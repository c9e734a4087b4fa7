use once_cell::sync::Lazy;
use regex::Regex;

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("integer prefix regex"));

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("float prefix regex")
});

/// Parse the leading integer of a cell: `"1961"`, `" 1961.0"` and `"1961*"` all give 1961.
pub fn parse_int_prefix(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    INT_PREFIX.find(s)?.as_str().parse().ok()
}

/// Parse the leading decimal number of a cell: `"12.5%"` gives 12.5.
/// Only finite results are returned.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let v: f64 = FLOAT_PREFIX.find(s)?.as_str().parse().ok()?;
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix() {
        assert_eq!(parse_int_prefix("1961"), Some(1961));
        assert_eq!(parse_int_prefix("  2011.0"), Some(2011));
        assert_eq!(parse_int_prefix("2024 (est)"), Some(2024));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("n/a"), None);
        assert_eq!(parse_int_prefix("99999999999"), None);
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float_prefix("2.31"), Some(2.31));
        assert_eq!(parse_float_prefix("12.5%"), Some(12.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
        assert_eq!(parse_float_prefix("1e2"), Some(100.0));
        assert_eq!(parse_float_prefix("-0.75 pts"), Some(-0.75));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("Infinity"), None);
        assert_eq!(parse_float_prefix("1e999"), None);
    }
}
