//! Output format selection and number rendering.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render a result for text output.
///
/// With `precision` the value is printed with that many decimals; otherwise
/// the shortest representation that round-trips is used.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

/// Encode a number for JSON output.
///
/// JSON has no representation for infinities or NaN, so those become the
/// strings `"inf"`, `"-inf"` and `"NaN"` instead of `null`.
pub fn json_number(value: f64) -> serde_json::Value {
    match serde_json::Number::from_f64(value) {
        Some(number) => serde_json::Value::Number(number),
        None => serde_json::Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_number() {
        assert_eq!(json_number(16.0), json!(16.0));
        assert_eq!(json_number(-0.5), json!(-0.5));
        assert_eq!(json_number(f64::INFINITY), json!("inf"));
        assert_eq!(json_number(f64::NEG_INFINITY), json!("-inf"));
        assert_eq!(json_number(f64::NAN), json!("NaN"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0, None), "16");
        assert_eq!(format_number(0.1 + 0.2, None), "0.30000000000000004");
        assert_eq!(format_number(2.0 / 3.0, Some(3)), "0.667");
        assert_eq!(format_number(f64::INFINITY, None), "inf");
        assert_eq!(format_number(f64::NAN, Some(2)), "NaN");
    }

    #[test]
    fn test_output_format() {
        assert!(OutputFormat::from_json_flag(true).is_json());
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }
}
