use serde::{Deserialize, Serialize};

/// Grouped number rendering for totals and the vanity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: u32,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ".".to_owned(),
            decimal_separator: ",".to_owned(),
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    /// Render `value` with digit grouping, rounding to at most
    /// `max_fraction_digits` and dropping trailing zeros.
    pub fn format_amount(&self, value: f64) -> String {
        if !value.is_finite() {
            return "0".to_owned();
        }
        let digits = self.max_fraction_digits.min(9);
        let scale = 10u128.pow(digits);
        let units = (value.abs() * scale as f64).round() as u128;
        let whole = units / scale;
        let fraction = units % scale;

        let mut out = String::new();
        if value.is_sign_negative() && units != 0 {
            out.push('-');
        }
        out.push_str(&self.group(whole));

        if fraction != 0 {
            let padded = format!("{fraction:0width$}", width = digits as usize);
            out.push_str(&self.decimal_separator);
            out.push_str(padded.trim_end_matches('0'));
        }
        out
    }

    pub fn format_count(&self, value: u64) -> String {
        self.group(u128::from(value))
    }

    fn group(&self, whole: u128) -> String {
        let raw = whole.to_string();
        let mut out = String::with_capacity(raw.len() + raw.len() / 3);
        for (i, ch) in raw.chars().enumerate() {
            if i > 0 && (raw.len() - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_amount(25.0), "25");
        assert_eq!(fmt.format_amount(12500.0), "12.500");
        assert_eq!(fmt.format_amount(1_234_567.0), "1.234.567");
        assert_eq!(fmt.format_count(100), "100");
        assert_eq!(fmt.format_count(1000), "1.000");
    }

    #[test]
    fn fractions_are_rounded_and_trimmed() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_amount(12.5), "12,5");
        assert_eq!(fmt.format_amount(1234.5678), "1.234,568");
        assert_eq!(fmt.format_amount(0.0004), "0");
    }

    #[test]
    fn negative_and_non_finite() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_amount(-1500.25), "-1.500,25");
        assert_eq!(fmt.format_amount(-0.0), "0");
        assert_eq!(fmt.format_amount(f64::NAN), "0");
    }

    #[test]
    fn custom_separators() {
        let fmt = NumberFormat {
            thousands_separator: ",".into(),
            decimal_separator: ".".into(),
            max_fraction_digits: 2,
        };
        assert_eq!(fmt.format_amount(9876.543), "9,876.54");
    }
}
