//! Display-price heuristics.
//!
//! Menu prices are written in a dot-thousands, comma-decimals convention
//! (`$12.500`, `$12,50`). The parser assumes that convention for every input,
//! so `$12.50` reads as 1250. This is a known limitation of the site data.

/// Parse a display price into an amount. Never fails; garbage reads as 0.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '-')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    leading_float(&cleaned).unwrap_or(0.0)
}

/// Longest numeric prefix of `s`: optional `-`, digits, optional fraction.
/// `"1.2.3"` gives 1.2 and `"5-3"` gives 5, like a lenient float parse.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if negative {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = &s[int_start..end];

    let mut frac_digits = "";
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_thousands_separators() {
        assert_eq!(parse_price("$12.500"), 12500.0);
        assert_eq!(parse_price("$1.250.000"), 1_250_000.0);
    }

    #[test]
    fn comma_is_the_decimal_point() {
        assert_eq!(parse_price("$12,50"), 12.5);
        assert_eq!(parse_price("$ 8.900,75 COP"), 8900.75);
    }

    #[test]
    fn empty_and_garbage_read_as_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("$"), 0.0);
        assert_eq!(parse_price("--5"), 0.0);
    }

    #[test]
    fn takes_the_longest_numeric_prefix() {
        assert_eq!(parse_price("1,2,3"), 1.2);
        assert_eq!(parse_price("5-3"), 5.0);
        assert_eq!(parse_price(",5"), 0.5);
        assert_eq!(parse_price("-4,25"), -4.25);
    }
}
