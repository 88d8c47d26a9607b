/// Parse a quantity input the way the cart rows expect: the leading integer
/// of the text, with anything missing, zero or negative becoming 1.
pub fn parse_qty(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 1;
    }
    digits[..end]
        .parse::<u32>()
        .unwrap_or(u32::MAX)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_at_one() {
        assert_eq!(parse_qty("0"), 1);
        assert_eq!(parse_qty("-3"), 1);
        assert_eq!(parse_qty(""), 1);
        assert_eq!(parse_qty("abc"), 1);
    }

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_qty("4"), 4);
        assert_eq!(parse_qty(" 7"), 7);
        assert_eq!(parse_qty("3.9"), 3);
        assert_eq!(parse_qty("12abc"), 12);
        assert_eq!(parse_qty("+2"), 2);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_qty("99999999999999"), u32::MAX);
    }
}
