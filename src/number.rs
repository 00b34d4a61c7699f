use crate::patterns::parse_number;

const MAGNITUDE_STEP: f64 = 10_000.0;
const MAGNITUDE_UNITS: [&str; 4] = ["", "万", "亿", "万亿"];

/// Strips everything but digits from a numeric text input.
///
/// With `decimal`, dots are kept and the value is cut to its first two dot separated parts
/// (`1.2.3` becomes `1.2`). With `negative`, a leading `-` survives.
pub fn input_only_number(value: &str, decimal: bool, negative: bool) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    let minus = if negative && value.starts_with('-') {
        "-"
    } else {
        ""
    };
    let digits = if decimal {
        let kept: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let mut parts = kept.split('.');
        match (parts.next(), parts.next()) {
            (Some(integer), Some(fraction)) => format!("{integer}.{fraction}"),
            _ => kept,
        }
    } else {
        value.chars().filter(char::is_ascii_digit).collect()
    };
    format!("{minus}{digits}")
}

/// Shortens large numbers with Chinese magnitude units: `12345` becomes `1.23万`.
///
/// Values below 10 000 are returned as they are. Blank, non-numeric and infinite input gives
/// `0`. Two decimals are kept, rounding halves up.
pub fn format_magnitude(value: &str) -> String {
    let number = match parse_number(value) {
        Some(number) if number.is_finite() && number != 0.0 => number,
        _ => return "0".to_string(),
    };
    if number < MAGNITUDE_STEP {
        return number.to_string();
    }
    let exponent = ((number.log10() / MAGNITUDE_STEP.log10()).floor() as usize)
        .min(MAGNITUDE_UNITS.len() - 1);
    let scaled = number / MAGNITUDE_STEP.powi(exponent as i32);
    // `{:.2}` alone would round ties to even.
    format!(
        "{:.2}{}",
        (scaled * 100.0).round() / 100.0,
        MAGNITUDE_UNITS[exponent]
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_digits() {
        assert_eq!(input_only_number(" 12a3 ", false, false), "123");
        assert_eq!(input_only_number("-12.5", false, false), "125");
        assert_eq!(input_only_number("-12.5", false, true), "-125");
        assert_eq!(input_only_number("", true, true), "");
        assert_eq!(input_only_number("   ", true, true), "");
    }

    #[test]
    fn only_decimals() {
        assert_eq!(input_only_number("12.5", true, false), "12.5");
        assert_eq!(input_only_number("1.2.3", true, false), "1.2");
        assert_eq!(input_only_number("a1b.c2", true, false), "1.2");
        assert_eq!(input_only_number("-0.5x", true, true), "-0.5");
        assert_eq!(input_only_number("12", true, false), "12");
        assert_eq!(input_only_number("12.", true, false), "12.");
    }

    #[test]
    fn magnitudes() {
        assert_eq!(format_magnitude(""), "0");
        assert_eq!(format_magnitude("0"), "0");
        assert_eq!(format_magnitude("abc"), "0");
        assert_eq!(format_magnitude("inf"), "0");
        assert_eq!(format_magnitude("Infinity"), "0");
        assert_eq!(format_magnitude("-Infinity"), "0");
        assert_eq!(format_magnitude("9999"), "9999");
        assert_eq!(format_magnitude("1234.5"), "1234.5");
        assert_eq!(format_magnitude("-50000"), "-50000");
        assert_eq!(format_magnitude("12345"), "1.23万");
        assert_eq!(format_magnitude("11250"), "1.13万");
        assert_eq!(format_magnitude("0x2710"), "1.00万");
        assert_eq!(format_magnitude("123456789"), "1.23亿");
        assert_eq!(format_magnitude("2500000000000"), "2.50万亿");
        // no unit above 万亿
        assert_eq!(format_magnitude("1e20"), "100000000.00万亿");
    }
}
