//! Lenient parsing and display helpers for imported values.
//!
//! Importers hand over spreadsheet text (`"3.2%"`, `"฿1,204.50"`). Every parser
//! here falls back to `0` instead of failing, so aggregates stay finite.

/// Currency symbol used when the tenant has not configured one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "฿";

/// Parse a percentage string: `"3.2%"` → `3.2`.
///
/// Reads the longest numeric prefix after the first `%` is removed, so
/// `" 4.5 %"` and `"4.5% (est.)"` both read as `4.5`.
pub fn parse_percent(text: &str) -> f64 {
    finite_or_zero(leading_float(&text.replacen('%', "", 1)))
}

/// Parse a money amount, ignoring symbols and grouping: `"฿1,204.50"` → `1204.5`.
pub fn parse_currency(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    finite_or_zero(leading_float(&cleaned))
}

/// Parse a count, rounding halves up: `"12.5 pcs"` → `13`.
pub fn parse_integer(text: &str) -> i64 {
    (parse_currency(text) + 0.5).floor() as i64
}

/// Format an amount with thousands grouping and two decimals: `฿1,234.50`.
///
/// Non-finite amounts are shown as zero.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{symbol}{sign}{grouped}.{cents}")
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Longest prefix of `text` (after leading whitespace) that reads as a decimal
/// float with optional sign, fraction and exponent.
fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_run(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_run(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_run(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_strings_parse_to_their_number() {
        assert_eq!(parse_percent("3.2%"), 3.2);
        assert_eq!(parse_percent(" 4.5 %"), 4.5);
        assert_eq!(parse_percent("4.5% (est.)"), 4.5);
        assert_eq!(parse_percent("-1.5%"), -1.5);
        assert_eq!(parse_percent(".5%"), 0.5);
        assert_eq!(parse_percent("7."), 7.0);
        assert_eq!(parse_percent("1e2%"), 100.0);
    }

    #[test]
    fn unparseable_percent_falls_back_to_zero() {
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("%"), 0.0);
        assert_eq!(parse_percent("n/a"), 0.0);
        assert_eq!(parse_percent("-"), 0.0);
        assert_eq!(parse_percent("."), 0.0);
        assert_eq!(parse_percent("1e999"), 0.0);
    }

    #[test]
    fn exponent_without_digits_is_not_consumed() {
        assert_eq!(parse_percent("2e%"), 2.0);
        assert_eq!(parse_percent("2e+"), 2.0);
    }

    #[test]
    fn currency_strips_symbols_and_grouping() {
        assert_eq!(parse_currency("฿1,204.50"), 1204.5);
        assert_eq!(parse_currency("$ -12"), -12.0);
        assert_eq!(parse_currency("free"), 0.0);
        assert_eq!(parse_currency("1.2.3"), 1.2);
    }

    #[test]
    fn integers_round_half_up() {
        assert_eq!(parse_integer("12.5 pcs"), 13);
        assert_eq!(parse_integer("12.4"), 12);
        assert_eq!(parse_integer("-2.5"), -2);
        assert_eq!(parse_integer(""), 0);
    }

    #[test]
    fn currency_is_grouped_with_two_decimals() {
        assert_eq!(format_currency(1234.5, DEFAULT_CURRENCY_SYMBOL), "฿1,234.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891, "€"), "€1,234,567.89");
        assert_eq!(format_currency(-42.1, "$"), "$-42.10");
        assert_eq!(format_currency(f64::NAN, "$"), "$0.00");
    }

    #[test]
    fn currency_beyond_integer_cents_keeps_every_digit() {
        assert_eq!(
            format_currency(1e18, "$"),
            "$1,000,000,000,000,000,000.00"
        );
        assert_eq!(format_currency(-2.5e17, "฿"), "฿-250,000,000,000,000,000.00");
    }
}
