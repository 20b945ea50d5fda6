use base64::{engine::general_purpose::STANDARD, Engine as _};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. NGN = 2, JPY = 0).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a cash amount as the currency glyph followed by the locale-grouped
/// value with the currency's decimal places (ex. ₦1,500.50).
///
/// For consistency, uses en locale ('.' as decimal mark, ',' as thousands
/// separator) regardless of user's locale or currency.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}", currency.symbol(), integer_part)
    } else {
        let fractional_part = format!("{:.decimal_places$}", amount.fract())
            .split('.')
            .nth(1)
            .map(|f| f.to_string())
            .unwrap_or_default();
        format!(
            "{}{}.{:0decimal_places$}",
            currency.symbol(),
            integer_part,
            fractional_part,
        )
    }
}

/// Browser-style download payload for an exported binary.
pub fn download_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_pads_decimals() {
        assert_eq!(format_amount(1500.5, Currency::NGN), "₦1,500.50");
        assert_eq!(format_amount(0.0, Currency::NGN), "₦0.00");
        assert_eq!(format_amount(1_000_000.0, Currency::NGN), "₦1,000,000.00");
    }

    #[test]
    fn zero_decimal_currencies_have_no_mark() {
        assert_eq!(format_amount(1500.0, Currency::JPY), "¥1,500");
    }

    #[test]
    fn data_url_is_base64_encoded() {
        assert_eq!(
            download_data_url(b"hello", "text/plain"),
            "data:text/plain;base64,aGVsbG8="
        );
    }
}
