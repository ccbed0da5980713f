use rust_decimal::Decimal;
use std::str::FromStr;

/// PriceNormalizer converts heterogeneous currency-formatted strings into
/// decimal values.
///
/// Vendor responses mix US ("1,234.50") and EU ("1.234,50") separator
/// conventions and decorate values with currency symbols and unit text.
/// Normalization never fails: any unparseable input degrades to zero, and
/// callers must treat zero as "no usable price" rather than a real price.
pub struct PriceNormalizer;

impl PriceNormalizer {
    /// Parses a raw price string into a decimal.
    ///
    /// Every character that is not a digit, dot or comma is stripped.
    /// When both separators appear, the one occurring first is the
    /// thousands separator and is removed; the other becomes the decimal
    /// marker. A lone comma is treated as the decimal marker.
    ///
    /// # Examples
    /// - `"$1,234.50"` -> `1234.50`
    /// - `"1.234,50 €"` -> `1234.50`
    /// - `""` or `"abc"` -> `0`
    pub fn normalize(raw: &str) -> Decimal {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect();

        if cleaned.is_empty() {
            return Decimal::ZERO;
        }

        let comma = cleaned.find(',');
        let dot = cleaned.find('.');

        let normalized = match (comma, dot) {
            (Some(comma_idx), Some(dot_idx)) => {
                if comma_idx < dot_idx {
                    // US convention: comma separates thousands
                    cleaned.replace(',', "")
                } else {
                    // EU convention: dot separates thousands
                    cleaned.replace('.', "").replace(',', ".")
                }
            }
            (Some(_), None) => cleaned.replace(',', "."),
            _ => cleaned,
        };

        Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
    }

    /// Extracts the digit characters of a free-form text as one integer,
    /// discarding any surrounding noise ("1,500 In Stock" -> 1500).
    /// Returns None when the text contains no digits at all.
    pub fn extract_digits(raw: &str) -> Option<i64> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}
