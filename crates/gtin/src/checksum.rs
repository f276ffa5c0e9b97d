//! Weighted-sum mod-10 check digits.
//!
//! Every supported format uses the same algorithm with alternating
//! weights:
//! ```text
//! sum   = Σ digit[i] * (i even ? weight_odd : weight_even)   // i is 0-based
//! check = (10 - sum % 10) % 10
//! ```
//! Appending `check` at the next position makes the weighted sum of the
//! whole code a multiple of 10.

use crate::error::ChecksumError;
use crate::model::BarcodeFormat;

/// Computes the check digit for `data` with the given position weights.
///
/// `weight_odd` applies to 1-based odd positions (0-based even indices).
/// An empty string yields `0`.
pub fn calculate_check_digit(data: &str, weight_odd: u32, weight_even: u32) -> Result<u8, ChecksumError> {
    let (odd, even) = (weight_odd % 10, weight_even % 10);
    let mut sum = 0u32;
    for (position, found) in data.chars().enumerate() {
        let digit = found
            .to_digit(10)
            .ok_or(ChecksumError::NonDigit { position, found })?;
        let weight = if position % 2 == 0 { odd } else { even };
        // Only the residue matters, so keep the running sum small.
        sum = (sum + digit * weight) % 10;
    }
    Ok(((10 - sum) % 10) as u8)
}

/// Computes the check digit for a prefix of `format`, enforcing its length.
pub fn calculate_format_check_digit(format: BarcodeFormat, prefix: &str) -> Result<u8, ChecksumError> {
    let expected = format.prefix_len();
    let actual = prefix.chars().count();
    if actual != expected {
        return Err(ChecksumError::PrefixLength { format, expected, actual });
    }
    let (odd, even) = format.weights();
    calculate_check_digit(prefix, odd, even)
}

/// UPC-12 check digit over an 11-digit prefix.
pub fn calculate_upc12_check_digit(prefix: &str) -> Result<u8, ChecksumError> {
    calculate_format_check_digit(BarcodeFormat::Upc12, prefix)
}

/// EAN-13 check digit over a 12-digit prefix.
pub fn calculate_ean13_check_digit(prefix: &str) -> Result<u8, ChecksumError> {
    calculate_format_check_digit(BarcodeFormat::Ean13, prefix)
}

/// ITF-14 check digit over a 13-digit prefix.
pub fn calculate_itf14_check_digit(prefix: &str) -> Result<u8, ChecksumError> {
    calculate_format_check_digit(BarcodeFormat::Itf14, prefix)
}

/// Appends the EAN-13 check digit to a 12-digit prefix.
pub(crate) fn complete_ean13(prefix: String) -> Result<String, ChecksumError> {
    let check = calculate_ean13_check_digit(&prefix)?;
    let mut ean13 = prefix;
    ean13.push(char::from(b'0' + check));
    Ok(ean13)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_check_digit("", 3, 1), Ok(0));
        assert_eq!(calculate_check_digit("", 1, 3), Ok(0));
    }

    #[test]
    fn test_known_check_digits() {
        assert_eq!(calculate_upc12_check_digit("03600029145"), Ok(2));
        assert_eq!(calculate_upc12_check_digit("01234567890"), Ok(5));
        assert_eq!(calculate_ean13_check_digit("400638133393"), Ok(1));
        assert_eq!(calculate_ean13_check_digit("085510000955"), Ok(8));
        assert_eq!(calculate_itf14_check_digit("1085510000955"), Ok(5));
        assert_eq!(calculate_itf14_check_digit("1001234567890"), Ok(2));
    }

    #[test]
    fn test_weights_are_positional() {
        // "1" alone: odd weight only.
        assert_eq!(calculate_check_digit("1", 3, 1), Ok(7));
        assert_eq!(calculate_check_digit("1", 1, 3), Ok(9));
        // "01": even weight only.
        assert_eq!(calculate_check_digit("01", 3, 1), Ok(9));
        assert_eq!(calculate_check_digit("01", 1, 3), Ok(7));
    }

    #[test]
    fn test_large_weights_match_small() {
        assert_eq!(
            calculate_check_digit("400638133393", 11, 13),
            calculate_check_digit("400638133393", 1, 3)
        );
    }

    #[test]
    fn test_prefix_length_rejected() {
        let result = calculate_ean13_check_digit("12345678901");
        assert_eq!(
            result,
            Err(ChecksumError::PrefixLength {
                format: BarcodeFormat::Ean13,
                expected: 12,
                actual: 11,
            })
        );
        assert!(calculate_upc12_check_digit("036000291452").is_err());
        assert!(calculate_itf14_check_digit("").is_err());
    }

    #[test]
    fn test_non_digit_rejected() {
        let result = calculate_upc12_check_digit("0360002914a");
        assert_eq!(result, Err(ChecksumError::NonDigit { position: 10, found: 'a' }));
        assert!(calculate_check_digit("-1", 3, 1).is_err());
    }

    #[test]
    fn test_complete_ean13() {
        assert_eq!(complete_ean13("400638133393".to_string()).unwrap(), "4006381333931");
    }
}
