//! Shape and check digit validation for GTIN barcodes.
//!
//! Validators never fail: malformed input of any kind (wrong length,
//! non-digits, surrounding whitespace) simply returns `false`. Callers are
//! responsible for trimming.

use crate::checksum::calculate_check_digit;
use crate::model::BarcodeFormat;

/// Checks that `barcode` is exactly `format.len()` ASCII digits.
///
/// This is a shape check only; the check digit is not examined.
pub fn validate_barcode(barcode: &str, format: BarcodeFormat) -> bool {
    barcode.len() == format.len() && barcode.bytes().all(|b| b.is_ascii_digit())
}

/// Checks shape and check digit of `barcode` as `format`.
pub fn is_valid(barcode: &str, format: BarcodeFormat) -> bool {
    if !validate_barcode(barcode, format) {
        return false;
    }
    let (prefix, check) = barcode.split_at(format.prefix_len());
    let (odd, even) = format.weights();
    match calculate_check_digit(prefix, odd, even) {
        Ok(expected) => check.as_bytes()[0] - b'0' == expected,
        Err(_) => false,
    }
}

/// Returns true for a 12-digit UPC-12 with a correct check digit.
pub fn is_valid_upc12(barcode: &str) -> bool {
    is_valid(barcode, BarcodeFormat::Upc12)
}

/// Returns true for a 13-digit EAN-13 with a correct check digit.
pub fn is_valid_ean13(barcode: &str) -> bool {
    is_valid(barcode, BarcodeFormat::Ean13)
}

/// Returns true for a 14-digit ITF-14 with a correct check digit.
pub fn is_valid_itf14(barcode: &str) -> bool {
    is_valid(barcode, BarcodeFormat::Itf14)
}

/// The format whose shape `barcode` matches, regardless of check digit.
pub fn shape_of(barcode: &str) -> Option<BarcodeFormat> {
    BarcodeFormat::from_len(barcode.len()).filter(|format| validate_barcode(barcode, *format))
}
