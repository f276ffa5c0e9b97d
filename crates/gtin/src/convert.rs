//! Conversions from UPC-12 and ITF-14 to EAN-13.
//!
//! Both conversions recompute the check digit; the source barcode's
//! trailing digit is discarded.

use crate::checksum::complete_ean13;
use crate::limits::UPC_TO_EAN_PREFIX;
use crate::model::BarcodeFormat;
use crate::validate::{is_valid_itf14, is_valid_upc12};

/// Widens a valid UPC-12 to EAN-13 by prefixing a zero.
///
/// ```text
/// ean13 = "0" + upc12[0..11] + ean13_check("0" + upc12[0..11])
/// ```
///
/// Returns `None` if `upc12` is not a valid UPC-12.
pub fn upc12_to_ean13(upc12: &str) -> Option<String> {
    if !is_valid_upc12(upc12) {
        return None;
    }
    let mut prefix = String::with_capacity(BarcodeFormat::Ean13.len());
    prefix.push(UPC_TO_EAN_PREFIX);
    prefix.push_str(&upc12[..BarcodeFormat::Upc12.prefix_len()]);
    complete_ean13(prefix).ok()
}

/// Reduces a valid ITF-14 to EAN-13 by dropping the packaging indicator.
///
/// ```text
/// ean13 = itf14[1..13] + ean13_check(itf14[1..13])
/// ```
///
/// Returns `None` if `itf14` is not a valid ITF-14.
pub fn itf14_to_ean13(itf14: &str) -> Option<String> {
    if !is_valid_itf14(itf14) {
        return None;
    }
    let mut prefix = String::with_capacity(BarcodeFormat::Ean13.len());
    prefix.push_str(&itf14[1..BarcodeFormat::Itf14.prefix_len()]);
    complete_ean13(prefix).ok()
}

/// Converts an identified barcode of any supported format to EAN-13.
///
/// EAN-13 input is returned unchanged after validation.
pub fn to_ean13(barcode: &str, format: BarcodeFormat) -> Option<String> {
    match format {
        BarcodeFormat::Upc12 => upc12_to_ean13(barcode),
        BarcodeFormat::Itf14 => itf14_to_ean13(barcode),
        BarcodeFormat::Ean13 => format.is_valid(barcode).then(|| barcode.to_string()),
    }
}
