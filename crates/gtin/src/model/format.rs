//! Barcode format tags.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFormatError;
use crate::limits::{EAN13_LEN, EAN13_WEIGHTS, ITF14_LEN, ITF14_WEIGHTS, UPC12_LEN, UPC12_WEIGHTS};

/// The numeric barcode formats this crate understands.
///
/// The declaration order is the identification priority: shorter, more
/// specific formats are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BarcodeFormat {
    /// 12-digit North American retail code.
    #[cfg_attr(feature = "serde", serde(rename = "UPC-12"))]
    Upc12 = 12,
    /// 13-digit international retail code.
    #[cfg_attr(feature = "serde", serde(rename = "EAN-13"))]
    Ean13 = 13,
    /// 14-digit case/carton shipping code. The first digit is the
    /// packaging indicator.
    #[cfg_attr(feature = "serde", serde(rename = "ITF-14"))]
    Itf14 = 14,
}

impl BarcodeFormat {
    /// All formats in identification priority order.
    pub const ALL: [BarcodeFormat; 3] = [BarcodeFormat::Upc12, BarcodeFormat::Ean13, BarcodeFormat::Itf14];

    /// Creates a format from its digit count.
    ///
    /// Every format has a distinct length, so the digit count alone picks
    /// the only format a full-length barcode can have the shape of.
    pub fn from_len(len: usize) -> Option<BarcodeFormat> {
        match len {
            UPC12_LEN => Some(BarcodeFormat::Upc12),
            EAN13_LEN => Some(BarcodeFormat::Ean13),
            ITF14_LEN => Some(BarcodeFormat::Itf14),
            _ => None,
        }
    }

    /// Number of digits in a full barcode of this format, check digit included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        match self {
            BarcodeFormat::Upc12 => UPC12_LEN,
            BarcodeFormat::Ean13 => EAN13_LEN,
            BarcodeFormat::Itf14 => ITF14_LEN,
        }
    }

    /// Number of digits covered by the check digit.
    pub fn prefix_len(self) -> usize {
        self.len() - 1
    }

    /// Checksum weights as `(odd, even)` in 1-based positions.
    pub fn weights(self) -> (u32, u32) {
        match self {
            BarcodeFormat::Upc12 => UPC12_WEIGHTS,
            BarcodeFormat::Ean13 => EAN13_WEIGHTS,
            BarcodeFormat::Itf14 => ITF14_WEIGHTS,
        }
    }

    /// Human-readable name, e.g. `"EAN-13"`.
    pub fn name(self) -> &'static str {
        match self {
            BarcodeFormat::Upc12 => "UPC-12",
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Itf14 => "ITF-14",
        }
    }

    /// Returns true if `barcode` has this format's shape and a matching check digit.
    pub fn is_valid(self, barcode: &str) -> bool {
        crate::validate::is_valid(barcode, self)
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarcodeFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "upc12" | "upc" => Ok(BarcodeFormat::Upc12),
            // "UPC-13" is an older name for the same 13-digit format.
            "ean13" | "ean" | "upc13" => Ok(BarcodeFormat::Ean13),
            "itf14" | "itf" => Ok(BarcodeFormat::Itf14),
            _ => Err(ParseFormatError { input: s.to_string() }),
        }
    }
}
