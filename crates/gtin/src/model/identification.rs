//! Identification and normalization results.

use crate::model::BarcodeFormat;

/// A barcode whose format has been determined.
///
/// `full_form` is the zero-padded, fixed-length digit string that
/// validated as `format`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identification {
    pub format: BarcodeFormat,
    pub full_form: String,
}

impl Identification {
    /// `full_form` without its last character.
    pub fn payload(&self) -> &str {
        match self.full_form.char_indices().next_back() {
            Some((last, _)) => &self.full_form[..last],
            None => "",
        }
    }

    /// Trailing check digit of `full_form`, if the last character is a digit.
    pub fn check_digit(&self) -> Option<u8> {
        let last = self.full_form.chars().next_back()?;
        last.to_digit(10).map(|d| d as u8)
    }
}

/// Output of [`normalize_as_ean13`](crate::normalize_as_ean13).
///
/// Carries the canonical value together with the identification that
/// produced it, so callers can log or audit how the input was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalized {
    /// The EAN-13, or its zero-stripped form when stripping was requested.
    pub ean13: String,
    /// How the input was identified before conversion.
    pub identification: Identification,
}

impl Normalized {
    /// The format the input was identified as.
    pub fn source_format(&self) -> BarcodeFormat {
        self.identification.format
    }

    /// Consumes the result, returning only the canonical value.
    pub fn into_ean13(self) -> String {
        self.ean13
    }
}
