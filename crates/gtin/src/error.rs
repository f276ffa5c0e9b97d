//! Error types for GTIN check digit calculation and normalization.
//!
//! Soft failures (bad shape, bad check digit, unrecognized input) are not
//! errors: validators return `false` and converters return `None`. The
//! types here cover contract violations only.

use thiserror::Error;

use crate::model::BarcodeFormat;

/// Invalid input handed to a check digit calculator.
///
/// These indicate a caller bug: the validators never pass malformed
/// prefixes to the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("{format} check digit needs a {expected}-digit prefix, got {actual} digits")]
    PrefixLength {
        format: BarcodeFormat,
        expected: usize,
        actual: usize,
    },

    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}

/// Error returned when a barcode format name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown barcode format: {input:?}")]
pub struct ParseFormatError {
    pub input: String,
}

/// Crate-level error.
///
/// Returned only for logic defects. Rejected input is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The normalizer produced an EAN-13 that fails its own validation.
    ///
    /// This is a defect in the conversion logic, never a property of the
    /// input, and must not be treated as an ordinary rejection.
    #[error("internal invariant violated: {format} {full_form} normalized to invalid EAN-13 {ean13}")]
    InvariantViolation {
        format: BarcodeFormat,
        full_form: String,
        ean13: String,
    },
}

/// A convenience `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_length_message() {
        let err = ChecksumError::PrefixLength {
            format: BarcodeFormat::Ean13,
            expected: 12,
            actual: 11,
        };
        assert_eq!(err.to_string(), "EAN-13 check digit needs a 12-digit prefix, got 11 digits");
    }

    #[test]
    fn test_invariant_violation_message() {
        let err = Error::InvariantViolation {
            format: BarcodeFormat::Upc12,
            full_form: "036000291452".to_string(),
            ean13: "0036000291453".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "internal invariant violated: UPC-12 036000291452 normalized to invalid EAN-13 0036000291453"
        );
    }
}
