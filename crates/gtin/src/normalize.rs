//! Canonical EAN-13 normalization.
//!
//! Composes identification, conversion and optional zero stripping:
//! 1. Strip leading zeros and identify the remaining digits.
//! 2. Convert UPC-12 or ITF-14 to EAN-13; EAN-13 passes through.
//! 3. Re-validate the EAN-13. Failure here is a logic defect.
//! 4. Optionally strip leading zeros from the result.

use log::{debug, error};

use crate::convert::{itf14_to_ean13, upc12_to_ean13};
use crate::error::{Error, Result};
use crate::identify::{IdentifyOptions, identify_barcode_type};
use crate::model::{BarcodeFormat, Identification, Normalized};
use crate::validate::is_valid_ean13;

/// Options for [`normalize_as_ean13`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeOptions {
    /// Strip leading zeros from the final EAN-13.
    pub strip_leading_zeroes: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_leading_zeroes(mut self, strip: bool) -> Self {
        self.strip_leading_zeroes = strip;
        self
    }
}

/// Normalizes any supported barcode to its canonical EAN-13.
///
/// Returns `Ok(None)` for absent, empty or unrecognized input. The
/// identification that led to the result is returned alongside it in
/// [`Normalized`].
///
/// # Errors
///
/// [`Error::InvariantViolation`] if the converted value fails EAN-13
/// validation. This never happens for correct conversion logic and should
/// not be handled as a rejected input.
pub fn normalize_as_ean13(original: Option<&str>, options: NormalizeOptions) -> Result<Option<Normalized>> {
    let Some(original) = original.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let digits = original.trim_start_matches('0');
    let Some(identification) = identify_barcode_type(digits, IdentifyOptions::new()) else {
        return Ok(None);
    };
    debug!(
        "{:?} identified as {} {}",
        original, identification.format, identification.full_form
    );

    let converted = match identification.format {
        BarcodeFormat::Itf14 => itf14_to_ean13(&identification.full_form),
        BarcodeFormat::Upc12 => upc12_to_ean13(&identification.full_form),
        BarcodeFormat::Ean13 => Some(identification.full_form.clone()),
    };
    let ean13 = ensure_valid_ean13(&identification, converted.unwrap_or_default())?;

    let ean13 = if options.strip_leading_zeroes {
        ean13.trim_start_matches('0').to_string()
    } else {
        ean13
    };
    Ok(Some(Normalized { ean13, identification }))
}

/// Shorthand for [`normalize_as_ean13`] returning only the canonical value.
pub fn normalize(original: &str) -> Result<Option<String>> {
    Ok(normalize_as_ean13(Some(original), NormalizeOptions::new())?.map(Normalized::into_ean13))
}

fn ensure_valid_ean13(identification: &Identification, ean13: String) -> Result<String> {
    if is_valid_ean13(&ean13) {
        return Ok(ean13);
    }
    error!(
        "{} {} normalized to invalid EAN-13 {:?}",
        identification.format, identification.full_form, ean13
    );
    Err(Error::InvariantViolation {
        format: identification.format,
        full_form: identification.full_form.clone(),
        ean13,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ean13_of(input: &str) -> Option<String> {
        normalize(input).unwrap()
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(normalize_as_ean13(None, NormalizeOptions::new()), Ok(None));
        assert_eq!(normalize_as_ean13(Some(""), NormalizeOptions::new()), Ok(None));
    }

    #[test]
    fn test_ean13_passes_through() {
        assert_eq!(ean13_of("4006381333931").as_deref(), Some("4006381333931"));
    }

    #[test]
    fn test_upc12_widened() {
        let normalized = normalize_as_ean13(Some("036000291452"), NormalizeOptions::new())
            .unwrap()
            .unwrap();
        assert_eq!(normalized.ean13, "0036000291452");
        assert_eq!(normalized.identification.format, BarcodeFormat::Upc12);
        assert_eq!(normalized.identification.full_form, "036000291452");
    }

    #[test]
    fn test_itf14_reduced() {
        let normalized = normalize_as_ean13(Some("10855100009555"), NormalizeOptions::new())
            .unwrap()
            .unwrap();
        assert_eq!(normalized.ean13, "0855100009558");
        assert_eq!(normalized.source_format(), BarcodeFormat::Itf14);
    }

    #[test]
    fn test_leading_zeros_ignored_on_input() {
        assert_eq!(ean13_of("00012345678905").as_deref(), Some("0012345678905"));
        // Already canonical EAN-13 with leading zero is stable.
        assert_eq!(ean13_of("0855100009558").as_deref(), Some("0855100009558"));
    }

    #[test]
    fn test_strip_leading_zeroes() {
        let options = NormalizeOptions::new().strip_leading_zeroes(true);
        let normalized = normalize_as_ean13(Some("00012345678905"), options).unwrap().unwrap();
        assert_eq!(normalized.ean13, "12345678905");
        assert_eq!(normalized.identification.full_form, "012345678905");
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(ean13_of("4006381333932"), None);
        assert_eq!(ean13_of("not a barcode"), None);
        assert_eq!(ean13_of("0000"), None);
    }

    #[test]
    fn test_invariant_violation_is_returned() {
        let identification = Identification {
            format: BarcodeFormat::Upc12,
            full_form: "036000291452".to_string(),
        };
        let err = ensure_valid_ean13(&identification, "0036000291453".to_string()).unwrap_err();
        // The only error the crate returns is the invariant violation.
        let Error::InvariantViolation { format, ean13, .. } = err;
        assert_eq!(format, BarcodeFormat::Upc12);
        assert_eq!(ean13, "0036000291453");
    }
}
