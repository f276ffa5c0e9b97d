//! Format identification for barcodes of unknown length.
//!
//! The input is left-padded with zeros to each candidate length and the
//! candidates are tried in priority order (UPC-12, EAN-13, ITF-14). Padding
//! never truncates, so an input longer than a candidate length fails that
//! candidate.

use log::trace;

use crate::limits::MAX_BARCODE_LEN;
use crate::model::{BarcodeFormat, Identification};

/// Options for [`identify_barcode_type`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifyOptions {
    pub exclude_upc12: bool,
    pub exclude_ean13: bool,
    pub exclude_itf14: bool,
}

impl IdentifyOptions {
    /// Options that try every format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips `format` during identification.
    pub fn exclude(mut self, format: BarcodeFormat) -> Self {
        match format {
            BarcodeFormat::Upc12 => self.exclude_upc12 = true,
            BarcodeFormat::Ean13 => self.exclude_ean13 = true,
            BarcodeFormat::Itf14 => self.exclude_itf14 = true,
        }
        self
    }

    /// Returns whether `format` will be tried.
    pub fn allows(&self, format: BarcodeFormat) -> bool {
        match format {
            BarcodeFormat::Upc12 => !self.exclude_upc12,
            BarcodeFormat::Ean13 => !self.exclude_ean13,
            BarcodeFormat::Itf14 => !self.exclude_itf14,
        }
    }
}

impl FromIterator<BarcodeFormat> for IdentifyOptions {
    /// Builds options excluding every format in the iterator.
    fn from_iter<I: IntoIterator<Item = BarcodeFormat>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::exclude)
    }
}

/// Left-pads `digits` with zeros to `len`. Longer input is returned as is.
pub fn zero_pad(digits: &str, len: usize) -> String {
    format!("{:0>len$}", digits)
}

/// Identifies the format of `barcode`.
///
/// Surrounding whitespace is trimmed. Returns the first allowed format
/// whose zero-padded candidate validates, or `None`. Empty input is never
/// identified, even though padding it would produce a valid all-zero code.
pub fn identify_barcode_type(barcode: &str, options: IdentifyOptions) -> Option<Identification> {
    let trimmed = barcode.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_BARCODE_LEN {
        return None;
    }

    for format in BarcodeFormat::ALL {
        if !options.allows(format) {
            continue;
        }
        let candidate = zero_pad(trimmed, format.len());
        if format.is_valid(&candidate) {
            return Some(Identification {
                format,
                full_form: candidate,
            });
        }
        trace!("{:?} rejected as {}", candidate, format);
    }
    None
}
