//! # gtin
//!
//! Check digits, validation, identification and EAN-13 normalization for
//! the numeric GTIN barcode family:
//! - UPC-12 (12 digits, US retail)
//! - EAN-13 (13 digits, international retail)
//! - ITF-14 (14 digits, shipping/case-pack)
//!
//! All operations are pure functions over borrowed strings.
//!
//! ## Example
//!
//! ```
//! use gtin::{normalize_as_ean13, BarcodeFormat, NormalizeOptions};
//!
//! let normalized = normalize_as_ean13(Some("10855100009555"), NormalizeOptions::new())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(normalized.ean13, "0855100009558");
//! assert_eq!(normalized.identification.format, BarcodeFormat::Itf14);
//! ```

#![forbid(unsafe_code)]

pub mod checksum;
pub mod convert;
pub mod error;
pub mod identify;
pub mod limits;
pub mod model;
pub mod normalize;
pub mod validate;

pub use checksum::{
    calculate_check_digit, calculate_ean13_check_digit, calculate_format_check_digit,
    calculate_itf14_check_digit, calculate_upc12_check_digit,
};
pub use convert::{itf14_to_ean13, to_ean13, upc12_to_ean13};
pub use error::{ChecksumError, Error, ParseFormatError, Result};
pub use identify::{IdentifyOptions, identify_barcode_type, zero_pad};
pub use model::{BarcodeFormat, Identification, Normalized};
pub use normalize::{NormalizeOptions, normalize, normalize_as_ean13};
pub use validate::{is_valid, is_valid_ean13, is_valid_itf14, is_valid_upc12, shape_of, validate_barcode};
