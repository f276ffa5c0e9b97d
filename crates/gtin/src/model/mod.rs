//! Data model types for GTIN barcodes.
//!
//! This module contains the transient values passed between the
//! validators, converters, identifier and normalizer:
//! - Format tags
//! - Identification results
//! - Normalization results

pub mod format;
pub mod identification;

pub use format::BarcodeFormat;
pub use identification::{Identification, Normalized};
