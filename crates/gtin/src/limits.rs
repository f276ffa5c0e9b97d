//! Fixed lengths and checksum weights for the supported GTIN formats.
//!
//! Weights are given as `(odd, even)` pairs in 1-based human terms: the
//! odd weight applies to the first, third, fifth... digit of a prefix.

/// Length of a UPC-12 barcode.
pub const UPC12_LEN: usize = 12;

/// Length of an EAN-13 barcode.
pub const EAN13_LEN: usize = 13;

/// Length of an ITF-14 barcode.
pub const ITF14_LEN: usize = 14;

/// Longest supported barcode. Identification never truncates past this.
pub const MAX_BARCODE_LEN: usize = ITF14_LEN;

/// UPC-12 prefix weights (applied to 11 digits).
pub const UPC12_WEIGHTS: (u32, u32) = (3, 1);

/// EAN-13 prefix weights (applied to 12 digits).
pub const EAN13_WEIGHTS: (u32, u32) = (1, 3);

/// ITF-14 prefix weights (applied to 13 digits).
pub const ITF14_WEIGHTS: (u32, u32) = (3, 1);

/// Digit prepended to a UPC-12 payload when widening it to EAN-13.
pub const UPC_TO_EAN_PREFIX: char = '0';
