use clap::{Parser, Subcommand};
use gtin::BarcodeFormat;

#[derive(Parser, Debug)]
#[command(name = "gtin", version, about = "Validate, identify and normalize UPC-12/EAN-13/ITF-14 barcodes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check shape and check digit of full-length barcodes.
    Check {
        #[arg(required = true)]
        barcodes: Vec<String>,
    },

    /// Compute the check digit for a barcode prefix.
    CheckDigit {
        /// Target format (upc12, ean13, itf14).
        format: BarcodeFormat,
        /// Prefix without check digit: 11, 12 or 13 digits.
        prefix: String,
    },

    /// Identify the format of barcodes of unknown length.
    Identify {
        /// Formats to skip. May be repeated.
        #[arg(long = "exclude", value_name = "FORMAT")]
        exclude: Vec<BarcodeFormat>,
        #[arg(required = true)]
        barcodes: Vec<String>,
    },

    /// Normalize barcodes to EAN-13. Reads one barcode per line from stdin
    /// when none are given.
    Normalize {
        /// Strip leading zeros from the resulting EAN-13.
        #[arg(long)]
        strip_leading_zeroes: bool,
        /// Emit one JSON object per input.
        #[arg(long)]
        json: bool,
        barcodes: Vec<String>,
    },
}
