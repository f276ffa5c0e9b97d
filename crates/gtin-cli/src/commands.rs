use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use gtin::{
    BarcodeFormat, IdentifyOptions, NormalizeOptions, calculate_format_check_digit,
    identify_barcode_type, normalize_as_ean13, shape_of,
};
use serde::Serialize;

use crate::cli::{Cli, Command};

/// Result of a command that completed without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Inputs that were not accepted.
    pub rejected: usize,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self.rejected == 0
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(2)
        }
    }
}

pub fn run(cli: Cli) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome = match cli.command {
        Command::Check { barcodes } => check(&barcodes, &mut out)?,
        Command::CheckDigit { format, prefix } => check_digit(format, &prefix, &mut out)?,
        Command::Identify { exclude, barcodes } => {
            identify(&barcodes, exclude.into_iter().collect(), &mut out)?
        }
        Command::Normalize {
            strip_leading_zeroes,
            json,
            barcodes,
        } => {
            let options = NormalizeOptions::new().strip_leading_zeroes(strip_leading_zeroes);
            if barcodes.is_empty() {
                let stdin = io::stdin();
                let lines = stdin
                    .lock()
                    .lines()
                    .collect::<io::Result<Vec<_>>>()
                    .context("failed to read barcodes from stdin")?;
                normalize(&lines, options, json, &mut out)?
            } else {
                normalize(&barcodes, options, json, &mut out)?
            }
        }
    };

    out.flush().context("failed to write output")?;
    Ok(outcome)
}

fn check(barcodes: &[String], out: &mut impl Write) -> Result<Outcome> {
    let mut rejected = 0;
    for barcode in barcodes {
        let (format, valid, status) = match shape_of(barcode) {
            Some(format) if format.is_valid(barcode) => (format.name(), true, "valid"),
            Some(format) => (format.name(), false, "bad check digit"),
            None => ("-", false, "not a UPC-12, EAN-13 or ITF-14"),
        };
        if !valid {
            rejected += 1;
        }
        writeln!(out, "{}\t{}\t{}", barcode, format, status)?;
    }
    Ok(Outcome { rejected })
}

fn check_digit(format: BarcodeFormat, prefix: &str, out: &mut impl Write) -> Result<Outcome> {
    let check = calculate_format_check_digit(format, prefix)
        .with_context(|| format!("cannot compute {} check digit for {:?}", format, prefix))?;
    writeln!(out, "{}{}", prefix, check)?;
    Ok(Outcome { rejected: 0 })
}

fn identify(barcodes: &[String], options: IdentifyOptions, out: &mut impl Write) -> Result<Outcome> {
    let mut rejected = 0;
    for barcode in barcodes {
        match identify_barcode_type(barcode, options) {
            Some(id) => writeln!(out, "{}\t{}\t{}", barcode, id.format, id.full_form)?,
            None => {
                rejected += 1;
                writeln!(out, "{}\tunrecognized", barcode)?;
            }
        }
    }
    Ok(Outcome { rejected })
}

#[derive(Debug, Serialize)]
struct NormalizeRecord<'a> {
    input: &'a str,
    ean13: Option<&'a str>,
    format: Option<BarcodeFormat>,
    full_form: Option<&'a str>,
}

fn normalize(
    barcodes: &[String],
    options: NormalizeOptions,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome> {
    let mut rejected = 0;
    for line in barcodes {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        // Invariant violations abort the whole run.
        let normalized = normalize_as_ean13(Some(input), options)
            .with_context(|| format!("normalizing {:?}", input))?;
        if normalized.is_none() {
            rejected += 1;
        }

        if json {
            let record = NormalizeRecord {
                input,
                ean13: normalized.as_ref().map(|n| n.ean13.as_str()),
                format: normalized.as_ref().map(|n| n.identification.format),
                full_form: normalized.as_ref().map(|n| n.identification.full_form.as_str()),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            match &normalized {
                Some(n) => writeln!(out, "{}\t{}", input, n.ean13)?,
                None => writeln!(out, "{}\tunrecognized", input)?,
            }
        }
    }
    Ok(Outcome { rejected })
}
