//! Number rendering shared by the `Display` implementations.
//!
//! Matrices are printed one row per line with space separated values, and
//! consumers of that text expect numbers to look like:
//!
//! | Value | Printed as |
//! |-------|------------|
//! | `2.0` | `2` |
//! | `0.5` | `0.5` |
//! | `-0.0` | `0` |
//! | `f64::INFINITY` | `Infinity` |
//! | `f64::NEG_INFINITY` | `-Infinity` |
//! | `f64::NAN` | `NaN` |
//! | `1e21` | `1e+21` |
//! | `1.5e-7` | `1.5e-7` |
//!
//! Finite values use the shortest round-trip digits. Magnitudes from `1e-6`
//! up to (but excluding) `1e21` are printed positionally, anything outside
//! that range in exponent form with an explicitly signed exponent.

use std::fmt::{self, Write};

pub(crate) fn write_number<W: Write + ?Sized>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        out.write_str("NaN")
    } else if value.is_infinite() {
        out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        // covers -0.0
        out.write_str("0")
    } else if (1e-6..1e21).contains(&value.abs()) {
        write!(out, "{value}")
    } else {
        write_exponent(out, value)
    }
}

fn write_exponent<W: Write + ?Sized>(out: &mut W, value: f64) -> fmt::Result {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(out, "{mantissa}e+{exponent}")
        }
        _ => out.write_str(&formatted),
    }
}

/// Writes `values` separated by `separator`.
pub(crate) fn write_joined<W: Write + ?Sized>(
    out: &mut W,
    values: &[f64],
    separator: &str,
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_str(separator)?;
        }
        write_number(out, *value)?;
    }
    Ok(())
}
