//! Number-to-key formatting.
//!
//! Floats are formatted the way a dynamic host prints numbers:
//!
//! | Value                          | Key                  |
//! |--------------------------------|----------------------|
//! | NaN                            | `NaN`                |
//! | +/- infinity                   | `Infinity` / `-Infinity` |
//! | +0 and -0                      | `0`                  |
//! | `1e-6 <= abs < 1e21`           | plain decimal, shortest round-trip digits |
//! | otherwise                      | exponent form with explicit sign (`1e+21`, `1.5e-7`) |

use std::{
    fmt::{Display, LowerExp},
    num::FpCategory,
};

const DECIMAL_LOWER_BOUND: f64 = 1e-6;
const DECIMAL_UPPER_BOUND: f64 = 1e21;

pub(crate) fn format_f64(value: f64) -> String {
    format_float(value, value)
}

pub(crate) fn format_f32(value: f32) -> String {
    format_float(value, f64::from(value))
}

// `value` is formatted with its own shortest representation; `wide` only
// drives classification so f32 keys don't pick up widening noise.
fn format_float<F: Display + LowerExp>(value: F, wide: f64) -> String {
    match wide.classify() {
        FpCategory::Nan => return "NaN".to_owned(),
        FpCategory::Infinite if wide.is_sign_positive() => return "Infinity".to_owned(),
        FpCategory::Infinite => return "-Infinity".to_owned(),
        FpCategory::Zero => return "0".to_owned(),
        FpCategory::Normal | FpCategory::Subnormal => {}
    }

    let magnitude = wide.abs();
    if (DECIMAL_LOWER_BOUND..DECIMAL_UPPER_BOUND).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
