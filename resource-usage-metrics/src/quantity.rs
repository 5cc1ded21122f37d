//! Conversions from Kubernetes quantity strings to scaled integers.
//!
//! `k8s_openapi` keeps `Quantity` as an opaque string. The calculations in
//! this workspace need integer values on a fixed scale: millicores for CPU
//! (metrics-server reports nanocore values such as `"2500000n"`) and bytes
//! for memory. Conversions round up, matching apimachinery's `ScaledValue`.

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuantityParseError {
    #[error("empty quantity")]
    Empty,
    #[error("invalid quantity {0:?}")]
    Invalid(String),
}

pub trait QuantityExt {
    /// Value in millicores (`"100m"` -> 100, `"1"` -> 1000).
    fn to_milli_cpus(&self) -> Result<i64, QuantityParseError>;

    /// Value in bytes (`"128Mi"` -> 134217728, `"1e3"` -> 1000).
    fn to_bytes(&self) -> Result<i64, QuantityParseError>;
}

impl QuantityExt for Quantity {
    fn to_milli_cpus(&self) -> Result<i64, QuantityParseError> {
        let (value, scale) = parse(&self.0)?;
        Ok((value * scale * 1000.0).ceil() as i64)
    }

    fn to_bytes(&self) -> Result<i64, QuantityParseError> {
        let (value, scale) = parse(&self.0)?;
        Ok((value * scale).ceil() as i64)
    }
}

fn parse(text: &str) -> Result<(f64, f64), QuantityParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuantityParseError::Empty);
    }
    let (number, scale) = split_suffix(text);
    let value = number
        .parse::<f64>()
        .map_err(|_| QuantityParseError::Invalid(text.to_string()))?;
    Ok((value, scale))
}

/// Splits a quantity into its numeric part and the suffix scale factor.
///
/// Scientific notation (`"12e3"`) ends in a digit and falls through with a
/// scale of 1; a trailing `E` is the exa suffix, not an exponent.
fn split_suffix(text: &str) -> (&str, f64) {
    const BINARY: [(&str, f64); 5] = [
        ("Ki", 1024.0),
        ("Mi", 1024.0 * 1024.0),
        ("Gi", 1024.0 * 1024.0 * 1024.0),
        ("Ti", 1024.0 * 1024.0 * 1024.0 * 1024.0),
        ("Pi", 1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ];
    const DECIMAL: [(char, f64); 9] = [
        ('n', 1e-9),
        ('u', 1e-6),
        ('m', 1e-3),
        ('k', 1e3),
        ('M', 1e6),
        ('G', 1e9),
        ('T', 1e12),
        ('P', 1e15),
        ('E', 1e18),
    ];

    for (suffix, scale) in BINARY {
        if let Some(number) = text.strip_suffix(suffix) {
            return (number, scale);
        }
    }
    if let Some(last) = text.chars().last() {
        for (suffix, scale) in DECIMAL {
            if last == suffix {
                return (&text[..text.len() - suffix.len_utf8()], scale);
            }
        }
    }
    (text, 1.0)
}
