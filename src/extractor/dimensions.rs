use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::extractor::model::Size;

/// U+00D7 MULTIPLICATION SIGN, as rendered between width and height on the
/// product pages. ASCII `x` is deliberately not accepted.
pub const DIMENSION_SEPARATOR: char = '\u{00D7}';

const UNIT_SUFFIX: &str = "in";

/// Plain decimal: no sign, exponent, or leading/trailing dot.
static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("Failed to compile decimal regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Width,
    Height,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Width => f.write_str("width"),
            Side::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("unexpected size format: {raw:?} has {found} field(s), expected 2")]
    FieldCount { raw: String, found: usize },

    #[error("invalid {side} {field:?} in size {raw:?}")]
    InvalidField {
        side: Side,
        field: String,
        raw: String,
    },
}

impl DimensionError {
    /// The dimension text exactly as read from the page.
    pub fn raw(&self) -> &str {
        match self {
            Self::FieldCount { raw, .. } | Self::InvalidField { raw, .. } => raw,
        }
    }
}

/// Parses a `"12 × 8 in"` style string. The unit suffix is optional on both
/// sides.
pub fn parse_dimension(raw: &str) -> Result<Size, DimensionError> {
    let fields: Vec<&str> = raw
        .split(DIMENSION_SEPARATOR)
        .filter(|field| !field.is_empty())
        .collect();

    let [width, height] = fields.as_slice() else {
        return Err(DimensionError::FieldCount {
            raw: raw.to_string(),
            found: fields.len(),
        });
    };

    Ok(Size {
        width: parse_inches(width, Side::Width, raw)?,
        height: parse_inches(height, Side::Height, raw)?,
    })
}

fn parse_inches(field: &str, side: Side, raw: &str) -> Result<f64, DimensionError> {
    let trimmed = field.trim();
    let number = trimmed.strip_suffix(UNIT_SUFFIX).unwrap_or(trimmed).trim();

    match number.parse::<f64>() {
        Ok(value) if DECIMAL_REGEX.is_match(number) && value.is_finite() => Ok(value),
        _ => Err(DimensionError::InvalidField {
            side,
            field: field.to_string(),
            raw: raw.to_string(),
        }),
    }
}
