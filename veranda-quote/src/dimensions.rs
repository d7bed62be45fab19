use serde::{Deserialize, Serialize};

use crate::{QuoteError, QuoteResult};

/// Canonical panel dimensions: width in decimal feet, height in inches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalizedDimensions {
    pub width_ft: f64,
    pub height_in: f64,
}

/// Convert user-entered feet + inches into canonical units.
///
/// `width_inches` must already be a remainder in `[0, 12)`; twelve or more
/// inches is a caller error, never silently folded into feet. Zero-size
/// panels are rejected rather than priced at $0. Pure: identical inputs
/// always produce the identical result.
pub fn normalize_dimensions(
    width_feet: f64,
    width_inches: f64,
    height_inches: f64,
) -> QuoteResult<NormalizedDimensions> {
    for (field, value) in [
        ("width_feet", width_feet),
        ("width_inches", width_inches),
        ("height_inches", height_inches),
    ] {
        if !value.is_finite() {
            return Err(QuoteError::InvalidDimension(format!(
                "{field} must be a finite number"
            )));
        }
        if value < 0.0 {
            return Err(QuoteError::InvalidDimension(format!(
                "{field} must not be negative"
            )));
        }
    }

    if width_inches >= 12.0 {
        return Err(QuoteError::InvalidDimension(
            "width_inches must be less than 12; carry whole feet into width_feet".to_string(),
        ));
    }

    let width_ft = width_feet + width_inches / 12.0;
    if width_ft <= 0.0 {
        return Err(QuoteError::InvalidDimension(
            "width must be greater than zero".to_string(),
        ));
    }
    if height_inches <= 0.0 {
        return Err(QuoteError::InvalidDimension(
            "height must be greater than zero".to_string(),
        ));
    }

    Ok(NormalizedDimensions {
        width_ft,
        height_in: height_inches,
    })
}
