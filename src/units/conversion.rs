use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound (exact, international avoirdupois pound).
pub const KG_PER_LB: f64 = 0.45359237;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Imperial,
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }
}

fn finite(field: &str, value: Option<f64>, message: &str) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(SnapError::invalid(field, message)),
    }
}

/// Normalize a height entry to centimeters.
///
/// Metric entries pass through unchanged. Imperial entries are converted
/// from total inches and rounded to a whole centimeter; a blank inches
/// field counts as zero.
pub fn height_to_cm(
    mode: LengthUnit,
    feet: Option<f64>,
    inches: Option<f64>,
    cm: Option<f64>,
) -> Result<f64> {
    match mode {
        LengthUnit::Metric => finite("heightCm", cm, "Please enter a valid height."),
        LengthUnit::Imperial => {
            let f = finite("feet", feet, "Please enter a valid height.")?;
            let i = finite("inches", inches.or(Some(0.0)), "Please enter a valid height.")?;
            let total_in = f * 12.0 + i;
            Ok((total_in * CM_PER_INCH).round())
        }
    }
}

/// Normalize a weight entry to kilograms. Pounds are rounded to a whole kg.
pub fn weight_to_kg(mode: WeightUnit, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SnapError::invalid("weight", "Please enter a valid weight."));
    }
    Ok(match mode {
        WeightUnit::Kg => value,
        WeightUnit::Lbs => (value * KG_PER_LB).round(),
    })
}

/// Split a centimeter height back into whole feet and inches.
pub fn cm_to_feet_inches(cm: f64) -> (u32, u32) {
    let total_in = (cm.max(0.0) / CM_PER_INCH).round() as u32;
    (total_in / 12, total_in % 12)
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}
