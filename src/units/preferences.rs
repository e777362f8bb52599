use serde::{Deserialize, Serialize};

use super::conversion::{LengthUnit, WeightUnit, kg_to_lbs};

/// Display units for a user. Passed explicitly to whatever renders values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    #[serde(default)]
    pub weight: WeightUnit,
    #[serde(default)]
    pub length: LengthUnit,
}

impl UnitPreferences {
    /// Express a kilogram value in the preferred weight unit.
    pub fn display_weight(&self, kg: f64) -> f64 {
        match self.weight {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg_to_lbs(kg),
        }
    }

    /// Merge an update; `None` keeps the current setting.
    pub fn with(self, weight: Option<WeightUnit>, length: Option<LengthUnit>) -> Self {
        Self {
            weight: weight.unwrap_or(self.weight),
            length: length.unwrap_or(self.length),
        }
    }
}
