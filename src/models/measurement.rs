use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::{LengthUnit, WeightUnit};

/// One body measurement log entry, stored in the units it was entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub weight: f64,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub hips: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub weight_unit: WeightUnit,
    pub length_unit: LengthUnit,
    pub created_at: DateTime<Utc>,
}
