use serde::{Deserialize, Serialize};

use crate::units::{LengthUnit, WeightUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(alias = "na")]
    Unspecified,
}

impl Gender {
    /// Parse a wizard value; blank means the question was not answered.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "na" | "unspecified" => Some(Gender::Unspecified),
            _ => None,
        }
    }
}

/// Body stats captured by the goal wizard.
///
/// `height_cm` and `weight_kg` are the normalized values every calculation
/// uses. The raw unit fields are kept only so a form can be rehydrated in
/// the units the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProfile {
    pub gender: Gender,
    pub age_years: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: f64,
    pub raw: RawUnitEntry,
}

/// The values exactly as entered, in the unit system chosen at entry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnitEntry {
    pub unit_height: LengthUnit,
    pub unit_weight: WeightUnit,
    pub feet: Option<f64>,
    pub inches: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight: f64,
}
