use serde::{Deserialize, Serialize};

/// Daily calorie and macro targets.
///
/// Serialized with the keys stored in a user's goals document, so a plan
/// can be written verbatim as a sub-document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
    #[serde(rename = "calories")]
    pub calories_kcal: u32,

    pub protein_g: u32,

    pub carbs_g: u32,

    pub fats_g: u32,

    /// Share of calories from protein, rounded on its own.
    #[serde(rename = "p_pct")]
    pub protein_pct: u32,

    #[serde(rename = "c_pct")]
    pub carbs_pct: u32,

    #[serde(rename = "f_pct")]
    pub fats_pct: u32,

    pub meta: PlanMeta,
}

/// Intermediate values behind a plan, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMeta {
    #[serde(rename = "tdee")]
    pub tdee_kcal: u32,

    #[serde(rename = "bmr")]
    pub bmr_kcal: u32,

    #[serde(rename = "lbm")]
    pub lean_body_mass_kg: u32,
}

impl MacroPlan {
    /// Calories accounted for by the rounded macro grams.
    pub fn macro_calories(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fats_g * 9
    }
}
