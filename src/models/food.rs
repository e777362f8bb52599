use serde::Serialize;

/// Reference nutrition for a food, per 100 grams.
///
/// `keys` are lowercase synonyms matched against free-text labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    pub keys: &'static [&'static str],
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Nutrition for a concrete portion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionEstimate {
    pub grams: f64,
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl FoodRecord {
    /// Display name: the first synonym.
    pub fn name(&self) -> &'static str {
        self.keys.first().copied().unwrap_or("unknown")
    }

    /// Scale the per-100g values to a portion size.
    pub fn scaled(&self, grams: f64) -> NutritionEstimate {
        let factor = grams.max(0.0) / 100.0;
        NutritionEstimate {
            grams: grams.max(0.0),
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} per 100g",
            self.name(),
            self.kcal,
            self.protein_g,
            self.carbs_g,
            self.fat_g
        )
    }
}

impl std::ops::AddAssign for NutritionEstimate {
    fn add_assign(&mut self, rhs: Self) {
        self.grams += rhs.grams;
        self.kcal += rhs.kcal;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}
