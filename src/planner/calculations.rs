use crate::models::{CalorieDirection, Goal, GoalIntensity};
use crate::planner::constants::*;

/// Round to the nearest whole number, clamping negatives to zero.
#[inline]
pub fn round0(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Lean body mass (kg) from total weight and body fat percentage.
pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Katch–McArdle basal metabolic rate (kcal/day).
pub fn katch_mcardle_bmr(lean_mass_kg: f64) -> f64 {
    KATCH_MCARDLE_BASE + KATCH_MCARDLE_LBM_COEF * lean_mass_kg
}

/// Apply the goal direction and intensity to TDEE.
///
/// An unknown goal (`None`) is treated as a deficit goal. The calorie floor
/// is not applied here.
pub fn goal_adjusted_calories(tdee: f64, goal: Option<Goal>, intensity: GoalIntensity) -> f64 {
    let pct = intensity.adjustment();
    match goal.map(Goal::direction).unwrap_or(CalorieDirection::Deficit) {
        CalorieDirection::Maintenance => tdee,
        CalorieDirection::Surplus => tdee * (1.0 + pct),
        CalorieDirection::Deficit => tdee * (1.0 - pct),
    }
}

#[inline]
pub fn apply_calorie_floor(calories: f64) -> f64 {
    calories.max(CALORIE_FLOOR)
}

/// Gram and calorie allocation for one day.
///
/// Protein is fixed from body weight, fat is a share of calories, and carbs
/// take whatever is left, so carbs absorb any rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: u32,
    pub protein_kcal: f64,
    pub fat_g: u32,
    pub fat_kcal: f64,
    pub carbs_g: u32,
    pub remaining_kcal: f64,
}

pub fn split_macros(weight_kg: f64, calories: f64) -> MacroSplit {
    let weight_lbs = weight_kg * LBS_PER_KG;
    let protein_g = round0(weight_lbs * PROTEIN_G_PER_LB);
    let protein_kcal = protein_g as f64 * KCAL_PER_G_PROTEIN;

    let fat_kcal = calories * FAT_CALORIE_SHARE;
    let fat_g = round0(fat_kcal / KCAL_PER_G_FAT);

    let remaining_kcal = (calories - protein_kcal - fat_kcal).max(0.0);
    let carbs_g = round0(remaining_kcal / KCAL_PER_G_CARB);

    MacroSplit {
        protein_g,
        protein_kcal,
        fat_g,
        fat_kcal,
        carbs_g,
        remaining_kcal,
    }
}

/// Percent of `calories` made up by `part_kcal`, rounded and capped at 100.
pub fn percent_of(part_kcal: f64, calories: f64) -> u32 {
    if calories <= 0.0 {
        return 0;
    }
    round0(part_kcal / calories * 100.0).min(MAX_PERCENT as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lean_body_mass() {
        assert!((lean_body_mass(82.0, 18.0) - 67.24).abs() < 1e-9);
        assert_eq!(lean_body_mass(80.0, 0.0), 80.0);
    }

    #[test]
    fn test_bmr() {
        assert!((katch_mcardle_bmr(67.24) - 1822.384).abs() < 1e-6);
        assert_eq!(katch_mcardle_bmr(0.0), KATCH_MCARDLE_BASE);
    }

    #[test]
    fn test_goal_adjustment() {
        let tdee = 2000.0;
        let maintain = goal_adjusted_calories(tdee, Some(Goal::Maintain), GoalIntensity::Aggressive);
        assert_eq!(maintain, 2000.0);

        let bulk = goal_adjusted_calories(tdee, Some(Goal::Bulk), GoalIntensity::Clean);
        assert!((bulk - 2200.0).abs() < 1e-9);

        let cut = goal_adjusted_calories(tdee, Some(Goal::Lean), GoalIntensity::Aggressive);
        assert!((cut - 1600.0).abs() < 1e-9);

        let unknown = goal_adjusted_calories(tdee, None, GoalIntensity::Balanced);
        assert!((unknown - 1700.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor() {
        assert_eq!(apply_calorie_floor(900.0), CALORIE_FLOOR);
        assert_eq!(apply_calorie_floor(2500.0), 2500.0);
    }

    #[test]
    fn test_carbs_clamp_to_zero() {
        // 200kg at the floor: protein alone exceeds the budget
        let split = split_macros(200.0, CALORIE_FLOOR);
        assert_eq!(split.remaining_kcal, 0.0);
        assert_eq!(split.carbs_g, 0);
        assert_eq!(split.protein_g, 441);
    }

    #[test]
    fn test_round0() {
        assert_eq!(round0(-3.2), 0);
        assert_eq!(round0(2.5), 3);
        assert_eq!(round0(f64::NAN), 0);
    }

    #[test]
    fn test_percent_capped() {
        assert_eq!(percent_of(1500.0, 1400.0), 100);
        assert_eq!(percent_of(350.0, 1400.0), 25);
        assert_eq!(percent_of(10.0, 0.0), 0);
    }
}
