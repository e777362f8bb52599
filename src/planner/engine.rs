use tracing::debug;

use crate::error::{Result, SnapError};
use crate::models::{
    ActivityAndGoal, ActivityLevel, BodyProfile, Goal, GoalIntensity, MacroPlan, PlanMeta,
};
use crate::planner::calculations::{
    apply_calorie_floor, goal_adjusted_calories, katch_mcardle_bmr, lean_body_mass, percent_of,
    round0, split_macros,
};
use crate::planner::constants::{DEFAULT_BODY_FAT_PERCENT, KCAL_PER_G_CARB};

/// Compute daily calorie and macro targets.
///
/// Weight and activity level are required; a missing body fat falls back to
/// 18%, a missing intensity to balanced, and a missing goal to a deficit.
/// The result depends only on the inputs.
pub fn compute_plan(
    weight_kg: Option<f64>,
    body_fat_percent: Option<f64>,
    activity_level: Option<ActivityLevel>,
    goal_intensity: Option<GoalIntensity>,
    goal: Option<Goal>,
) -> Result<MacroPlan> {
    let weight_kg = weight_kg.ok_or_else(|| SnapError::missing("weightKg"))?;
    let activity = activity_level.ok_or_else(|| SnapError::missing("activityLevel"))?;

    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(SnapError::invalid("weightKg", "Please enter a valid weight."));
    }

    let body_fat = body_fat_percent.unwrap_or(DEFAULT_BODY_FAT_PERCENT);
    if !body_fat.is_finite() || !(0.0..100.0).contains(&body_fat) {
        return Err(SnapError::invalid(
            "bodyFat",
            "Body fat must be a percentage below 100.",
        ));
    }

    let intensity = goal_intensity.unwrap_or_default();

    let lbm = lean_body_mass(weight_kg, body_fat);
    let bmr = katch_mcardle_bmr(lbm);
    let tdee = bmr * activity.multiplier();
    let calories = apply_calorie_floor(goal_adjusted_calories(tdee, goal, intensity));

    let split = split_macros(weight_kg, calories);

    debug!(
        lbm,
        bmr,
        tdee,
        calories,
        activity = activity.as_str(),
        intensity = intensity.as_str(),
        goal = goal.map(Goal::as_str).unwrap_or("default"),
        "computed macro plan"
    );

    Ok(MacroPlan {
        calories_kcal: round0(calories),
        protein_g: split.protein_g,
        carbs_g: split.carbs_g,
        fats_g: split.fat_g,
        protein_pct: percent_of(split.protein_kcal, calories),
        carbs_pct: percent_of(split.carbs_g as f64 * KCAL_PER_G_CARB, calories),
        fats_pct: percent_of(split.fat_kcal, calories),
        meta: PlanMeta {
            tdee_kcal: round0(tdee),
            bmr_kcal: round0(bmr),
            lean_body_mass_kg: round0(lbm),
        },
    })
}

/// Compute a plan from a completed wizard run.
pub fn plan_for(profile: &BodyProfile, choices: &ActivityAndGoal) -> Result<MacroPlan> {
    compute_plan(
        Some(profile.weight_kg),
        Some(profile.body_fat_percent),
        choices.activity_level,
        choices.goal_intensity,
        choices.goal,
    )
}
