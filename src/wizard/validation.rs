use std::ops::RangeInclusive;

use crate::error::{Result, SnapError};
use crate::models::Gender;
use crate::planner::{BODY_FAT_MAX, BODY_FAT_MIN};
use crate::units::{LengthUnit, WeightUnit, height_to_cm, weight_to_kg};
use crate::wizard::form::{GoalFormData, Normalized};

pub const AGE_RANGE: RangeInclusive<f64> = 13.0..=100.0;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 90.0..=250.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=230.0;
pub const FEET_RANGE: RangeInclusive<f64> = 3.0..=8.0;
pub const INCHES_RANGE: RangeInclusive<f64> = 0.0..=11.0;
pub const WEIGHT_LBS_RANGE: RangeInclusive<f64> = 60.0..=500.0;

fn in_range(value: Option<f64>, range: &RangeInclusive<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite() && range.contains(&v))
}

/// Step 1: sex, age, height and weight.
///
/// Checks run in the order the form shows them, so the first failing field
/// is the one reported.
pub fn validate_body_step(form: &GoalFormData) -> Result<Normalized> {
    if form.gender.as_deref().and_then(Gender::parse).is_none() {
        return Err(SnapError::invalid("gender", "Please select your sex / gender."));
    }

    if !in_range(form.age, &AGE_RANGE) {
        return Err(SnapError::invalid("age", "Age must be between 13 and 100."));
    }

    let mode = form.length_unit();
    let height_cm = height_to_cm(mode, form.feet, form.inches, form.height_cm)?;
    if !HEIGHT_CM_RANGE.contains(&height_cm) {
        return Err(SnapError::invalid(
            "height",
            "Height looks off, please check it.",
        ));
    }

    let weight = form
        .weight
        .ok_or_else(|| SnapError::invalid("weight", "Please enter a valid weight."))?;
    let weight_kg = weight_to_kg(form.weight_unit(), weight)?;
    if !WEIGHT_KG_RANGE.contains(&weight_kg) {
        return Err(SnapError::invalid(
            "weight",
            "Weight looks off, please check it.",
        ));
    }

    if mode == LengthUnit::Imperial {
        if !in_range(form.feet, &FEET_RANGE) {
            return Err(SnapError::invalid("feet", "Feet must be between 3 and 8."));
        }
        if !in_range(Some(form.inches.unwrap_or(0.0)), &INCHES_RANGE) {
            return Err(SnapError::invalid("inches", "Inches must be between 0 and 11."));
        }
    }

    match form.weight_unit() {
        WeightUnit::Lbs if !in_range(Some(weight), &WEIGHT_LBS_RANGE) => {
            return Err(SnapError::invalid(
                "weight",
                "Weight (lbs) must be between 60 and 500.",
            ));
        }
        WeightUnit::Kg if !in_range(Some(weight), &WEIGHT_KG_RANGE) => {
            return Err(SnapError::invalid(
                "weight",
                "Weight (kg) must be between 30 and 230.",
            ));
        }
        _ => {}
    }

    Ok(Normalized {
        height_cm,
        weight_kg,
    })
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Step 2: activity level and goal are both required.
pub fn validate_training_step(form: &GoalFormData) -> Result<()> {
    let message = "Select one activity level and one goal to continue.";
    if is_blank(&form.activity) {
        return Err(SnapError::invalid("activity", message));
    }
    if is_blank(&form.goal) {
        return Err(SnapError::invalid("goal", message));
    }
    Ok(())
}

/// Step 3: pace, target weight and body fat.
pub fn validate_target_step(form: &GoalFormData) -> Result<()> {
    if is_blank(&form.goal_intensity) {
        return Err(SnapError::invalid(
            "goalIntensity",
            "Choose how fast you want to progress.",
        ));
    }

    if !form.is_recomp() && !matches!(form.target_weight, Some(w) if w.is_finite() && w > 0.0) {
        return Err(SnapError::invalid("targetWeight", "Enter a target weight."));
    }

    if let Some(bf) = form.body_fat {
        if !(bf.is_finite() && (BODY_FAT_MIN..=BODY_FAT_MAX).contains(&bf)) {
            return Err(SnapError::invalid(
                "bodyFat",
                "Body fat must be between 5% and 40%.",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imperial_form() -> GoalFormData {
        GoalFormData {
            gender: Some("female".into()),
            age: Some(29.0),
            unit_height: Some(LengthUnit::Imperial),
            unit_weight: Some(WeightUnit::Lbs),
            feet: Some(5.0),
            inches: Some(6.0),
            weight: Some(140.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_imperial_entry() {
        let normalized = validate_body_step(&imperial_form()).unwrap();
        // 66in = 167.64cm, 140lbs = 63.5kg
        assert_eq!(normalized.height_cm, 168.0);
        assert_eq!(normalized.weight_kg, 64.0);
    }

    #[test]
    fn test_gender_required() {
        let form = GoalFormData {
            gender: Some(String::new()),
            ..imperial_form()
        };
        assert_eq!(validate_body_step(&form).unwrap_err().field(), Some("gender"));
    }

    #[test]
    fn test_age_out_of_range() {
        let form = GoalFormData {
            age: Some(12.0),
            ..imperial_form()
        };
        let err = validate_body_step(&form).unwrap_err();
        assert_eq!(err.field(), Some("age"));
        assert_eq!(err.to_string(), "Age must be between 13 and 100.");
    }

    #[test]
    fn test_height_out_of_range() {
        let form = GoalFormData {
            unit_height: Some(LengthUnit::Metric),
            height_cm: Some(260.0),
            ..imperial_form()
        };
        assert_eq!(validate_body_step(&form).unwrap_err().field(), Some("height"));
    }

    #[test]
    fn test_inches_out_of_range() {
        // 4ft 14in is a plausible height but not a valid entry
        let form = GoalFormData {
            feet: Some(4.0),
            inches: Some(14.0),
            ..imperial_form()
        };
        assert_eq!(validate_body_step(&form).unwrap_err().field(), Some("inches"));
    }

    #[test]
    fn test_kg_entry() {
        let form = GoalFormData {
            unit_weight: Some(WeightUnit::Kg),
            weight: Some(231.0),
            ..imperial_form()
        };
        assert_eq!(validate_body_step(&form).unwrap_err().field(), Some("weight"));
    }

    #[test]
    fn test_training_step() {
        let mut form = GoalFormData {
            activity: Some("active".into()),
            ..Default::default()
        };
        assert_eq!(validate_training_step(&form).unwrap_err().field(), Some("goal"));
        form.goal = Some("bulk".into());
        assert!(validate_training_step(&form).is_ok());
    }

    #[test]
    fn test_target_step() {
        let mut form = GoalFormData {
            goal: Some("fatloss".into()),
            goal_intensity: Some("aggressive".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_target_step(&form).unwrap_err().field(),
            Some("targetWeight")
        );
        form.target_weight = Some(160.0);
        form.body_fat = Some(45.0);
        assert_eq!(validate_target_step(&form).unwrap_err().field(), Some("bodyFat"));
        form.body_fat = Some(22.0);
        assert!(validate_target_step(&form).is_ok());
    }
}
