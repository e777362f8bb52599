use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::models::{
    ActivityAndGoal, ActivityLevel, BodyProfile, Gender, Goal, GoalIntensity, RawUnitEntry,
};
use crate::planner::DEFAULT_BODY_FAT_PERCENT;
use crate::units::{LengthUnit, WeightUnit, weight_to_kg};
use crate::wizard::validation;

/// Normalized SI values derived from the body step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Normalized {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Raw wizard state, as accumulated across steps and stored between them.
///
/// Every field is optional because the form is filled in incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalFormData {
    pub gender: Option<String>,
    pub age: Option<f64>,
    pub unit_height: Option<LengthUnit>,
    pub unit_weight: Option<WeightUnit>,
    pub feet: Option<f64>,
    pub inches: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight: Option<f64>,
    pub normalized: Option<Normalized>,
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub goal_intensity: Option<String>,
    pub body_fat: Option<f64>,
    pub target_weight: Option<f64>,
    pub step_completed: u8,
}

impl GoalFormData {
    pub fn length_unit(&self) -> LengthUnit {
        self.unit_height.unwrap_or_default()
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.unit_weight.unwrap_or_default()
    }

    /// Validate body stats and store their normalized values.
    pub fn complete_body_step(&mut self) -> Result<Normalized> {
        let normalized = validation::validate_body_step(self)?;
        match self.length_unit() {
            LengthUnit::Imperial => {
                self.inches = Some(self.inches.unwrap_or(0.0));
                self.height_cm = Some(normalized.height_cm);
            }
            LengthUnit::Metric => {
                self.feet = None;
                self.inches = None;
            }
        }
        self.normalized = Some(normalized);
        self.step_completed = self.step_completed.max(1);
        Ok(normalized)
    }

    pub fn complete_training_step(&mut self) -> Result<()> {
        validation::validate_training_step(self)?;
        self.step_completed = self.step_completed.max(2);
        Ok(())
    }

    pub fn complete_target_step(&mut self) -> Result<()> {
        validation::validate_target_step(self)?;
        if self.is_recomp() {
            self.target_weight = None;
        }
        self.body_fat = Some(self.body_fat.unwrap_or(DEFAULT_BODY_FAT_PERCENT));
        self.step_completed = self.step_completed.max(3);
        Ok(())
    }

    pub fn is_recomp(&self) -> bool {
        self.goal.as_deref().and_then(Goal::parse) == Some(Goal::Recomp)
    }

    /// Map the form into typed structures using only normalized values.
    ///
    /// Requires a completed body step. Activity, goal and intensity are
    /// parsed leniently; an absent activity stays absent so the engine can
    /// report it.
    pub fn into_profile(&self) -> Result<(BodyProfile, ActivityAndGoal)> {
        let normalized = self
            .normalized
            .ok_or_else(|| SnapError::missing("normalized"))?;

        let gender = self
            .gender
            .as_deref()
            .and_then(Gender::parse)
            .ok_or_else(|| SnapError::missing("gender"))?;
        let age = self.age.ok_or_else(|| SnapError::missing("age"))?;

        let profile = BodyProfile {
            gender,
            age_years: age.round() as u32,
            height_cm: normalized.height_cm,
            weight_kg: normalized.weight_kg,
            body_fat_percent: self.body_fat.unwrap_or(DEFAULT_BODY_FAT_PERCENT),
            raw: RawUnitEntry {
                unit_height: self.length_unit(),
                unit_weight: self.weight_unit(),
                feet: self.feet,
                inches: self.inches,
                height_cm: self.height_cm,
                weight: self.weight.unwrap_or(normalized.weight_kg),
            },
        };

        let target_weight_kg = match self.target_weight {
            Some(w) if !self.is_recomp() => Some(weight_to_kg(self.weight_unit(), w)?),
            _ => None,
        };

        let choices = ActivityAndGoal {
            activity_level: self.activity.as_deref().map(ActivityLevel::parse_lenient),
            goal: self.goal.as_deref().and_then(Goal::parse),
            goal_intensity: self.goal_intensity.as_deref().map(GoalIntensity::parse_lenient),
            target_weight_kg,
        };

        Ok((profile, choices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_saved_document() {
        let json = r#"{
            "gender": "male", "age": 30, "unitHeight": "imperial", "unitWeight": "lbs",
            "feet": 5, "inches": 10, "heightCm": 178, "weight": 180,
            "normalized": {"heightCm": 178, "weightKg": 82},
            "activity": "moderate", "goal": "fatloss", "goalIntensity": "balanced",
            "bodyFat": 18, "targetWeight": 170, "stepCompleted": 3
        }"#;
        let form: GoalFormData = serde_json::from_str(json).unwrap();
        assert_eq!(form.unit_weight, Some(WeightUnit::Lbs));
        assert_eq!(form.step_completed, 3);

        let (profile, choices) = form.into_profile().unwrap();
        assert_eq!(profile.weight_kg, 82.0);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(choices.activity_level, Some(ActivityLevel::Moderate));
        // 170 lbs = 77.1 kg
        assert_eq!(choices.target_weight_kg, Some(77.0));
    }

    #[test]
    fn test_into_profile_requires_body_step() {
        let form = GoalFormData::default();
        let err = form.into_profile().unwrap_err();
        assert_eq!(err.field(), Some("normalized"));
    }

    #[test]
    fn test_metric_body_step_clears_imperial_height() {
        let mut form = GoalFormData {
            gender: Some("female".into()),
            age: Some(41.0),
            unit_height: Some(LengthUnit::Imperial),
            unit_weight: Some(WeightUnit::Kg),
            feet: Some(5.0),
            inches: Some(10.0),
            weight: Some(70.0),
            ..Default::default()
        };
        form.complete_body_step().unwrap();
        assert_eq!(form.height_cm, Some(178.0));

        form.unit_height = Some(LengthUnit::Metric);
        form.height_cm = Some(190.0);
        let normalized = form.complete_body_step().unwrap();
        assert_eq!(normalized.height_cm, 190.0);
        assert_eq!(form.feet, None);
        assert_eq!(form.inches, None);
    }

    #[test]
    fn test_recomp_drops_target_weight() {
        let mut form = GoalFormData {
            goal: Some("recomp".into()),
            goal_intensity: Some("clean".into()),
            target_weight: Some(150.0),
            ..Default::default()
        };
        form.complete_target_step().unwrap();
        assert_eq!(form.target_weight, None);
        assert_eq!(form.body_fat, Some(DEFAULT_BODY_FAT_PERCENT));
    }
}
