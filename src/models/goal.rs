use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    ACTIVITY_ACTIVE, ACTIVITY_ATHLETE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_SEDENTARY,
    INTENSITY_AGGRESSIVE, INTENSITY_BALANCED, INTENSITY_CLEAN,
};

/// Daily activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Light,
    Moderate,
    Active,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    /// Parse a wizard value. Anything unrecognized (including blank) is `Light`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "athlete" => ActivityLevel::Athlete,
            _ => ActivityLevel::Light,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Active => ACTIVITY_ACTIVE,
            ActivityLevel::Athlete => ACTIVITY_ATHLETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Athlete => "athlete",
        }
    }
}

/// Body composition goal selected in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    FatLoss,
    Lean,
    Recomp,
    Muscle,
    Bulk,
    Maintain,
}

/// Which way calories move relative to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieDirection {
    Deficit,
    Maintenance,
    Surplus,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::FatLoss,
        Goal::Lean,
        Goal::Recomp,
        Goal::Muscle,
        Goal::Bulk,
        Goal::Maintain,
    ];

    /// Parse a wizard value; `None` for blank or unknown goals.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fatloss" => Some(Goal::FatLoss),
            "lean" => Some(Goal::Lean),
            "recomp" => Some(Goal::Recomp),
            "muscle" => Some(Goal::Muscle),
            "bulk" => Some(Goal::Bulk),
            "maintain" => Some(Goal::Maintain),
            _ => None,
        }
    }

    pub fn direction(self) -> CalorieDirection {
        match self {
            Goal::Maintain => CalorieDirection::Maintenance,
            Goal::Muscle | Goal::Bulk => CalorieDirection::Surplus,
            Goal::FatLoss | Goal::Lean | Goal::Recomp => CalorieDirection::Deficit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::FatLoss => "fatloss",
            Goal::Lean => "lean",
            Goal::Recomp => "recomp",
            Goal::Muscle => "muscle",
            Goal::Bulk => "bulk",
            Goal::Maintain => "maintain",
        }
    }
}

/// How hard the deficit or surplus is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalIntensity {
    Aggressive,
    #[default]
    Balanced,
    Clean,
}

impl GoalIntensity {
    pub const ALL: [GoalIntensity; 3] = [
        GoalIntensity::Aggressive,
        GoalIntensity::Balanced,
        GoalIntensity::Clean,
    ];

    /// Parse a wizard value. Anything unrecognized (including blank) is `Balanced`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "aggressive" => GoalIntensity::Aggressive,
            "balanced" => GoalIntensity::Balanced,
            "clean" => GoalIntensity::Clean,
            _ => GoalIntensity::Balanced,
        }
    }

    /// Fraction of TDEE added or removed.
    pub fn adjustment(self) -> f64 {
        match self {
            GoalIntensity::Aggressive => INTENSITY_AGGRESSIVE,
            GoalIntensity::Balanced => INTENSITY_BALANCED,
            GoalIntensity::Clean => INTENSITY_CLEAN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GoalIntensity::Aggressive => "aggressive",
            GoalIntensity::Balanced => "balanced",
            GoalIntensity::Clean => "clean",
        }
    }
}

/// Activity and goal choices from one wizard run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAndGoal {
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub goal_intensity: Option<GoalIntensity>,
    /// Target weight in kg; absent for recomp.
    pub target_weight_kg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_parse_lenient() {
        assert_eq!(ActivityLevel::parse_lenient("Athlete"), ActivityLevel::Athlete);
        assert_eq!(ActivityLevel::parse_lenient(" moderate "), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse_lenient("couch"), ActivityLevel::Light);
        assert_eq!(ActivityLevel::parse_lenient(""), ActivityLevel::Light);
    }

    #[test]
    fn test_goal_direction() {
        assert_eq!(Goal::Maintain.direction(), CalorieDirection::Maintenance);
        assert_eq!(Goal::Bulk.direction(), CalorieDirection::Surplus);
        assert_eq!(Goal::Muscle.direction(), CalorieDirection::Surplus);
        assert_eq!(Goal::Recomp.direction(), CalorieDirection::Deficit);
        assert_eq!(Goal::parse("shred"), None);
    }

    #[test]
    fn test_serde_names_match_wizard_values() {
        let json = serde_json::to_string(&Goal::FatLoss).unwrap();
        assert_eq!(json, "\"fatloss\"");
        let level: ActivityLevel = serde_json::from_str("\"athlete\"").unwrap();
        assert_eq!(level, ActivityLevel::Athlete);
    }
}
