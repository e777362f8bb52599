use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::models::MacroPlan;

/// Model requested from the completion service unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanKind {
    MealPlan,
    Workout,
    Grocery,
}

impl PlanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanKind::MealPlan => "mealPlan",
            PlanKind::Workout => "workout",
            PlanKind::Grocery => "grocery",
        }
    }

    /// Top-level key that must hold an array in a well-formed reply.
    pub fn list_key(self) -> &'static str {
        match self {
            PlanKind::MealPlan => "meals",
            PlanKind::Workout => "sessions",
            PlanKind::Grocery => "categories",
        }
    }
}

/// A chat completion call asking for a JSON object reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub kind: PlanKind,
    pub model: String,
    pub system: String,
    pub user: String,
}

/// A request for one kind of AI-generated plan.
pub trait PlanRequest: Serialize {
    fn kind(&self) -> PlanKind;

    /// Check required fields and render the prompts.
    fn to_completion(&self, model: &str) -> Result<CompletionRequest>;
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SnapError::missing(field)),
    }
}

fn required_count(field: &str, value: Option<u32>) -> Result<u32> {
    match value {
        Some(v) if v > 0 => Ok(v),
        _ => Err(SnapError::missing(field)),
    }
}

fn or_none(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "none",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlanRequest {
    pub goal: Option<String>,
    pub calories: Option<u32>,
    pub meals_per_day: Option<u32>,
    pub diet: Option<String>,
    pub restrictions: Option<String>,
}

impl MealPlanRequest {
    /// Seed a meal plan request from computed macro targets.
    pub fn from_plan(plan: &MacroPlan, goal: &str, meals_per_day: u32) -> Self {
        Self {
            goal: Some(goal.to_string()),
            calories: Some(plan.calories_kcal),
            meals_per_day: Some(meals_per_day),
            ..Default::default()
        }
    }
}

impl PlanRequest for MealPlanRequest {
    fn kind(&self) -> PlanKind {
        PlanKind::MealPlan
    }

    fn to_completion(&self, model: &str) -> Result<CompletionRequest> {
        let goal = required("goal", &self.goal)?;
        let calories = required_count("calories", self.calories)?;
        let meals = required_count("mealsPerDay", self.meals_per_day)?;
        let diet = self.diet.as_deref().unwrap_or("any");

        Ok(CompletionRequest {
            kind: self.kind(),
            model: model.to_string(),
            system: "You are SnapFIT, a performance nutrition coach. Return concise JSON meal \
                     plans with macros for each meal."
                .to_string(),
            user: format!(
                "Goal: {goal}. Calories: {calories}. Meals per day: {meals}. Diet: {diet}. \
                 Restrictions: {}. Return JSON {{summary,totalCalories,meals:[{{name,description,\
                 calories,protein,carbs,fats}}]}}",
                or_none(&self.restrictions)
            ),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutRequest {
    pub experience: Option<String>,
    pub equipment: Option<String>,
    pub days: Option<u32>,
    pub focus: Option<String>,
    pub notes: Option<String>,
}

impl PlanRequest for WorkoutRequest {
    fn kind(&self) -> PlanKind {
        PlanKind::Workout
    }

    fn to_completion(&self, model: &str) -> Result<CompletionRequest> {
        let experience = required("experience", &self.experience)?;
        let equipment = required("equipment", &self.equipment)?;
        let days = required_count("days", self.days)?;
        let focus = required("focus", &self.focus)?;

        Ok(CompletionRequest {
            kind: self.kind(),
            model: model.to_string(),
            system: "You are SnapFIT, an elite strength coach. Return JSON workout blueprints \
                     with daily splits and focus."
                .to_string(),
            user: format!(
                "Experience: {experience}. Equipment: {equipment}. Days: {days}. Focus: {focus}. \
                 Notes: {}. Return JSON {{summary,days,sessions:[{{day,title,focus,topSets,blocks}}]}}",
                or_none(&self.notes)
            ),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroceryRequest {
    pub diet: Option<String>,
    pub days: Option<u32>,
    pub calories: Option<u32>,
    pub restrictions: Option<String>,
}

impl PlanRequest for GroceryRequest {
    fn kind(&self) -> PlanKind {
        PlanKind::Grocery
    }

    fn to_completion(&self, model: &str) -> Result<CompletionRequest> {
        let diet = required("diet", &self.diet)?;
        let days = required_count("days", self.days)?;
        let calories = required_count("calories", self.calories)?;

        Ok(CompletionRequest {
            kind: self.kind(),
            model: model.to_string(),
            system: "You are SnapFIT, a nutrition coach. Return JSON grocery lists grouped by \
                     store category."
                .to_string(),
            user: format!(
                "Diet: {diet}. Calories: {calories}. Days: {days}. Restrictions: {}. \
                 Return JSON {{summary,days,categories:[{{name,items}}]}}",
                or_none(&self.restrictions)
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_plan_prompt() {
        let req = MealPlanRequest {
            goal: Some("fatloss".into()),
            calories: Some(2324),
            meals_per_day: Some(4),
            diet: Some("high protein".into()),
            restrictions: None,
        };
        let completion = req.to_completion(DEFAULT_MODEL).unwrap();
        assert_eq!(completion.kind, PlanKind::MealPlan);
        assert!(completion.user.starts_with("Goal: fatloss. Calories: 2324. Meals per day: 4."));
        assert!(completion.user.contains("Restrictions: none."));
        assert!(completion.user.contains("meals:[{name,description,calories,protein,carbs,fats}]"));
    }

    #[test]
    fn test_meal_plan_missing_fields() {
        let req = MealPlanRequest {
            goal: Some("bulk".into()),
            calories: Some(3000),
            ..Default::default()
        };
        let err = req.to_completion(DEFAULT_MODEL).unwrap_err();
        assert_eq!(err.field(), Some("mealsPerDay"));
    }

    #[test]
    fn test_workout_requires_focus() {
        let req = WorkoutRequest {
            experience: Some("intermediate".into()),
            equipment: Some("full gym".into()),
            days: Some(4),
            focus: Some("  ".into()),
            notes: None,
        };
        assert_eq!(req.to_completion(DEFAULT_MODEL).unwrap_err().field(), Some("focus"));
    }

    #[test]
    fn test_grocery_prompt() {
        let req = GroceryRequest {
            diet: Some("mediterranean".into()),
            days: Some(7),
            calories: Some(2100),
            restrictions: Some("no shellfish".into()),
        };
        let completion = req.to_completion("test-model").unwrap();
        assert_eq!(completion.model, "test-model");
        assert!(completion.user.contains("Restrictions: no shellfish."));
        assert!(completion.user.ends_with("categories:[{name,items}]}"));
    }

    #[test]
    fn test_seed_from_macro_plan() {
        let plan = crate::planner::compute_plan(
            Some(82.0),
            Some(18.0),
            Some(crate::models::ActivityLevel::Moderate),
            None,
            Some(crate::models::Goal::FatLoss),
        )
        .unwrap();
        let req = MealPlanRequest::from_plan(&plan, "fatloss", 3);
        assert_eq!(req.calories, Some(2324));
        assert!(req.to_completion(DEFAULT_MODEL).is_ok());
    }
}
