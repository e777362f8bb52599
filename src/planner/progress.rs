use serde::Serialize;
use tracing::debug;

use crate::models::{FoodRecord, MacroPlan, NutritionEstimate};
use crate::nutrition::match_food;
use crate::planner::calculations::round0;

/// Food logged for one day, estimated from free-text labels.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyIntake {
    pub entries: Vec<IntakeEntry>,
    /// Labels that matched no reference food and were not counted.
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntakeEntry {
    pub label: String,
    pub food: &'static str,
    pub estimate: NutritionEstimate,
}

impl DailyIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a portion by label. Returns the matched record, or `None` when the
    /// label is unrecognized (it is then remembered in `unmatched`).
    pub fn add_food(&mut self, label: &str, grams: f64) -> Option<&'static FoodRecord> {
        match match_food(label) {
            Some(record) => {
                debug!(label, food = %record.debug_string(), grams, "logged food");
                self.entries.push(IntakeEntry {
                    label: label.to_string(),
                    food: record.name(),
                    estimate: record.scaled(grams),
                });
                Some(record)
            }
            None => {
                debug!(label, "no reference food for label");
                self.unmatched.push(label.to_string());
                None
            }
        }
    }

    pub fn totals(&self) -> NutritionEstimate {
        let mut total = NutritionEstimate::default();
        for entry in &self.entries {
            total += entry.estimate;
        }
        total
    }
}

/// One dashboard bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressItem {
    pub current: u32,
    pub target: u32,
    /// Rounded and capped at 100.
    pub percent: u32,
}

impl ProgressItem {
    pub fn new(current: u32, target: u32) -> Self {
        let percent = if target == 0 {
            0
        } else {
            round0(current as f64 / target as f64 * 100.0).min(100)
        };
        Self {
            current,
            target,
            percent,
        }
    }
}

/// Calorie, protein and workout progress against a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyProgress {
    pub calories: ProgressItem,
    pub protein: ProgressItem,
    pub workouts: ProgressItem,
}

impl DailyProgress {
    pub fn from_intake(
        plan: &MacroPlan,
        intake: &DailyIntake,
        workouts_done: u32,
        workouts_target: u32,
    ) -> Self {
        let totals = intake.totals();
        Self {
            calories: ProgressItem::new(round0(totals.kcal), plan.calories_kcal),
            protein: ProgressItem::new(round0(totals.protein_g), plan.protein_g),
            workouts: ProgressItem::new(workouts_done, workouts_target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanMeta;

    fn sample_plan() -> MacroPlan {
        MacroPlan {
            calories_kcal: 2400,
            protein_g: 180,
            carbs_g: 240,
            fats_g: 67,
            protein_pct: 30,
            carbs_pct: 40,
            fats_pct: 25,
            meta: PlanMeta {
                tdee_kcal: 2800,
                bmr_kcal: 1850,
                lean_body_mass_kg: 68,
            },
        }
    }

    #[test]
    fn test_intake_totals_and_misses() {
        let mut intake = DailyIntake::new();
        assert!(intake.add_food("Grilled chicken breast", 200.0).is_some());
        assert!(intake.add_food("white rice", 150.0).is_some());
        assert!(intake.add_food("protein shake", 300.0).is_none());

        let totals = intake.totals();
        // 330 + 195 kcal
        assert!((totals.kcal - 525.0).abs() < 0.001);
        assert_eq!(intake.unmatched, vec!["protein shake".to_string()]);
        assert_eq!(intake.entries.len(), 2);
    }

    #[test]
    fn test_progress_from_intake() {
        let mut intake = DailyIntake::new();
        intake.add_food("chicken breast", 300.0);
        let progress = DailyProgress::from_intake(&sample_plan(), &intake, 4, 5);

        assert_eq!(progress.calories.current, 495);
        assert_eq!(progress.calories.percent, 21);
        assert_eq!(progress.protein.current, 93);
        assert_eq!(progress.protein.percent, 52);
        assert_eq!(progress.workouts.percent, 80);
    }

    #[test]
    fn test_progress_caps_at_100() {
        let item = ProgressItem::new(3000, 2400);
        assert_eq!(item.percent, 100);
        assert_eq!(ProgressItem::new(3, 0).percent, 0);
    }
}
