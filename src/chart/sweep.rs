use tracing::debug;

use crate::error::Result;
use crate::models::{ActivityLevel, Goal, GoalIntensity, MacroPlan};
use crate::planner::compute_plan;

/// What to sweep over. Every combination of the lists is planned.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub weights_kg: Vec<f64>,
    pub body_fat_percent: f64,
    pub activities: Vec<ActivityLevel>,
    pub goals: Vec<Goal>,
    pub intensities: Vec<GoalIntensity>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            weights_kg: vec![55.0, 70.0, 85.0, 100.0],
            body_fat_percent: crate::planner::DEFAULT_BODY_FAT_PERCENT,
            activities: ActivityLevel::ALL.to_vec(),
            goals: Goal::ALL.to_vec(),
            intensities: GoalIntensity::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub intensity: GoalIntensity,
    pub plan: MacroPlan,
}

/// Plan every combination, in weight, activity, goal, intensity order.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<ChartRow>> {
    let mut rows = Vec::with_capacity(
        config.weights_kg.len()
            * config.activities.len()
            * config.goals.len()
            * config.intensities.len(),
    );

    for &weight_kg in &config.weights_kg {
        for &activity in &config.activities {
            for &goal in &config.goals {
                for &intensity in &config.intensities {
                    let plan = compute_plan(
                        Some(weight_kg),
                        Some(config.body_fat_percent),
                        Some(activity),
                        Some(intensity),
                        Some(goal),
                    )?;
                    rows.push(ChartRow {
                        weight_kg,
                        activity,
                        goal,
                        intensity,
                        plan,
                    });
                }
            }
        }
    }

    debug!(rows = rows.len(), "sweep finished");
    Ok(rows)
}

/// Parse a comma-separated weight list, skipping entries that aren't numbers.
pub fn parse_weights(s: &str) -> Vec<f64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .filter(|w: &f64| w.is_finite() && *w > 0.0)
        .collect()
}
