//! Adapter between the goal wizard's raw form state and the macro engine.

pub mod form;
pub mod validation;

use serde::Serialize;

use crate::error::Result;
use crate::models::{ActivityAndGoal, BodyProfile, MacroPlan};
use crate::planner::plan_for;

pub use form::{GoalFormData, Normalized};
pub use validation::{validate_body_step, validate_target_step, validate_training_step};

/// Everything a finished wizard run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardOutcome {
    pub profile: BodyProfile,
    pub choices: ActivityAndGoal,
    pub macro_plan: MacroPlan,
}

/// Validate every step and compute the plan.
pub fn finish(form: &mut GoalFormData) -> Result<WizardOutcome> {
    form.complete_body_step()?;
    form.complete_training_step()?;
    form.complete_target_step()?;

    let (profile, choices) = form.into_profile()?;
    let macro_plan = plan_for(&profile, &choices)?;
    form.step_completed = form.step_completed.max(4);

    Ok(WizardOutcome {
        profile,
        choices,
        macro_plan,
    })
}
