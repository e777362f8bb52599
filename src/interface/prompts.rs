use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, SnapError};
use crate::models::{ActivityLevel, Goal, GoalIntensity};
use crate::units::{LengthUnit, UnitPreferences, WeightUnit};
use crate::wizard::{self, GoalFormData, WizardOutcome};

/// Prompt for an optional number. Blank input is `None`.
fn prompt_number(prompt: &str, field: &str, current: Option<f64>) -> Result<Option<f64>> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(v) = current {
        input = input.default(v.to_string());
    }
    let text = input.interact_text()?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| SnapError::invalid(field, format!("'{}' is not a number", text)))
}

fn select<T: Copy + PartialEq>(
    prompt: &str,
    options: &[(T, &str)],
    current: Option<T>,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let default = current
        .and_then(|c| options.iter().position(|(v, _)| *v == c))
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[idx].0)
}

/// Run a step until it validates, showing field errors and asking again.
fn retry_step(
    form: &mut GoalFormData,
    mut ask: impl FnMut(&mut GoalFormData) -> Result<()>,
    complete: impl Fn(&mut GoalFormData) -> Result<()>,
) -> Result<()> {
    loop {
        match ask(form).and_then(|_| complete(form)) {
            Ok(()) => return Ok(()),
            Err(e) if e.field().is_some() => println!("  {}", e),
            Err(e) => return Err(e),
        }
    }
}

/// Step 1: sex, age, height and weight.
pub fn prompt_body_step(form: &mut GoalFormData, prefs: UnitPreferences) -> Result<()> {
    retry_step(
        form,
        |form| {
            let current = form.gender.clone();
            let gender = select(
                "Sex / Gender",
                &[
                    ("male", "Male"),
                    ("female", "Female"),
                    ("other", "Other"),
                    ("na", "Prefer not to say"),
                ],
                current.as_deref(),
            )?;
            form.gender = Some(gender.to_string());
            form.age = prompt_number("Age", "age", form.age)?;

            let length = select(
                "Height unit",
                &[(LengthUnit::Imperial, "ft/in"), (LengthUnit::Metric, "cm")],
                Some(form.unit_height.unwrap_or(prefs.length)),
            )?;
            form.unit_height = Some(length);
            match length {
                LengthUnit::Imperial => {
                    form.feet = prompt_number("Height (ft)", "feet", form.feet)?;
                    form.inches = prompt_number("Height (in)", "inches", form.inches)?;
                }
                LengthUnit::Metric => {
                    form.height_cm = prompt_number("Height (cm)", "heightCm", form.height_cm)?;
                }
            }

            let weight_unit = select(
                "Weight unit",
                &[(WeightUnit::Lbs, "lbs"), (WeightUnit::Kg, "kg")],
                Some(form.unit_weight.unwrap_or(prefs.weight)),
            )?;
            form.unit_weight = Some(weight_unit);
            form.weight = prompt_number(
                &format!("Weight ({})", weight_unit.label()),
                "weight",
                form.weight,
            )?;
            Ok(())
        },
        |form| form.complete_body_step().map(|_| ()),
    )
}

/// Step 2: activity level and goal.
pub fn prompt_training_step(form: &mut GoalFormData) -> Result<()> {
    retry_step(
        form,
        |form| {
            let activity = select(
                "Activity level",
                &[
                    (ActivityLevel::Sedentary, "Sedentary (desk job, little exercise)"),
                    (ActivityLevel::Light, "Light (1-3 sessions/week)"),
                    (ActivityLevel::Moderate, "Moderate (3-5 sessions/week)"),
                    (ActivityLevel::Active, "Active (6-7 sessions/week)"),
                    (ActivityLevel::Athlete, "Athlete (twice a day)"),
                ],
                form.activity.as_deref().map(ActivityLevel::parse_lenient),
            )?;
            form.activity = Some(activity.as_str().to_string());

            let goal = select(
                "Goal",
                &[
                    (Goal::FatLoss, "Fat loss"),
                    (Goal::Lean, "Get lean"),
                    (Goal::Recomp, "Recomp"),
                    (Goal::Muscle, "Build muscle"),
                    (Goal::Bulk, "Bulk"),
                    (Goal::Maintain, "Maintain"),
                ],
                form.goal.as_deref().and_then(Goal::parse),
            )?;
            form.goal = Some(goal.as_str().to_string());
            Ok(())
        },
        |form| form.complete_training_step(),
    )
}

/// Step 3: pace, target weight and body fat.
pub fn prompt_target_step(form: &mut GoalFormData) -> Result<()> {
    retry_step(
        form,
        |form| {
            let intensity = select(
                "Pace",
                &[
                    (GoalIntensity::Aggressive, "Aggressive: fast results, high discipline"),
                    (GoalIntensity::Balanced, "Balanced: steady progress"),
                    (GoalIntensity::Clean, "Clean & steady: lifestyle friendly"),
                ],
                form.goal_intensity.as_deref().map(GoalIntensity::parse_lenient),
            )?;
            form.goal_intensity = Some(intensity.as_str().to_string());

            if !form.is_recomp() {
                let prompt = format!("Target weight ({})", form.weight_unit().label());
                form.target_weight = prompt_number(&prompt, "targetWeight", form.target_weight)?;
            }
            form.body_fat = prompt_number("Body fat % (blank for 18)", "bodyFat", form.body_fat)?;
            Ok(())
        },
        |form| form.complete_target_step(),
    )
}

/// Walk through all wizard steps and compute the plan.
pub fn run_wizard(form: &mut GoalFormData, prefs: UnitPreferences) -> Result<WizardOutcome> {
    println!("Step 1 of 3: Body info");
    prompt_body_step(form, prefs)?;
    println!();
    println!("Step 2 of 3: Training style");
    prompt_training_step(form)?;
    println!();
    println!("Step 3 of 3: Target setup");
    prompt_target_step(form)?;
    wizard::finish(form)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
