use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};

use snapfit_rs::cli::{Cli, Command, TierArg, parse_food_entry, parse_workouts};
use snapfit_rs::config::AppConfig;
use snapfit_rs::error::{Result, SnapError};
use snapfit_rs::interface::{
    display_body_stats, display_food_match, display_food_table, display_macro_plan,
    display_measurements, display_progress, display_quota, prompt_yes_no, run_wizard,
};
use snapfit_rs::models::{ActivityLevel, Goal, GoalIntensity, Measurement};
use snapfit_rs::nutrition::{food_table, match_food, suggest_foods};
use snapfit_rs::planner::{DailyIntake, DailyProgress, compute_plan};
use snapfit_rs::state::{UserStore, load_store, save_store};
use snapfit_rs::units::weight_to_kg;
use snapfit_rs::wizard::GoalFormData;

struct Context {
    config: AppConfig,
    store_path: PathBuf,
}

impl Context {
    fn open_store(&self) -> Result<UserStore> {
        Ok(UserStore::new(load_store(&self.store_path)?, self.config.units))
    }

    fn persist(&self, store: &UserStore) -> Result<()> {
        save_store(&self.store_path, &store.to_documents())
    }
}

fn main() {
    let cli = Cli::parse();
    snapfit_rs::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        match e.field() {
            Some(field) => eprintln!("Error ({}): {}", field, e),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;
    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
    let ctx = Context { config, store_path };

    match cli.command {
        Command::Plan {
            weight,
            weight_unit,
            body_fat,
            activity,
            goal,
            intensity,
            json,
        } => {
            let unit = weight_unit.map(Into::into).unwrap_or(ctx.config.units.weight);
            let weight_kg = weight_to_kg(unit, weight)?;
            cmd_plan(
                &ctx,
                weight_kg,
                body_fat,
                &activity,
                goal.as_deref(),
                intensity.as_deref(),
                json,
            )
        }
        Command::Wizard { user } => cmd_wizard(&ctx, &user),
        Command::Show { user } => cmd_show(&ctx, &user),
        Command::Lookup { label, grams } => cmd_lookup(&label, grams),
        Command::Foods => {
            display_food_table(food_table());
            Ok(())
        }
        Command::Measure {
            user,
            weight,
            waist,
            chest,
            hips,
            notes,
        } => cmd_measure(&ctx, &user, weight, [waist, chest, hips], notes),
        Command::History { user, limit } => {
            let store = ctx.open_store()?;
            display_measurements(&store.recent_measurements(&user, limit));
            Ok(())
        }
        Command::Progress {
            user,
            foods,
            workouts,
        } => cmd_progress(&ctx, &user, &foods, &workouts),
        Command::Quota { user } => cmd_quota(&ctx, &user),
        Command::Tier { user, plan } => cmd_tier(&ctx, &user, plan),
        Command::Units {
            user,
            weight,
            length,
        } => {
            let mut store = ctx.open_store()?;
            let now = Utc::now();
            let current = store.ensure_user(&user, now).profile.units;
            let updated = current.with(weight.map(Into::into), length.map(Into::into));
            store.set_units(&user, updated, now);
            ctx.persist(&store)?;
            println!(
                "Units for {}: weight {}, length {:?}",
                user,
                updated.weight.label(),
                updated.length
            );
            Ok(())
        }
    }
}

/// Compute and print a plan from command-line values.
fn cmd_plan(
    ctx: &Context,
    weight_kg: f64,
    body_fat: Option<f64>,
    activity: &str,
    goal: Option<&str>,
    intensity: Option<&str>,
    json: bool,
) -> Result<()> {
    let goal = match goal {
        Some(g) => {
            let parsed = Goal::parse(g);
            if parsed.is_none() {
                warn!(goal = g, "unknown goal, planning a deficit");
            }
            parsed
        }
        None => None,
    };

    let plan = compute_plan(
        Some(weight_kg),
        Some(body_fat.unwrap_or(ctx.config.default_body_fat_percent)),
        Some(ActivityLevel::parse_lenient(activity)),
        intensity.map(GoalIntensity::parse_lenient),
        goal,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_macro_plan(&plan);
    }
    Ok(())
}

/// Run the wizard, starting from the user's saved answers if any.
fn cmd_wizard(ctx: &Context, user: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    let now = Utc::now();
    let prefs = store.ensure_user(user, now).profile.units;

    let mut form = store
        .get(user)
        .and_then(|u| u.goals.as_ref())
        .map(|g| g.form.clone())
        .unwrap_or_else(GoalFormData::default);

    let outcome = run_wizard(&mut form, prefs)?;
    display_body_stats(outcome.profile.height_cm, outcome.profile.weight_kg, prefs);
    display_macro_plan(&outcome.macro_plan);

    if prompt_yes_no("Save this plan?", true)? {
        store.save_goals(user, &form, &outcome, now);
        ctx.persist(&store)?;
        info!(user, "wizard results saved");
        println!("Plan saved.");
    }
    Ok(())
}

fn cmd_show(ctx: &Context, user: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let doc = store
        .get(user)
        .ok_or_else(|| SnapError::UserNotFound(user.to_string()))?;

    let Some(goals) = &doc.goals else {
        println!("No saved plan for {}. Run 'snapfit wizard' first.", user);
        return Ok(());
    };

    if let Some(n) = goals.form.normalized {
        display_body_stats(n.height_cm, n.weight_kg, doc.profile.units);
    }
    display_macro_plan(&goals.macro_plan);
    println!("Updated {}", goals.updated_at.format("%Y-%m-%d %H:%M UTC"));
    Ok(())
}

fn cmd_lookup(label: &str, grams: Option<f64>) -> Result<()> {
    match match_food(label) {
        Some(food) => display_food_match(label, food, grams),
        None => {
            println!("Couldn't confidently identify '{}'.", label);
            let suggestions = suggest_foods(label, 3);
            if !suggestions.is_empty() {
                println!("Did you mean: {}?", suggestions.join(", "));
            }
        }
    }
    Ok(())
}

fn cmd_measure(
    ctx: &Context,
    user: &str,
    weight: f64,
    [waist, chest, hips]: [Option<f64>; 3],
    notes: String,
) -> Result<()> {
    if !(weight.is_finite() && weight > 0.0) {
        return Err(SnapError::invalid("weight", "Enter your current weight."));
    }

    let mut store = ctx.open_store()?;
    let now = Utc::now();
    let units = store.ensure_user(user, now).profile.units;

    store.add_measurement(
        user,
        Measurement {
            weight,
            waist,
            chest,
            hips,
            notes,
            weight_unit: units.weight,
            length_unit: units.length,
            created_at: now,
        },
    );
    ctx.persist(&store)?;
    println!("Logged {} {}.", weight, units.weight.label());
    Ok(())
}

fn cmd_progress(ctx: &Context, user: &str, foods: &[String], workouts: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let plan = store
        .get(user)
        .and_then(|u| u.goals.as_ref())
        .map(|g| g.macro_plan)
        .ok_or_else(|| SnapError::missing("macroPlan"))?;

    let mut intake = DailyIntake::new();
    for entry in foods {
        let (label, grams) = parse_food_entry(entry).ok_or_else(|| {
            SnapError::invalid("food", format!("'{}' should look like label:grams", entry))
        })?;
        intake.add_food(label, grams);
    }

    let (done, target) = parse_workouts(workouts).ok_or_else(|| {
        SnapError::invalid("workouts", "Workouts should look like done/target, e.g. 3/5")
    })?;

    let progress = DailyProgress::from_intake(&plan, &intake, done, target);
    display_progress(&progress, &intake);
    Ok(())
}

fn cmd_tier(ctx: &Context, user: &str, plan: TierArg) -> Result<()> {
    let mut store = ctx.open_store()?;
    let now = Utc::now();
    store.set_tier(user, plan.into(), now);
    ctx.persist(&store)?;
    info!(user, plan = plan.as_str(), "plan tier changed");

    let doc = store.ensure_user(user, now);
    display_quota(
        doc.profile.plan_tier,
        &doc.usage,
        doc.usage.used_on(now),
        ctx.config.free_daily_ai_limit,
    );
    Ok(())
}

fn cmd_quota(ctx: &Context, user: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    let now = Utc::now();
    let doc = store.ensure_user(user, now);
    let used = doc.usage.used_on(now);
    display_quota(
        doc.profile.plan_tier,
        &doc.usage,
        used,
        ctx.config.free_daily_ai_limit,
    );
    Ok(())
}
