use crate::coach::{PlanTier, UsageCounter};
use crate::models::{FoodRecord, MacroPlan, Measurement, NutritionEstimate};
use crate::planner::{DailyIntake, DailyProgress, ProgressItem};
use crate::units::{LengthUnit, UnitPreferences, cm_to_feet_inches};

/// Display a macro plan with percentage bars.
pub fn display_macro_plan(plan: &MacroPlan) {
    println!();
    println!("=== Your Macro Plan ===");
    println!();
    println!("Daily calories: {} kcal", plan.calories_kcal);
    println!();

    let rows = [
        ("Protein", plan.protein_g, plan.protein_pct),
        ("Carbs", plan.carbs_g, plan.carbs_pct),
        ("Fats", plan.fats_g, plan.fats_pct),
    ];
    for (name, grams, pct) in rows {
        println!("  {:<8} {:>4} g  {:>3}%  {}", name, grams, pct, bar(pct));
    }

    println!();
    println!(
        "TDEE {} kcal | BMR {} kcal | Lean mass {} kg",
        plan.meta.tdee_kcal, plan.meta.bmr_kcal, plan.meta.lean_body_mass_kg
    );
    println!();
}

fn bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

/// Display body stats in the user's preferred units.
pub fn display_body_stats(height_cm: f64, weight_kg: f64, prefs: UnitPreferences) {
    let height = match prefs.length {
        LengthUnit::Metric => format!("{:.0} cm", height_cm),
        LengthUnit::Imperial => {
            let (ft, inches) = cm_to_feet_inches(height_cm);
            format!("{}'{}\"", ft, inches)
        }
    };
    println!(
        "Height {} | Weight {:.1} {}",
        height,
        prefs.display_weight(weight_kg),
        prefs.weight.label()
    );
}

/// Display a lookup result, scaled to a portion when `grams` is given.
pub fn display_food_match(label: &str, food: &FoodRecord, grams: Option<f64>) {
    println!("'{}' looks like {}", label, food.name());
    match grams {
        Some(g) => display_estimate(&food.scaled(g)),
        None => println!(
            "  per 100g: {} kcal, P:{} C:{} F:{}",
            food.kcal, food.protein_g, food.carbs_g, food.fat_g
        ),
    }
}

fn display_estimate(est: &NutritionEstimate) {
    println!(
        "  {:.0}g: {:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
        est.grams, est.kcal, est.protein_g, est.carbs_g, est.fat_g
    );
}

/// Display the reference food table.
pub fn display_food_table(foods: &[FoodRecord]) {
    println!();
    println!("=== Reference foods ({} items, per 100g) ===", foods.len());
    println!();
    for food in foods {
        println!(
            "  {:<16} {:>4} kcal  P:{:<5} C:{:<5} F:{:<5} aka {}",
            food.name(),
            food.kcal,
            food.protein_g,
            food.carbs_g,
            food.fat_g,
            food.keys.join(", ")
        );
    }
    println!();
}

fn display_progress_item(name: &str, item: &ProgressItem, unit: &str) {
    println!(
        "  {:<9} {:>5} / {:<5} {:<5} {:>3}%  {}",
        name,
        item.current,
        item.target,
        unit,
        item.percent,
        bar(item.percent)
    );
}

/// Display the daily dashboard.
pub fn display_progress(progress: &DailyProgress, intake: &DailyIntake) {
    println!();
    println!("=== Today ===");
    println!();
    for entry in &intake.entries {
        println!("  {} -> {}", entry.label, entry.food);
        display_estimate(&entry.estimate);
    }
    for label in &intake.unmatched {
        println!("  {} -> not recognized, not counted", label);
    }
    println!();
    display_progress_item("Calories", &progress.calories, "kcal");
    display_progress_item("Protein", &progress.protein, "g");
    display_progress_item("Workouts", &progress.workouts, "");
    println!();
}

pub fn display_quota(tier: PlanTier, usage: &UsageCounter, used_today: u32, limit: u32) {
    if tier.is_unlimited() {
        println!("Plan: {} (unlimited AI plans)", tier);
    } else {
        println!(
            "Plan: {} ({} of {} AI plans used today)",
            tier, used_today, limit
        );
    }
    if let Some(at) = usage.updated_at {
        println!("Last AI request: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
}

pub fn display_measurements(entries: &[&Measurement]) {
    if entries.is_empty() {
        println!("No measurements logged yet.");
        return;
    }
    println!();
    println!("=== Recent measurements ===");
    println!();
    for m in entries {
        let length = match m.length_unit {
            LengthUnit::Imperial => "in",
            LengthUnit::Metric => "cm",
        };
        let fmt = |v: Option<f64>| v.map(|x| format!("{x}{length}")).unwrap_or_else(|| "-".into());
        println!(
            "  {}  {} {}  waist {}  chest {}  hips {}  {}",
            m.created_at.format("%Y-%m-%d"),
            m.weight,
            m.weight_unit.label(),
            fmt(m.waist),
            fmt(m.chest),
            fmt(m.hips),
            m.notes
        );
    }
    println!();
}
