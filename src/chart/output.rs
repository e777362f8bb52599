use std::path::Path;

use crate::chart::sweep::ChartRow;
use crate::error::Result;
use crate::planner::CALORIE_FLOOR;

/// Write sweep rows to a CSV file.
pub fn write_csv(rows: &[ChartRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "weight_kg",
        "activity",
        "goal",
        "intensity",
        "calories",
        "protein_g",
        "carbs_g",
        "fats_g",
        "p_pct",
        "c_pct",
        "f_pct",
        "tdee",
        "bmr",
        "lbm",
    ])?;

    for row in rows {
        let plan = &row.plan;
        wtr.write_record([
            format!("{:.1}", row.weight_kg),
            row.activity.as_str().to_string(),
            row.goal.as_str().to_string(),
            row.intensity.as_str().to_string(),
            plan.calories_kcal.to_string(),
            plan.protein_g.to_string(),
            plan.carbs_g.to_string(),
            plan.fats_g.to_string(),
            plan.protein_pct.to_string(),
            plan.carbs_pct.to_string(),
            plan.fats_pct.to_string(),
            plan.meta.tdee_kcal.to_string(),
            plan.meta.bmr_kcal.to_string(),
            plan.meta.lean_body_mass_kg.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print the calorie range seen at each weight.
pub fn print_summary(rows: &[ChartRow]) {
    println!("\n=== Calorie range by weight ===\n");

    let mut weights: Vec<f64> = rows.iter().map(|r| r.weight_kg).collect();
    weights.sort_by(|a, b| a.total_cmp(b));
    weights.dedup();

    for weight in weights {
        let at_weight = rows.iter().filter(|r| r.weight_kg == weight);
        let (min, max, floored) = at_weight.fold((u32::MAX, 0, 0), |(min, max, floored), r| {
            let kcal = r.plan.calories_kcal;
            (min.min(kcal), max.max(kcal), floored + usize::from(f64::from(kcal) <= CALORIE_FLOOR))
        });
        println!(
            "{:>6.1} kg: {:>4} - {:>4} kcal ({} at the floor)",
            weight, min, max, floored
        );
    }
    println!();
}
