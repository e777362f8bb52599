use std::sync::LazyLock;

use crate::models::FoodRecord;

/// Rough nutrition per 100g for common foods.
///
/// Order matters: on equal-length key matches the earlier record wins.
pub static FOOD_TABLE: LazyLock<Vec<FoodRecord>> = LazyLock::new(|| {
    vec![
        record(&["chicken breast", "grilled chicken", "chicken"], 165.0, 31.0, 0.0, 3.6),
        record(&["salmon", "grilled salmon"], 208.0, 20.0, 0.0, 13.0),
        record(&["steak", "beef"], 250.0, 26.0, 0.0, 17.0),
        record(&["egg", "scrambled eggs", "omelette"], 155.0, 13.0, 1.1, 11.0),
        record(&["rice", "white rice"], 130.0, 2.4, 28.0, 0.3),
        record(&["brown rice"], 123.0, 2.6, 25.6, 1.0),
        record(&["pasta"], 131.0, 5.0, 25.0, 1.1),
        record(&["bread"], 265.0, 9.0, 49.0, 3.2),
        record(&["banana"], 89.0, 1.1, 23.0, 0.3),
        record(&["apple"], 52.0, 0.3, 14.0, 0.2),
        record(&["avocado"], 160.0, 2.0, 9.0, 15.0),
        record(&["broccoli"], 55.0, 3.7, 11.2, 0.6),
        record(&["salad", "mixed greens", "lettuce"], 20.0, 1.5, 3.5, 0.2),
        record(&["pizza"], 266.0, 11.0, 33.0, 10.0),
        record(&["burger", "cheeseburger"], 295.0, 17.0, 30.0, 13.0),
        record(&["fries"], 312.0, 3.4, 41.0, 15.0),
        record(&["sushi"], 140.0, 7.0, 28.0, 2.0),
    ]
});

fn record(
    keys: &'static [&'static str],
    kcal: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> FoodRecord {
    FoodRecord {
        keys,
        kcal,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// All reference records.
pub fn food_table() -> &'static [FoodRecord] {
    &FOOD_TABLE
}
