use strsim::jaro_winkler;

use crate::models::FoodRecord;
use crate::nutrition::table::food_table;

/// Minimum Jaro-Winkler similarity for a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find the reference food whose synonym is the longest substring of `label`.
///
/// Matching is case-insensitive. Ties keep the first record and key seen.
/// `None` means the label is not recognized with enough confidence.
pub fn match_food(label: &str) -> Option<&'static FoodRecord> {
    let lower = label.to_lowercase();
    let mut best: Option<&'static FoodRecord> = None;
    let mut score = 0;

    for item in food_table() {
        for key in item.keys {
            if lower.contains(key) && key.len() > score {
                best = Some(item);
                score = key.len();
            }
        }
    }

    best
}

/// Closest synonyms to `label`, best first, for asking the user to clarify.
pub fn suggest_foods(label: &str, limit: usize) -> Vec<&'static str> {
    let lower = label.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&'static str, f64)> = food_table()
        .iter()
        .flat_map(|f| f.keys.iter().copied())
        .map(|key| (key, jaro_winkler(key, &lower)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(limit).map(|(k, _)| k).collect()
}
