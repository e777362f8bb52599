/// Body fat percentage assumed when none was entered.
pub const DEFAULT_BODY_FAT_PERCENT: f64 = 18.0;

/// Wizard slider range for body fat percentage.
pub const BODY_FAT_MIN: f64 = 5.0;
pub const BODY_FAT_MAX: f64 = 40.0;

// ─────────────────────────────────────────────────────────────────────────────
// Katch–McArdle BMR
// ─────────────────────────────────────────────────────────────────────────────

/// Constant term of the Katch–McArdle equation (kcal).
pub const KATCH_MCARDLE_BASE: f64 = 370.0;

/// kcal per kg of lean body mass.
pub const KATCH_MCARDLE_LBM_COEF: f64 = 21.6;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (no interpolation between levels)
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT: f64 = 1.35;
pub const ACTIVITY_MODERATE: f64 = 1.5;
pub const ACTIVITY_ACTIVE: f64 = 1.7;
pub const ACTIVITY_ATHLETE: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Goal intensity (fraction of TDEE added or removed)
// ─────────────────────────────────────────────────────────────────────────────

pub const INTENSITY_AGGRESSIVE: f64 = 0.20;
pub const INTENSITY_BALANCED: f64 = 0.15;
pub const INTENSITY_CLEAN: f64 = 0.10;

/// Daily calorie target never drops below this.
pub const CALORIE_FLOOR: f64 = 1400.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

pub const LBS_PER_KG: f64 = 2.20462;

/// Grams of protein per pound of total body weight.
pub const PROTEIN_G_PER_LB: f64 = 1.0;

/// Share of total calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Upper bound for the displayed macro percentages.
pub const MAX_PERCENT: f64 = 100.0;
