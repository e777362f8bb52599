pub mod calculations;
pub mod constants;
pub mod engine;
pub mod progress;

pub use calculations::{
    MacroSplit, apply_calorie_floor, goal_adjusted_calories, katch_mcardle_bmr, lean_body_mass,
    percent_of, round0, split_macros,
};
pub use constants::*;
pub use engine::{compute_plan, plan_for};
pub use progress::{DailyIntake, DailyProgress, ProgressItem};
