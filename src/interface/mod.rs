pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_body_step, prompt_target_step, prompt_training_step, prompt_yes_no, run_wizard,
};
pub use render::{
    display_body_stats, display_food_match, display_food_table, display_macro_plan,
    display_measurements, display_progress, display_quota,
};
