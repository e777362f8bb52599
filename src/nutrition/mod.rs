mod lookup;
mod table;

pub use lookup::{match_food, suggest_foods};
pub use table::{FOOD_TABLE, food_table};
