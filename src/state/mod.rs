mod manager;
mod persistence;

pub use manager::{GoalsDoc, ProfileDoc, StoredPlan, UserDocument, UserStore};
pub use persistence::{load_store, save_store};
