mod persistence;

pub use persistence::{load_plan, save_plan};
