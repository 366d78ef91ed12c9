pub mod action;
pub mod intent;
pub mod models;
pub mod normalize;
pub mod state;

pub use action::Action;
pub use state::{AppState, Store};
