mod app_state;
mod config;
mod types;

pub use app_state::AppState;
pub use config::AppConfig;
pub use types::{ViewportClass, DECK_COMPACT_BREAKPOINT, ROAD_COMPACT_BREAKPOINT};
