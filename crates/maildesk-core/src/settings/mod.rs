//! Per-user preferences.

mod model;
mod repository;

pub use model::{FontSize, PaneLayout, Settings};
pub use repository::SettingsRepository;
