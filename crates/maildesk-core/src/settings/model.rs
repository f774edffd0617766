//! Settings model.

use serde::{Deserialize, Serialize};

/// Interface font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    /// Small text.
    #[serde(rename = "sm")]
    Small,
    /// Default text.
    #[default]
    #[serde(rename = "base")]
    Base,
    /// Large text.
    #[serde(rename = "lg")]
    Large,
}

/// List density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneLayout {
    /// Tight rows.
    #[default]
    Compact,
    /// Roomier rows.
    Comfortable,
}

/// User preferences that persist across sessions.
///
/// A singleton per user: the whole object is replaced on every change, and
/// missing or malformed stored data falls back to these defaults. Fields
/// absent from an older stored blob deserialize to their defaults too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether in-app notifications are shown.
    pub notifications_enabled: bool,
    /// Dark color scheme.
    pub dark_mode: bool,
    /// Whether the reading pane is shown next to the message list.
    pub reading_pane_enabled: bool,
    /// Interface font size.
    pub font_size: FontSize,
    /// List density.
    pub layout: PaneLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode: false,
            reading_pane_enabled: true,
            font_size: FontSize::Base,
            layout: PaneLayout::Compact,
        }
    }
}
