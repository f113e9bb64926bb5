use gatze::{LayoutType, ThemeColor, ThemeMode};

/// Deferred shell actions collected while rendering and applied afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    Navigate(String),
    OpenExternal(String),
    NavigateBack,
    NavigateForward,
    ToggleMenu(String),

    // Dense rail
    RailPointerEnter,
    RailPointerLeave,

    // Preferences
    SetThemeColor(ThemeColor),
    SetThemeMode(ThemeMode),
    SetLayout(LayoutType),
    SetAutoExpand(bool),
    SetCollapseOthers(bool),
    ToggleDarkMode,
    ResetPreferences,

    // UI
    ToggleSettings,
    SystemThemeChanged(bool),
}
