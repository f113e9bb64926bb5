mod theme;

pub use theme::{accent, visuals};

use eframe::egui;

// --- Sidebar sizing ---
pub const CLASSIC_WIDTH: f32 = 256.0;
pub const DENSE_WIDTH: f32 = 64.0;
pub const DENSE_EXPANDED_WIDTH: f32 = 256.0;
pub const SETTINGS_WIDTH: f32 = 280.0;
pub const SPACER_HEIGHT: f32 = 16.0;
pub const RAIL_ICON_SIZE: f32 = 20.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Glyph for a Material icon name used in the menu file.
pub fn icon_glyph(name: Option<&str>) -> &'static str {
    match name.unwrap_or_default() {
        "dashboard" => "🏠",
        "analytics" | "assessment" => "📊",
        "inventory_2" => "📦",
        "list" | "receipt_long" => "📋",
        "add_circle" => "➕",
        "category" => "🏷",
        "shopping_cart" => "🛒",
        "pending" => "⏳",
        "done_all" => "✔",
        "account_balance" => "🏦",
        "search" => "🔍",
        "person_add" | "person" => "👤",
        "people" | "groups" => "👥",
        "admin_panel_settings" | "shield" | "lock" => "🔒",
        "settings" | "tune" => "⚙",
        "notifications" => "🔔",
        "extension" => "🧩",
        "help" => "❓",
        _ => "•",
    }
}

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
