use eframe::egui;
use gatze::ThemeColor;

/// Accent colour of a palette, slightly lifted on dark backgrounds.
pub fn accent(color: ThemeColor, dark: bool) -> egui::Color32 {
    let (light, lifted) = match color {
        ThemeColor::Indigo => ((63, 81, 181), (140, 158, 255)),
        ThemeColor::Green => ((46, 125, 50), (105, 240, 174)),
        ThemeColor::Rose => ((194, 24, 91), (255, 128, 171)),
        ThemeColor::Orange => ((239, 108, 0), (255, 171, 64)),
    };
    let (r, g, b) = if dark { lifted } else { light };
    egui::Color32::from_rgb(r, g, b)
}

pub fn visuals(color: ThemeColor, dark: bool) -> egui::Visuals {
    let mut visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let accent = accent(color, dark);
    visuals.selection.bg_fill = accent.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;
    visuals
}
