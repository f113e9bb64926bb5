// Top bar, status bar, settings drawer and page area

use crate::app::Gatze;
use crate::message::Message;
use crate::style;
use eframe::egui;
use gatze::{LayoutType, ThemeColor, ThemeMode};

impl Gatze {
    pub(crate) fn render_top_bar(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.router.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+Left)")
                    .clicked()
                {
                    messages.push(Message::NavigateBack);
                }
                if ui
                    .add_enabled(self.router.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+Right)")
                    .clicked()
                {
                    messages.push(Message::NavigateForward);
                }
                ui.heading("Gatze");
                ui.separator();
                style::truncated_label(ui, egui::RichText::new(self.router.location()).monospace());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Settings").clicked() {
                        messages.push(Message::ToggleSettings);
                    }
                    let icon = if self.is_dark() { "☀" } else { "🌙" };
                    let hint = if self.config.is_auto_mode() {
                        "Toggle dark mode (now following the system)"
                    } else {
                        "Toggle dark mode"
                    };
                    if ui.button(icon).on_hover_text(hint).clicked() {
                        messages.push(Message::ToggleDarkMode);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let layout = self.config.ui.layout.label();
                ui.label(egui::RichText::new(format!("{} layout", layout)).weak());
                if let Some((err, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.label(format!(" | {}", info));
                }
            });
        });
    }

    pub(crate) fn render_settings(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        egui::SidePanel::right("settings_panel")
            .resizable(false)
            .exact_width(style::SETTINGS_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.heading("Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            messages.push(Message::ToggleSettings);
                        }
                    });
                });
                ui.separator();

                ui.label(egui::RichText::new("Theme").strong());
                ui.horizontal_wrapped(|ui| {
                    for color in ThemeColor::ALL {
                        let swatch = egui::RichText::new(format!("⏺ {}", color.label()))
                            .color(style::accent(color, self.is_dark()));
                        if ui
                            .selectable_label(self.config.theme.color == color, swatch)
                            .clicked()
                        {
                            messages.push(Message::SetThemeColor(color));
                        }
                    }
                });

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Scheme").strong());
                ui.horizontal(|ui| {
                    for mode in ThemeMode::ALL {
                        if ui
                            .selectable_label(self.config.theme.mode == mode, mode.label())
                            .clicked()
                        {
                            messages.push(Message::SetThemeMode(mode));
                        }
                    }
                });

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Layout").strong());
                ui.horizontal(|ui| {
                    for layout in LayoutType::ALL {
                        if ui
                            .selectable_label(self.config.ui.layout == layout, layout.label())
                            .clicked()
                        {
                            messages.push(Message::SetLayout(layout));
                        }
                    }
                });

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Navigation").strong());
                let mut auto_expand = self.config.navigation.auto_expand_active;
                if ui
                    .checkbox(&mut auto_expand, "Open the menu of the current page")
                    .changed()
                {
                    messages.push(Message::SetAutoExpand(auto_expand));
                }
                let mut collapse_others = self.config.navigation.collapse_others_on_expand;
                if ui
                    .checkbox(&mut collapse_others, "Keep only one menu open")
                    .changed()
                {
                    messages.push(Message::SetCollapseOthers(collapse_others));
                }

                ui.add_space(16.0);
                if ui.button("Reset to defaults").clicked() {
                    messages.push(Message::ResetPreferences);
                }
            });
    }

    pub(crate) fn render_page(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let trail = self.navigation.active_trail();
            let crumbs: Vec<&str> = trail
                .iter()
                .filter_map(|node| node.title.as_deref())
                .collect();

            if crumbs.len() > 1 {
                ui.label(egui::RichText::new(crumbs.join(" / ")).weak());
            }
            let title = crumbs.last().copied().unwrap_or("Page");
            ui.heading(title);
            ui.label(egui::RichText::new(self.router.location()).monospace().weak());
            ui.add_space(12.0);

            if trail.is_empty() {
                ui.label("No menu entry points at this location.");
            } else {
                ui.label(format!("{} content goes here.", title));
            }
        });
    }
}
