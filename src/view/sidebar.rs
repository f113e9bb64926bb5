// Sidebar rendering for the classic and dense layouts

use crate::app::Gatze;
use crate::message::Message;
use crate::style;
use eframe::egui;
use gatze::nav::active;
use gatze::nav::{DisplayMode, NavKind, NavNode, Navigation};

impl Gatze {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        // Clones share the expand cells, so toggles made later still land
        let items = self.navigation.items().to_vec();
        let navigation = &mut self.navigation;

        match navigation.display_mode() {
            DisplayMode::Classic => {
                egui::SidePanel::left("nav_classic")
                    .resizable(false)
                    .exact_width(style::CLASSIC_WIDTH)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("nav_scroll")
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                for node in &items {
                                    render_node(ui, navigation, node, messages);
                                }
                            });
                    });
            }
            DisplayMode::Dense => {
                let widened = navigation.is_temporarily_expanded();
                let width = if widened {
                    style::DENSE_EXPANDED_WIDTH
                } else {
                    style::DENSE_WIDTH
                };
                let panel = egui::SidePanel::left("nav_dense")
                    .resizable(false)
                    .exact_width(width)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("nav_scroll")
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                for node in &items {
                                    if widened {
                                        render_node(ui, navigation, node, messages);
                                    } else {
                                        render_rail_node(ui, navigation, node, messages);
                                    }
                                }
                            });
                    });

                let hovered = ctx
                    .pointer_hover_pos()
                    .is_some_and(|pos| panel.response.rect.contains(pos));
                if hovered && !widened {
                    messages.push(Message::RailPointerEnter);
                } else if !hovered && widened {
                    messages.push(Message::RailPointerLeave);
                }
            }
        }
    }
}

fn display_title(node: &NavNode) -> &str {
    node.title.as_deref().unwrap_or(node.id.as_str())
}

fn entry_text(node: &NavNode) -> String {
    format!("{}  {}", style::icon_glyph(node.icon.as_deref()), display_title(node))
}

fn link_message(node: &NavNode) -> Option<Message> {
    let link = node.link.clone()?;
    Some(if node.external_link {
        Message::OpenExternal(link)
    } else {
        Message::Navigate(link)
    })
}

fn with_tooltip(response: egui::Response, node: &NavNode) -> egui::Response {
    match &node.tooltip {
        Some(tooltip) => response.on_hover_text(tooltip.as_str()),
        None => response,
    }
}

/// Full-width entry with icon, title, subtitle and badge.
fn render_node(
    ui: &mut egui::Ui,
    navigation: &mut Navigation,
    node: &NavNode,
    messages: &mut Vec<Message>,
) {
    if node.hidden {
        return;
    }

    match node.kind {
        NavKind::Divider => {
            ui.separator();
        }
        NavKind::Spacer => ui.add_space(style::SPACER_HEIGHT),
        NavKind::Group => {
            ui.add_space(8.0);
            if let Some(title) = &node.title {
                ui.label(egui::RichText::new(title.to_uppercase()).small().strong().weak());
            }
            for child in &node.children {
                render_node(ui, navigation, child, messages);
            }
        }
        NavKind::Basic => {
            let is_active = active::is_active(node, navigation.location());
            let accent = ui.visuals().hyperlink_color;
            let response = ui
                .add_enabled_ui(!node.disabled, |ui| {
                    ui.horizontal(|ui| {
                        let response = ui.selectable_label(is_active, entry_text(node));
                        if let Some(badge) = &node.badge {
                            ui.label(egui::RichText::new(&badge.title).small().color(accent));
                        }
                        if node.external_link {
                            ui.label(egui::RichText::new("↗").small().weak());
                        }
                        response
                    })
                    .inner
                })
                .inner;
            if let Some(subtitle) = &node.subtitle {
                ui.label(egui::RichText::new(subtitle).small().weak());
            }
            if with_tooltip(response, node).clicked() {
                messages.extend(link_message(node));
            }
        }
        NavKind::Collapsable => {
            let highlighted = navigation.visual_active(&node.id);
            let expanded = node.is_expanded();
            let response = ui
                .add_enabled_ui(!node.disabled, |ui| {
                    ui.horizontal(|ui| {
                        let response = ui.selectable_label(highlighted, entry_text(node));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(if expanded { "⏷" } else { "⏵" });
                        });
                        response
                    })
                    .inner
                })
                .inner;
            if with_tooltip(response, node).clicked() {
                messages.push(Message::ToggleMenu(node.id.clone()));
            }
            if expanded {
                ui.indent(node.id.as_str(), |ui| {
                    for child in &node.children {
                        render_node(ui, navigation, child, messages);
                    }
                });
            }
        }
    }
}

/// Icon-only entry for the collapsed rail. Children stay hidden, so parents
/// carry the highlight.
fn render_rail_node(
    ui: &mut egui::Ui,
    navigation: &mut Navigation,
    node: &NavNode,
    messages: &mut Vec<Message>,
) {
    if node.hidden {
        return;
    }

    match node.kind {
        NavKind::Divider => {
            ui.separator();
        }
        NavKind::Spacer => ui.add_space(style::SPACER_HEIGHT),
        NavKind::Group => {
            for child in &node.children {
                render_rail_node(ui, navigation, child, messages);
            }
        }
        NavKind::Basic | NavKind::Collapsable => {
            let highlighted = if node.kind == NavKind::Basic {
                active::is_active(node, navigation.location())
            } else {
                navigation.visual_active(&node.id)
            };
            let glyph = egui::RichText::new(style::icon_glyph(node.icon.as_deref()))
                .size(style::RAIL_ICON_SIZE);
            let response = ui
                .vertical_centered(|ui| {
                    ui.add_enabled_ui(!node.disabled, |ui| ui.selectable_label(highlighted, glyph))
                        .inner
                })
                .inner
                .on_hover_text(display_title(node));
            if response.clicked() {
                if node.kind == NavKind::Basic {
                    messages.extend(link_message(node));
                } else {
                    messages.push(Message::ToggleMenu(node.id.clone()));
                }
            }
        }
    }
}
