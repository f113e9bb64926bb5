// Keyboard shortcuts for the dashboard shell

use crate::app::Gatze;
use crate::message::Message;
use eframe::egui;

impl Gatze {
    pub fn handle_input(&self, ctx: &egui::Context) -> Vec<Message> {
        let mut messages = Vec::new();

        // Text fields keep their keys
        if ctx.wants_keyboard_input() {
            return messages;
        }

        ctx.input(|i| {
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft) {
                messages.push(Message::NavigateBack);
            }
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight) {
                messages.push(Message::NavigateForward);
            }
            if i.modifiers.command && i.key_pressed(egui::Key::Comma) {
                messages.push(Message::ToggleSettings);
            }
            if i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::D) {
                messages.push(Message::ToggleDarkMode);
            }
            if i.key_pressed(egui::Key::Escape) && self.ui.settings_open {
                messages.push(Message::ToggleSettings);
            }
        });

        messages
    }
}
