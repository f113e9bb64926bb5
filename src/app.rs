use crate::message::Message;
use crate::style;
use eframe::egui;
use gatze::nav::menu;
use gatze::state::{Router, UiState};
use gatze::{AppConfig, Navigation};
use std::path::PathBuf;

pub struct Gatze {
    pub config: AppConfig,
    /// Where preferences are written; `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
    pub router: Router,
    pub navigation: Navigation,
    pub ui: UiState,
    pub theme_applied: Option<(gatze::ThemeColor, bool)>,
}

impl Gatze {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let system_prefers_dark = cc
            .egui_ctx
            .input(|i| i.raw.system_theme == Some(egui::Theme::Dark));
        Self::with_config(AppConfig::load(), AppConfig::config_path(), system_prefers_dark)
    }

    pub fn with_config(
        config: AppConfig,
        config_path: Option<PathBuf>,
        system_prefers_dark: bool,
    ) -> Self {
        let router = Router::default();
        let mut ui = UiState::new(system_prefers_dark);
        let mut navigation = Navigation::new(config.nav_options(), router.location());

        match menu::default_menu().and_then(|items| navigation.set_items(&items)) {
            Ok(()) => log::info!("loaded {} top-level menu entries", navigation.items().len()),
            Err(e) => ui.set_error(format!("Menu unavailable: {}", e)),
        }

        Self {
            config,
            config_path,
            router,
            navigation,
            ui,
            theme_applied: None,
        }
    }

    pub fn update_with(&mut self, message: Message) {
        match message {
            Message::Navigate(path) => self.navigate(&path),
            Message::OpenExternal(url) => self.open_external(&url),
            Message::NavigateBack => {
                if self.router.go_back().is_some() {
                    self.navigation.set_location(self.router.location());
                }
            }
            Message::NavigateForward => {
                if self.router.go_forward().is_some() {
                    self.navigation.set_location(self.router.location());
                }
            }
            Message::ToggleMenu(id) => {
                if let Err(e) = self.navigation.toggle(&id) {
                    self.ui.set_error(e.to_string());
                }
            }
            Message::RailPointerEnter => self.navigation.pointer_enter(),
            Message::RailPointerLeave => self.navigation.pointer_leave(),
            Message::SetThemeColor(color) => {
                self.config.set_theme_color(color);
                self.preferences_changed();
            }
            Message::SetThemeMode(mode) => {
                self.config.set_theme_mode(mode);
                self.preferences_changed();
            }
            Message::SetLayout(layout) => {
                self.config.set_layout(layout);
                self.preferences_changed();
            }
            Message::SetAutoExpand(enabled) => {
                self.config.navigation.auto_expand_active = enabled;
                self.preferences_changed();
            }
            Message::SetCollapseOthers(enabled) => {
                self.config.navigation.collapse_others_on_expand = enabled;
                self.preferences_changed();
            }
            Message::ToggleDarkMode => {
                self.config.toggle_dark_mode(self.ui.system_prefers_dark);
                self.preferences_changed();
            }
            Message::ResetPreferences => {
                self.config.reset_to_defaults();
                self.preferences_changed();
                self.ui.set_info("Preferences reset".into());
            }
            Message::ToggleSettings => self.ui.toggle_settings(),
            Message::SystemThemeChanged(dark) => self.ui.system_prefers_dark = dark,
        }
    }

    fn navigate(&mut self, path: &str) {
        if self.router.navigate(path) {
            self.navigation.set_location(self.router.location());
        }
    }

    fn open_external(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            self.ui.set_error(format!("Could not open {}: {}", url, e));
        }
    }

    fn preferences_changed(&mut self) {
        self.navigation.set_options(self.config.nav_options());
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                self.ui.set_error(format!("Failed to save preferences: {}", e));
            }
        }
    }

    pub fn is_dark(&self) -> bool {
        self.config.is_dark(self.ui.system_prefers_dark)
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let wanted = (self.config.theme.color, self.is_dark());
        if self.theme_applied == Some(wanted) {
            return;
        }
        ctx.set_visuals(style::visuals(wanted.0, wanted.1));
        self.theme_applied = Some(wanted);
    }

    fn sync_system_theme(&mut self, ctx: &egui::Context) -> Option<Message> {
        let dark = ctx.input(|i| i.raw.system_theme.map(|t| t == egui::Theme::Dark))?;
        (dark != self.ui.system_prefers_dark).then_some(Message::SystemThemeChanged(dark))
    }
}

impl eframe::App for Gatze {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = self.sync_system_theme(ctx) {
            self.update_with(message);
        }
        self.apply_theme(ctx);
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        let mut messages = self.handle_input(ctx);

        self.render_top_bar(ctx, &mut messages);
        self.render_status_bar(ctx);
        self.render_sidebar(ctx, &mut messages);
        if self.ui.settings_open {
            self.render_settings(ctx, &mut messages);
        }
        self.render_page(ctx);

        // Apply deferred actions
        for message in messages {
            self.update_with(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatze::{LayoutType, ThemeMode};

    fn app() -> Gatze {
        Gatze::with_config(AppConfig::default(), None, false)
    }

    #[test]
    fn test_starts_on_dashboard_with_menu() {
        let app = app();
        assert_eq!(app.router.location(), "/dashboard");
        assert!(app.navigation.is_active("dashboard"));
        assert!(app.ui.error_message.is_none());
    }

    #[test]
    fn test_navigate_expands_owning_menu() {
        let mut app = app();
        app.update_with(Message::Navigate("/orders/pending".into()));
        assert_eq!(app.navigation.location(), "/orders/pending");
        assert!(app.navigation.node("orders").unwrap().is_expanded());

        app.update_with(Message::NavigateBack);
        assert_eq!(app.navigation.location(), "/dashboard");
        app.update_with(Message::NavigateForward);
        assert_eq!(app.navigation.location(), "/orders/pending");
    }

    #[test]
    fn test_layout_switch_updates_navigation() {
        let mut app = app();
        app.update_with(Message::SetLayout(LayoutType::Dense));
        assert!(app.navigation.options().dense_mode);
        app.update_with(Message::RailPointerEnter);
        assert!(app.navigation.is_temporarily_expanded());

        app.update_with(Message::SetLayout(LayoutType::Classic));
        assert!(!app.navigation.is_temporarily_expanded());
    }

    #[test]
    fn test_toggle_unknown_menu_reports_error() {
        let mut app = app();
        app.update_with(Message::ToggleMenu("nope".into()));
        assert!(app.ui.error_message.is_some());
    }

    #[test]
    fn test_dark_mode_follows_system_until_toggled() {
        let mut app = app();
        assert!(!app.is_dark());
        app.update_with(Message::SystemThemeChanged(true));
        assert!(app.is_dark());
        app.update_with(Message::ToggleDarkMode);
        assert_eq!(app.config.theme.mode, ThemeMode::Light);
        assert!(!app.is_dark());
    }
}
