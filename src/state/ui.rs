// UI state - transient shell presentation state
use std::time::Instant;

pub struct UiState {
    pub settings_open: bool,
    pub system_prefers_dark: bool,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(system_prefers_dark: bool) -> Self {
        Self {
            settings_open: false,
            system_prefers_dark,
            error_message: None,
            info_message: None,
        }
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn set_error(&mut self, message: String) {
        log::error!("{}", message);
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut ui = UiState::new(false);
        ui.set_error("boom".into());
        ui.set_info("saved".into());
        ui.clear_expired_messages(60);
        assert!(ui.error_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_none());
    }

    #[test]
    fn test_toggle_settings() {
        let mut ui = UiState::new(true);
        ui.toggle_settings();
        assert!(ui.settings_open);
        ui.toggle_settings();
        assert!(!ui.settings_open);
    }
}
