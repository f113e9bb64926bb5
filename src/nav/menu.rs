// Bundled sidebar menu
use super::error::{validate, NavError};
use super::types::NavDescriptor;
use serde::Deserialize;

const DEFAULT_MENU: &str = include_str!("../../assets/navigation.toml");

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<NavDescriptor>,
}

/// Parses and validates a menu file made of `[[items]]` tables.
pub fn parse_menu(contents: &str) -> Result<Vec<NavDescriptor>, NavError> {
    let menu: MenuFile = toml::from_str(contents)?;
    validate(&menu.items)?;
    Ok(menu.items)
}

/// The menu shipped with the dashboard.
pub fn default_menu() -> Result<Vec<NavDescriptor>, NavError> {
    parse_menu(DEFAULT_MENU)
}
