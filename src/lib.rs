pub mod config;
pub mod nav;
pub mod state;

pub use config::{AppConfig, ConfigError, LayoutType, ThemeColor, ThemeMode};
pub use nav::{NavDescriptor, NavError, NavOptions, Navigation};
