pub mod router;
pub mod ui;

pub use router::Router;
pub use ui::UiState;
