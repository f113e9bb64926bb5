// Navigation core - descriptor reconciliation, active state and expansion
pub mod active;
pub mod display;
pub mod engine;
pub mod error;
pub mod expand;
pub mod menu;
pub mod reconcile;
pub mod types;

pub use display::{DisplayMode, RailState};
pub use engine::{NavOptions, Navigation};
pub use error::NavError;
pub use types::{Badge, NavDescriptor, NavKind, NavNode};
