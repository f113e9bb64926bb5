pub mod panels;
pub mod sidebar;
