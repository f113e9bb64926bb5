// Navigation instance - one sidebar's tree, location and display state
use super::active::{self, ActiveCache};
use super::display::{self, DisplayMode, RailCoordinator};
use super::error::{validate, NavError};
use super::expand;
use super::reconcile::Reconciler;
use super::types::{find_node, NavDescriptor, NavNode};

/// Host-controlled behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavOptions {
    pub auto_expand_active: bool,
    pub collapse_others_on_expand: bool,
    pub dense_mode: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            auto_expand_active: true,
            collapse_others_on_expand: true,
            dense_mode: false,
        }
    }
}

/// State of one navigation component, from construction to teardown.
pub struct Navigation {
    options: NavOptions,
    reconciler: Reconciler,
    items: Vec<NavNode>,
    revision: u64,
    location: String,
    cache: ActiveCache,
    rail: RailCoordinator,
}

impl Navigation {
    pub fn new(options: NavOptions, location: impl Into<String>) -> Self {
        let mut nav = Self {
            options,
            reconciler: Reconciler::new(),
            items: Vec::new(),
            revision: 0,
            location: location.into(),
            cache: ActiveCache::new(),
            rail: RailCoordinator::new(),
        };
        nav.run_auto_expand();
        nav
    }

    /// Creates an instance already populated with `items`.
    pub fn with_items(
        options: NavOptions,
        location: impl Into<String>,
        items: &[NavDescriptor],
    ) -> Result<Self, NavError> {
        let mut nav = Self::new(options, location);
        nav.set_items(items)?;
        Ok(nav)
    }

    pub fn options(&self) -> NavOptions {
        self.options
    }

    pub fn set_options(&mut self, options: NavOptions) {
        if self.options == options {
            return;
        }
        let enabled_auto_expand = options.auto_expand_active && !self.options.auto_expand_active;
        if !options.dense_mode {
            self.rail.reset();
        }
        self.options = options;
        if enabled_auto_expand {
            self.run_auto_expand();
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_dense(self.options.dense_mode)
    }

    /// Replaces the descriptor list. Invalid input leaves the current tree as is.
    pub fn set_items(&mut self, items: &[NavDescriptor]) -> Result<(), NavError> {
        validate(items)?;
        self.items = self.reconciler.update(items);
        self.revision = self.revision.wrapping_add(1);
        self.cache.invalidate();
        self.run_auto_expand();
        Ok(())
    }

    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    pub fn node(&self, id: &str) -> Option<&NavNode> {
        find_node(&self.items, id)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Records a new location and runs auto-expand when it differs.
    pub fn set_location(&mut self, location: &str) {
        if self.location == location {
            return;
        }
        self.location.clear();
        self.location.push_str(location);
        self.run_auto_expand();
    }

    /// Click on a collapsable entry.
    pub fn toggle(&mut self, id: &str) -> Result<(), NavError> {
        let node = find_node(&self.items, id).ok_or_else(|| NavError::UnknownItem(id.to_string()))?;
        expand::toggle_expand(node, &self.items, self.options.collapse_others_on_expand);
        Ok(())
    }

    /// Pointer entered the rail. Ignored outside dense mode.
    pub fn pointer_enter(&mut self) {
        if self.options.dense_mode {
            self.rail.pointer_enter();
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.options.dense_mode {
            self.rail.pointer_leave();
        }
    }

    pub fn is_temporarily_expanded(&self) -> bool {
        self.rail.is_temporarily_expanded()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.node(id)
            .is_some_and(|node| active::is_active(node, &self.location))
    }

    /// Root-to-leaf path of the entry matching the current location.
    pub fn active_trail(&self) -> Vec<&NavNode> {
        active::active_trail(&self.items, &self.location)
    }

    /// Cached check whether a direct child of `id` is active.
    pub fn has_active_child(&mut self, id: &str) -> bool {
        self.cache
            .has_active_child(&self.items, &self.location, self.revision, id)
    }

    /// Whether the collapsable `id` should be drawn highlighted in the current
    /// layout and rail state.
    pub fn visual_active(&mut self, id: &str) -> bool {
        let expanded = match self.node(id) {
            Some(node) if node.is_collapsable() && !node.children.is_empty() => node.is_expanded(),
            _ => return false,
        };
        let has_active_child = self.has_active_child(id);
        display::visual_active(self.display_mode(), self.rail.state(), has_active_child, expanded)
    }

    fn run_auto_expand(&self) {
        if self.location.is_empty() {
            return;
        }
        expand::auto_expand(&self.location, &self.items, self.options.auto_expand_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<NavDescriptor> {
        vec![
            NavDescriptor::basic("dash", "/dashboard").exact(),
            NavDescriptor::collapsable(
                "prod",
                vec![NavDescriptor::basic("prod-list", "/products/list")],
            ),
            NavDescriptor::collapsable(
                "orders",
                vec![NavDescriptor::basic("orders-all", "/orders")],
            ),
        ]
    }

    fn expanded_flags(nav: &Navigation) -> Vec<bool> {
        nav.items().iter().map(NavNode::is_expanded).collect()
    }

    #[test]
    fn test_scenario_expands_products_on_mount() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/products/list", &scenario()).unwrap();
        assert!(nav.has_active_child("prod"));
        assert!(!nav.is_active("dash"));
        assert!(nav.is_active("prod-list"));
        assert!(nav.node("prod").unwrap().is_expanded());
    }

    #[test]
    fn test_location_change_keeps_user_expanded_branch() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/dashboard", &scenario()).unwrap();
        nav.toggle("prod").unwrap();
        assert!(nav.node("prod").unwrap().is_expanded());

        nav.set_location("/orders");
        assert!(nav.node("prod").unwrap().is_expanded());
        assert!(nav.node("orders").unwrap().is_expanded());
    }

    #[test]
    fn test_no_auto_expand_when_disabled() {
        let options = NavOptions {
            auto_expand_active: false,
            ..NavOptions::default()
        };
        let mut nav = Navigation::with_items(options, "/products/list", &scenario()).unwrap();
        assert!(!nav.node("prod").unwrap().is_expanded());

        nav.set_options(NavOptions::default());
        assert!(nav.node("prod").unwrap().is_expanded());
    }

    #[test]
    fn test_accordion_toggle() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/dashboard", &scenario()).unwrap();
        nav.toggle("prod").unwrap();
        nav.toggle("orders").unwrap();
        assert_eq!(expanded_flags(&nav), [false, false, true]);
        assert!(matches!(nav.toggle("nope"), Err(NavError::UnknownItem(_))));
    }

    #[test]
    fn test_toggle_survives_item_update() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/dashboard", &scenario()).unwrap();
        nav.toggle("orders").unwrap();

        let mut items = scenario();
        items[2].title = Some("Orders".into());
        nav.set_items(&items).unwrap();
        assert!(nav.node("orders").unwrap().is_expanded());
        assert_eq!(nav.node("orders").unwrap().title.as_deref(), Some("Orders"));
    }

    #[test]
    fn test_invalid_update_keeps_tree() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/dashboard", &scenario()).unwrap();
        let mut items = scenario();
        items.push(NavDescriptor::basic("dash", "/again"));
        assert!(nav.set_items(&items).is_err());
        assert_eq!(nav.items().len(), 3);
    }

    #[test]
    fn test_rail_hover_never_changes_items() {
        let options = NavOptions {
            dense_mode: true,
            ..NavOptions::default()
        };
        let mut nav = Navigation::with_items(options, "/products/list", &scenario()).unwrap();
        nav.toggle("orders").unwrap();
        let before = expanded_flags(&nav);
        for _ in 0..5 {
            nav.pointer_enter();
            assert!(nav.is_temporarily_expanded());
            nav.pointer_leave();
            nav.pointer_leave();
        }
        nav.pointer_enter();
        assert_eq!(expanded_flags(&nav), before);
    }

    #[test]
    fn test_classic_ignores_pointer() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/dashboard", &scenario()).unwrap();
        nav.pointer_enter();
        assert!(!nav.is_temporarily_expanded());
    }

    #[test]
    fn test_visual_active_dense_vs_classic() {
        let dense = NavOptions {
            dense_mode: true,
            ..NavOptions::default()
        };
        let mut nav = Navigation::with_items(dense, "/products/list", &scenario()).unwrap();
        // Auto-expanded, rail collapsed: parent carries the indicator.
        assert!(nav.visual_active("prod"));
        nav.pointer_enter();
        assert!(!nav.visual_active("prod"));
        nav.node("prod").unwrap().set_expanded(false);
        assert!(nav.visual_active("prod"));

        nav.set_options(NavOptions::default());
        assert!(!nav.is_temporarily_expanded());
        assert!(nav.visual_active("prod"));
        nav.node("prod").unwrap().set_expanded(true);
        assert!(!nav.visual_active("prod"));
        assert!(!nav.visual_active("dash"));
        assert!(!nav.visual_active("orders"));
    }

    #[test]
    fn test_cache_invalidated_by_location_and_items() {
        let mut nav =
            Navigation::with_items(NavOptions::default(), "/products/list", &scenario()).unwrap();
        assert!(nav.has_active_child("prod"));
        nav.set_location("/orders");
        assert!(!nav.has_active_child("prod"));
        assert!(nav.has_active_child("orders"));

        nav.set_items(&scenario()[..2]).unwrap();
        assert!(!nav.has_active_child("orders"));
    }
}
