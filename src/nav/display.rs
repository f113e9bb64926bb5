// Display mode - rail hover state and the visual-active rule

/// Sidebar presentation chosen by the host layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Classic,
    /// Narrow icon rail that widens while hovered.
    Dense,
}

impl DisplayMode {
    pub fn from_dense(dense: bool) -> Self {
        if dense { Self::Dense } else { Self::Classic }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RailState {
    #[default]
    Collapsed,
    TemporarilyExpanded,
}

/// Tracks the hover-to-widen state of the dense rail.
///
/// Never touches per-item expand flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct RailCoordinator {
    state: RailState,
}

impl RailCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RailState {
        self.state
    }

    pub fn is_temporarily_expanded(&self) -> bool {
        self.state == RailState::TemporarilyExpanded
    }

    /// Returns true when the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.transition(RailState::TemporarilyExpanded)
    }

    /// Returns true when the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.transition(RailState::Collapsed)
    }

    pub fn reset(&mut self) {
        self.state = RailState::Collapsed;
    }

    fn transition(&mut self, to: RailState) -> bool {
        if self.state == to {
            return false;
        }
        log::trace!("rail {:?} -> {:?}", self.state, to);
        self.state = to;
        true
    }
}

/// Whether a collapsable parent should carry the highlight itself.
///
/// The parent is highlighted when one of its children is active and that
/// child is not visible: always on a collapsed rail, otherwise only while the
/// parent is closed.
pub fn visual_active(
    mode: DisplayMode,
    rail: RailState,
    has_active_child: bool,
    expanded: bool,
) -> bool {
    if !has_active_child {
        return false;
    }
    match (mode, rail) {
        (DisplayMode::Dense, RailState::Collapsed) => true,
        (DisplayMode::Dense, RailState::TemporarilyExpanded) | (DisplayMode::Classic, _) => {
            !expanded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_transitions() {
        let mut rail = RailCoordinator::new();
        assert!(!rail.pointer_leave());
        assert!(rail.pointer_enter());
        assert!(!rail.pointer_enter());
        assert!(rail.is_temporarily_expanded());
        assert!(rail.pointer_leave());
        assert_eq!(rail.state(), RailState::Collapsed);
    }

    #[test]
    fn test_dense_collapsed_always_highlights() {
        assert!(visual_active(DisplayMode::Dense, RailState::Collapsed, true, true));
        assert!(visual_active(DisplayMode::Dense, RailState::Collapsed, true, false));
        assert!(!visual_active(DisplayMode::Dense, RailState::Collapsed, false, false));
    }

    #[test]
    fn test_dense_hovered_skips_open_parent() {
        let rail = RailState::TemporarilyExpanded;
        assert!(!visual_active(DisplayMode::Dense, rail, true, true));
        assert!(visual_active(DisplayMode::Dense, rail, true, false));
    }

    #[test]
    fn test_classic_ignores_rail() {
        for rail in [RailState::Collapsed, RailState::TemporarilyExpanded] {
            assert!(!visual_active(DisplayMode::Classic, rail, true, true));
            assert!(visual_active(DisplayMode::Classic, rail, true, false));
            assert!(!visual_active(DisplayMode::Classic, rail, false, false));
        }
    }
}
