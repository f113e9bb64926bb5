// Navigation data model - descriptors in, stateful nodes out
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Behavioural kind of a navigation entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    Basic,
    Collapsable,
    Group,
    Divider,
    Spacer,
}

impl NavKind {
    /// Kinds that may own children.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Collapsable | Self::Group)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub title: String,
    #[serde(default)]
    pub classes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemClasses {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub wrapper: Option<String>,
}

/// Host-supplied description of one navigation entry.
///
/// Everything except `id`, `kind`, `link`, `exact_match`, `disabled` and
/// `initially_expanded` is display data the core copies through untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NavKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub exact_match: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, rename = "expanded")]
    pub initially_expanded: bool,
    #[serde(default)]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub external_link: bool,
    #[serde(default)]
    pub target: Option<LinkTarget>,
    #[serde(default)]
    pub classes: Option<ItemClasses>,
    #[serde(default)]
    pub children: Vec<NavDescriptor>,
}

impl NavDescriptor {
    fn bare(id: impl Into<String>, kind: NavKind) -> Self {
        Self {
            id: id.into(),
            kind,
            title: None,
            subtitle: None,
            icon: None,
            tooltip: None,
            link: None,
            exact_match: false,
            disabled: false,
            hidden: false,
            initially_expanded: false,
            badge: None,
            external_link: false,
            target: None,
            classes: None,
            children: Vec::new(),
        }
    }

    pub fn basic(id: impl Into<String>, link: impl Into<String>) -> Self {
        let mut descriptor = Self::bare(id, NavKind::Basic);
        descriptor.link = Some(link.into());
        descriptor
    }

    pub fn collapsable(id: impl Into<String>, children: Vec<NavDescriptor>) -> Self {
        let mut descriptor = Self::bare(id, NavKind::Collapsable);
        descriptor.children = children;
        descriptor
    }

    pub fn group(id: impl Into<String>, children: Vec<NavDescriptor>) -> Self {
        let mut descriptor = Self::bare(id, NavKind::Group);
        descriptor.children = children;
        descriptor
    }

    pub fn divider(id: impl Into<String>) -> Self {
        Self::bare(id, NavKind::Divider)
    }

    pub fn spacer(id: impl Into<String>) -> Self {
        Self::bare(id, NavKind::Spacer)
    }

    pub fn exact(mut self) -> Self {
        self.exact_match = true;
        self
    }

    pub fn expanded(mut self) -> Self {
        self.initially_expanded = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Shared expand/collapse flag of a node.
///
/// Clones point at the same flag, so a renderer holding one observes every
/// toggle made through another. The reconciler is the only place that creates
/// fresh cells.
#[derive(Clone, Default)]
pub struct ExpandedCell(Rc<Cell<bool>>);

impl ExpandedCell {
    pub(crate) fn new(value: bool) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// True when both handles refer to the same underlying flag.
    pub fn same_cell(&self, other: &ExpandedCell) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ExpandedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExpandedCell").field(&self.get()).finish()
    }
}

/// Reconciled, stateful navigation entry.
#[derive(Clone, Debug)]
pub struct NavNode {
    pub id: String,
    pub kind: NavKind,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    pub link: Option<String>,
    pub exact_match: bool,
    pub disabled: bool,
    pub hidden: bool,
    pub badge: Option<Badge>,
    pub external_link: bool,
    pub target: Option<LinkTarget>,
    pub classes: Option<ItemClasses>,
    pub children: Vec<NavNode>,
    expanded: ExpandedCell,
}

impl NavNode {
    /// Copies the display fields of `descriptor` and binds them to `expanded`.
    /// Children are attached by the reconciler.
    pub(crate) fn from_descriptor(descriptor: &NavDescriptor, expanded: ExpandedCell) -> Self {
        Self {
            id: descriptor.id.clone(),
            kind: descriptor.kind,
            title: descriptor.title.clone(),
            subtitle: descriptor.subtitle.clone(),
            icon: descriptor.icon.clone(),
            tooltip: descriptor.tooltip.clone(),
            link: descriptor.link.clone(),
            exact_match: descriptor.exact_match,
            disabled: descriptor.disabled,
            hidden: descriptor.hidden,
            badge: descriptor.badge.clone(),
            external_link: descriptor.external_link,
            target: descriptor.target,
            classes: descriptor.classes.clone(),
            children: Vec::new(),
            expanded,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn set_expanded(&self, value: bool) {
        self.expanded.set(value);
    }

    /// Handle to the node's expand flag, shared with every other clone.
    pub fn expanded_cell(&self) -> &ExpandedCell {
        &self.expanded
    }

    pub fn is_collapsable(&self) -> bool {
        self.kind == NavKind::Collapsable
    }

    /// Depth-first search of this node and its descendants.
    pub fn find(&self, id: &str) -> Option<&NavNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Finds `id` anywhere in a forest of nodes.
pub fn find_node<'a>(nodes: &'a [NavNode], id: &str) -> Option<&'a NavNode> {
    nodes.iter().find_map(|node| node.find(id))
}

/// Returns the sibling list that directly contains `id`.
pub fn sibling_list<'a>(nodes: &'a [NavNode], id: &str) -> Option<&'a [NavNode]> {
    if nodes.iter().any(|node| node.id == id) {
        return Some(nodes);
    }
    nodes
        .iter()
        .find_map(|node| sibling_list(&node.children, id))
}
