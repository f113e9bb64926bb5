// Active-path resolution against the current location
use super::types::{NavKind, NavNode};
use std::collections::HashMap;

/// Prefix or exact comparison of a link with the current location.
pub fn is_link_active(location: &str, link: &str, exact_match: bool) -> bool {
    if link.is_empty() {
        return false;
    }
    if exact_match {
        location == link
    } else {
        location.starts_with(link)
    }
}

/// A basic node with a link is active when its link matches `location`.
pub fn is_active(node: &NavNode, location: &str) -> bool {
    if node.kind != NavKind::Basic {
        return false;
    }
    node.link
        .as_deref()
        .is_some_and(|link| is_link_active(location, link, node.exact_match))
}

/// True when a direct child of a collapsable or group node is active.
///
/// Only one level is inspected; grandchildren do not count.
pub fn has_active_descendant(node: &NavNode, location: &str) -> bool {
    if !node.kind.is_container() {
        return false;
    }
    node.children.iter().any(|child| is_active(child, location))
}

/// Path from the root to the most specific active entry (longest link).
///
/// Empty when nothing matches `location`.
pub fn active_trail<'a>(nodes: &'a [NavNode], location: &str) -> Vec<&'a NavNode> {
    let mut best = None;
    let mut path = Vec::new();
    search_trail(nodes, location, &mut path, &mut best);
    best.unwrap_or_default()
}

fn search_trail<'a>(
    nodes: &'a [NavNode],
    location: &str,
    path: &mut Vec<&'a NavNode>,
    best: &mut Option<Vec<&'a NavNode>>,
) {
    for node in nodes {
        path.push(node);
        if is_active(node, location) {
            let len = node.link.as_deref().map_or(0, str::len);
            let best_len = best
                .as_ref()
                .and_then(|trail| trail.last())
                .and_then(|leaf| leaf.link.as_deref())
                .map(str::len);
            if best_len.map_or(true, |best_len| len > best_len) {
                *best = Some(path.clone());
            }
        }
        search_trail(&node.children, location, path, best);
        path.pop();
    }
}

/// Per-parent "has active child" flags for one location and one tree revision.
///
/// The owner bumps the revision whenever the tree changes; a lookup with a
/// different location or revision rebuilds the whole map.
#[derive(Default)]
pub struct ActiveCache {
    location: String,
    revision: u64,
    valid: bool,
    flags: HashMap<String, bool>,
}

impl ActiveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Cached `has_active_descendant` for the container `id`.
    pub fn has_active_child(
        &mut self,
        tree: &[NavNode],
        location: &str,
        revision: u64,
        id: &str,
    ) -> bool {
        if !self.valid || self.revision != revision || self.location != location {
            self.rebuild(tree, location, revision);
        }
        self.flags.get(id).copied().unwrap_or(false)
    }

    fn rebuild(&mut self, tree: &[NavNode], location: &str, revision: u64) {
        self.flags.clear();
        collect(tree, location, &mut self.flags);
        self.location.clear();
        self.location.push_str(location);
        self.revision = revision;
        self.valid = true;
    }
}

fn collect(nodes: &[NavNode], location: &str, flags: &mut HashMap<String, bool>) {
    for node in nodes {
        if node.kind.is_container() {
            flags.insert(node.id.clone(), has_active_descendant(node, location));
            collect(&node.children, location, flags);
        }
    }
}
