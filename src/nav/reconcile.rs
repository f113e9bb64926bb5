// Tree reconciliation - merges fresh descriptors into stateful nodes
use super::types::{ExpandedCell, NavDescriptor, NavNode};
use std::collections::HashMap;

/// Lookup table of every node seen in the last pass, keyed by id.
pub type NodeTable = HashMap<String, NavNode>;

/// Builds the node tree for `descriptors`, reusing the expand cell of every id
/// already present in `previous`.
///
/// The returned table contains exactly the ids of this pass. Ids that were in
/// `previous` but are absent now are dropped, so a later pass that brings one
/// back starts it from its descriptor hint again.
pub fn reconcile(descriptors: &[NavDescriptor], previous: &NodeTable) -> (Vec<NavNode>, NodeTable) {
    let mut next = NodeTable::with_capacity(previous.len().max(descriptors.len()));
    let tree = descriptors
        .iter()
        .map(|descriptor| visit(descriptor, previous, &mut next))
        .collect();

    let purged = previous.keys().filter(|id| !next.contains_key(*id)).count();
    if purged > 0 {
        log::debug!("navigation reconcile purged {} stale node(s)", purged);
    }
    log::debug!("navigation reconcile kept {} node(s)", next.len());

    (tree, next)
}

fn visit(descriptor: &NavDescriptor, previous: &NodeTable, next: &mut NodeTable) -> NavNode {
    let expanded = match previous.get(&descriptor.id) {
        Some(existing) => existing.expanded_cell().clone(),
        None => ExpandedCell::new(descriptor.initially_expanded),
    };

    let mut node = NavNode::from_descriptor(descriptor, expanded);
    node.children = descriptor
        .children
        .iter()
        .map(|child| visit(child, previous, next))
        .collect();

    if next.insert(node.id.clone(), node.clone()).is_some() {
        log::warn!(
            "navigation id `{}` appears more than once; the last occurrence wins",
            node.id
        );
    }
    node
}

/// Owns the node table of one navigation instance across passes.
#[derive(Default)]
pub struct Reconciler {
    table: NodeTable,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one pass and replaces the table only once the pass is complete.
    pub fn update(&mut self, descriptors: &[NavDescriptor]) -> Vec<NavNode> {
        let (tree, table) = reconcile(descriptors, &self.table);
        self.table = table;
        tree
    }

    pub fn get(&self, id: &str) -> Option<&NavNode> {
        self.table.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.table.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
