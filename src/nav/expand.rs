// Expansion policies - location driven auto-expand and click toggling
use super::active::has_active_descendant;
use super::types::{sibling_list, NavKind, NavNode};

/// Opens every top-level collapsable whose direct child matches `location`.
///
/// Nothing is ever collapsed here. Returns the number of nodes that changed.
pub fn auto_expand(location: &str, tree: &[NavNode], enabled: bool) -> usize {
    if !enabled {
        return 0;
    }

    let mut opened = 0;
    for node in tree {
        if node.is_collapsable() && has_active_descendant(node, location) && !node.is_expanded() {
            node.set_expanded(true);
            opened += 1;
        }
    }
    if opened > 0 {
        log::debug!("auto-expanded {} menu(s) for {}", opened, location);
    }
    opened
}

/// Flips `node`, closing the other collapsables in its scope first when
/// opening with `collapse_others` set.
///
/// A node with no collapsable ancestor shares its scope with every top-level
/// menu, including those listed under groups. A node nested in a collapsable
/// only competes with its siblings. `tree` is the full forest `node` belongs
/// to. Disabled nodes are ignored.
pub fn toggle_expand(node: &NavNode, tree: &[NavNode], collapse_others: bool) {
    if node.disabled {
        return;
    }

    let will_expand = !node.is_expanded();
    if will_expand && collapse_others {
        let scope: Vec<&NavNode> = if inside_collapsable(tree, &node.id, false) == Some(true) {
            sibling_list(tree, &node.id).unwrap_or(tree).iter().collect()
        } else {
            let mut menus = Vec::new();
            top_level_menus(tree, &mut menus);
            menus
        };
        let own = node.expanded_cell();
        for other in scope {
            if other.is_collapsable() && !other.expanded_cell().same_cell(own) {
                other.set_expanded(false);
            }
        }
    }
    node.set_expanded(will_expand);
}

/// Whether `id` sits below a collapsable; `None` when it is not in the tree.
fn inside_collapsable(nodes: &[NavNode], id: &str, nested: bool) -> Option<bool> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(nested)
        } else {
            inside_collapsable(&node.children, id, nested || node.is_collapsable())
        }
    })
}

/// Collapsables at the top level or below groups only.
fn top_level_menus<'a>(nodes: &'a [NavNode], menus: &mut Vec<&'a NavNode>) {
    for node in nodes {
        match node.kind {
            NavKind::Collapsable => menus.push(node),
            NavKind::Group => top_level_menus(&node.children, menus),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::reconcile::{reconcile, NodeTable};
    use crate::nav::types::{find_node, NavDescriptor};

    fn three_menus() -> Vec<NavNode> {
        let items = vec![
            NavDescriptor::collapsable("a", vec![NavDescriptor::basic("a-1", "/a/one")]),
            NavDescriptor::collapsable("b", vec![NavDescriptor::basic("b-1", "/b/one")]),
            NavDescriptor::collapsable(
                "c",
                vec![
                    NavDescriptor::collapsable("c-x", vec![NavDescriptor::basic("c-x-1", "/c/x")]),
                    NavDescriptor::collapsable("c-y", vec![NavDescriptor::basic("c-y-1", "/c/y")]),
                ],
            ),
        ];
        reconcile(&items, &NodeTable::new()).0
    }

    #[test]
    fn test_accordion_keeps_one_branch_open() {
        let tree = three_menus();
        toggle_expand(&tree[0], &tree, true);
        assert!(tree[0].is_expanded());

        toggle_expand(&tree[1], &tree, true);
        assert!(!tree[0].is_expanded());
        assert!(tree[1].is_expanded());
        assert!(!tree[2].is_expanded());
    }

    #[test]
    fn test_without_accordion_both_stay_open() {
        let tree = three_menus();
        toggle_expand(&tree[0], &tree, false);
        toggle_expand(&tree[1], &tree, false);
        assert!(tree[0].is_expanded());
        assert!(tree[1].is_expanded());
    }

    #[test]
    fn test_collapsing_leaves_others_alone() {
        let tree = three_menus();
        tree[0].set_expanded(true);
        tree[1].set_expanded(true);
        toggle_expand(&tree[1], &tree, true);
        assert!(tree[0].is_expanded());
        assert!(!tree[1].is_expanded());
    }

    #[test]
    fn test_disabled_node_is_not_toggled() {
        let items = vec![NavDescriptor::collapsable("a", Vec::new()).disabled()];
        let (tree, _) = reconcile(&items, &NodeTable::new());
        toggle_expand(&tree[0], &tree, true);
        assert!(!tree[0].is_expanded());
    }

    #[test]
    fn test_nested_accordion_keeps_ancestor_open() {
        let tree = three_menus();
        toggle_expand(&tree[2], &tree, true);
        let x = find_node(&tree, "c-x").expect("c-x");
        let y = find_node(&tree, "c-y").expect("c-y");
        toggle_expand(x, &tree, true);
        toggle_expand(y, &tree, true);
        assert!(tree[2].is_expanded());
        assert!(!x.is_expanded());
        assert!(y.is_expanded());
    }

    #[test]
    fn test_accordion_reaches_menus_under_groups() {
        let grouped = NavDescriptor::collapsable("b", vec![NavDescriptor::basic("b-1", "/b/one")]);
        let items = vec![
            NavDescriptor::collapsable("a", vec![NavDescriptor::basic("a-1", "/a/one")]),
            NavDescriptor::group("g", vec![grouped]),
        ];
        let (tree, _) = reconcile(&items, &NodeTable::new());
        let b = find_node(&tree, "b").expect("b");

        toggle_expand(&tree[0], &tree, true);
        toggle_expand(b, &tree, true);
        assert!(!tree[0].is_expanded());
        assert!(b.is_expanded());

        toggle_expand(&tree[0], &tree, true);
        assert!(tree[0].is_expanded());
        assert!(!b.is_expanded());
    }

    #[test]
    fn test_auto_expand_never_collapses() {
        let tree = three_menus();
        toggle_expand(&tree[0], &tree, true);

        let opened = auto_expand("/b/one", &tree, true);
        assert_eq!(opened, 1);
        assert!(tree[0].is_expanded());
        assert!(tree[1].is_expanded());
    }

    #[test]
    fn test_auto_expand_disabled_is_noop() {
        let tree = three_menus();
        assert_eq!(auto_expand("/a/one", &tree, false), 0);
        assert!(!tree[0].is_expanded());
    }

    #[test]
    fn test_auto_expand_top_level_only() {
        let tree = three_menus();
        auto_expand("/c/x", &tree, true);
        assert!(!tree[2].is_expanded());
        assert!(!find_node(&tree, "c-x").is_some_and(NavNode::is_expanded));
    }
}
