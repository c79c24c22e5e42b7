//! Visibility filtering of the navigation tree.

use std::collections::HashSet;

use civiport_auth::Permission;

use crate::entry::NavEntry;

/// Compute the subset of `entries` visible to a session holding `granted`.
///
/// Depth-first filter over an immutable tree: a gated entry whose
/// permission is not held is dropped together with its whole subtree, and a
/// pathless group left with no surviving children is dropped as well.
/// This is a pure function of the permission set and must be re-run
/// whenever the set changes.
pub fn visible_tree(entries: &[NavEntry], granted: &HashSet<Permission>) -> Vec<NavEntry> {
    entries
        .iter()
        .filter_map(|entry| filter_entry(entry, granted))
        .collect()
}

fn filter_entry(entry: &NavEntry, granted: &HashSet<Permission>) -> Option<NavEntry> {
    if let Some(required) = &entry.permission {
        if !granted.contains(required) {
            return None;
        }
    }

    let children = visible_tree(&entry.children, granted);
    if entry.path.is_none() && children.is_empty() {
        return None;
    }

    Some(NavEntry {
        children,
        ..entry.clone()
    })
}

#[cfg(test)]
mod tests {
    use civiport_auth::registry::{
        self, MANAGE_EMAIL_SETTINGS, MANAGE_WEBSITE_SETTINGS, VIEW_DASHBOARD,
    };
    use proptest::prelude::*;

    use super::*;
    use crate::entry::default_navigation;

    fn granted(perms: &[Permission]) -> HashSet<Permission> {
        perms.iter().cloned().collect()
    }

    #[test]
    fn no_permissions_yields_an_empty_menu() {
        assert!(visible_tree(&default_navigation(), &HashSet::new()).is_empty());
    }

    #[test]
    fn child_permission_is_evaluated_independently() {
        // Website settings without email settings: the group survives but
        // the Email child does not.
        let tree = visible_tree(&default_navigation(), &granted(&[MANAGE_WEBSITE_SETTINGS]));
        let settings = tree.iter().find(|e| e.name == "Settings").unwrap();
        assert_eq!(settings.children.len(), 4);
        assert!(settings.children.iter().all(|c| c.name != "Email"));
    }

    #[test]
    fn parent_gate_short_circuits_the_subtree() {
        // Email settings alone: the Settings group itself is gated on
        // website settings, so nothing under it is reachable.
        let tree = visible_tree(&default_navigation(), &granted(&[MANAGE_EMAIL_SETTINGS]));
        assert!(tree.iter().all(|e| e.name != "Settings"));
    }

    #[test]
    fn group_with_no_surviving_children_is_dropped() {
        let menu = vec![
            NavEntry::group(
                "Admin",
                "settings",
                vec![NavEntry::leaf("Audit", "/audit", "list").requires(VIEW_DASHBOARD)],
            ),
            NavEntry::leaf("Home", "/home", "home"),
        ];
        let tree = visible_tree(&menu, &HashSet::new());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "Home");
    }

    fn assert_invariants(entries: &[NavEntry], granted: &HashSet<Permission>) {
        for entry in entries {
            if let Some(p) = &entry.permission {
                assert!(granted.contains(p), "{} leaked through the gate", entry.name);
            }
            assert!(
                entry.path.is_some() || !entry.children.is_empty(),
                "{} is an empty group",
                entry.name
            );
            assert_invariants(&entry.children, granted);
        }
    }

    proptest! {
        // For every permission set P, the visible tree holds no entry
        // gated on a permission outside P and no empty group node.
        #[test]
        fn filtered_tree_upholds_both_invariants(mask in 0u16..512) {
            let universe = registry::all_permissions();
            let granted: HashSet<Permission> = universe
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| p.clone())
                .collect();

            let tree = visible_tree(&default_navigation(), &granted);
            assert_invariants(&tree, &granted);
        }
    }
}
