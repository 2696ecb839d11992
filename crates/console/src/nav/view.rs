//! Read-only sidebar snapshot handed to the rendering layer.

use serde::Serialize;

use crate::nav::state::NavState;
use crate::nav::tree::{NavItem, filter_tree, in_active_trail, is_active};
use crate::session::SessionContext;

/// One renderable sidebar entry with its derived flags.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub path: String,
    pub icon: Option<String>,

    /// The current path equals this entry's path.
    pub active: bool,

    /// The current path lies at or under this entry's path.
    pub in_trail: bool,

    /// The entry still owns children after filtering.
    pub expandable: bool,

    /// The entry is expandable and currently toggled open.
    pub expanded: bool,

    pub children: Vec<NavEntry>,
}

/// Snapshot of the visible sidebar for one render pass.
///
/// Plain data, no live references. Rebuilt on every render in response to
/// role, path, or expand-state changes; building is pure, so rebuilding
/// accumulates nothing.
#[derive(Debug, Clone, Serialize)]
pub struct NavView {
    pub entries: Vec<NavEntry>,
}

impl NavView {
    /// Build the sidebar view for the given session.
    pub fn build(tree: &[NavItem], state: &NavState, session: &SessionContext) -> Self {
        let filtered = filter_tree(tree, session.role());
        let entries = filtered
            .iter()
            .map(|item| Self::entry(item, state, session.current_path()))
            .collect();
        Self { entries }
    }

    fn entry(item: &NavItem, state: &NavState, current_path: &str) -> NavEntry {
        let expandable = item.expandable();
        NavEntry {
            name: item.name.clone(),
            path: item.path.clone(),
            icon: item.icon.clone(),
            active: is_active(item, current_path),
            in_trail: in_active_trail(item, current_path),
            expandable,
            // A leaf keeps no stale open flag even if its name was toggled
            // while it still had visible children.
            expanded: expandable && state.is_expanded(&item.name),
            children: item
                .children
                .iter()
                .map(|child| Self::entry(child, state, current_path))
                .collect(),
        }
    }

    /// Find an entry by name anywhere in the view.
    pub fn find(&self, name: &str) -> Option<&NavEntry> {
        fn walk<'a>(entries: &'a [NavEntry], name: &str) -> Option<&'a NavEntry> {
            for entry in entries {
                if entry.name == name {
                    return Some(entry);
                }
                if let Some(found) = walk(&entry.children, name) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.entries, name)
    }
}
