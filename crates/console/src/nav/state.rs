//! Sidebar expand state.
//!
//! Created when the navigation view mounts and discarded when it unmounts;
//! never persisted, no side effects beyond local toggling.

use std::collections::BTreeSet;

/// Per-session expand state for the collapsible sidebar.
///
/// Keyed by entry name, which is unique among siblings. Entries expand
/// independently; this is not an accordion, so opening one never closes a
/// sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    expanded: BTreeSet<String>,
}

impl NavState {
    /// Create a state with everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expanded flag for the named entry.
    ///
    /// Pure local mutation; toggling twice restores the previous state.
    pub fn toggle_expand(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    /// Whether the named entry is currently expanded.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// Collapse every entry.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded entries.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
