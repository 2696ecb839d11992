//! Navigation system for the console sidebar.
//!
//! The navigation tree is static configuration supplied by the host
//! application at startup and provides:
//! - Role-scoped filtering of visible entries
//! - Active and active-trail resolution against the current route path
//! - Collapsible-sidebar expand state

mod state;
mod tree;
mod view;

pub use state::NavState;
pub use tree::{NavItem, filter_tree, in_active_trail, is_active};
pub use view::{NavEntry, NavView};
