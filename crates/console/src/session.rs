//! Session context passed to the navigation view.
//!
//! The identity collaborator owns the current role and the routing
//! collaborator owns the current path; both hand the console a plain
//! snapshot. Passing the context explicitly (instead of reading a
//! process-wide store) keeps filtering and guarding independently testable.

/// Snapshot of the current session as seen by the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    role: Option<String>,
    current_path: String,
}

impl SessionContext {
    /// Session with no authenticated role.
    pub fn anonymous(current_path: impl Into<String>) -> Self {
        Self {
            role: None,
            current_path: current_path.into(),
        }
    }

    /// Session authenticated with the given role.
    pub fn authenticated(role: impl Into<String>, current_path: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            current_path: current_path.into(),
        }
    }

    /// The session's role, if authenticated.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// The current route path.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Whether the session carries a role.
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Update the path on navigation.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Update the role on login, role change, or logout.
    pub fn set_role(&mut self, role: Option<String>) {
        self.role = role;
    }
}
