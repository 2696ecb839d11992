//! Role identifiers and access requirements.
//!
//! Roles are open-ended string identifiers owned by the identity service;
//! the console only compares them against the requirements attached to
//! navigation entries and routes.

use std::collections::BTreeSet;

use serde::Serialize;

/// Well-known role names seeded by the identity service.
pub mod well_known {
    /// Full administrative access to the console.
    pub const SYSTEM_ADMIN: &str = "system_admin";

    /// Licensed clinician (doctors and specialists).
    pub const CLINICIAN: &str = "clinician";

    /// Registered nurse.
    pub const NURSE: &str = "nurse";

    /// Patient with a portal account.
    pub const PATIENT: &str = "patient";

    /// Non-clinical support staff.
    pub const SUPPORT_STAFF: &str = "support";
}

/// Access requirement attached to a navigation entry or route.
///
/// "No requirement" and "role not in set" are distinct, explicit cases:
/// a `Public` entry is visible to every session including anonymous ones,
/// while a `Restricted` entry requires the session role to be a member of
/// its set. An empty set admits nobody.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Access {
    #[default]
    Public,
    Restricted(BTreeSet<String>),
}

impl Access {
    /// Build a `Restricted` requirement from a list of role names.
    pub fn restricted_to<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Access::Restricted(roles.into_iter().map(Into::into).collect())
    }

    /// Whether a session with the given role (if any) passes this check.
    ///
    /// An absent role fails every `Restricted` check and passes `Public`.
    pub fn allows(&self, role: Option<&str>) -> bool {
        match self {
            Access::Public => true,
            Access::Restricted(roles) => role.is_some_and(|r| roles.contains(r)),
        }
    }
}
