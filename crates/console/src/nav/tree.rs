//! Navigation tree model and role-scoped filtering.

use serde::Serialize;

use crate::models::Access;

/// One entry in the static navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label, unique among siblings.
    pub name: String,

    /// Route path the entry links to.
    pub path: String,

    /// Icon key resolved by the rendering layer (e.g. "Home").
    pub icon: Option<String>,

    /// Role requirement for this entry and its whole subtree.
    pub access: Access,

    /// Child entries, in configured order.
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a public leaf entry.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
            access: Access::Public,
            children: Vec::new(),
        }
    }

    /// Set the icon key.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the role requirement.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Append child entries.
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Whether the entry currently owns children and so gets an expand
    /// affordance. Derived, never stored: an entry whose children were all
    /// filtered away renders as a plain leaf.
    pub fn expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Filter a navigation tree down to the entries visible to `role`.
///
/// An entry failing its own role check is dropped together with its whole
/// subtree; children are never re-parented. Surviving siblings keep their
/// configured order. The input is never mutated, and filtering an already
/// filtered tree yields an equal tree.
pub fn filter_tree(items: &[NavItem], role: Option<&str>) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.access.allows(role))
        .map(|item| NavItem {
            name: item.name.clone(),
            path: item.path.clone(),
            icon: item.icon.clone(),
            access: item.access.clone(),
            children: filter_tree(&item.children, role),
        })
        .collect()
}

/// Whether `current_path` activates this entry.
///
/// Exact string equality, no prefix matching and no trailing-slash
/// normalization. Section highlighting is a separate question answered by
/// [`in_active_trail`].
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

/// Whether `current_path` equals the entry's path or extends it on a `/`
/// segment boundary.
///
/// `/dashboard/users` covers `/dashboard/users/admins` but not
/// `/dashboard/users2`, and the two sides are never slash-normalized.
pub fn in_active_trail(item: &NavItem, current_path: &str) -> bool {
    current_path == item.path
        || current_path
            .strip_prefix(item.path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::role::well_known;

    fn hospital_tree() -> Vec<NavItem> {
        vec![
            NavItem::new("Dashboard", "/dashboard").with_icon("Home"),
            NavItem::new("Appointments", "/dashboard/appointments")
                .with_icon("Calendar")
                .with_children(vec![
                    NavItem::new("All", "/dashboard/appointments").with_access(
                        Access::restricted_to([well_known::SYSTEM_ADMIN, well_known::CLINICIAN]),
                    ),
                    NavItem::new("Upcoming", "/dashboard/appointments/upcoming"),
                ]),
            NavItem::new("Staff", "/dashboard/staff")
                .with_access(Access::restricted_to([well_known::SYSTEM_ADMIN]))
                .with_children(vec![
                    NavItem::new("Doctors", "/dashboard/staff/doctors"),
                    NavItem::new("Specializations", "/dashboard/staff/specializations"),
                ]),
        ]
    }

    #[test]
    fn public_entries_survive_every_role() {
        let tree = hospital_tree();
        for role in [
            Some(well_known::SYSTEM_ADMIN),
            Some(well_known::CLINICIAN),
            Some("unknown"),
            None,
        ] {
            let filtered = filter_tree(&tree, role);
            assert!(filtered.iter().any(|i| i.name == "Dashboard"));
            assert!(filtered.iter().any(|i| i.name == "Appointments"));
        }
    }

    #[test]
    fn restricted_parent_drops_public_children() {
        // "Staff" requires system_admin; filtering as clinician removes it
        // entirely even though both children are public.
        let filtered = filter_tree(&hospital_tree(), Some(well_known::CLINICIAN));
        assert!(!filtered.iter().any(|i| i.name == "Staff"));
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Dashboard", "Appointments"]);
    }

    #[test]
    fn sibling_order_is_preserved() {
        let filtered = filter_tree(&hospital_tree(), Some(well_known::SYSTEM_ADMIN));
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Dashboard", "Appointments", "Staff"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let tree = hospital_tree();
        for role in [Some(well_known::CLINICIAN), Some(well_known::NURSE), None] {
            let once = filter_tree(&tree, role);
            let twice = filter_tree(&once, role);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn filtering_never_mutates_input() {
        let tree = hospital_tree();
        let before = tree.clone();
        let _ = filter_tree(&tree, Some(well_known::NURSE));
        assert_eq!(tree, before);
    }

    #[test]
    fn entry_with_no_surviving_children_becomes_leaf() {
        // "Schedule" is the only child and requires roles a nurse lacks;
        // "Appointments" itself stays but loses its expand affordance.
        let tree = vec![
            NavItem::new("Appointments", "/dashboard/appointments").with_children(vec![
                NavItem::new("Schedule", "/dashboard/appointments/schedule").with_access(
                    Access::restricted_to([
                        well_known::SYSTEM_ADMIN,
                        well_known::CLINICIAN,
                        well_known::PATIENT,
                    ]),
                ),
            ]),
        ];

        let filtered = filter_tree(&tree, Some(well_known::NURSE));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Appointments");
        assert!(!filtered[0].expandable());
        assert_eq!(filtered[0].path, "/dashboard/appointments");
    }

    #[test]
    fn filtered_children_never_outgrow_original() {
        let tree = hospital_tree();
        let filtered = filter_tree(&tree, Some(well_known::CLINICIAN));
        for (orig, kept) in tree.iter().zip(filtered.iter()) {
            if orig.name == kept.name {
                assert!(kept.children.len() <= orig.children.len());
            }
        }
    }

    #[test]
    fn absent_role_keeps_only_public_entries() {
        let filtered = filter_tree(&hospital_tree(), None);
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Dashboard", "Appointments"]);
        // The restricted "All" child is gone, the public one stays.
        let appointments = &filtered[1];
        assert_eq!(appointments.children.len(), 1);
        assert_eq!(appointments.children[0].name, "Upcoming");
    }

    #[test]
    fn active_is_exact_match_only() {
        let patients = NavItem::new("Patients", "/dashboard/patients");
        assert!(is_active(&patients, "/dashboard/patients"));
        assert!(!is_active(&patients, "/dashboard/patients/records"));
        assert!(!is_active(&patients, "/dashboard/patients/"));
        assert!(!is_active(&patients, "/dashboard"));
    }

    #[test]
    fn trail_covers_descendants_on_segment_boundary() {
        let availability = NavItem::new("Availability", "/dashboard/availability");
        assert!(in_active_trail(&availability, "/dashboard/availability"));
        assert!(in_active_trail(&availability, "/dashboard/availability/new"));
        assert!(!is_active(&availability, "/dashboard/availability/new"));
        assert!(!in_active_trail(&availability, "/dashboard/availabilities"));
        assert!(!in_active_trail(&availability, "/dashboard"));
    }
}
