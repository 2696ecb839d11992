//! Console configuration: navigation tree and route definitions.
//!
//! Both are static documents supplied by the host application at startup,
//! in TOML or JSON. `role_required` may be written as a single role name or
//! a list; it is normalized here into [`Access`] so the rest of the crate
//! never deals with the loose form. Configuration defects (empty names or
//! paths, duplicate sibling names, malformed wildcards) are rejected at
//! load time; nothing downstream has an error path for them.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::Access;
use crate::nav::NavItem;
use crate::routes::{RouteDef, RouteTable};

/// Parsed and validated console configuration.
#[derive(Debug)]
pub struct ConsoleConfig {
    /// The static navigation tree, in configured order.
    pub nav: Vec<NavItem>,

    /// The guarded route table.
    pub routes: RouteTable,
}

impl ConsoleConfig {
    /// Load a configuration file, dispatching on its extension.
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            other => Err(ConsoleError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Parse a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> ConsoleResult<Self> {
        let raw: RawConfig = toml::from_str(raw)?;
        Self::from_raw(raw)
    }

    /// Parse a JSON configuration document.
    ///
    /// Accepts the camelCase field names of the original console export
    /// (`roleRequired`) as well as the snake_case ones.
    pub fn from_json_str(raw: &str) -> ConsoleResult<Self> {
        let raw: RawConfig = serde_json::from_str(raw)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> ConsoleResult<Self> {
        let nav = normalize_nav(raw.nav)?;
        let defs: Vec<RouteDef> = raw.route.into_iter().map(normalize_route).collect();
        let routes = RouteTable::new(&defs)?;
        debug!(
            nav_entries = nav.len(),
            routes = routes.len(),
            "console configuration loaded"
        );
        Ok(Self { nav, routes })
    }
}

/// `role_required` as written in config: a single role or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoleRequired {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    nav: Vec<RawNavItem>,

    #[serde(default, alias = "routes")]
    route: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawNavItem {
    name: String,
    path: String,

    #[serde(default)]
    icon: Option<String>,

    #[serde(default, alias = "roleRequired")]
    role_required: Option<RoleRequired>,

    #[serde(default)]
    children: Vec<RawNavItem>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    path: String,

    #[serde(default)]
    protected: bool,

    #[serde(default)]
    roles: Option<Vec<String>>,

    #[serde(default)]
    children: Vec<RawRoute>,
}

fn normalize_nav(raw: Vec<RawNavItem>) -> ConsoleResult<Vec<NavItem>> {
    let mut seen = Vec::with_capacity(raw.len());
    let mut items = Vec::with_capacity(raw.len());

    for entry in raw {
        if entry.name.is_empty() {
            return Err(ConsoleError::EmptyName);
        }
        if entry.path.is_empty() {
            return Err(ConsoleError::EmptyPath(entry.name));
        }
        if seen.contains(&entry.name) {
            return Err(ConsoleError::DuplicateSibling(entry.name));
        }
        seen.push(entry.name.clone());

        let access = match entry.role_required {
            None => Access::Public,
            Some(RoleRequired::One(role)) => Access::restricted_to([role]),
            Some(RoleRequired::Many(roles)) => {
                if roles.is_empty() {
                    warn!(
                        entry = %entry.name,
                        "empty role_required list hides the entry from every role"
                    );
                }
                Access::restricted_to(roles)
            }
        };

        items.push(NavItem {
            name: entry.name,
            path: entry.path,
            icon: entry.icon,
            access,
            children: normalize_nav(entry.children)?,
        });
    }

    Ok(items)
}

fn normalize_route(raw: RawRoute) -> RouteDef {
    // A roles list implies the route is protected even when the flag was
    // left off in the document.
    let protected = raw.protected || raw.roles.is_some();
    let access = match raw.roles {
        None => Access::Public,
        Some(roles) => Access::restricted_to(roles),
    };

    RouteDef {
        path: raw.path,
        protected,
        access,
        children: raw.children.into_iter().map(normalize_route).collect(),
    }
}
