//! Route matching and access decisions.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::Access;

/// One route definition, possibly nested under a parent layout route.
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// Path pattern relative to the parent: literal segments, `:param`
    /// captures, `""` for the parent's index route, or a final `"*"`
    /// catch-all.
    pub path: String,

    /// Whether the route requires an authenticated session.
    pub protected: bool,

    /// Roles admitted when protected. `Public` together with `protected`
    /// admits any authenticated session.
    pub access: Access,

    /// Nested routes rendered inside this one's layout. A parent with
    /// children is only addressable through its `""` index child.
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    /// Create an unprotected route.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            protected: false,
            access: Access::Public,
            children: Vec::new(),
        }
    }

    /// Require an authenticated session, any role.
    pub fn protect(mut self) -> Self {
        self.protected = true;
        self
    }

    /// Require an authenticated session with one of the given roles.
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected = true;
        self.access = Access::restricted_to(roles);
        self
    }

    /// Nest child routes under this one.
    pub fn with_children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}

/// Guard inherited by everything nested under a route.
#[derive(Debug, Clone)]
struct RouteGuard {
    protected: bool,
    access: Access,
}

/// A leaf route flattened out of the nested definitions.
#[derive(Debug, Clone)]
struct FlatRoute {
    /// Full pattern segments from the root.
    segments: Vec<String>,
    /// Guards from the outermost layout down to the leaf.
    guards: Vec<RouteGuard>,
}

impl FlatRoute {
    fn pattern(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Result of matching a concrete path against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The full pattern that matched (e.g. "/dashboard/patients/:id").
    pub pattern: String,
    /// Extracted `:param` values; `"*"` holds the catch-all remainder.
    pub params: HashMap<String, String>,
}

/// Outcome of a guarded navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessDecision {
    /// The session may enter the route.
    Granted,
    /// The route is protected and the session is anonymous.
    LoginRequired,
    /// The session is authenticated but its role is not admitted.
    Forbidden,
    /// No route matches the path.
    NotFound,
}

/// Flattened, ordered route table.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<FlatRoute>,
}

impl RouteTable {
    /// Build a table from nested route definitions.
    ///
    /// Rejects patterns with segments after a `"*"` and catch-all routes
    /// that try to nest children.
    pub fn new(defs: &[RouteDef]) -> ConsoleResult<Self> {
        let mut routes = Vec::new();
        for def in defs {
            flatten(def, &[], &[], &mut routes)?;
        }

        // More specific routes match first: literals before :param captures,
        // catch-alls last, deeper patterns before shallower ones.
        routes.sort_by_key(|route| {
            let wildcard = usize::from(route.segments.last().is_some_and(|s| s == "*"));
            let params = route
                .segments
                .iter()
                .filter(|s| s.starts_with(':'))
                .count();
            (wildcard, params, -(route.segments.len() as i64))
        });

        debug!(routes = routes.len(), "built route table");
        Ok(Self { routes })
    }

    /// Match a concrete path against the table.
    ///
    /// Leading, trailing, and doubled slashes in the path are insignificant;
    /// matching works on segments.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = split_segments(path);
        for route in &self.routes {
            if let Some(params) = match_segments(&route.segments, &segments) {
                return Some(RouteMatch {
                    pattern: route.pattern(),
                    params,
                });
            }
        }
        None
    }

    /// Decide whether a session with the given role may enter `path`.
    ///
    /// Guards apply from the outermost layout down; the first failing guard
    /// determines the outcome.
    pub fn decide(&self, path: &str, role: Option<&str>) -> AccessDecision {
        let segments: Vec<&str> = split_segments(path);
        let Some(route) = self
            .routes
            .iter()
            .find(|r| match_segments(&r.segments, &segments).is_some())
        else {
            return AccessDecision::NotFound;
        };

        for guard in &route.guards {
            if !guard.protected {
                continue;
            }
            if role.is_none() {
                return AccessDecision::LoginRequired;
            }
            if !guard.access.allows(role) {
                return AccessDecision::Forbidden;
            }
        }
        AccessDecision::Granted
    }

    /// Number of addressable (leaf) routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn flatten(
    def: &RouteDef,
    parent_segments: &[String],
    parent_guards: &[RouteGuard],
    out: &mut Vec<FlatRoute>,
) -> ConsoleResult<()> {
    let own: Vec<String> = split_segments(&def.path)
        .into_iter()
        .map(str::to_string)
        .collect();

    if own.iter().rev().skip(1).any(|s| s == "*") {
        return Err(ConsoleError::SegmentsAfterWildcard(def.path.clone()));
    }
    let has_wildcard = own.last().is_some_and(|s| s == "*");
    if has_wildcard && !def.children.is_empty() {
        return Err(ConsoleError::WildcardWithChildren(def.path.clone()));
    }
    if parent_segments.last().is_some_and(|s| s == "*") && !own.is_empty() {
        return Err(ConsoleError::SegmentsAfterWildcard(def.path.clone()));
    }

    let mut segments = parent_segments.to_vec();
    segments.extend(own);

    let mut guards = parent_guards.to_vec();
    guards.push(RouteGuard {
        protected: def.protected,
        access: def.access.clone(),
    });

    if def.children.is_empty() {
        out.push(FlatRoute { segments, guards });
    } else {
        for child in &def.children {
            flatten(child, &segments, &guards, out)?;
        }
    }
    Ok(())
}

/// Match pattern segments against path segments, extracting parameters.
///
/// Pattern: `["patients", ":id", "records"]`
/// Path: `["patients", "42", "records"]`
/// Result: `Some({"id": "42"})`
fn match_segments(pattern: &[String], path: &[&str]) -> Option<HashMap<String, String>> {
    let has_wildcard = pattern.last().is_some_and(|s| s == "*");
    if has_wildcard {
        if path.len() + 1 < pattern.len() {
            return None;
        }
    } else if pattern.len() != path.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (i, pat) in pattern.iter().enumerate() {
        if pat == "*" {
            params.insert("*".to_string(), path[i..].join("/"));
            return Some(params);
        }
        if let Some(name) = pat.strip_prefix(':') {
            params.insert(name.to_string(), path[i].to_string());
        } else if pat != path[i] {
            return None;
        }
    }
    Some(params)
}
