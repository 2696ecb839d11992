//! Route table and role guarding.
//!
//! Routes are static configuration mirroring the console's page tree:
//! nested definitions with literal segments, `:param` captures, `""` index
//! routes, and `"*"` catch-alls. The table answers, for a concrete path and
//! session role, whether navigation is granted, needs a login, is forbidden,
//! or hits no route at all.

mod table;

pub use table::{AccessDecision, RouteDef, RouteMatch, RouteTable};
