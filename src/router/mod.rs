//! # Router module
//!
//! Path matching and route resolution.
//!
//! At startup every registered path pattern (e.g. `/items/{item_id}`) is
//! compiled into a regex that matches request paths and captures named
//! parameters. Matching walks the table **in registration order** and returns
//! the first pattern that matches, so a static path registered before a
//! parameterized sibling always wins (`/users/me` vs `/users/{user_id}`).
//!
//! Patterns support two capture forms:
//!
//! - `{name}` - one path segment, no separators
//! - `{name:path}` - trailing catch-all capturing the remainder of the path,
//!   embedded `/` included

mod core;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
