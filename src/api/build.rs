use super::types::{ParamLocation, RouteMeta};
use anyhow::bail;
use http::Method;
use std::collections::HashSet;
use tracing::debug;

/// A problem found while assembling the route table.
///
/// Issues are collected during registration and reported together at
/// [`ApiBuilder::build`], so a misdeclared table fails with every defect
/// listed instead of one at a time.
#[derive(Debug, Clone)]
pub struct RegistrationIssue {
    pub location: String,
    pub kind: &'static str,
    pub message: String,
}

impl RegistrationIssue {
    fn new(location: impl Into<String>, kind: &'static str, message: impl Into<String>) -> Self {
        RegistrationIssue {
            location: location.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Extract the named parameters of a path pattern, in order.
///
/// Returns `(name, is_catch_all)` pairs. A `{name}` segment matches exactly
/// one path segment; a `{name:path}` segment captures the remainder of the
/// path including embedded separators.
pub fn pattern_params(pattern: &str) -> Vec<(String, bool)> {
    pattern
        .split('/')
        .filter_map(|segment| {
            let inner = segment.strip_prefix('{')?.strip_suffix('}')?;
            match inner.strip_suffix(":path") {
                Some(name) => Some((name.to_string(), true)),
                None => Some((inner.to_string(), false)),
            }
        })
        .collect()
}

/// Builder assembling an ordered route table.
///
/// Registration order is meaningful: the router tries patterns in the order
/// they were registered, so a static path (`/users/me`) must be registered
/// before a parameterized sibling (`/users/{user_id}`) that would otherwise
/// shadow it.
///
/// Registering the same method + path pattern twice is a configuration error
/// reported by [`ApiBuilder::build`] - a second registration never silently
/// replaces the first.
#[derive(Debug, Default)]
pub struct ApiBuilder {
    routes: Vec<RouteMeta>,
    issues: Vec<RegistrationIssue>,
}

impl ApiBuilder {
    pub fn new() -> Self {
        ApiBuilder {
            routes: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Register a route and return it for parameter/body declarations.
    pub fn route(&mut self, method: Method, pattern: &str, handler: &str) -> &mut RouteMeta {
        let location = format!("{method} {pattern}");

        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.path_pattern == pattern)
        {
            self.issues.push(RegistrationIssue::new(
                location.as_str(),
                "duplicate_route",
                "method and path already registered; duplicate registrations are rejected instead of replacing the earlier handler",
            ));
        }
        if handler.is_empty() {
            self.issues.push(RegistrationIssue::new(
                location.as_str(),
                "missing_handler",
                "route must name a handler",
            ));
        }

        debug!(method = %method, pattern = %pattern, handler = %handler, "route registered");

        self.routes.push(RouteMeta {
            method,
            path_pattern: pattern.to_string(),
            handler_name: handler.to_string(),
            params: Vec::new(),
            body: None,
        });
        let idx = self.routes.len() - 1;
        &mut self.routes[idx]
    }

    /// Finish the table, failing if any registration issue was recorded or if
    /// a route's declared path parameters disagree with its pattern.
    pub fn build(mut self) -> anyhow::Result<Vec<RouteMeta>> {
        for route in &self.routes {
            let location = format!("{} {}", route.method, route.path_pattern);
            let in_pattern = pattern_params(&route.path_pattern);

            for (i, (_, catch_all)) in in_pattern.iter().enumerate() {
                if *catch_all && i + 1 != in_pattern.len() {
                    self.issues.push(RegistrationIssue::new(
                        location.as_str(),
                        "catch_all_not_trailing",
                        "a `{name:path}` segment may only appear at the end of the pattern",
                    ));
                }
            }

            let pattern_names: HashSet<&str> =
                in_pattern.iter().map(|(n, _)| n.as_str()).collect();
            let declared: HashSet<&str> = route
                .params
                .iter()
                .filter(|p| p.location == ParamLocation::Path)
                .map(|p| p.name.as_str())
                .collect();

            for name in pattern_names.difference(&declared) {
                self.issues.push(RegistrationIssue::new(
                    location.as_str(),
                    "undeclared_path_param",
                    format!("pattern segment {{{name}}} has no parameter declaration"),
                ));
            }
            for name in declared.difference(&pattern_names) {
                self.issues.push(RegistrationIssue::new(
                    location.as_str(),
                    "unknown_path_param",
                    format!("path parameter `{name}` does not appear in the pattern"),
                ));
            }
        }

        if !self.issues.is_empty() {
            let mut report = String::new();
            for issue in &self.issues {
                report.push_str(&format!(
                    "\n  [{}] {}: {}",
                    issue.kind, issue.location, issue.message
                ));
            }
            bail!(
                "route table has {} issue(s):{report}",
                self.issues.len()
            );
        }

        Ok(self.routes)
    }
}
