use crate::api::RouteMeta;
use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path/query parameters before heap allocation.
/// Most routes have well under 8 params, so the common case stays on the stack.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the request path.
///
/// Param names use `Arc<str>` because they come from the static route table;
/// values stay `String` as they are per-request data from the URL. Pairs are
/// kept in order and may repeat (duplicate query keys are preserved).
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route declaration (Arc to avoid expensive clones)
    pub route: Arc<RouteMeta>,
    /// Raw path parameters extracted from the URL (e.g. `{id}` -> `("id", "123")`)
    pub path_params: ParamVec,
    /// Name of the handler that should process this request
    pub handler_name: String,
    /// Raw query string pairs (populated by the server)
    pub query_params: ParamVec,
}

impl RouteMatch {
    /// Get a raw path parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist at
    /// different path depths, the last occurrence is returned.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a raw query parameter by name (last occurrence).
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Router matching HTTP requests against an ordered table of compiled path
/// patterns.
///
/// The table preserves registration order and matching returns the first
/// pattern that accepts the path, which is what makes static-before-dynamic
/// shadowing deterministic. With the table sizes this crate targets the
/// linear scan is not a bottleneck; ordered semantics are the point.
#[derive(Clone)]
pub struct Router {
    routes: Vec<(Method, Regex, Arc<RouteMeta>, Vec<Arc<str>>)>,
}

impl Router {
    /// Compile a route table into a router.
    ///
    /// # Panics
    ///
    /// Panics if a path pattern produces an invalid regex. Patterns come from
    /// the checked [`crate::api::ApiBuilder`] table, so this is a startup
    /// invariant, not a request-time concern.
    #[must_use]
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        let routes: Vec<_> = routes
            .into_iter()
            .map(|route| {
                let (regex, param_names) = Self::path_to_regex(&route.path_pattern);
                let method = route.method.clone();
                (method, regex, Arc::new(route), param_names)
            })
            .collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|(method, _, meta, _)| format!("{} {}", method, meta.path_pattern))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "routing table loaded"
        );

        Self { routes }
    }

    /// Print all registered routes to stdout, in match order.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for (method, _re, meta, _params) in &self.routes {
            println!("[route] {method} {} -> {}", meta.path_pattern, meta.handler_name);
        }
    }

    /// Match an HTTP request to a route.
    ///
    /// Tries patterns in registration order and returns the first match,
    /// together with the raw captured path parameters. Returns `None` when
    /// nothing matches (a 404 at the server layer).
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "route match attempt");

        for (m, regex, meta, param_names) in &self.routes {
            if *m != method {
                continue;
            }
            let Some(captures) = regex.captures(path) else {
                continue;
            };

            let mut path_params = ParamVec::new();
            for (i, name) in param_names.iter().enumerate() {
                if let Some(value) = captures.get(i + 1) {
                    path_params.push((Arc::clone(name), value.as_str().to_string()));
                }
            }

            info!(
                method = %method,
                path = %path,
                route_pattern = %meta.path_pattern,
                handler_name = %meta.handler_name,
                path_params = ?path_params,
                "route matched"
            );

            return Some(RouteMatch {
                route: Arc::clone(meta),
                path_params,
                handler_name: meta.handler_name.to_string(),
                query_params: ParamVec::new(),
            });
        }

        warn!(method = %method, path = %path, "no route matched");
        None
    }

    /// All registered path patterns, in match order.
    #[must_use]
    pub fn path_patterns(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|(_method, _regex, meta, _params)| meta.path_pattern.clone())
            .collect()
    }

    /// Convert a path pattern to a regex and extract parameter names.
    ///
    /// `/users/{id}` becomes `^/users/([^/]+)$` with params `["id"]`;
    /// `/files/{p:path}` becomes `^/files/(.+)$` so the capture spans
    /// embedded separators. A trailing slash is significant: `/items/` and
    /// `/items` compile to distinct patterns.
    #[allow(clippy::expect_used)]
    pub(crate) fn path_to_regex(path: &str) -> (Regex, Vec<Arc<str>>) {
        if path == "/" {
            return (
                Regex::new(r"^/$").expect("failed to compile path regex"),
                Vec::new(),
            );
        }

        let mut pattern = String::with_capacity(path.len() + 8);
        pattern.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::with_capacity(path.matches('{').count());

        for segment in path.split('/') {
            if segment.is_empty() {
                continue;
            }
            if let Some(inner) = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                if let Some(name) = inner.strip_suffix(":path") {
                    pattern.push_str("/(.+)");
                    param_names.push(Arc::from(name));
                } else {
                    pattern.push_str("/([^/]+)");
                    param_names.push(Arc::from(inner));
                }
            } else {
                pattern.push('/');
                pattern.push_str(&regex::escape(segment));
            }
        }

        if path.ends_with('/') {
            pattern.push('/');
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).expect("failed to compile path regex");

        (regex, param_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_regex_named_segment() {
        let (regex, params) = Router::path_to_regex("/users/{id}");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].as_ref(), "id");
        assert!(regex.is_match("/users/123"));
        assert!(!regex.is_match("/users/123/posts"));
    }

    #[test]
    fn test_path_to_regex_trailing_slash_is_distinct() {
        let (with_slash, _) = Router::path_to_regex("/items/");
        let (bare, _) = Router::path_to_regex("/items");
        assert!(with_slash.is_match("/items/"));
        assert!(!with_slash.is_match("/items"));
        assert!(bare.is_match("/items"));
        assert!(!bare.is_match("/items/"));
    }

    #[test]
    fn test_path_to_regex_catch_all() {
        let (regex, params) = Router::path_to_regex("/files/{file_path:path}");
        assert_eq!(params[0].as_ref(), "file_path");
        let caps = regex.captures("/files/home/user/notes.txt").expect("match");
        assert_eq!(&caps[1], "home/user/notes.txt");
    }

    #[test]
    fn test_path_to_regex_escapes_literal_segments() {
        let (regex, _) = Router::path_to_regex("/v1.0/items");
        assert!(regex.is_match("/v1.0/items"));
        assert!(!regex.is_match("/v1x0/items"));
    }
}
