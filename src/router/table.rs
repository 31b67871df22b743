//! Route table
//!
//! Ordered list of route records. Resolution is first-match-wins; redirect
//! records are followed until a page record is reached.

use std::collections::HashSet;

use super::error::{RouterError, RouterResult};
use super::route::{normalize_path, RouteMeta, RouteRecord, RouteTarget};

/// Maximum redirect hops before giving up
const MAX_REDIRECTS: usize = 8;

/// Result of resolving a path against the table
#[derive(Debug)]
pub struct RouteMatch<'a, P> {
    /// The page record that was finally matched
    pub record: &'a RouteRecord<P>,
    /// Normalized path of the matched location
    pub path: String,
    /// Normalized path originally requested, when a redirect happened
    pub redirected_from: Option<String>,
}

impl<P> RouteMatch<'_, P> {
    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    pub fn meta(&self) -> Option<&RouteMeta> {
        self.record.meta.as_ref()
    }
}

/// Immutable, ordered route table
pub struct RouteTable<P> {
    records: Vec<RouteRecord<P>>,
}

impl<P> RouteTable<P> {
    /// Build a table, rejecting duplicate route names
    pub fn new(records: Vec<RouteRecord<P>>) -> RouterResult<Self> {
        let mut seen = HashSet::new();
        for name in records.iter().filter_map(|r| r.name.as_deref()) {
            if !seen.insert(name) {
                return Err(RouterError::DuplicateName(name.to_string()));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[RouteRecord<P>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record matching a normalized path
    fn first_match(&self, normalized: &str) -> Option<&RouteRecord<P>> {
        self.records.iter().find(|r| r.pattern.matches(normalized))
    }

    /// Resolve a raw path (query and fragment allowed) to a page record
    pub fn resolve(&self, raw: &str) -> RouterResult<RouteMatch<'_, P>> {
        let requested = normalize_path(raw);
        let mut current = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let record = self
                .first_match(&current)
                .ok_or_else(|| RouterError::NoMatch(current.clone()))?;

            match &record.target {
                RouteTarget::Page(_) => {
                    let redirected_from = (current != requested).then(|| requested.clone());
                    return Ok(RouteMatch {
                        record,
                        path: current,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(to) => {
                    tracing::debug!(from = %current, to = %to, "following redirect");
                    current = normalize_path(to);
                }
            }
        }

        Err(RouterError::RedirectLoop(requested))
    }

    /// Look up a record by name
    pub fn by_name(&self, name: &str) -> RouterResult<&RouteRecord<P>> {
        self.records
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| RouterError::UnknownName(name.to_string()))
    }

    /// Path of a named route
    pub fn path_for(&self, name: &str) -> RouterResult<String> {
        self.by_name(name).map(|r| r.pattern.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::CATCH_ALL;

    fn page(path: &str, name: &'static str, title: &str) -> RouteRecord<&'static str> {
        RouteRecord::page(path, name, title, move || async move { Ok(name) })
    }

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            page("/", "home", "Home"),
            page("/a", "a", "A"),
            page("/b", "b", "B"),
            RouteRecord::redirect(CATCH_ALL, "/"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_static() {
        let table = table();
        let m = table.resolve("/b").unwrap();
        assert_eq!(m.name(), Some("b"));
        assert_eq!(m.meta().unwrap().title, "B");
        assert_eq!(m.path, "/b");
        assert!(m.redirected_from.is_none());
    }

    #[test]
    fn test_resolve_unknown_redirects_home() {
        let table = table();
        let m = table.resolve("/does/not/exist").unwrap();
        assert_eq!(m.name(), Some("home"));
        assert_eq!(m.path, "/");
        assert_eq!(m.redirected_from.as_deref(), Some("/does/not/exist"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            page("/x", "first", "First"),
            page("/x", "second", "Second"),
        ])
        .unwrap();
        assert_eq!(table.resolve("/x").unwrap().name(), Some("first"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = RouteTable::new(vec![page("/a", "dup", "A"), page("/b", "dup", "B")]);
        assert!(matches!(result, Err(RouterError::DuplicateName(n)) if n == "dup"));
    }

    #[test]
    fn test_no_catch_all() {
        let table = RouteTable::new(vec![page("/", "home", "Home")]).unwrap();
        assert!(matches!(table.resolve("/nope"), Err(RouterError::NoMatch(_))));
    }

    #[test]
    fn test_redirect_loop_detected() {
        let table: RouteTable<&'static str> = RouteTable::new(vec![
            RouteRecord::redirect("/a", "/b"),
            RouteRecord::redirect("/b", "/a"),
        ])
        .unwrap();
        assert!(matches!(table.resolve("/a"), Err(RouterError::RedirectLoop(p)) if p == "/a"));
    }

    #[test]
    fn test_path_for() {
        let table = table();
        assert_eq!(table.path_for("a").unwrap(), "/a");
        assert!(table.path_for("missing").is_err());
    }
}
