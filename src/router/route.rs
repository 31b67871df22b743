//! Route records
//!
//! A route record binds a path pattern to either a lazily-loaded page or a
//! redirect target, plus the metadata the title hook reads.

use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

use super::error::PageLoadError;

/// Pattern syntax used for the catch-all route
pub const CATCH_ALL: &str = "/:pathMatch(.*)*";

/// Factory producing a page handle on first visit
pub type PageFactory<P> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<P, PageLoadError>>>;

/// Per-route metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: String,
}

impl RouteMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Path pattern of a route record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Static segments only, e.g. `/lista-missioni`
    Static(String),
    /// Matches any path
    CatchAll,
}

impl PathPattern {
    /// Parse a pattern string. Anything starting with `/:pathMatch` or equal to
    /// `*` / `/*` is the catch-all; everything else is taken as static.
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" || pattern == "/*" || pattern.starts_with("/:pathMatch") {
            PathPattern::CatchAll
        } else {
            PathPattern::Static(normalize_path(pattern))
        }
    }

    /// Whether this pattern matches an already-normalized path
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            PathPattern::CatchAll => true,
            PathPattern::Static(p) => p.eq_ignore_ascii_case(normalized),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Static(p) => write!(f, "{}", p),
            PathPattern::CatchAll => write!(f, "{}", CATCH_ALL),
        }
    }
}

/// What a matched route leads to
pub enum RouteTarget<P> {
    Page(PageFactory<P>),
    Redirect(String),
}

impl<P> Clone for RouteTarget<P> {
    fn clone(&self) -> Self {
        match self {
            RouteTarget::Page(factory) => RouteTarget::Page(Rc::clone(factory)),
            RouteTarget::Redirect(to) => RouteTarget::Redirect(to.clone()),
        }
    }
}

/// A single entry of the route table
pub struct RouteRecord<P> {
    pub pattern: PathPattern,
    pub name: Option<String>,
    pub target: RouteTarget<P>,
    pub meta: Option<RouteMeta>,
}

impl<P: 'static> RouteRecord<P> {
    /// Named route resolving to a lazily-loaded page
    pub fn page<F, Fut>(path: &str, name: &str, title: &str, load: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: std::future::Future<Output = Result<P, PageLoadError>> + 'static,
    {
        let factory: PageFactory<P> = Rc::new(move || Box::pin(load()));
        Self {
            pattern: PathPattern::parse(path),
            name: Some(name.to_string()),
            target: RouteTarget::Page(factory),
            meta: Some(RouteMeta::titled(title)),
        }
    }

    /// Unnamed route redirecting somewhere else
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            name: None,
            target: RouteTarget::Redirect(to.to_string()),
            meta: None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}

impl<P> fmt::Debug for RouteRecord<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match &self.target {
            RouteTarget::Page(_) => "page".to_string(),
            RouteTarget::Redirect(to) => format!("redirect -> {}", to),
        };
        f.debug_struct("RouteRecord")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .field("target", &target)
            .field("meta", &self.meta)
            .finish()
    }
}

/// Strip query and fragment, collapse the empty path to `/` and drop one
/// trailing slash.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();

    let mut path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }

    path
}
