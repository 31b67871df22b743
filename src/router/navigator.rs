//! Navigator
//!
//! Owns the route table, the current location, the cache of already-loaded
//! pages and the after-navigation hooks. Shared as `Rc<Router<P>>` and passed
//! explicitly to whatever needs to navigate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::{RouterError, RouterResult};
use super::route::{RouteMeta, RouteTarget};
use super::table::RouteTable;

/// A resolved location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Normalized path of the matched route
    pub path: String,
    /// Path as requested, including query and fragment
    pub full_path: String,
    /// Name of the matched route
    pub name: Option<String>,
    pub meta: Option<RouteMeta>,
}

/// Emitted to hooks after each successful navigation
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    pub to: Location,
    pub from: Option<Location>,
    /// Requested path when the final location came from a redirect
    pub redirected_from: Option<String>,
}

impl NavigationEvent {
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Outcome of a navigation: where we landed and the page to mount
#[derive(Debug, Clone)]
pub struct Navigation<P> {
    pub event: NavigationEvent,
    pub page: P,
    /// The request named the location already shown; hooks did not run
    pub duplicate: bool,
}

type AfterEachHook = Rc<dyn Fn(&NavigationEvent)>;

/// Client-side router
pub struct Router<P> {
    table: RouteTable<P>,
    last: RefCell<Option<Navigation<P>>>,
    loaded: RefCell<HashMap<usize, P>>,
    hooks: RefCell<Vec<AfterEachHook>>,
}

impl<P: Clone + 'static> Router<P> {
    pub fn new(table: RouteTable<P>) -> Self {
        Self {
            table,
            last: RefCell::new(None),
            loaded: RefCell::new(HashMap::new()),
            hooks: RefCell::new(Vec::new()),
        }
    }

    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    /// Current location, `None` before the initial navigation
    pub fn current(&self) -> Option<Location> {
        self.last.borrow().as_ref().map(|nav| nav.event.to.clone())
    }

    /// Register a hook invoked after every successful navigation
    pub fn after_each<F>(&self, hook: F)
    where
        F: Fn(&NavigationEvent) + 'static,
    {
        self.hooks.borrow_mut().push(Rc::new(hook));
    }

    /// Whether the page behind a route index has already been loaded
    fn cached_page(&self, index: usize) -> Option<P> {
        self.loaded.borrow().get(&index).cloned()
    }

    /// Last navigation if `path` names exactly the location already shown.
    /// After a redirect that is the target, so the browser catching up to the
    /// redirect does not navigate twice.
    fn duplicate_of(&self, path: &str) -> Option<Navigation<P>> {
        let last = self.last.borrow();
        let nav = last.as_ref().filter(|nav| nav.event.to.full_path == path)?;
        Some(Navigation {
            duplicate: true,
            ..nav.clone()
        })
    }

    /// Resolve `path`, load its page if needed, update the current location
    /// and run the after-navigation hooks.
    ///
    /// Navigating to the current location is a no-op: the last navigation is
    /// returned with `duplicate` set and hooks are not run.
    pub async fn navigate(&self, path: &str) -> RouterResult<Navigation<P>> {
        if let Some(nav) = self.duplicate_of(path) {
            tracing::debug!(to = %path, "already at location");
            return Ok(nav);
        }

        let (index, location, redirected_from, factory) = {
            let matched = self.table.resolve(path)?;
            let index = self
                .table
                .records()
                .iter()
                .position(|r| std::ptr::eq(r, matched.record))
                .ok_or_else(|| RouterError::NoMatch(matched.path.clone()))?;

            let full_path = if matched.redirected_from.is_some() {
                matched.path.clone()
            } else {
                path.to_string()
            };

            let location = Location {
                path: matched.path.clone(),
                full_path,
                name: matched.record.name.clone(),
                meta: matched.record.meta.clone(),
            };

            let factory = match &matched.record.target {
                RouteTarget::Page(factory) => Rc::clone(factory),
                RouteTarget::Redirect(_) => return Err(RouterError::RedirectLoop(path.to_string())),
            };

            (index, location, matched.redirected_from, factory)
        };

        let route_label = location.name.clone().unwrap_or_else(|| location.path.clone());

        let page = match self.cached_page(index) {
            Some(page) => page,
            None => {
                tracing::debug!(route = %route_label, "loading page");
                let page = factory().await.map_err(|source| {
                    tracing::warn!(route = %route_label, error = %source, "page failed to load");
                    RouterError::PageLoad {
                        route: route_label.clone(),
                        source,
                    }
                })?;
                self.loaded.borrow_mut().insert(index, page.clone());
                page
            }
        };

        let from = self.current();

        if let Some(original) = &redirected_from {
            tracing::info!(from = %original, to = %location.path, "redirected");
        } else {
            tracing::info!(to = %location.path, route = %route_label, "navigated");
        }

        let event = NavigationEvent {
            to: location,
            from,
            redirected_from,
        };

        // Clone the hook list so a hook may register further hooks.
        let hooks: Vec<AfterEachHook> = self.hooks.borrow().clone();
        for hook in hooks {
            hook(&event);
        }

        let nav = Navigation {
            event,
            page,
            duplicate: false,
        };
        self.last.replace(Some(nav.clone()));
        Ok(nav)
    }

    /// Navigate to a route by name
    pub async fn navigate_named(&self, name: &str) -> RouterResult<Navigation<P>> {
        let path = self.table.path_for(name)?;
        self.navigate(&path).await
    }
}
