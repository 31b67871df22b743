//! Application Route Table
//!
//! The pages of the site and the table that binds them to paths.

use std::future::Future;

use crate::router::{PageLoadError, RouteRecord, RouteTable, RouterResult, CATCH_ALL};

/// Pages reachable through the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    SealsCalculator,
    ShopCalculator,
    MissionsRecap,
    ShopRotation,
}

impl Page {
    /// Declaration order of the route table
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::SealsCalculator,
        Page::ShopCalculator,
        Page::MissionsRecap,
        Page::ShopRotation,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::SealsCalculator => "/calcolatore-sigilli",
            Page::ShopCalculator => "/calcolatore-shop",
            Page::MissionsRecap => "/lista-missioni",
            Page::ShopRotation => "/rotazione-negozio",
        }
    }

    /// Route name
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::SealsCalculator => "seals",
            Page::ShopCalculator => "shop",
            Page::MissionsRecap => "missions",
            Page::ShopRotation => "rotation",
        }
    }

    /// Title shown in the document title and page headers
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Festeggiamenti Mitici",
            Page::SealsCalculator => "Calcolatore Sigilli",
            Page::ShopCalculator => "Calcolatore Spese Negozio",
            Page::MissionsRecap => "Lista Missioni",
            Page::ShopRotation => "Rotazione Negozio",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Build the site's route table. `load` is called lazily, once per page,
/// the first time its route is visited.
pub fn app_routes<P, F, Fut>(load: F) -> RouterResult<RouteTable<P>>
where
    P: 'static,
    F: Fn(Page) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<P, PageLoadError>> + 'static,
{
    let mut records: Vec<RouteRecord<P>> = Page::ALL
        .into_iter()
        .map(|page| {
            let load = load.clone();
            RouteRecord::page(page.path(), page.name(), page.title(), move || load(page))
        })
        .collect();

    records.push(RouteRecord::redirect(CATCH_ALL, Page::Home.path()));

    RouteTable::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{install_title_hook, Router, TitleSink};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder(RefCell<Option<String>>);

    impl TitleSink for Recorder {
        fn set_title(&self, title: &str) {
            *self.0.borrow_mut() = Some(title.to_string());
        }
    }

    fn router() -> (Router<Page>, Rc<Recorder>) {
        let table = app_routes(|page| async move { Ok(page) }).unwrap();
        let router = Router::new(table);
        let recorder = Rc::new(Recorder::default());
        install_title_hook(&router, Rc::clone(&recorder));
        (router, recorder)
    }

    #[test]
    fn test_table_shape() {
        let table = app_routes(|page| async move { Ok(page) }).unwrap();
        assert_eq!(table.len(), 6);
        assert!(table.records().last().unwrap().is_redirect());
        assert_eq!(table.path_for("shop").unwrap(), "/calcolatore-shop");
    }

    #[test]
    fn test_every_page_resolves_to_itself() {
        let table = app_routes(|page| async move { Ok(page) }).unwrap();
        for page in Page::ALL {
            let m = table.resolve(page.path()).unwrap();
            assert_eq!(m.name(), Some(page.name()));
            assert_eq!(m.meta().unwrap().title, page.title());
        }
    }

    #[tokio::test]
    async fn test_navigation_sets_title() {
        let (router, recorder) = router();
        for page in Page::ALL {
            let nav = router.navigate(page.path()).await.unwrap();
            assert_eq!(nav.page, page);
            assert_eq!(
                recorder.0.borrow().as_deref(),
                Some(format!("{} – ITALIAN MARAUDERS", page.title()).as_str())
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_path_lands_home() {
        let (router, recorder) = router();
        let nav = router.navigate("/calcolatore-segreto").await.unwrap();
        assert_eq!(nav.page, Page::Home);
        assert_eq!(nav.event.to.path, "/");
        assert_eq!(
            recorder.0.borrow().as_deref(),
            Some("Festeggiamenti Mitici – ITALIAN MARAUDERS")
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Page::from_name("rotation"), Some(Page::ShopRotation));
        assert_eq!(Page::from_name("shop-spender"), None);
    }
}
