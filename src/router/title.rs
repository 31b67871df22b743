//! Document title hook

use std::rc::Rc;

use super::navigator::Router;
use super::route::RouteMeta;

/// Site name appended to every page title
pub const BRAND: &str = "ITALIAN MARAUDERS";

/// Something that can receive the page title (the browser document, a test
/// recorder, ...)
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

/// `"<title> – ITALIAN MARAUDERS"`, falling back to the brand itself when the
/// route carries no metadata.
pub fn format_title(meta: Option<&RouteMeta>) -> String {
    let label = meta.map(|m| m.title.as_str()).unwrap_or(BRAND);
    format!("{} \u{2013} {}", label, BRAND)
}

/// Register the title update as an after-navigation hook
pub fn install_title_hook<P, S>(router: &Router<P>, sink: Rc<S>)
where
    P: Clone + 'static,
    S: TitleSink + ?Sized + 'static,
{
    router.after_each(move |event| {
        let title = format_title(event.to.meta.as_ref());
        tracing::trace!(title = %title, "updating document title");
        sink.set_title(&title);
    });
}
