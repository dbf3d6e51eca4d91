//! The content page and its activation lifecycle.
//!
//! A [`Page`] is a fixed title, a URL slug, and a function producing its
//! static content tree. Pages have exactly two behaviors:
//!
//! - [`Page::render`] returns the content tree. It is deterministic and has
//!   no side effects; two calls on the same page yield deep-equal trees.
//! - [`Page::activate`] runs when the host makes the page current. It sets
//!   the external title sink to the page's fixed title, then reports a
//!   pageview for the path the host supplies — each exactly once per call,
//!   in that order. Re-activating simply repeats both effects.
//!
//! The page owns neither collaborator. The title sink belongs to whatever
//! displays the title (a browser shell, a preview window); analytics is
//! best-effort and its failures stop at the `activate` boundary — a dead
//! event log must never keep a page from displaying.

use crate::analytics::Analytics;
use crate::node::Node;

/// External owner of the displayed page title. Last write wins.
pub trait TitleSink {
    fn set(&mut self, title: &str);
}

/// A single manual page: fixed title, slug, and static content.
///
/// The content function is a plain `fn` pointer so a page is `'static` data:
/// declared once, never mutated, cheap to copy into registries.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Full document title, e.g. `"Programming Flix | References"`.
    pub title: &'static str,
    /// Output filename stem and navigation target, e.g. `"references"`.
    pub slug: &'static str,
    /// Display label in navigation, e.g. `"References"`.
    pub link_title: &'static str,
    /// Produces the page's content tree.
    pub content: fn() -> Node,
}

impl Page {
    /// The page's static content tree.
    pub fn render(&self) -> Node {
        (self.content)()
    }

    /// Run the activation side effects: title first, then the pageview.
    ///
    /// `path` is whatever location string the host navigates by; it is
    /// forwarded to analytics unchanged. Analytics errors are swallowed —
    /// the pageview is fire-and-forget.
    pub fn activate(&self, path: &str, titles: &mut dyn TitleSink, analytics: &mut dyn Analytics) {
        titles.set(self.title);
        let _ = analytics.pageview(path);
    }
}
