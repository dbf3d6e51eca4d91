//! HTML site generation.
//!
//! Renders the manual's pages into a static site: one HTML file per page
//! plus an index listing the manual's contents.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Manual contents page
//! ├── references.html
//! └── syntax.html
//! ```
//!
//! ## Node Rendering
//!
//! The renderer pattern-matches over the [`Node`](crate::node::Node) tags —
//! the tree controls structure, order, and literal text; this module alone
//! decides markup and styling. HTML is produced with
//! [maud](https://maud.lambda.xyz/): templates are type-checked Rust with
//! automatic XSS escaping, so prose and code samples can be embedded
//! verbatim.
//!
//! ## Activation During Build
//!
//! Building is the static-site realization of page activation: each page is
//! activated exactly once per build. The title sink is the document's
//! `<title>` element ([`DocumentTitle`]), and the configured analytics
//! backend receives one pageview per page. Analytics stays fire-and-forget —
//! a failing event log never fails the build.
//!
//! ## CSS
//!
//! Base styles are embedded at compile time (`static/style.css`); color
//! custom properties are generated from `config.toml` and prepended.

use crate::analytics::Analytics;
use crate::config::{self, SiteConfig};
use crate::node::Node;
use crate::page::{Page, TitleSink};
use crate::pages::{self, ValidateError};
use maud::{html, Markup, DOCTYPE};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page set: {0}")]
    Validate(#[from] ValidateError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Title sink backing a generated document: holds the last title written
/// during activation, which becomes the page's `<title>` element.
#[derive(Debug, Default)]
pub struct DocumentTitle {
    current: Option<String>,
}

impl DocumentTitle {
    /// The most recently set title, or the empty string if none was set.
    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}

impl TitleSink for DocumentTitle {
    fn set(&mut self, title: &str) {
        self.current = Some(title.to_string());
    }
}

/// One generated file, for the build summary.
#[derive(Debug)]
pub struct GeneratedPage {
    pub link_title: String,
    pub file: String,
}

/// Render the whole manual into `output_dir`.
///
/// Validates the page set, then activates and renders each page. Returns
/// the list of generated files in navigation order (index excluded).
pub fn generate(
    pages: &[Page],
    site: &SiteConfig,
    output_dir: &Path,
    analytics: &mut dyn Analytics,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    pages::validate(pages)?;

    let color_css = config::generate_color_css(&site.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(pages, site, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let mut generated = Vec::with_capacity(pages.len());
    for page in pages {
        let file = format!("{}.html", page.slug);

        let mut title = DocumentTitle::default();
        page.activate(&format!("/{file}"), &mut title, analytics);

        let page_html = render_page(page, title.current(), pages, site, &css);
        fs::write(output_dir.join(&file), page_html.into_string())?;
        generated.push(GeneratedPage { link_title: page.link_title.to_string(), file });
    }

    Ok(generated)
}

// ============================================================================
// Node rendering
// ============================================================================

/// Renders one content node and its children, in declaration order.
pub fn render_node(node: &Node) -> Markup {
    html! {
        @match node {
            Node::Section { name, children } => {
                section.section {
                    h1 { (name) }
                    @for child in children { (render_node(child)) }
                }
            }
            Node::SubSection { name, children } => {
                section.subsection {
                    h2 { (name) }
                    @for child in children { (render_node(child)) }
                }
            }
            Node::Paragraph { children } => {
                p {
                    @for child in children { (render_node(child)) }
                }
            }
            Node::Text { text } => { (text) }
            Node::Code { text } => { code { (text) } }
            Node::CodeBlock { text } => {
                pre.code-block { code { (text) } }
            }
            Node::Editor { text } => {
                // The interactive runner is attached by the host page; we
                // only mark the block as runnable.
                div.editor data-flix-editor="" {
                    pre.code-block { code { (text) } }
                }
            }
            Node::DesignNote { children } => {
                aside.design-note {
                    span.design-note-label { "Design Note" }
                    @for child in children { (render_node(child)) }
                }
            }
        }
    }
}

// ============================================================================
// Document chrome
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: branding plus the manual navigation.
fn site_header(site_name: &str, nav: Markup) -> Markup {
    html! {
        header.site-header {
            span.site-title {
                a href="index.html" { (site_name) }
            }
            nav.site-nav {
                (nav)
            }
        }
    }
}

/// Renders the page navigation in registry order, marking the current page.
pub fn render_nav(pages: &[Page], current_slug: &str) -> Markup {
    html! {
        ul {
            @for page in pages {
                @let is_current = page.slug == current_slug;
                li class=[is_current.then_some("current")] {
                    a href={ (page.slug) ".html" } { (page.link_title) }
                }
            }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// Renders a full content page document. `title` is whatever activation
/// wrote to the title sink.
fn render_page(page: &Page, title: &str, pages: &[Page], site: &SiteConfig, css: &str) -> Markup {
    let nav = render_nav(pages, page.slug);
    let content = html! {
        (site_header(&site.site_name, nav))
        main {
            (render_node(&page.render()))
        }
    };
    base_document(title, css, content)
}

/// Renders the index/contents page.
fn render_index(pages: &[Page], site: &SiteConfig, css: &str) -> Markup {
    let nav = render_nav(pages, "");
    let content = html! {
        (site_header(&site.site_name, nav))
        main {
            h1 { "Contents" }
            ul.page-list {
                @for page in pages {
                    li {
                        a href={ (page.slug) ".html" } { (page.link_title) }
                    }
                }
            }
        }
    };
    base_document(&site.site_name, css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::NoopAnalytics;
    use crate::node::{code, code_block, design_note, editor, paragraph, section, subsection, text};

    #[test]
    fn document_title_is_last_write_wins() {
        let mut sink = DocumentTitle::default();
        assert_eq!(sink.current(), "");
        sink.set("First");
        sink.set("Second");
        assert_eq!(sink.current(), "Second");
    }

    #[test]
    fn section_renders_h1_then_children() {
        let html = render_node(&section("References", vec![paragraph(vec![text("intro")])]))
            .into_string();
        assert!(html.contains("<h1>References</h1>"));
        let h1 = html.find("<h1>").unwrap();
        let p = html.find("<p>").unwrap();
        assert!(h1 < p);
    }

    #[test]
    fn subsection_renders_h2() {
        let html = render_node(&subsection("Allocation", vec![])).into_string();
        assert!(html.contains("<h2>Allocation</h2>"));
    }

    #[test]
    fn paragraph_interleaves_text_and_inline_code() {
        let html = render_node(&paragraph(vec![
            text("the "),
            code("ref e"),
            text(" operation"),
        ]))
        .into_string();
        assert!(html.contains("the <code>ref e</code> operation"));
    }

    #[test]
    fn code_block_preserves_newlines() {
        let html = render_node(&code_block("let l = ref 42;\nderef l")).into_string();
        assert!(html.contains("let l = ref 42;\nderef l"));
        assert!(html.contains("code-block"));
    }

    #[test]
    fn editor_carries_runner_marker() {
        let html = render_node(&editor("def main(): Int = 1")).into_string();
        assert!(html.contains("data-flix-editor"));
        assert!(html.contains("def main(): Int = 1"));
    }

    #[test]
    fn design_note_is_labelled_aside() {
        let html = render_node(&design_note(vec![paragraph(vec![text("no global state")])]))
            .into_string();
        assert!(html.contains("<aside"));
        assert!(html.contains("Design Note"));
        assert!(html.contains("no global state"));
    }

    #[test]
    fn children_render_in_declared_order() {
        let html = render_node(&section("S", vec![
            subsection("A", vec![]),
            subsection("B", vec![]),
            subsection("C", vec![]),
        ]))
        .into_string();
        let a = html.find("<h2>A</h2>").unwrap();
        let b = html.find("<h2>B</h2>").unwrap();
        let c = html.find("<h2>C</h2>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn content_text_is_escaped() {
        let html = render_node(&paragraph(vec![text("<script>alert('x')</script>")]))
            .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn nav_marks_current_page() {
        let pages = crate::pages::all();
        let html = render_nav(&pages, "syntax").into_string();
        assert!(html.contains(r#"class="current""#));
        assert!(html.contains("references.html"));
        assert!(html.contains("syntax.html"));
    }

    #[test]
    fn base_document_includes_doctype_and_title() {
        let doc = base_document("Programming Flix | References", "body {}", html! { p { "x" } })
            .into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Programming Flix | References</title>"));
    }

    #[test]
    fn generate_writes_index_and_all_pages() {
        let tmp = tempfile::TempDir::new().unwrap();
        let pages = crate::pages::all();
        let site = SiteConfig::default();
        let mut analytics = NoopAnalytics;

        let generated = generate(&pages, &site, tmp.path(), &mut analytics).unwrap();

        assert_eq!(generated.len(), 2);
        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("references.html").exists());
        assert!(tmp.path().join("syntax.html").exists());
    }

    #[test]
    fn generated_page_title_comes_from_activation() {
        let tmp = tempfile::TempDir::new().unwrap();
        let pages = crate::pages::all();
        let site = SiteConfig::default();
        let mut analytics = NoopAnalytics;

        generate(&pages, &site, tmp.path(), &mut analytics).unwrap();

        let html = std::fs::read_to_string(tmp.path().join("references.html")).unwrap();
        assert!(html.contains("<title>Programming Flix | References</title>"));
    }
}
