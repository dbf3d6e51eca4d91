//! # flixdoc
//!
//! A minimal documentation site generator for the Flix language reference
//! manual. The manual's pages are static content trees compiled into the
//! binary; building renders them to plain HTML files with inline CSS.
//!
//! # Architecture: Pages, Lifecycle, Renderer
//!
//! The crate separates what a page *is* from what happens when it is shown
//! and from how it is displayed:
//!
//! ```text
//! 1. Declare   pages/     →  static Node trees   (content, order, literals)
//! 2. Activate  page.rs    →  title-set + pageview (once per activation)
//! 3. Render    render.rs  →  dist/*.html          (markup and styling)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Inert content**: a page's tree is data — finite, acyclic, immutable,
//!   deterministic to render. Tests can assert on structure without touching
//!   HTML.
//! - **Collaborator seams**: the title sink and analytics backend are traits
//!   owned by the host, so lifecycle tests run against doubles and the real
//!   build wires in the document `<title>` and a JSONL event log.
//! - **One renderer**: markup decisions live in a single pattern match over
//!   the node variants; pages cannot smuggle in styling.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`node`] | The content node sum type and constructor helpers |
//! | [`page`] | `Page` values, `render()`, and the `activate()` lifecycle |
//! | [`pages`] | The manual's content, one submodule per page, plus validation |
//! | [`analytics`] | Pageview recording seam: no-op and JSONL backends |
//! | [`render`] | Maud HTML renderer and site generation |
//! | [`config`] | `config.toml` loading, validation, and color CSS generation |
//! | [`output`] | CLI output formatting — inventory and build summaries |
//!
//! # Design Decisions
//!
//! ## Content as a Closed Sum Type
//!
//! A page body is one `Node` enum over the handful of shapes the manual
//! uses (sections, paragraphs, code, design notes). The renderer matches
//! exhaustively, so a new variant is a compile error everywhere it matters.
//! Nodes own their children: trees cannot be cyclic and never alias.
//!
//! ## Activation as an Explicit Entry Point
//!
//! A page's two side effects — setting the title and reporting a pageview —
//! run in `Page::activate`, called by the host when the page becomes
//! current, never from construction. Both collaborators are trait objects
//! owned by the caller; the page holds no global state. Analytics is
//! fire-and-forget: its errors stop at the `activate` boundary.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped (the manual's code samples contain plenty of `<` and `&`),
//! and there is no template directory to ship or get out of sync.
//!
//! ## No JavaScript Runtime
//!
//! The generated site is plain HTML and CSS. Interactive code editors are
//! the hosting page's concern: `Editor` nodes render as code blocks marked
//! `data-flix-editor`, and a host that wants live evaluation attaches its
//! runner to those markers.

pub mod analytics;
pub mod config;
pub mod node;
pub mod output;
pub mod page;
pub mod pages;
pub mod render;
