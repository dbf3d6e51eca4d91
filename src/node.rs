//! The content node tree that every manual page is made of.
//!
//! A page's body is a single [`Node`] — a closed sum over the handful of
//! presentational shapes the manual uses. Nodes own their children, so a
//! tree is finite and acyclic by construction, and child order is display
//! order. Nothing mutates a tree after the page declares it: the renderer
//! and the `check` command only ever borrow.
//!
//! ## Variants
//!
//! | Variant | Carries | Rendered as |
//! |---------|---------|-------------|
//! | `Section` | name + children | `<section>` with `<h1>` |
//! | `SubSection` | name + children | `<section>` with `<h2>` |
//! | `Paragraph` | inline children | `<p>` |
//! | `Text` | literal prose | escaped text run |
//! | `Code` | literal code | inline `<code>` |
//! | `CodeBlock` | literal code | `<pre><code>` |
//! | `Editor` | literal code | runnable code block shell |
//! |  `DesignNote` | children | `<aside>` callout |
//!
//! `Editor` is a placeholder for the interactive runner: the crate emits the
//! snippet plus a marker attribute and leaves execution to the host page.
//!
//! ## Declaring content
//!
//! Pages build trees with the constructor helpers, which read close to the
//! rendered structure:
//!
//! ```rust
//! use flixdoc::node::{section, subsection, paragraph, text, code, code_block};
//!
//! let tree = section("References", vec![
//!     paragraph(vec![
//!         text("A reference cell is allocated with "),
//!         code("ref e"),
//!         text("."),
//!     ]),
//!     subsection("Allocation", vec![
//!         code_block("ref 42"),
//!     ]),
//! ]);
//! assert_eq!(tree.name(), Some("References"));
//! ```

use serde::Serialize;

/// One element of a page's static display tree.
///
/// The set of variants is closed: the renderer matches exhaustively, so
/// adding a variant is a compile-time event, not a runtime surprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Top-level titled section. Every page has exactly one at its root.
    Section { name: String, children: Vec<Node> },
    /// Titled subsection within a section.
    SubSection { name: String, children: Vec<Node> },
    /// A paragraph of inline content (`Text` and `Code` runs).
    Paragraph { children: Vec<Node> },
    /// Literal prose text.
    Text { text: String },
    /// Inline code span.
    Code { text: String },
    /// Multi-line code sample, displayed verbatim.
    CodeBlock { text: String },
    /// Code sample backed by the interactive runner on the host page.
    Editor { text: String },
    /// Highlighted design-rationale callout.
    DesignNote { children: Vec<Node> },
}

impl Node {
    /// The section/subsection name, if this variant has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Section { name, .. } | Node::SubSection { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The literal text carried by leaf variants.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Node::Text { text } | Node::Code { text } | Node::CodeBlock { text } | Node::Editor { text } => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Child nodes in display order. Empty for leaf variants.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. }
            | Node::SubSection { children, .. }
            | Node::Paragraph { children }
            | Node::DesignNote { children } => children,
            _ => &[],
        }
    }

    /// Depth-first search for a subsection by name.
    pub fn find_subsection(&self, name: &str) -> Option<&Node> {
        if matches!(self, Node::SubSection { .. }) && self.name() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_subsection(name))
    }

    /// Whether any code node in this subtree carries exactly `snippet`.
    pub fn contains_code(&self, snippet: &str) -> bool {
        match self {
            Node::Code { text } | Node::CodeBlock { text } | Node::Editor { text } => text == snippet,
            _ => self.children().iter().any(|c| c.contains_code(snippet)),
        }
    }

    /// Total node count, self included. Used by `check` to report tree sizes.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }
}

// =========================================================================
// Constructor helpers
// =========================================================================

pub fn section(name: &str, children: Vec<Node>) -> Node {
    Node::Section { name: name.to_string(), children }
}

pub fn subsection(name: &str, children: Vec<Node>) -> Node {
    Node::SubSection { name: name.to_string(), children }
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Node::Paragraph { children }
}

pub fn text(text: &str) -> Node {
    Node::Text { text: text.to_string() }
}

pub fn code(text: &str) -> Node {
    Node::Code { text: text.to_string() }
}

pub fn code_block(text: &str) -> Node {
    Node::CodeBlock { text: text.to_string() }
}

pub fn editor(text: &str) -> Node {
    Node::Editor { text: text.to_string() }
}

pub fn design_note(children: Vec<Node>) -> Node {
    Node::DesignNote { children }
}
