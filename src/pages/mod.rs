//! The manual's page registry.
//!
//! One submodule per content page, each declaring its static tree with the
//! [`crate::node`] constructors. [`all`] returns every page in manual order;
//! that order is the navigation order and the order pages are built in.
//!
//! [`validate`] is the `check` command's backing logic: it enforces the
//! structural rules every page must satisfy before the site is built.

use crate::node::Node;
use crate::page::Page;
use thiserror::Error;

pub mod references;
pub mod syntax;

/// Every manual page, in display order.
pub fn all() -> Vec<Page> {
    vec![references::page(), syntax::page()]
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidateError {
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("page '{0}' has an empty slug")]
    EmptySlug(String),
    #[error("page '{0}' has an empty title")]
    EmptyTitle(String),
    #[error("page '{0}': root node must be a named Section")]
    RootNotSection(String),
    #[error("page '{0}' contains an unnamed section or subsection")]
    UnnamedSection(String),
}

/// Check the structural rules for a page set:
///
/// - slugs are non-empty and unique
/// - titles are non-empty
/// - each page's root is a `Section` with a non-empty name
/// - every section and subsection in the tree carries a non-empty name
pub fn validate(pages: &[Page]) -> Result<(), ValidateError> {
    let mut seen = std::collections::BTreeSet::new();
    for page in pages {
        if page.slug.is_empty() {
            return Err(ValidateError::EmptySlug(page.link_title.to_string()));
        }
        if page.title.is_empty() {
            return Err(ValidateError::EmptyTitle(page.slug.to_string()));
        }
        if !seen.insert(page.slug) {
            return Err(ValidateError::DuplicateSlug(page.slug.to_string()));
        }
        let tree = page.render();
        match &tree {
            Node::Section { name, .. } if !name.is_empty() => {}
            _ => return Err(ValidateError::RootNotSection(page.slug.to_string())),
        }
        check_section_names(&tree, page.slug)?;
    }
    Ok(())
}

fn check_section_names(node: &Node, slug: &str) -> Result<(), ValidateError> {
    if matches!(node, Node::Section { .. } | Node::SubSection { .. })
        && node.name().is_none_or(str::is_empty)
    {
        return Err(ValidateError::UnnamedSection(slug.to_string()));
    }
    for child in node.children() {
        check_section_names(child, slug)?;
    }
    Ok(())
}
