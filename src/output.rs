//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every page is its
//! navigation title and position, with filenames and tree sizes as secondary
//! context on indented lines.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Pages
//! 001 References
//!     File: references.html
//!     Sections: Allocation, Dereference, Assignment, Example: A Simple Counter
//! 002 Syntax
//!     File: syntax.html
//!     Sections: Pipelines, Match Lambdas, Simple Enums, Casting, Let*
//! ```

use crate::node::Node;
use crate::page::Page;
use crate::render::GeneratedPage;

/// Header line for a page: positional index + navigation title.
fn page_header(index: usize, page: &Page) -> String {
    format!("{:03} {}", index + 1, page.link_title)
}

/// Format the `list` inventory: every page with its file and subsections.
pub fn format_list_output(pages: &[Page]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (idx, page) in pages.iter().enumerate() {
        let tree = page.render();
        lines.push(page_header(idx, page));
        lines.push(format!("    File: {}.html", page.slug));
        lines.push(format!("    Title: {}", page.title));
        let sections: Vec<&str> = tree
            .children()
            .iter()
            .filter(|n| matches!(n, Node::SubSection { .. }))
            .filter_map(Node::name)
            .collect();
        if !sections.is_empty() {
            lines.push(format!("    Sections: {}", sections.join(", ")));
        }
        lines.push(format!("    Nodes: {}", tree.size()));
    }
    lines
}

pub fn print_list_output(pages: &[Page]) {
    for line in format_list_output(pages) {
        println!("{}", line);
    }
}

/// Format the `build` summary: generated file per page plus a total.
pub fn format_build_output(generated: &[GeneratedPage]) -> Vec<String> {
    let mut lines = vec!["Contents → index.html".to_string()];
    for page in generated {
        lines.push(format!("{} → {}", page.link_title, page.file));
    }
    lines.push(format!("Generated {} pages", generated.len() + 1));
    lines
}

pub fn print_build_output(generated: &[GeneratedPage]) {
    for line in format_build_output(generated) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages;

    #[test]
    fn list_output_shows_every_page_with_file_and_sections() {
        let lines = format_list_output(&pages::all());
        let joined = lines.join("\n");
        assert_eq!(lines[0], "Pages");
        assert!(joined.contains("001 References"));
        assert!(joined.contains("File: references.html"));
        assert!(joined.contains("Title: Programming Flix | References"));
        assert!(joined.contains("Sections: Allocation, Dereference, Assignment"));
        assert!(joined.contains("002 Syntax"));
        assert!(joined.contains("Sections: Pipelines, Match Lambdas"));
    }

    #[test]
    fn build_output_lists_files_and_total() {
        let generated = vec![
            GeneratedPage { link_title: "References".into(), file: "references.html".into() },
            GeneratedPage { link_title: "Syntax".into(), file: "syntax.html".into() },
        ];
        let lines = format_build_output(&generated);
        assert_eq!(lines[0], "Contents → index.html");
        assert_eq!(lines[1], "References → references.html");
        // index counts toward the total
        assert_eq!(lines.last().unwrap(), "Generated 3 pages");
    }
}
