//! The "Syntax" page: syntactic sugar. Several subsections are still stubs
//! in the upstream manual; they are kept so the navigation and structure
//! match it.

use crate::node::{editor, paragraph, section, subsection, text, Node};
use crate::page::Page;

pub fn page() -> Page {
    Page {
        title: "Programming Flix | Syntax",
        slug: "syntax",
        link_title: "Syntax",
        content,
    }
}

fn content() -> Node {
    section("Syntactic Sugar", vec![
        paragraph(vec![text(
            "This page documents a few features that make Flix code easier to read and write.",
        )]),
        subsection("Pipelines", vec![
            editor("def main(): Int = List.range(1, 100) |> List.length"),
        ]),
        subsection("Match Lambdas", vec![paragraph(vec![text("TBD")])]),
        subsection("Simple Enums", vec![paragraph(vec![text("TBD")])]),
        subsection("Casting", vec![paragraph(vec![text("TBD")])]),
        subsection("Let*", vec![paragraph(vec![text("TBD")])]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn title_and_section_name_diverge_as_upstream() {
        let p = page();
        assert_eq!(p.title, "Programming Flix | Syntax");
        assert_eq!(p.render().name(), Some("Syntactic Sugar"));
    }

    #[test]
    fn pipelines_uses_an_editor_node() {
        let tree = page().render();
        let pipelines = tree.find_subsection("Pipelines").unwrap();
        assert!(matches!(pipelines.children(), [Node::Editor { .. }]));
        assert!(pipelines.contains_code("def main(): Int = List.range(1, 100) |> List.length"));
    }

    #[test]
    fn stub_subsections_present_in_order() {
        let tree = page().render();
        let names: Vec<_> = tree
            .children()
            .iter()
            .filter(|n| matches!(n, Node::SubSection { .. }))
            .filter_map(Node::name)
            .collect();
        assert_eq!(
            names,
            ["Pipelines", "Match Lambdas", "Simple Enums", "Casting", "Let*"]
        );
    }
}
