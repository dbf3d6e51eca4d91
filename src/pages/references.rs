//! The "References" page: ML-style reference cells.

use crate::node::{code, code_block, design_note, paragraph, section, subsection, text, Node};
use crate::page::Page;

pub fn page() -> Page {
    Page {
        title: "Programming Flix | References",
        slug: "references",
        link_title: "References",
        content,
    }
}

fn content() -> Node {
    section("References", vec![
        paragraph(vec![
            text("Flix supports references in the ML-tradition. The three key operations are "),
            code("ref e"),
            text(", "),
            code("deref e"),
            text(", and "),
            code("e := e"),
            text(". The "),
            code("ref e"),
            text(
                " operation allocates a reference cell in the heap and returns its location, the ",
            ),
            code("deref"),
            text(
                " operation dereferences a location and returns the content of a reference \
                 cell, and finally the assigment ",
            ),
            code(":="),
            text(
                " operation changes the value of a reference cell. Informally, a reference \
                 cell can be thought of as an \"object\" with a single field that can be changed.",
            ),
        ]),
        paragraph(vec![text("All references operations are by nature impure.")]),
        paragraph(vec![
            text("Reference cells do not support any notion of equality or ordering."),
        ]),
        subsection("Allocation", vec![
            paragraph(vec![text("A reference cell is allocated as follows:")]),
            code_block("ref 42"),
            paragraph(vec![
                text("which returns a value of type "),
                code("Ref[Int32]"),
                text(
                    " which is a reference (pointer) to a single memory cell that holds the value ",
                ),
                code("42"),
                text("."),
            ]),
        ]),
        subsection("Dereference", vec![
            paragraph(vec![text("A reference cell is accessed (de-referenced) as follows:")]),
            code_block("let l = ref 42;\nderef l"),
            paragraph(vec![
                text("which returns "),
                code("42"),
                text(" as expected."),
            ]),
        ]),
        subsection("Assignment", vec![
            paragraph(vec![text("A reference cell can have its value updated as follows:")]),
            code_block("let l = ref 42;\nl := 84;\nderef l"),
            paragraph(vec![
                text("which returns "),
                code("84"),
                text(" as expected."),
            ]),
        ]),
        subsection("Example: A Simple Counter", vec![
            paragraph(vec![
                text("The following program models a simple counter that can be incremented:"),
            ]),
            code_block(
                "enum Counter {\n    case Counter(Ref[Int32])\n}\n\n\
                 def newCounter(): Counter & Impure = Counter(ref 0)\n\n\
                 def getCount(c: Counter): Int32 & Impure =\n    \
                 let Counter(l) = c;\n    deref l\n\n\
                 def increment(c: Counter): Unit & Impure =\n    \
                 let Counter(l) = c;\n    l := (deref l) + 1\n\n\
                 def f(): Unit & Impure =\n    \
                 let c = newCounter();\n    \
                 increment(c);\n    \
                 increment(c);\n    \
                 increment(c);\n    \
                 getCount(c) |> println",
            ),
            paragraph(vec![
                text("Note that the "),
                code("newCounter"),
                text(", "),
                code("getCount"),
                text(", "),
                code("increment"),
                text(", and "),
                code("f"),
                text(" functions must all be marked as "),
                code("Impure"),
                text("."),
            ]),
        ]),
        design_note(vec![
            paragraph(vec![text(
                "Flix does not support any notion of global mutable state. If you need to \
                 maintain a program-wide counter (or other mutable state) then you have to \
                 allocate it in the main function and explicitly thread it through the program.",
            )]),
        ]),
    ])
}
