//! C# syntax access on top of tree-sitter.
//!
//! The report core only needs a handful of questions answered about a class
//! declaration; [`ClassSyntax`] names them, and [`CsClass`] answers them for
//! a tree-sitter node.

use tree_sitter::{Node, Parser, Tree, TreeCursor};

use crate::error::ReportError;

const CLASS_KINDS: [&str; 2] = ["class_declaration", "record_declaration"];
const NAMESPACE_KINDS: [&str; 2] = ["namespace_declaration", "file_scoped_namespace_declaration"];

/// What the extractor needs from a class-like declaration.
pub trait ClassSyntax {
    /// Full declaration text, attributes and nested members included.
    fn full_text(&self) -> &str;
    /// 0-based line of the declaration's first token.
    fn start_row(&self) -> usize;
    fn identifier(&self) -> Option<&str>;
    fn attributes(&self) -> Vec<String>;
    /// Simple and generic named base types only.
    fn base_types(&self) -> Vec<String>;
    fn enclosing_namespace(&self) -> Option<String>;
}

pub fn is_class_like(kind: &str) -> bool {
    CLASS_KINDS.contains(&kind)
}

/// Class-like and a reference type: `record struct` shares the
/// `record_declaration` kind with `record` and `record class`, and only its
/// anonymous `struct` token tells them apart.
pub fn is_class_declaration(node: &Node) -> bool {
    if !is_class_like(node.kind()) {
        return false;
    }
    if node.kind() != "record_declaration" {
        return true;
    }
    let mut cursor = node.walk();
    let is_struct = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "struct");
    !is_struct
}

pub fn csharp_parser() -> Result<Parser, ReportError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_c_sharp::LANGUAGE.into())?;
    Ok(parser)
}

#[derive(Debug, Clone, Copy)]
pub struct CsClass<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> CsClass<'t> {
    pub fn new(node: Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }
}

impl ClassSyntax for CsClass<'_> {
    fn full_text(&self) -> &str {
        node_text(&self.node, self.source)
    }

    fn start_row(&self) -> usize {
        self.node.start_position().row
    }

    fn identifier(&self) -> Option<&str> {
        self.node
            .child_by_field_name("name")
            .map(|name| node_text(&name, self.source))
    }

    fn attributes(&self) -> Vec<String> {
        let mut attributes = Vec::new();
        let mut cursor = self.node.walk();
        for list in self.node.named_children(&mut cursor) {
            if list.kind() != "attribute_list" {
                continue;
            }
            let mut inner = list.walk();
            for attribute in list.named_children(&mut inner) {
                if attribute.kind() == "attribute" {
                    attributes.push(node_text(&attribute, self.source).to_string());
                }
            }
        }
        attributes
    }

    fn base_types(&self) -> Vec<String> {
        let mut bases = Vec::new();
        let mut cursor = self.node.walk();
        for child in self.node.named_children(&mut cursor) {
            if child.kind() != "base_list" {
                continue;
            }
            let mut inner = child.walk();
            for base in child.named_children(&mut inner) {
                let ty = match base.kind() {
                    "primary_constructor_base_type" => base
                        .child_by_field_name("type")
                        .or_else(|| base.named_child(0)),
                    _ => Some(base),
                };
                if let Some(ty) = ty
                    && is_named_type(ty.kind())
                {
                    bases.push(node_text(&ty, self.source).to_string());
                }
            }
        }
        bases
    }

    fn enclosing_namespace(&self) -> Option<String> {
        let mut current = self.node.parent();
        let mut root = self.node;
        while let Some(node) = current {
            if NAMESPACE_KINDS.contains(&node.kind()) {
                return namespace_name(&node, self.source);
            }
            root = node;
            current = node.parent();
        }

        // Depending on grammar version a file-scoped namespace may be a
        // header-only sibling that precedes the types it scopes.
        let mut cursor = root.walk();
        let start = self.node.start_byte();
        root.named_children(&mut cursor)
            .filter(|child| child.kind() == "file_scoped_namespace_declaration")
            .filter(|child| child.start_byte() < start)
            .last()
            .and_then(|ns| namespace_name(&ns, self.source))
    }
}

fn is_named_type(kind: &str) -> bool {
    matches!(kind, "identifier" | "generic_name")
}

fn namespace_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| node_text(&name, source).to_string())
        .filter(|name| !name.is_empty())
}

/// Full text of every using directive in the document, in source order.
pub fn using_directives(tree: &Tree, source: &str) -> Vec<String> {
    let mut usings = Vec::new();
    collect_usings(tree.root_node(), source, &mut usings);
    usings
}

fn collect_usings(node: Node, source: &str, out: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "using_directive" => out.push(node_text(&child, source).to_string()),
            "namespace_declaration" => {
                if let Some(body) = child.child_by_field_name("body") {
                    collect_usings(body, source, out);
                }
            }
            "file_scoped_namespace_declaration" => collect_usings(child, source, out),
            _ => {}
        }
    }
}

/// Lazy pre-order walk yielding class-like declaration nodes, nested ones
/// included.
pub struct ClassNodes<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl<'t> ClassNodes<'t> {
    pub fn new(root: Node<'t>) -> Self {
        Self {
            cursor: root.walk(),
            done: false,
        }
    }

    fn advance(&mut self) {
        if self.cursor.goto_first_child() {
            return;
        }
        loop {
            if self.cursor.goto_next_sibling() {
                return;
            }
            if !self.cursor.goto_parent() {
                self.done = true;
                return;
            }
        }
    }
}

impl<'t> Iterator for ClassNodes<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        while !self.done {
            let node = self.cursor.node();
            self.advance();
            if is_class_declaration(&node) {
                return Some(node);
            }
        }
        None
    }
}

fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}
