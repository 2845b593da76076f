use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use marten_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};
use std::io;
use thiserror::Error;

/// Errors that stop a document from being parsed at all.
///
/// Malformed markup is never an error: the tree builder recovers from it and
/// the recoveries are reported through [`ParsedDocument::parse_issues`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be read into the parser.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// A parsed document plus the parser's recoverable diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The document tree.
    pub dom: DomTree,
    /// Messages for every parse error the tree builder recovered from.
    pub parse_issues: Vec<String>,
}

/// [§ 13.2 Parsing HTML documents](https://html.spec.whatwg.org/multipage/parsing.html)
///
/// Parse a complete HTML document into a [`DomTree`].
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the input cannot be fed to the parser.
pub fn parse_document(html: &str) -> Result<ParsedDocument, ParseError> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let rcdom = html5ever::parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let parse_issues = rcdom
        .errors
        .borrow()
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(ParsedDocument {
        dom: copy_into_arena(&rcdom.document),
        parse_issues,
    })
}

/// Copy the reference-counted tree into the arena, in document order.
///
/// Uses an explicit work stack: children are pushed in reverse so the first
/// child is popped (and appended) first, and a node's whole subtree is
/// finished before its next sibling is popped.
fn copy_into_arena(document: &Handle) -> DomTree {
    let mut tree = DomTree::new();
    let mut stack: Vec<(Handle, NodeId)> = document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), NodeId::ROOT))
        .collect();

    while let Some((handle, parent)) = stack.pop() {
        let node_type = match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let attrs: AttributesMap = attrs
                    .borrow()
                    .iter()
                    .map(|a| (a.name.local.to_string(), a.value.to_string()))
                    .collect();
                NodeType::Element(ElementData {
                    tag_name: name.local.to_string(),
                    attrs,
                })
            }
            NodeData::Text { contents } => NodeType::Text(contents.borrow().to_string()),
            // Comments, doctypes and processing instructions never render.
            _ => continue,
        };

        let id = tree.alloc(node_type);
        tree.append_child(parent, id);

        // A template's content lives in a separate fragment; keep it as
        // ordinary children so it renders like any other element.
        let children = match &handle.data {
            NodeData::Element {
                template_contents, ..
            } => match template_contents.borrow().as_ref() {
                Some(fragment) => fragment.children.borrow().clone(),
                None => handle.children.borrow().clone(),
            },
            _ => handle.children.borrow().clone(),
        };
        stack.extend(children.into_iter().rev().map(|child| (child, id)));
    }

    tree
}
