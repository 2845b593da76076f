use marten_dom::{DomTree, NodeType};
use std::fmt::Write;

/// Render an indented outline of the tree, one node per line.
///
/// Text is shown quoted with newlines escaped and spaces made visible, so
/// whitespace-only nodes stand out.
#[must_use]
pub fn dump_tree(tree: &DomTree) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree.root(), 0usize)];
    while let Some((id, indent)) = stack.pop() {
        let Some(node) = tree.get(id) else { continue };
        let prefix = "  ".repeat(indent);
        let _ = match &node.node_type {
            NodeType::Document => writeln!(out, "{prefix}Document"),
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(out, "{prefix}<{}>", data.tag_name)
                } else {
                    let mut attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    attrs.sort();
                    writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{prefix}\"{display}\"")
            }
        };
        stack.extend(tree.children(id).iter().rev().map(|&child| (child, indent + 1)));
    }
    out
}

