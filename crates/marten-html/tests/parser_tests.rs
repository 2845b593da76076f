//! Integration tests for the html5ever bridge.

use marten_dom::{DomTree, NodeId, NodeType};
use marten_html::{dump_tree, parse_document};

/// Helper to parse HTML and return the tree
fn parse(html: &str) -> DomTree {
    parse_document(html).expect("parse failed").dom
}

/// Helper to get element by tag name (first match, depth-first)
fn find(tree: &DomTree, tag: &str) -> NodeId {
    tree.find_element(NodeId::ROOT, tag)
        .unwrap_or_else(|| panic!("no <{tag}> in tree"))
}

#[test]
fn test_document_structure() {
    let tree = parse("<!DOCTYPE html><html><head></head><body></body></html>");

    let root = tree.get(NodeId::ROOT).unwrap();
    assert!(matches!(root.node_type, NodeType::Document));

    // Doctype is dropped, so the html element is the only root child
    let html = tree.document_element().unwrap();
    assert_eq!(tree.children(NodeId::ROOT), &[html]);
    assert_eq!(tree.as_element(html).unwrap().tag_name, "html");
    assert!(tree.body().is_some());
}

#[test]
fn test_implied_structure_for_fragment() {
    let tree = parse("<p>Hello</p>");
    let body = tree.body().unwrap();
    let p = find(&tree, "p");
    assert_eq!(tree.parent(p), Some(body));
    assert_eq!(tree.text_content(p), "Hello");
}

#[test]
fn test_children_keep_document_order() {
    let tree = parse("<ul><li>one</li><li>two</li><li>three</li></ul>");
    let ul = find(&tree, "ul");
    let texts: Vec<String> = tree
        .element_children(ul)
        .map(|(id, _)| tree.text_content(id))
        .collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_attributes_are_copied() {
    let tree = parse(r#"<a href="https://example.com" title="Example">x</a>"#);
    let a = tree.as_element(find(&tree, "a")).unwrap();
    assert_eq!(a.attr("href"), "https://example.com");
    assert_eq!(a.attr("title"), "Example");
    assert_eq!(a.attr("rel"), "");
}

#[test]
fn test_comments_are_dropped() {
    let tree = parse("<div>a<!-- hidden -->b</div>");
    let div = find(&tree, "div");
    assert_eq!(tree.text_content(div), "ab");
    assert!(tree.children(div).iter().all(|&c| tree.as_text(c).is_some()));
}

#[test]
fn test_tag_names_are_lowercased() {
    let tree = parse("<DIV><SPAN>x</SPAN></DIV>");
    assert_eq!(tree.as_element(find(&tree, "div")).unwrap().tag_name, "div");
    assert_eq!(tree.as_element(find(&tree, "span")).unwrap().tag_name, "span");
}

#[test]
fn test_title_lands_in_head() {
    let tree = parse("<title>Page</title><p>body</p>");
    let head = find(&tree, "head");
    let title = find(&tree, "title");
    assert_eq!(tree.parent(title), Some(head));
    assert_eq!(tree.text_content(title), "Page");
}

#[test]
fn test_table_gets_implied_tbody() {
    let tree = parse("<table><tr><td>1</td></tr></table>");
    let table = find(&tree, "table");
    let tags: Vec<&str> = tree
        .element_children(table)
        .map(|(_, e)| e.tag_name.as_str())
        .collect();
    assert_eq!(tags, vec!["tbody"]);
}

#[test]
fn test_pre_text_is_preserved() {
    let tree = parse("<pre>  a\n    b</pre>");
    let pre = find(&tree, "pre");
    assert_eq!(tree.text_content(pre), "  a\n    b");
}

#[test]
fn test_malformed_markup_reports_issues() {
    let parsed = parse_document("<p><b>unclosed</p></i>").unwrap();
    assert!(!parsed.parse_issues.is_empty());
    assert_eq!(parsed.dom.text_content(NodeId::ROOT), "unclosed");
}

#[test]
fn test_empty_input() {
    let tree = parse("");
    assert!(tree.document_element().is_some());
    assert_eq!(tree.text_content(NodeId::ROOT), "");
}

#[test]
fn test_dump_tree_outline() {
    let tree = parse("<p class=\"x\">a b</p>");
    let dump = dump_tree(&tree);
    assert!(dump.starts_with("Document\n  <html>\n"));
    assert!(dump.contains("      <p class=\"x\">\n"));
    assert!(dump.contains("\"a\u{00B7}b\""));
}

#[test]
fn test_template_content_becomes_children() {
    let tree = parse("<body><template><p>tpl</p></template></body>");
    let template = find(&tree, "template");
    let p = find(&tree, "p");
    assert_eq!(tree.parent(p), Some(template));
    assert_eq!(tree.text_content(template), "tpl");
}
