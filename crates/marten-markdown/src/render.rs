//! The recursive tree walk.
//!
//! [`render_node`] looks up the [`TagRule`] for each element and either skips
//! it, wraps its children in fixed markup, emits fixed text, or hands it to
//! one of the handlers below. Text nodes go through the normalizer unless the
//! walk is inside `<pre>`.

use crate::context::RenderContext;
use crate::table::{extract_rows, write_pipe_table};
use crate::tags::{Handler, TagRule};
use crate::text::push_normalized;
use marten_dom::{DomTree, ElementData, NodeId, NodeType};

/// Render `id` and its subtree into `ctx`.
pub fn render_node(tree: &DomTree, id: NodeId, ctx: &mut RenderContext) {
    let Some(node) = tree.get(id) else { return };

    match &node.node_type {
        NodeType::Document => render_children(tree, id, ctx),
        NodeType::Text(data) => render_text(data, ctx),
        NodeType::Element(element) => match TagRule::for_name(&element.tag_name) {
            TagRule::Skip => {}
            TagRule::Passthrough => render_children(tree, id, ctx),
            TagRule::Wrap(prefix, suffix) | TagRule::Block(prefix, suffix) => {
                ctx.push(prefix);
                render_children(tree, id, ctx);
                ctx.push(suffix);
            }
            TagRule::Leaf(text) => ctx.push(text),
            TagRule::Custom(handler) => render_custom(tree, id, element, handler, ctx),
        },
    }
}

/// Render every child of `id` in order.
pub fn render_children(tree: &DomTree, id: NodeId, ctx: &mut RenderContext) {
    for &child in tree.children(id) {
        render_node(tree, child, ctx);
    }
}

fn render_text(data: &str, ctx: &mut RenderContext) {
    if ctx.in_pre() {
        ctx.push(data);
    } else {
        push_normalized(ctx.buffer(), data);
    }
}

fn render_custom(
    tree: &DomTree,
    id: NodeId,
    element: &ElementData,
    handler: Handler,
    ctx: &mut RenderContext,
) {
    match handler {
        Handler::Heading(level) => {
            ctx.push("\n\n");
            ctx.push(&"#".repeat(level));
            ctx.push(" ");
            render_children(tree, id, ctx);
            ctx.push("\n\n");
        }
        Handler::Head => render_head(tree, id, ctx),
        Handler::Anchor => render_anchor(tree, id, element, ctx),
        Handler::Image => render_image(element, ctx),
        Handler::List { ordered } => {
            ctx.push("\n");
            ctx.enter_list(ordered);
            render_children(tree, id, ctx);
            ctx.exit_list(ordered);
            ctx.push("\n");
        }
        Handler::ListItem => {
            ctx.push("\n");
            for _ in 1..ctx.list_depth() {
                ctx.push("  ");
            }
            match ctx.next_ordinal() {
                Some(n) => ctx.push(&format!("{n}. ")),
                None => ctx.push("- "),
            }
            render_children(tree, id, ctx);
        }
        Handler::Preformatted => {
            ctx.push("\n\n```\n");
            let previous = ctx.enter_pre();
            render_children(tree, id, ctx);
            ctx.restore_pre(previous);
            ctx.push("\n```\n\n");
        }
        Handler::Code => {
            if ctx.in_pre() {
                render_children(tree, id, ctx);
            } else {
                ctx.push("`");
                render_children(tree, id, ctx);
                ctx.push("`");
            }
        }
        Handler::Table => {
            ctx.push("\n\n");
            let rows = extract_rows(tree, id);
            write_pipe_table(ctx.buffer(), &rows);
            ctx.push("\n\n");
        }
        Handler::FormControl => render_form_control(tree, id, element, ctx),
    }
}

/// Only `<title>` survives from `<head>`, as a heading over a rule.
fn render_head(tree: &DomTree, id: NodeId, ctx: &mut RenderContext) {
    for (child, element) in tree.element_children(id) {
        if element.is("title") {
            ctx.push("# ");
            render_children(tree, child, ctx);
            ctx.push("\n\n---\n\n");
        }
    }
}

/// Trimmed concatenated text of every descendant.
fn element_text(tree: &DomTree, id: NodeId) -> String {
    tree.text_content(id).trim().to_string()
}

/// Returns true for `href` values that would lead nowhere in a static view.
fn is_dead_link(href: &str) -> bool {
    href.is_empty() || href.starts_with('#') || href.starts_with("javascript:")
}

fn render_anchor(tree: &DomTree, id: NodeId, element: &ElementData, ctx: &mut RenderContext) {
    let text = element_text(tree, id);
    if text.is_empty() {
        return;
    }

    let href = element.attr("href");
    if is_dead_link(href) {
        ctx.push(&text);
    } else {
        let target = ctx.link_target(href);
        let link = format!("[{text}]({target})");
        ctx.push(&link);
    }
}

fn render_image(element: &ElementData, ctx: &mut RenderContext) {
    let alt = match element.attr("alt") {
        "" => "image",
        alt => alt,
    };
    let src = ctx.link_target(element.attr("src"));
    let image = format!("![{alt}]({src})");
    ctx.push(&image);
}

fn render_form_control(tree: &DomTree, id: NodeId, element: &ElementData, ctx: &mut RenderContext) {
    let text = element_text(tree, id);
    if !text.is_empty() {
        ctx.push(&format!("[{text}]"));
    }

    let value = element.attr("value");
    if !value.is_empty() && value != text {
        ctx.push(&format!(" ({value})"));
    }
}
