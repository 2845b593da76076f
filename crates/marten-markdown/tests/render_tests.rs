//! Integration tests for HTML-to-Markdown rendering.

use marten_markdown::{RenderOptions, render_document, render_html};
use std::thread;

/// Helper to render an HTML string with default options
fn md(html: &str) -> String {
    render_html(html, "https://example.com/", &RenderOptions::default())
}

// ========== skipped subtrees ==========

#[test]
fn test_script_and_style_are_dropped() {
    let out = md("<p>Hi<script>var secret = 1;</script><style>.hidden { color: red }</style></p>");
    assert_eq!(out, "Hi");
    assert!(!out.contains("secret"));
    assert!(!out.contains("hidden"));
}

#[test]
fn test_every_skipped_element_hides_its_subtree() {
    let out = md(
        "<div>keep<noscript>ns</noscript><iframe>fr</iframe>\
         <svg><text>vector</text></svg><canvas>cv</canvas></div>",
    );
    assert_eq!(out, "keep");
}

#[test]
fn test_head_only_renders_title() {
    let out = md(
        "<html><head><title>My Page</title><style>p{}</style>\
         <meta charset=\"utf-8\"></head><body><p>x</p></body></html>",
    );
    assert_eq!(out, "# My Page \n\n---\n\n\nx");
}

#[test]
fn test_head_without_title_renders_nothing() {
    assert_eq!(md("<head><style>p{}</style></head><p>body</p>"), "body");
}

#[test]
fn test_template_content_is_rendered() {
    assert_eq!(md("<div>x<template><b>tpl</b></template></div>"), "x **tpl **");
}

// ========== blocks ==========

#[test]
fn test_headings() {
    assert_eq!(md("<h1>Title</h1>"), "# Title");
    assert_eq!(md("<h3>Sub</h3>"), "### Sub");
    assert_eq!(md("<h6>Tiny</h6>"), "###### Tiny");
}

#[test]
fn test_paragraphs_are_separated() {
    assert_eq!(md("<p>One</p><p>Two</p>"), "One \n\n\nTwo");
}

#[test]
fn test_horizontal_rule_between_paragraphs() {
    assert_eq!(md("<p>a</p><hr><p>b</p>"), "a \n\n\n---\n\n\nb");
}

#[test]
fn test_blockquote() {
    assert_eq!(md("<blockquote>Quote</blockquote>"), "> Quote");
}

#[test]
fn test_definition_list() {
    assert_eq!(md("<dl><dt>Term</dt><dd>Def</dd></dl>"), "**Term **\n  Def");
}

#[test]
fn test_structural_elements_add_newlines() {
    assert_eq!(md("<nav>menu</nav><main>content</main><footer>end</footer>"), "menu \n\ncontent \nend");
}

#[test]
fn test_unknown_elements_pass_through() {
    assert_eq!(md("<custom-widget>inside <blink>text</blink></custom-widget>"), "inside text");
}

// ========== inline ==========

#[test]
fn test_inline_wraps() {
    assert_eq!(md("<b>bold</b>"), "**bold **");
    assert_eq!(md("<strong>strong</strong>"), "**strong **");
    assert_eq!(md("<em>em</em>"), "*em *");
    assert_eq!(md("<i>it</i>"), "*it *");
    assert_eq!(md("<u>under</u>"), "_under _");
}

#[test]
fn test_inline_code_outside_pre() {
    assert_eq!(md("<p>Use <code>cargo</code> now</p>"), "Use `cargo `now");
}

#[test]
fn test_transparent_containers() {
    assert_eq!(
        md("<p><span>a</span><label>b</label><time>c</time></p>"),
        "a b c"
    );
}

#[test]
fn test_line_break() {
    assert_eq!(md("<p>a<br>b</p>"), "a   \nb");
}

// ========== text normalization ==========

#[test]
fn test_whitespace_is_collapsed() {
    assert_eq!(md("<p>  Hello   \n\t  world  </p>"), "Hello world");
}

#[test]
fn test_no_space_before_following_punctuation() {
    assert_eq!(md("<p>See <a href=\"/x\">docs</a>.</p>"), "See [docs](/x).");
    assert_eq!(md("<p>Hello, <b>world</b></p>"), "Hello,**world **");
}

#[test]
fn test_whitespace_only_text_is_dropped() {
    assert_eq!(md("<div>\n   \n</div><p>x</p>"), "x");
}

// ========== links and images ==========

#[test]
fn test_fragment_link_is_plain_text() {
    assert_eq!(md("<a href=\"#top\">Top</a>"), "Top");
}

#[test]
fn test_absolute_link() {
    assert_eq!(md("<a href=\"https://x.com\">X</a>"), "[X](https://x.com)");
}

#[test]
fn test_empty_href_is_plain_text() {
    assert_eq!(md("<a href=\"\">Y</a>"), "Y");
    assert_eq!(md("<a>Z</a>"), "Z");
}

#[test]
fn test_javascript_link_is_plain_text() {
    assert_eq!(md("<a href=\"javascript:void(0)\">Click</a>"), "Click");
}

#[test]
fn test_link_without_text_renders_nothing() {
    assert_eq!(md("<p>a<a href=\"https://x.com\">  </a>b</p>"), "a b");
    assert_eq!(md("<a href=\"https://x.com\"><img src=\"i.png\"></a>"), "");
}

#[test]
fn test_link_text_is_descendant_text() {
    assert_eq!(
        md("<a href=\"/p\"> <b>Bold</b> part </a>"),
        "[Bold part](/p)"
    );
}

#[test]
fn test_relative_links_are_not_resolved_by_default() {
    assert_eq!(md("<a href=\"guide.html\">Guide</a>"), "[Guide](guide.html)");
}

#[test]
fn test_images() {
    assert_eq!(md("<img src=\"a.png\" alt=\"Logo\">"), "![Logo](a.png)");
    assert_eq!(md("<img src=\"a.png\">"), "![image](a.png)");
    assert_eq!(md("<img src=\"a.png\" alt=\"\">"), "![image](a.png)");
}

#[test]
fn test_image_with_empty_src_is_kept() {
    assert_eq!(md("<img alt=\"x\">"), "![x]()");
}

// ========== preformatted ==========

#[test]
fn test_pre_keeps_whitespace() {
    assert_eq!(md("<pre>  line1\n    line2</pre>"), "```\n  line1\n    line2\n```");
}

#[test]
fn test_code_inside_pre_is_not_backticked() {
    assert_eq!(
        md("<pre><code>fn main() {\n    x;\n}</code></pre>"),
        "```\nfn main() {\n    x;\n}\n```"
    );
}

#[test]
fn test_pre_mode_ends_with_pre() {
    assert_eq!(md("<pre>a</pre><p>  b   c </p>"), "```\na\n```\n\n\nb c");
}

// ========== form controls ==========

#[test]
fn test_form_controls() {
    assert_eq!(
        md("<form><input type=\"submit\" value=\"Go\"><button>Send</button></form>"),
        "**Form:**\n (Go)[Send]"
    );
}

#[test]
fn test_form_control_value_equal_to_text_is_not_repeated() {
    assert_eq!(md("<button value=\"Send\">Send</button>"), "[Send]");
    assert_eq!(md("<button value=\"1\">Send</button>"), "[Send] (1)");
}

#[test]
fn test_textarea_text() {
    assert_eq!(md("<textarea>  typed  </textarea>"), "[typed]");
}

// ========== document entry points ==========

#[test]
fn test_render_document_matches_render_html() {
    let html = "<h2>T</h2><ul><li>a</li></ul>";
    let parsed = marten_html::parse_document(html).unwrap();
    assert_eq!(render_document(&parsed.dom, ""), md(html));
}

#[test]
fn test_empty_document() {
    assert_eq!(md(""), "");
}

#[test]
fn test_output_is_trimmed_and_blank_runs_are_bounded() {
    let out = md("<p></p><p></p><hr><hr><div></div><p>end</p>");
    assert!(!out.contains("\n\n\n\n"));
    assert_eq!(out, out.trim());
}

#[test]
fn test_concurrent_renders_are_independent() {
    let html = "<ol><li>a</li><li>b</li></ol><pre> x  y </pre><p>  z  </p>";
    let expected = md(html);
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(move || md(html))).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
