use super::*;

#[test]
fn markdown_renders_emphasis() {
    let out = render_markdown_html("scan **a document**");
    assert!(out.contains("<strong>a document</strong>"), "got: {out}");
}

#[test]
fn markdown_strips_raw_html() {
    let out = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!out.contains("<script>"), "got: {out}");
    assert!(out.contains("hello"));
}

#[test]
fn markdown_strips_block_html() {
    let out = render_markdown_html("<div onclick=\"x()\">boom</div>\n\ntext");
    assert!(!out.contains("onclick"), "got: {out}");
    assert!(out.contains("text"));
}

#[test]
fn plain_reply_passes_through_as_paragraph() {
    let out = render_markdown_html(CANNED_REPLY);
    assert!(out.starts_with("<p>"), "got: {out}");
}
