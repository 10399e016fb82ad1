use gpt2md::html_to_markdown;
use insta::assert_snapshot;

#[test]
fn test_basic_emphasis() {
    assert_eq!(
        html_to_markdown("<p>Hello <strong>world</strong> and <em>universe</em></p>"),
        "Hello **world** and _universe_"
    );
}

#[test]
fn test_headers_keep_their_levels() {
    assert_eq!(
        html_to_markdown("<h1>Title</h1><h2>Subtitle</h2><h3>Section</h3>"),
        "# Title\n\n## Subtitle\n\n### Section"
    );
}

#[test]
fn test_unordered_list() {
    assert_eq!(
        html_to_markdown("<ul><li>Item 1</li><li>Item 2</li></ul>"),
        "- Item 1\n- Item 2"
    );
}

#[test]
fn test_ordered_list_renders_as_bullets() {
    assert_eq!(
        html_to_markdown("<ol><li>First</li><li>Second</li></ol>"),
        "- First\n- Second"
    );
}

#[test]
fn test_code_block_with_language() {
    let out = html_to_markdown(
        "<pre><code class=\"language-javascript\">const x = 1;</code></pre>",
    );
    assert_eq!(out, "```javascript\nconst x = 1;\n```");
}

#[test]
fn test_inline_code() {
    assert_eq!(
        html_to_markdown("<p>Use <code>console.log</code> to debug</p>"),
        "Use `console.log` to debug"
    );
}

#[test]
fn test_table_with_synthesized_separator() {
    let html = "<table><thead><tr><th>Platform</th><th>Description</th></tr></thead>\
                <tbody><tr><td>Mayo Clinic</td><td>Hospital</td></tr></tbody></table>";
    let out = html_to_markdown(html);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "| Platform | Description |");
    assert_eq!(lines[1], "| --- | --- |");
    assert_eq!(lines[2], "| Mayo Clinic | Hospital |");
}

#[test]
fn test_copy_button_label_is_stripped() {
    let out = html_to_markdown(
        "<pre><code class=\"language-python\">Copy codeprint(\"hi\")</code></pre>",
    );
    assert_eq!(out, "```python\nprint(\"hi\")\n```");
}

#[test]
fn test_nested_emphasis() {
    assert_eq!(
        html_to_markdown("<p>Here is <strong>bold <em>italic</em> text</strong></p>"),
        "Here is **bold _italic_ text**"
    );
}

#[test]
fn test_entities_decode_after_stripping() {
    assert_eq!(
        html_to_markdown("<p>&amp; &lt; &gt; &quot; &#39;</p>"),
        "& < > \" '"
    );
}

#[test]
fn test_horizontal_rule_and_line_break() {
    assert_eq!(html_to_markdown("<p>a</p><hr><p>b</p>"), "a\n---\n\nb");
    assert_eq!(
        html_to_markdown("<p>line one<br>line two</p>"),
        "line one\nline two"
    );
}

#[test]
fn test_unknown_tags_are_stripped() {
    assert_eq!(
        html_to_markdown("<div class=\"flex\"><span>Hello</span> <button>Edit</button></div>"),
        "Hello Edit"
    );
}

#[test]
fn test_empty_fragment_converts_to_empty() {
    assert_eq!(html_to_markdown(""), "");
    assert_eq!(html_to_markdown("   \n  "), "");
    assert_eq!(html_to_markdown("<div><span></span></div>"), "");
}

#[test]
fn test_unclosed_markup_degrades_without_failing() {
    assert_eq!(html_to_markdown("<strong>loud"), "**loud");
    assert_eq!(html_to_markdown("<ul><li>one"), "- one");
}

#[test]
fn test_pipes_in_code_blocks_survive_table_repair() {
    let out = html_to_markdown(
        "<pre><code class=\"language-sh\">grep foo | wc -l\n| head |  |</code></pre>",
    );
    assert!(out.contains("grep foo | wc -l"));
    assert!(out.contains("| head |  |"));
    assert!(!out.contains("---"));
}

#[test]
fn test_kitchen_sink_fragment() {
    let html = "<h2>Results</h2>\
                <p>The <strong>fastest</strong> option is <code>memcpy</code>.</p>\
                <ul><li>Simple</li><li>Fast</li></ul>\
                <pre><code class=\"language-c\">memcpy(dst, src, n);</code></pre>\
                <table><thead><tr><th>Name</th><th>Time</th></tr></thead>\
                <tbody><tr><td>memcpy</td><td>1.0</td></tr></tbody></table>";
    assert_snapshot!(html_to_markdown(html), @r###"
    ## Results

    The **fastest** option is `memcpy`.
    - Simple
    - Fast
    ```c
    memcpy(dst, src, n);
    ```

    | Name | Time |
    | --- | --- |
    | memcpy | 1.0 |
    "###);
}
