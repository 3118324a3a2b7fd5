use reindenthtml::{reindent, tokenize, ContentEditor, Surface, Token};

const SAMPLES: &[&str] = &[
    "",
    "plain text only",
    "<p>Hello <b>world</b>!</p>",
    "<h1>Title</h1><p>Intro with <a href=\"https://example.com\">a link</a>.</p>",
    "<ul><li>one</li><li>two <em>2</em></li></ul><ol><li>a<ul><li>b</li></ul></li></ol>",
    "<blockquote><p>quote</p></blockquote><pre><code>let x = 1;</code></pre>",
    "<p>line<br>break</p><hr><p>after</p>",
    "</div><p>stray close</p></span></p>",
    "<div>\n   <p>\n     spaced   out\n   </p>\n</div>\n",
    "<DIV CLASS=\"a\"><P>Upper</P></DIV>",
];

#[test]
fn deterministic() {
    for src in SAMPLES {
        assert_eq!(reindent(src), reindent(src), "{src}");
    }
}

#[test]
fn idempotent_modulo_whitespace() {
    for src in SAMPLES {
        let once = reindent(src);
        let twice = reindent(&once);
        assert_eq!(twice, once, "{src}");
    }
}

#[test]
fn repeated_void_tags_stay_at_depth_zero() {
    let out = reindent(&"<br>".repeat(5));
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| *l == "<br>"));
}

#[test]
fn inline_content_is_glued() {
    assert_eq!(
        reindent("<p>Hello <b>world</b>!</p>"),
        "<p>Hello <b>world</b>!</p>"
    );
}

#[test]
fn block_nesting_increases_indent() {
    let out = reindent("<div><p>Hi</p></div>");
    assert_eq!(out.lines().collect::<Vec<_>>(), ["<div>", "  <p>Hi</p>", "</div>"]);
}

#[test]
fn unbalanced_close_is_tolerated() {
    let out = reindent("</div><div><p>x</p></div>");
    for line in out.lines() {
        // nothing sits deeper than the single real nesting level
        let indent = line.len() - line.trim_start().len();
        assert!(indent <= 2, "{out}");
    }
    assert!(out.starts_with("</div>\n<div>"));
}

#[test]
fn text_only_input_is_trimmed() {
    assert_eq!(reindent("\n  some text, no tags  \n"), "some text, no tags");
}

#[test]
fn editor_round_trip_without_edits() {
    for src in SAMPLES {
        let mut editor = ContentEditor::new(*src, |_: &str| {});
        editor.switch_to(Surface::Source);
        editor.switch_to(Surface::Visual);
        assert_eq!(editor.content(), *src);
    }
}

#[test]
fn editor_source_view_matches_formatter() {
    let mut editor = ContentEditor::new("", |_: &str| {});
    editor.edit("<div><p>from the visual surface</p></div>");
    editor.switch_to(Surface::Source);
    assert_eq!(
        editor.source_text(),
        reindent("<div><p>from the visual surface</p></div>")
    );
}

#[test]
fn tokens_render_back_to_markup() {
    let src = "<p class=\"x\">a<br/>b</p>";
    let rebuilt: String = tokenize(src).map(|t| t.to_string()).collect();
    assert_eq!(rebuilt, src);
    assert!(tokenize(src).any(|t| matches!(t, Token::OpenTag { self_closing: true, .. })));
}
