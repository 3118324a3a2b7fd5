// src/tokenizer.rs
//
// Markup tokenizer for editor-produced HTML fragments.
//
// - Pre-pass: whitespace strictly between '>' and the next '<' is removed.
// - Every literal '<' / '>' is a delimiter. Quotes are NOT tracked, so a '>' inside
//   an attribute value ends the tag early. Fragments come from a rich-text surface
//   that never emits such attributes.
// - Whitespace-only text runs are dropped; other text is yielded untouched.
// - An unterminated "<..." (cut by another '<' or by end of input) is yielded as text.

use memchr::{memchr, memchr2};
use std::borrow::Cow;
use std::fmt;

/// One markup token, in source order. Tags keep their source text in `raw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `<name ...>`; `raw_attributes` is everything after the name up to '>'.
    OpenTag {
        name: String,
        raw_attributes: String,
        self_closing: bool,
        raw: String,
    },
    /// `</name>`; the name stops at the first whitespace, so `</ b>` has an empty name.
    CloseTag { name: String, raw: String },
    /// Text between tags, never whitespace-only.
    Text { value: String },
}

impl Token {
    /// Source text of the token, exactly as scanned.
    pub fn as_str(&self) -> &str {
        match self {
            Token::OpenTag { raw, .. } | Token::CloseTag { raw, .. } => raw,
            Token::Text { value } => value,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ============================ Whitespace pre-pass ======================== */

/// Remove whitespace runs that sit strictly between a '>' and the next '<'.
///
/// Borrows the input when there is nothing to remove.
pub fn collapse_inter_tag_whitespace(src: &str) -> Cow<'_, str> {
    let bytes = src.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0usize;
    let mut search = 0usize;

    while let Some(off) = memchr(b'>', &bytes[search..]) {
        let run_start = search + off + 1;
        let rest = &src[run_start..];
        let run_len = rest.len() - rest.trim_start().len();
        if run_len > 0 && rest[run_len..].starts_with('<') {
            let buf = out.get_or_insert_with(|| String::with_capacity(src.len()));
            buf.push_str(&src[copied..run_start]);
            copied = run_start + run_len;
        }
        search = run_start + run_len;
    }

    match out {
        None => Cow::Borrowed(src),
        Some(mut buf) => {
            buf.push_str(&src[copied..]);
            Cow::Owned(buf)
        }
    }
}

/* ================================ Scanner ================================ */

/// Lazy token stream over one fragment. Holds no state beyond its read position,
/// so a fresh one can be built for any input at any time.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    src: Cow<'a, str>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer {
            src: collapse_inter_tag_whitespace(src),
            pos: 0,
        }
    }
}

/// Tokenize `src` (after the inter-tag whitespace pre-pass).
pub fn tokenize(src: &str) -> Tokenizer<'_> {
    Tokenizer::new(src)
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let rest = &self.src[self.pos..];
            if rest.is_empty() {
                return None;
            }
            let bytes = rest.as_bytes();

            // (chunk length, chunk is a complete tag)
            let (len, is_tag) = if bytes[0] == b'<' {
                match memchr2(b'<', b'>', &bytes[1..]) {
                    Some(off) if bytes[1 + off] == b'>' => (off + 2, true),
                    Some(off) => (off + 1, false),
                    None => (bytes.len(), false),
                }
            } else {
                match memchr2(b'<', b'>', bytes) {
                    // stray '>' closes the run but stays text
                    Some(off) if bytes[off] == b'>' => (off + 1, false),
                    Some(off) => (off, false),
                    None => (bytes.len(), false),
                }
            };

            let chunk = &rest[..len];
            self.pos += len;

            if is_tag {
                return Some(parse_tag(chunk));
            }
            if !chunk.trim().is_empty() {
                return Some(Token::Text {
                    value: chunk.to_owned(),
                });
            }
        }
    }
}

/* =============================== Tag parsing ============================= */

/// Build a tag token from raw `<...>` text.
fn parse_tag(tag: &str) -> Token {
    let inner = &tag[1..tag.len() - 1];

    if let Some(rest) = inner.strip_prefix('/') {
        let name = rest
            .split(char::is_whitespace)
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        return Token::CloseTag {
            name,
            raw: tag.to_owned(),
        };
    }

    let end = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    Token::OpenTag {
        name: inner[..end].to_ascii_lowercase(),
        raw_attributes: inner[end..].to_owned(),
        self_closing: tag.ends_with("/>"),
        raw: tag.to_owned(),
    }
}
