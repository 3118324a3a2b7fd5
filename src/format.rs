// src/format.rs
//
// Re-indentation of a token stream into canonical source form.
//
// - One block element (or text run) per line, children indented one unit deeper.
// - Text and inline tags stay glued to the line they continue.
// - A block whose content is inline-only closes on its own opening line.
// - Void tags, self-closing blocks and declarations (empty tag name: comments,
//   doctypes) never change depth; they join inline content already on the line,
//   otherwise start a new one, and always end the line after themselves.
// - Only block close tags decrement depth, floored at zero.
// - Lines are right-trimmed when broken or when a block closes on them; text
//   starting a line is left-trimmed.

use crate::tags::{classify, TagKind};
use crate::tokenizer::{tokenize, Token};
use log::trace;

/// Layout knobs for [`Formatter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indent_width: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { indent_width: 2 }
    }
}

/// Deterministic, total formatter. All layout state lives inside one
/// [`Formatter::format`] call; the formatter itself is immutable and can be shared.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Formatter { options }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Lay out `tokens`. Never fails; unbalanced markup only skews indentation.
    pub fn format<I>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = Token>,
    {
        let mut layout = Layout::new(usize::from(self.options.indent_width));
        for token in tokens {
            layout.push(&token);
        }
        layout.finish()
    }

    /// Tokenize and lay out a fragment.
    pub fn reindent(&self, src: &str) -> String {
        self.format(tokenize(src))
    }
}

/// [`Formatter::format`] with default options.
pub fn format<I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token>,
{
    Formatter::default().format(tokens)
}

/// [`Formatter::reindent`] with default options.
pub fn reindent(src: &str) -> String {
    Formatter::default().reindent(src)
}

/* ============================== Layout state ============================= */

struct Layout {
    out: String,
    unit: usize,
    depth: usize,
    /// The next piece of content must start a fresh line.
    break_pending: bool,
    /// The current line carries text or inline markup.
    line_has_inline: bool,
    /// Since the innermost block opened, nothing has broken its line.
    inline_only: bool,
}

impl Layout {
    fn new(unit: usize) -> Self {
        Layout {
            out: String::new(),
            unit,
            depth: 0,
            break_pending: false,
            line_has_inline: false,
            inline_only: false,
        }
    }

    fn push(&mut self, token: &Token) {
        trace!("depth={} token={:?}", self.depth, token);
        match token {
            Token::CloseTag { name, .. } => self.close_tag(name, token),
            Token::OpenTag {
                name,
                self_closing,
                ..
            } => self.open_tag(name, *self_closing, token),
            Token::Text { value } => self.text(value),
        }
    }

    fn finish(self) -> String {
        self.out.trim().to_owned()
    }

    fn open_tag(&mut self, name: &str, self_closing: bool, token: &Token) {
        let kind = if name.is_empty() {
            TagKind::Void
        } else {
            classify(name)
        };
        match kind {
            TagKind::Inline => {
                self.start_content();
                self.write(token);
                self.line_has_inline = true;
            }
            TagKind::Void => self.standalone(token),
            TagKind::Block if self_closing => self.standalone(token),
            TagKind::Block => {
                self.new_line();
                self.write(token);
                self.depth += 1;
                self.break_pending = false;
                self.line_has_inline = false;
                self.inline_only = true;
            }
        }
    }

    fn close_tag(&mut self, name: &str, token: &Token) {
        match classify(name) {
            TagKind::Inline => {
                self.start_content();
                self.write(token);
                self.line_has_inline = true;
            }
            TagKind::Void => self.standalone(token),
            TagKind::Block => {
                self.depth = self.depth.saturating_sub(1);
                if self.inline_only {
                    let keep = self.out.trim_end().len();
                    self.out.truncate(keep);
                } else {
                    self.new_line();
                }
                self.write(token);
                self.break_pending = true;
                self.line_has_inline = false;
                self.inline_only = false;
            }
        }
    }

    fn text(&mut self, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        let value = if self.break_pending || !self.line_has_inline {
            self.start_content();
            value.trim_start()
        } else {
            value
        };
        self.out.push_str(value);
        self.line_has_inline = true;
    }

    /// A tag that owns no content and ends its line.
    fn standalone(&mut self, token: &Token) {
        if self.break_pending || !self.line_has_inline {
            self.new_line();
        }
        self.write(token);
        self.break_pending = true;
        self.line_has_inline = false;
        self.inline_only = false;
    }

    fn start_content(&mut self) {
        if self.break_pending {
            self.new_line();
            self.break_pending = false;
        }
    }

    /// Right-trim the current line and open a new one at the current depth.
    /// No-op on empty output, so the first line is never preceded by a break.
    fn new_line(&mut self) {
        if self.out.is_empty() {
            return;
        }
        let keep = self.out.trim_end().len();
        self.out.truncate(keep);
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.depth * self.unit));
        self.line_has_inline = false;
        self.inline_only = false;
    }

    fn write(&mut self, token: &Token) {
        self.out.push_str(token.as_str());
    }
}
