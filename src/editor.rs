// src/editor.rs
//
// Two editable views over one HTML fragment.
//
// - Visual: the rich-text surface edits the logical content directly.
// - Source: a raw text buffer. Entering it from Visual regenerates the buffer
//   through the formatter. Edits there are taken verbatim; nothing is parsed or
//   validated.
// - Every edit fires the change callback with the new logical content.
//   Switching surfaces never does: the content only changes through edits.

use crate::format::Formatter;
use log::debug;

/// Which surface is being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Surface {
    /// Rich-text view; renders the logical content.
    #[default]
    Visual,
    /// Raw HTML view; shows the formatted source buffer.
    Source,
}

/// Owns the logical content of one document and keeps both surfaces in sync.
///
/// `on_change` receives the logical content after every edit. One instance
/// per document; instances share nothing.
pub struct ContentEditor<F>
where
    F: FnMut(&str),
{
    content: String,
    source: String,
    surface: Surface,
    formatter: Formatter,
    on_change: F,
}

impl<F> ContentEditor<F>
where
    F: FnMut(&str),
{
    /// Start on the visual surface with the default formatter.
    pub fn new(content: impl Into<String>, on_change: F) -> Self {
        Self::with_formatter(content, Formatter::default(), on_change)
    }

    pub fn with_formatter(content: impl Into<String>, formatter: Formatter, on_change: F) -> Self {
        let content = content.into();
        let source = formatter.reindent(&content);
        ContentEditor {
            content,
            source,
            surface: Surface::Visual,
            formatter,
            on_change,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// The authoritative document string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text shown in the source surface.
    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Make `target` the active surface. Entering Source from Visual reformats
    /// the current content into the source buffer; every other transition
    /// carries the content over as-is.
    pub fn switch_to(&mut self, target: Surface) {
        if target == self.surface {
            return;
        }
        if target == Surface::Source {
            self.source = self.formatter.reindent(&self.content);
            debug!(
                "visual -> source: {} bytes formatted into {} bytes",
                self.content.len(),
                self.source.len()
            );
        } else {
            debug!("source -> visual: {} bytes", self.content.len());
        }
        self.surface = target;
    }

    /// Apply an edit from the active surface. The new text becomes the logical
    /// content immediately and is passed to the change callback.
    pub fn edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.surface == Surface::Source {
            self.source.clone_from(&text);
        }
        self.content = text;
        debug!("{:?} edit: {} bytes", self.surface, self.content.len());
        (self.on_change)(&self.content);
    }
}
