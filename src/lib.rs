// src/lib.rs
//
// reindenthtml — canonical re-indentation for editor-produced HTML fragments
//
// Pipeline: tokenizer (tags / text runs) → formatter (one block per line,
// inline runs glued, two spaces per level) → editor (visual/source surfaces
// over one logical content string).

pub mod document;
pub mod editor;
pub mod error;
pub mod format;
pub mod tags;
pub mod tokenizer;

pub use editor::{ContentEditor, Surface};
pub use error::{Error, Result};
pub use format::{format, reindent, FormatOptions, Formatter};
pub use tags::{classify, TagKind};
pub use tokenizer::{tokenize, Token, Tokenizer};
