// src/tags.rs
//
// Tag classification: void, inline, or block. Names not listed are block.

/* =============================== Core sets =============================== */

/// Elements that never have content or a close tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Phrasing elements that flow inside a line of text.
const INLINE: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "del", "dfn", "em", "i", "ins", "kbd",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Layout class of a tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// Never a container; never changes indentation.
    Void,
    /// Stays glued to the surrounding line.
    Inline,
    /// Starts its own line and indents its children.
    Block,
}

/// Classify a tag name. Void takes precedence over inline; anything unknown is block.
pub fn classify(name: &str) -> TagKind {
    if matches_ignore_ascii_case(name, VOID) {
        TagKind::Void
    } else if matches_ignore_ascii_case(name, INLINE) {
        TagKind::Inline
    } else {
        TagKind::Block
    }
}

fn matches_ignore_ascii_case(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| name.eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements() {
        for name in ["br", "hr", "img", "input", "meta", "wbr"] {
            assert_eq!(classify(name), TagKind::Void, "{name}");
        }
    }

    #[test]
    fn inline_elements() {
        for name in ["a", "b", "strong", "em", "span", "code", "sup", "sub", "u"] {
            assert_eq!(classify(name), TagKind::Inline, "{name}");
        }
    }

    #[test]
    fn unknown_and_structural_names_are_block() {
        for name in ["p", "div", "h1", "ul", "li", "blockquote", "pre", "my", ""] {
            assert_eq!(classify(name), TagKind::Block, "{name:?}");
        }
    }

    #[test]
    fn void_wins_over_inline() {
        assert_eq!(classify("br"), TagKind::Void);
        assert_eq!(classify("img"), TagKind::Void);
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(classify("BR"), TagKind::Void);
        assert_eq!(classify("Strong"), TagKind::Inline);
    }
}
