use regex::Regex;
use std::sync::LazyLock;

/// A lexical token recognized in drawing text.
///
/// Everything that is neither shape is noise and never becomes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Component code such as "1TD2aX-3": piece-type digit 1 or 2,
    /// 1-3 uppercase letters for the structural type, then an optional
    /// alphanumeric/hyphen tail.
    Code(&'a str),
    /// Bracketed level list such as "(2, 4-6)".
    Levels(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Code(s) | Token::Levels(s) => s,
        }
    }
}

// Both shapes scanned in one pass so that document order is preserved.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b[12][A-Z]{1,3}[A-Za-z0-9-]*\b
        |
        \(\s*\d+(?:\s*-\s*\d+)?(?:\s*,\s*\d+(?:\s*-\s*\d+)?)*\s*\)
        ",
    )
    .expect("token pattern is valid")
});

/// Scan text for component-code and level-list tokens, in document
/// order. Lazy and restartable; unmatched text is skipped silently.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    TOKEN_RE.find_iter(text).map(|m| {
        // The two shapes start with disjoint characters: '(' vs a digit.
        if m.as_str().starts_with('(') {
            Token::Levels(m.as_str())
        } else {
            Token::Code(m.as_str())
        }
    })
}
