use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Syntax error on line {line}: {kind} (`{text}`).")]
pub struct SyntaxError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line with surrounding whitespace removed.
    pub text: String,
    pub kind: SyntaxErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A line starts with `[` but does not end with `]`.
    UnterminatedSection,
    /// A section header has no name between its brackets.
    EmptySectionName,
    /// An assignment has nothing before its `=`.
    MissingKey,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedSection => f.write_str("section header is missing its closing `]`"),
            Self::EmptySectionName => f.write_str("section header has an empty name"),
            Self::MissingKey => f.write_str("assignment has no key before `=`"),
        }
    }
}
