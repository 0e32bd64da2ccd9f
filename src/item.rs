use crate::parse::SyntaxError;

/// One classified line of INI text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'a> {
    Error(SyntaxError),
    Section(&'a str),
    Property(Prop<'a>),
    Comment(&'a str),
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prop<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> From<(&'a str, &'a str)> for Prop<'a> {
    fn from(pair: (&'a str, &'a str)) -> Self {
        Self {
            key: pair.0,
            value: pair.1,
        }
    }
}
