mod error;
pub use error::{SyntaxError, SyntaxErrorKind};

mod line;
use line::{Line, split_line};

use crate::item::Item;

/// Splits INI text into [`Item`]s, one per line.
///
/// The parser never stops early: malformed lines come out as [`Item::Error`] and
/// parsing resumes on the next line. [`crate::Dict::parse`] is what makes the
/// first error fatal.
pub struct Parser<'a> {
    remainder: &'a str,
    line_number: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            remainder: source,
            line_number: 0,
        }
    }

    fn error(&self, text: &str, kind: SyntaxErrorKind) -> Item<'a> {
        Item::Error(SyntaxError {
            line: self.line_number,
            text: text.to_owned(),
            kind,
        })
    }

    fn classify(&self, Line { text, eq }: Line<'a>) -> Item<'a> {
        match text.chars().next() {
            Some('[') => match text[1..].strip_suffix(']') {
                Some(inner) => match inner.trim() {
                    "" => self.error(text, SyntaxErrorKind::EmptySectionName),
                    name => Item::Section(name),
                },
                None => self.error(text, SyntaxErrorKind::UnterminatedSection),
            },
            Some(';' | '#') => Item::Comment(&text[1..]),
            Some(_) => match eq {
                Some(eq) => match text[..eq].trim_end() {
                    "" => self.error(text, SyntaxErrorKind::MissingKey),
                    key => Item::Property((key, text[eq + 1..].trim_start()).into()),
                },
                None => Item::Property((text, "").into()),
            },
            None => Item::Blank,
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, rest) = split_line(self.remainder)?;
        self.line_number += 1;
        self.remainder = rest;
        Some(self.classify(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, Prop};

    macro_rules! prop {
        ( $key:literal => $value:literal ) => {
            Item::Property(Prop {
                key: $key,
                value: $value,
            })
        };
    }

    fn error(line: usize, text: &str, kind: SyntaxErrorKind) -> Item<'static> {
        Item::Error(SyntaxError {
            line,
            text: text.to_owned(),
            kind,
        })
    }

    #[test]
    fn parser_works() {
        let text = "\
;Hello
top = level
[pizza]
ham = yes
# no onions
onions=no

[wine]
grape = Cabernet Sauvignon";
        let items: Vec<_> = Parser::new(text).collect();

        assert_eq!(&items, &[
            Item::Comment("Hello"),
            prop!["top" => "level"],
            Item::Section("pizza"),
            prop!["ham" => "yes"],
            Item::Comment(" no onions"),
            prop!["onions" => "no"],
            Item::Blank,
            Item::Section("wine"),
            prop!["grape" => "Cabernet Sauvignon"],
        ]);
    }

    #[test]
    fn parser_recognizes_errors() {
        let text = "\
[pizza] invalid
[wine
[]
[   ]
= value
ham";
        let items: Vec<_> = Parser::new(text).collect();

        assert_eq!(&items, &[
            error(1, "[pizza] invalid", SyntaxErrorKind::UnterminatedSection),
            error(2, "[wine", SyntaxErrorKind::UnterminatedSection),
            error(3, "[]", SyntaxErrorKind::EmptySectionName),
            error(4, "[   ]", SyntaxErrorKind::EmptySectionName),
            error(5, "= value", SyntaxErrorKind::MissingKey),
            prop!["ham" => ""],
        ]);
    }

    #[test]
    fn parser_handles_whitespace_correctly() {
        let text = "  ;  cheap wines  
  [ wine ]
  grape=Merlot
country  =Chile
\t   
[pizza]  
ham=  yes
onions=no  \t
  cheese  =  No  ";
        let items: Vec<_> = Parser::new(text).collect();

        assert_eq!(&items, &[
            Item::Comment("  cheap wines"),
            Item::Section("wine"),
            prop!["grape" => "Merlot"],
            prop!["country" => "Chile"],
            Item::Blank,
            Item::Section("pizza"),
            prop!["ham" => "yes"],
            prop!["onions" => "no"],
            prop!["cheese" => "No"],
        ]);
    }

    #[test]
    fn parser_trims_unicode_whitespace_around_keys_and_values() {
        let text = "[\u{3000}pizza\u{a0}]\n\u{3000}ham\u{a0}=\u{a0}yes\u{3000}\n\u{a0}nuch\u{2003}\n";
        let items: Vec<_> = Parser::new(text).collect();

        assert_eq!(&items, &[
            Item::Section("pizza"),
            prop!["ham" => "yes"],
            prop!["nuch" => ""],
        ]);
    }

    #[test]
    fn parser_rejects_header_with_only_unicode_whitespace() {
        let items: Vec<_> = Parser::new("[\u{3000}\u{a0}]").collect();

        assert_eq!(&items, &[
            error(1, "[\u{3000}\u{a0}]", SyntaxErrorKind::EmptySectionName),
        ]);
    }

    #[test]
    fn parser_handles_newlines_correctly() {
        let text = "\
;wine list\r\
[wine]\n\
grape=Cabernet Sauvignon\r\n\
year=1989\r     \n\
[pizza]\r\n\
ham=yes\r\
cheese=No\r\n\
";
        let items: Vec<_> = Parser::new(text).collect();

        assert_eq!(&items, &[
            Item::Comment("wine list"),
            Item::Section("wine"),
            prop!["grape" => "Cabernet Sauvignon"],
            prop!["year" => "1989"],
            Item::Blank,
            Item::Section("pizza"),
            prop!["ham" => "yes"],
            prop!["cheese" => "No"],
        ]);
    }

    #[test]
    fn parser_splits_on_first_equal_sign_only() {
        let items: Vec<_> = Parser::new("url = a=b;c\nempty =\n").collect();

        assert_eq!(&items, &[
            prop!["url" => "a=b;c"],
            prop!["empty" => ""],
        ]);
    }

    #[test]
    fn parser_counts_lines_across_blank_lines() {
        let items: Vec<_> = Parser::new("a = 1\n\n\n[oops\n").collect();

        assert_eq!(items.last(), Some(&error(4, "[oops", SyntaxErrorKind::UnterminatedSection)));
    }
}
