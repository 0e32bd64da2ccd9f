use memchr::{memchr, memchr2};

/// One line of INI text with surrounding whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    /// Offset of the first `=` in `text`.
    pub eq: Option<usize>,
}

/// Splits the first line off `s`, returning it along with everything after its
/// terminator. Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn split_line(s: &str) -> Option<(Line<'_>, &str)> {
    if s.is_empty() { return None }

    let (raw, rest) = match memchr2(b'\r', b'\n', s.as_bytes()) {
        Some(i) if s[i..].starts_with("\r\n") => (&s[..i], &s[i + 2..]),
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    };

    let text = raw.trim();
    let eq = memchr(b'=', text.as_bytes());

    Some((Line { text, eq }, rest))
}
