//! Repetition operators and their English phrases.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    Exactly(u32),
    AtLeast(u32),
    Between(u32, u32),
}

impl Quantifier {
    /// Recognise a single-character operator (`*`, `+`, `?`).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            '?' => Some(Self::ZeroOrOne),
            _ => None,
        }
    }

    /// Parse a brace quantifier at the start of `input`.
    ///
    /// Accepts `{m}`, `{m,}`, `{,n}` and `{m,n}` with decimal bounds, which
    /// may be padded with whitespace.  Returns the quantifier and the byte
    /// length of the brace expression, or `None` if `input` does not start
    /// with a well-formed brace quantifier.
    pub fn parse_brace(input: &str) -> Option<(Self, usize)> {
        let rest = input.strip_prefix('{')?;
        let body = &rest[..rest.find('}')?];
        let quantifier = match body.split_once(',') {
            None => Self::Exactly(parse_bound(body)?),
            Some((min, max)) => match (min.trim().is_empty(), max.trim().is_empty()) {
                (false, true) => Self::AtLeast(parse_bound(min)?),
                (true, false) => Self::Between(0, parse_bound(max)?),
                (false, false) => Self::Between(parse_bound(min)?, parse_bound(max)?),
                (true, true) => return None,
            },
        };
        Some((quantifier, body.len() + 2))
    }

    /// The phrase appended to the description of the quantified atom.
    pub fn phrase(&self) -> String {
        match self {
            Self::ZeroOrMore => "zero or more times".to_string(),
            Self::OneOrMore => "one or more times".to_string(),
            Self::ZeroOrOne => "zero or one time".to_string(),
            Self::Exactly(n) => format!("exactly {n} times"),
            Self::AtLeast(n) => format!("{n} or more times"),
            Self::Between(n, m) => format!("between {n} and {m} times"),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

fn parse_bound(digits: &str) -> Option<u32> {
    let digits = digits.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
