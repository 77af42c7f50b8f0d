//! Group kinds and matching of group openers with their closing `)`.

use std::ops::Range;

use super::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    /// `(?<name>...)` or `(?P<name>...)`
    NamedCapturing,
    /// `(?:...)`, or a flag-scoped `(?i:...)`
    NonCapturing,
    PositiveLookahead,
    NegativeLookahead,
    PositiveLookbehind,
    NegativeLookbehind,
}

/// What a `(` at the start of a pattern slice opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    /// A group, with the byte length of its opening prefix.
    Group(GroupKind, usize),
    /// A complete inline flag setting such as `(?i)`, with its byte length.
    SetFlags(usize),
}

/// Fixed opening prefixes, longest first within each family.
const OPENERS: [(&str, GroupKind); 5] = [
    ("(?<=", GroupKind::PositiveLookbehind),
    ("(?<!", GroupKind::NegativeLookbehind),
    ("(?:", GroupKind::NonCapturing),
    ("(?=", GroupKind::PositiveLookahead),
    ("(?!", GroupKind::NegativeLookahead),
];

/// Classify the opening at the start of `input` (which begins with `(`).
pub fn scan_opener(input: &str) -> Opener {
    if let Some(&(prefix, kind)) = OPENERS.iter().find(|(prefix, _)| input.starts_with(prefix)) {
        return Opener::Group(kind, prefix.len());
    }
    if let Some(len) = named_opener_len(input) {
        return Opener::Group(GroupKind::NamedCapturing, len);
    }
    if let Some(rest) = input.strip_prefix("(?") {
        let flags_len = rest
            .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
            .unwrap_or(rest.len());
        if flags_len > 0 {
            match rest[flags_len..].chars().next() {
                Some(':') => return Opener::Group(GroupKind::NonCapturing, flags_len + 3),
                Some(')') => return Opener::SetFlags(flags_len + 3),
                _ => {}
            }
        }
    }
    Opener::Group(GroupKind::Capturing, 1)
}

/// Length of a `(?<name>` or `(?P<name>` prefix.
fn named_opener_len(input: &str) -> Option<usize> {
    let rest = input
        .strip_prefix("(?P<")
        .or_else(|| input.strip_prefix("(?<"))?;
    let name = &rest[..rest.find('>')?];
    let mut chars = name.chars();
    let first = chars.next()?;
    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| input.len() - rest.len() + name.len() + 1)
}

impl GroupKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Capturing => "capturing group",
            Self::NamedCapturing => "named capturing group",
            Self::NonCapturing => "non-capturing group",
            Self::PositiveLookahead => "positive lookahead",
            Self::NegativeLookahead => "negative lookahead",
            Self::PositiveLookbehind => "positive lookbehind",
            Self::NegativeLookbehind => "negative lookbehind",
        }
    }
}

/// A group opener paired with its closing token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpan {
    /// Text between the opener and the matching `)`, exclusive of both.
    pub content: String,
    /// Token indices of the content.
    pub inner: Range<usize>,
    /// Index of the first token after the group.
    pub next: usize,
    /// False if the input ran out before the group was closed.
    pub closed: bool,
}

/// Find the `)` matching the group opener at `tokens[start]`.
///
/// Nesting is tracked by counting opener and closer tokens.  An unclosed group
/// swallows the rest of the token stream.
pub fn resolve_group(tokens: &[Token<'_>], start: usize) -> GroupSpan {
    let mut depth = 1usize;
    let mut content = String::new();

    for (index, token) in tokens.iter().enumerate().skip(start + 1) {
        match token.kind {
            TokenKind::GroupOpen(_) => depth += 1,
            TokenKind::GroupClose => {
                depth -= 1;
                if depth == 0 {
                    return GroupSpan {
                        content,
                        inner: start + 1..index,
                        next: index + 1,
                        closed: true,
                    };
                }
            }
            _ => {}
        }
        content.push_str(token.text);
    }

    GroupSpan {
        content,
        inner: (start + 1).min(tokens.len())..tokens.len(),
        next: tokens.len(),
        closed: false,
    }
}
