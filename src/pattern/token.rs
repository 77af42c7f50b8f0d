//! Flat left-to-right tokenizer for regular-expression patterns.
//!
//! Every byte of the pattern belongs to exactly one token, so concatenating
//! the token texts gives back the original pattern.  Groups are not nested
//! here: an opening prefix and each `)` are separate tokens, and
//! [`resolve_group`](super::group::resolve_group) pairs them up.

use super::group::{GroupKind, Opener, scan_opener};
use super::quantifier::Quantifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Backslash followed by one character, e.g. `\d` or `\.`.
    Escape(char),
    /// Bracket expression `[...]`, including the brackets.
    Class,
    /// Group opening prefix, e.g. `(`, `(?:`, `(?<=`, `(?<name>` or `(?i:`.
    GroupOpen(GroupKind),
    GroupClose,
    /// Inline flag setting such as `(?i)`, including both parentheses.
    SetFlags,
    Quantifier(Quantifier),
    /// `.`
    AnyChar,
    /// `^`
    StartAnchor,
    /// `$`
    EndAnchor,
    Literal(char),
}

/// One syntactic unit of a pattern, borrowed from the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` within the pattern.
    pub offset: usize,
}

/// Split `pattern` into tokens.  Total: never fails and never drops input.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    Tokenizer {
        input: pattern,
        pos: 0,
    }
    .collect()
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        let ch = rest.chars().next()?;

        let (kind, len) = match ch {
            '\\' => match rest[1..].chars().next() {
                Some(escaped) => (TokenKind::Escape(escaped), 1 + escaped.len_utf8()),
                // A trailing backslash stands for itself.
                None => (TokenKind::Literal('\\'), 1),
            },
            '[' => match class_len(rest) {
                Some(len) => (TokenKind::Class, len),
                None => (TokenKind::Literal('['), 1),
            },
            '(' => match scan_opener(rest) {
                Opener::Group(group, len) => (TokenKind::GroupOpen(group), len),
                Opener::SetFlags(len) => (TokenKind::SetFlags, len),
            },
            ')' => (TokenKind::GroupClose, 1),
            '{' => match Quantifier::parse_brace(rest) {
                Some((quantifier, len)) => (TokenKind::Quantifier(quantifier), len),
                None => (TokenKind::Literal('{'), 1),
            },
            '.' => (TokenKind::AnyChar, 1),
            '^' => (TokenKind::StartAnchor, 1),
            '$' => (TokenKind::EndAnchor, 1),
            c => match Quantifier::from_char(c) {
                Some(quantifier) => (TokenKind::Quantifier(quantifier), 1),
                None => (TokenKind::Literal(c), c.len_utf8()),
            },
        };

        let token = Token {
            kind,
            text: &rest[..len],
            offset: self.pos,
        };
        self.pos += len;
        Some(token)
    }
}

/// Byte length of the bracket expression at the start of `input`, or `None`
/// if it is never closed.
///
/// Follows the regex engine's class syntax: a `]` straight after `[` or `[^`
/// is literal, escapes are skipped, and nested `[...]` classes are balanced.
fn class_len(input: &str) -> Option<usize> {
    let mut pos = 1;
    if input[pos..].starts_with('^') {
        pos += 1;
    }
    if input[pos..].starts_with(']') {
        pos += 1;
    }
    while let Some(ch) = input[pos..].chars().next() {
        match ch {
            '\\' => pos += 1 + input[pos + 1..].chars().next().map_or(0, char::len_utf8),
            '[' => pos += class_len(&input[pos..])?,
            ']' => return Some(pos + 1),
            c => pos += c.len_utf8(),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pattern: &str) -> Vec<&str> {
        tokenize(pattern).iter().map(|t| t.text).collect()
    }

    fn kinds(pattern: &str) -> Vec<TokenKind> {
        tokenize(pattern).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_pattern_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn predefined_escapes() {
        assert_eq!(texts(r"\d\W\s\b"), vec![r"\d", r"\W", r"\s", r"\b"]);
        assert_eq!(
            kinds(r"\d\."),
            vec![TokenKind::Escape('d'), TokenKind::Escape('.')]
        );
    }

    #[test]
    fn trailing_backslash_is_literal() {
        assert_eq!(kinds("a\\"), vec![TokenKind::Literal('a'), TokenKind::Literal('\\')]);
    }

    #[test]
    fn bracket_class_is_one_token() {
        assert_eq!(texts("[a-zA-Z_]+"), vec!["[a-zA-Z_]", "+"]);
        assert_eq!(texts("[^abc]"), vec!["[^abc]"]);
    }

    #[test]
    fn escaped_bracket_does_not_close_class() {
        assert_eq!(texts(r"[\]a]b"), vec![r"[\]a]", "b"]);
    }

    #[test]
    fn leading_bracket_is_class_member() {
        assert_eq!(texts("[]a]b"), vec!["[]a]", "b"]);
        assert_eq!(texts("[^](]"), vec!["[^](]"]);
    }

    #[test]
    fn nested_classes_are_balanced() {
        assert_eq!(texts("[[:alpha:]]x"), vec!["[[:alpha:]]", "x"]);
        assert_eq!(texts("[a[(]]"), vec!["[a[(]]"]);
    }

    #[test]
    fn unclosed_bracket_is_literal() {
        assert_eq!(kinds("[a")[0], TokenKind::Literal('['));
        assert_eq!(texts("[a"), vec!["[", "a"]);
        assert_eq!(texts("[a[b]")[0], "[");
    }

    #[test]
    fn group_openers() {
        assert_eq!(texts("(?:a)"), vec!["(?:", "a", ")"]);
        assert_eq!(texts("(?<=a)"), vec!["(?<=", "a", ")"]);
        assert_eq!(texts("(?<!a)"), vec!["(?<!", "a", ")"]);
        assert_eq!(
            kinds("(?=a)"),
            vec![
                TokenKind::GroupOpen(GroupKind::PositiveLookahead),
                TokenKind::Literal('a'),
                TokenKind::GroupClose,
            ]
        );
    }

    #[test]
    fn named_and_flag_openers_are_one_token() {
        assert_eq!(texts("(?<name>a)"), vec!["(?<name>", "a", ")"]);
        assert_eq!(texts("(?P<n>a)"), vec!["(?P<n>", "a", ")"]);
        assert_eq!(
            kinds("(?i:ab)")[0],
            TokenKind::GroupOpen(GroupKind::NonCapturing)
        );
    }

    #[test]
    fn flag_setting_is_one_token() {
        assert_eq!(texts("(?i)a"), vec!["(?i)", "a"]);
        assert_eq!(kinds("(?i)a")[0], TokenKind::SetFlags);
    }

    #[test]
    fn brace_quantifiers() {
        assert_eq!(texts("a{2,3}"), vec!["a", "{2,3}"]);
        assert_eq!(
            kinds("a{8,}"),
            vec![
                TokenKind::Literal('a'),
                TokenKind::Quantifier(Quantifier::AtLeast(8)),
            ]
        );
    }

    #[test]
    fn malformed_brace_is_literal() {
        assert_eq!(texts("a{x}"), vec!["a", "{", "x", "}"]);
    }

    #[test]
    fn special_characters() {
        assert_eq!(
            kinds("^.*$"),
            vec![
                TokenKind::StartAnchor,
                TokenKind::AnyChar,
                TokenKind::Quantifier(Quantifier::ZeroOrMore),
                TokenKind::EndAnchor,
            ]
        );
    }

    #[test]
    fn offsets_follow_multibyte_characters() {
        let tokens = tokenize("é\\ßx");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[1].kind, TokenKind::Escape('ß'));
        assert_eq!(tokens[2].offset, 5);
    }

    #[test]
    fn tokens_reconstruct_pattern() {
        let pattern = r"^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{8,}$";
        assert_eq!(texts(pattern).concat(), pattern);
    }
}
