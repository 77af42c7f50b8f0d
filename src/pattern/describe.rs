//! Classification of tokens and their English descriptions.
//!
//! Known escapes and the common bracket ranges are table lookups, so naming a
//! new construct means adding a table entry.

use std::fmt;

use phf::{Map, phf_map};
use serde::Serialize;

use super::group::GroupKind;
use super::token::{Token, TokenKind};

/// Semantic category of an explained component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Literal,
    PredefinedClass,
    CharacterClass,
    Anchor,
    Group,
    /// Only for a repetition operator with nothing before it to repeat.
    Quantifier,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::PredefinedClass => "predefined_class",
            Self::CharacterClass => "character_class",
            Self::Anchor => "anchor",
            Self::Group => "group",
            Self::Quantifier => "quantifier",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Backslash escapes with a name of their own, keyed by the escaped character.
const ESCAPES: Map<char, (ComponentKind, &'static str)> = phf_map! {
    'd' => (ComponentKind::PredefinedClass, "digit"),
    'D' => (ComponentKind::PredefinedClass, "non-digit"),
    'w' => (ComponentKind::PredefinedClass, "word character"),
    'W' => (ComponentKind::PredefinedClass, "non-word character"),
    's' => (ComponentKind::PredefinedClass, "whitespace"),
    'S' => (ComponentKind::PredefinedClass, "non-whitespace"),
    'b' => (ComponentKind::Anchor, "word boundary"),
    'B' => (ComponentKind::Anchor, "non-word boundary"),
    'n' => (ComponentKind::Literal, "newline"),
    'r' => (ComponentKind::Literal, "carriage return"),
    't' => (ComponentKind::Literal, "tab"),
};

/// Bracket bodies with a fixed phrase: `(plain, negated)`.
const RANGES: Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "a-z" => ("any lowercase letter", "any character except lowercase letters"),
    "A-Z" => ("any uppercase letter", "any character except uppercase letters"),
    "0-9" => ("any digit", "any character except digits"),
    "a-zA-Z" => ("any letter", "any character except letters"),
    "a-zA-Z0-9" => ("any alphanumeric character", "any character except alphanumeric characters"),
};

const ANY_CHARACTER: &str = "any character";
const START_OF_LINE: &str = "start of the line";
const END_OF_LINE: &str = "end of the line";

/// Classify a single token.
///
/// Group openers are described through [`describe_group`] once their content
/// is known; a lone opener is described with empty content.
pub fn describe_token(token: &Token<'_>) -> (ComponentKind, String) {
    match token.kind {
        TokenKind::Escape(ch) => describe_escape(ch),
        TokenKind::Class => (ComponentKind::CharacterClass, describe_class(token.text)),
        TokenKind::AnyChar => (ComponentKind::PredefinedClass, ANY_CHARACTER.to_string()),
        TokenKind::StartAnchor => (ComponentKind::Anchor, START_OF_LINE.to_string()),
        TokenKind::EndAnchor => (ComponentKind::Anchor, END_OF_LINE.to_string()),
        TokenKind::Quantifier(quantifier) => (ComponentKind::Quantifier, quantifier.phrase()),
        TokenKind::GroupOpen(kind) => (ComponentKind::Group, describe_group(kind, "")),
        TokenKind::GroupClose => (ComponentKind::Literal, quote(')')),
        TokenKind::SetFlags => (ComponentKind::Group, describe_flags(token.text)),
        TokenKind::Literal(ch) => (ComponentKind::Literal, quote(ch)),
    }
}

/// Describe a backslash escape; unknown escapes stand for the escaped character.
pub fn describe_escape(ch: char) -> (ComponentKind, String) {
    match ESCAPES.get(&ch) {
        Some(&(kind, name)) => (kind, name.to_string()),
        None => (ComponentKind::Literal, quote(ch)),
    }
}

/// Describe a bracket expression such as `[a-z]` or `[^abc]`.
pub fn describe_class(text: &str) -> String {
    let body = text
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(text);
    let (negated, body) = match body.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    match (RANGES.get(body), negated) {
        (Some(&(plain, _)), false) => plain.to_string(),
        (Some(&(_, except)), true) => except.to_string(),
        (None, false) => format!("any of these characters: {body}"),
        (None, true) => format!("any character except {body}"),
    }
}

/// Wrap the content of a group in a labelled parenthetical.
pub fn describe_group(kind: GroupKind, content: &str) -> String {
    format!("({}: {})", kind.label(), content)
}

/// Describe an inline flag setting such as `(?i)` or `(?x-s)`.
pub fn describe_flags(text: &str) -> String {
    let flags = text
        .strip_prefix("(?")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(text);
    format!("(set flags: {flags})")
}

fn quote(ch: char) -> String {
    format!("\"{ch}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::token::tokenize;

    fn describe(pattern: &str) -> (ComponentKind, String) {
        let tokens = tokenize(pattern);
        assert_eq!(tokens.len(), 1, "expected a single token for {pattern:?}");
        describe_token(&tokens[0])
    }

    #[test]
    fn predefined_classes() {
        assert_eq!(describe(r"\d"), (ComponentKind::PredefinedClass, "digit".into()));
        assert_eq!(describe(r"\D").1, "non-digit");
        assert_eq!(describe(r"\w").1, "word character");
        assert_eq!(describe(r"\W").1, "non-word character");
        assert_eq!(describe(r"\s").1, "whitespace");
        assert_eq!(describe(r"\S").1, "non-whitespace");
        assert_eq!(describe("."), (ComponentKind::PredefinedClass, "any character".into()));
    }

    #[test]
    fn boundaries_are_anchors() {
        assert_eq!(describe(r"\b"), (ComponentKind::Anchor, "word boundary".into()));
        assert_eq!(describe(r"\B"), (ComponentKind::Anchor, "non-word boundary".into()));
    }

    #[test]
    fn line_anchors() {
        assert_eq!(describe("^"), (ComponentKind::Anchor, "start of the line".into()));
        assert_eq!(describe("$"), (ComponentKind::Anchor, "end of the line".into()));
    }

    #[test]
    fn control_escapes() {
        assert_eq!(describe(r"\n"), (ComponentKind::Literal, "newline".into()));
        assert_eq!(describe(r"\t").1, "tab");
    }

    #[test]
    fn unknown_escape_is_quoted_literal() {
        assert_eq!(describe(r"\."), (ComponentKind::Literal, "\".\"".into()));
        assert_eq!(describe(r"\("), (ComponentKind::Literal, "\"(\"".into()));
    }

    #[test]
    fn literals_are_quoted() {
        assert_eq!(describe("@"), (ComponentKind::Literal, "\"@\"".into()));
        assert_eq!(describe("|"), (ComponentKind::Literal, "\"|\"".into()));
    }

    #[test]
    fn canonical_ranges() {
        assert_eq!(describe_class("[a-z]"), "any lowercase letter");
        assert_eq!(describe_class("[A-Z]"), "any uppercase letter");
        assert_eq!(describe_class("[0-9]"), "any digit");
        assert_eq!(describe_class("[a-zA-Z]"), "any letter");
        assert_eq!(describe_class("[a-zA-Z0-9]"), "any alphanumeric character");
    }

    #[test]
    fn negated_canonical_ranges() {
        assert_eq!(describe_class("[^a-z]"), "any character except lowercase letters");
        assert_eq!(describe_class("[^0-9]"), "any character except digits");
        assert_eq!(
            describe_class("[^a-zA-Z0-9]"),
            "any character except alphanumeric characters"
        );
    }

    #[test]
    fn custom_classes() {
        assert_eq!(describe_class("[a-zA-Z_]"), "any of these characters: a-zA-Z_");
        assert_eq!(describe_class("[^abc]"), "any character except abc");
        assert_eq!(describe(r"[\d.]"), (ComponentKind::CharacterClass, r"any of these characters: \d.".into()));
    }

    #[test]
    fn group_labels() {
        assert_eq!(
            describe_group(GroupKind::NonCapturing, "ab"),
            "(non-capturing group: ab)"
        );
        assert_eq!(
            describe_group(GroupKind::NegativeLookbehind, "x"),
            "(negative lookbehind: x)"
        );
    }

    #[test]
    fn lone_group_opener() {
        let tokens = tokenize("(?:");
        assert_eq!(
            describe_token(&tokens[0]),
            (ComponentKind::Group, "(non-capturing group: )".into())
        );
    }

    #[test]
    fn flag_settings() {
        assert_eq!(describe("(?i)"), (ComponentKind::Group, "(set flags: i)".into()));
        assert_eq!(describe_flags("(?x-s)"), "(set flags: x-s)");
    }

    #[test]
    fn named_group_label() {
        assert_eq!(
            describe_group(GroupKind::NamedCapturing, "a"),
            "(named capturing group: a)"
        );
    }

    #[test]
    fn kind_names_match_serialized_names() {
        for kind in [
            ComponentKind::Literal,
            ComponentKind::PredefinedClass,
            ComponentKind::CharacterClass,
            ComponentKind::Anchor,
            ComponentKind::Group,
            ComponentKind::Quantifier,
        ] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::from(kind.as_str())
            );
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(ComponentKind::PredefinedClass.to_string(), "predefined_class");
        assert_eq!(format!("{:<8}|", ComponentKind::Group), "group   |");
    }
}
