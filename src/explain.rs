//! Turn a pattern into ordered, described components.

use itertools::Itertools;
use serde::Serialize;

use crate::pattern::describe::{describe_group, describe_token};
use crate::pattern::{
    ComponentKind, ExplainError, Quantifier, Token, TokenKind, resolve_group, tokenize, validate,
};

/// Joins component descriptions in [`ParsedPattern::full_description`].
pub const CONNECTIVE: &str = " followed by ";

const LAZY_SUFFIX: &str = " (lazy)";

/// One explained unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub kind: ComponentKind,
    /// Pattern text covered by this component, including a folded quantifier.
    pub raw_value: String,
    pub description: String,
    /// For groups, the explained group content.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
    /// Set on a group whose closing `)` was never found.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unterminated: bool,
}

/// The explanation of a whole pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPattern {
    pub components: Vec<Component>,
    pub full_description: String,
}

/// Explain `pattern` in English.
///
/// Fails without a partial result if the pattern is empty, longer than
/// [`MAX_PATTERN_LEN`](crate::MAX_PATTERN_LEN) characters, or not a valid
/// regular expression.
pub fn explain(pattern: &str) -> Result<ParsedPattern, ExplainError> {
    validate(pattern)?;
    let tokens = tokenize(pattern);
    let components = explain_tokens(&tokens);
    let full_description = components
        .iter()
        .map(|c| c.description.as_str())
        .join(CONNECTIVE)
        .trim()
        .to_string();
    Ok(ParsedPattern {
        components,
        full_description,
    })
}

/// Describe a token run, resolving groups and folding quantifiers.
fn explain_tokens(tokens: &[Token<'_>]) -> Vec<Component> {
    let mut components = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let (mut component, next) = match tokens[index].kind {
            TokenKind::GroupOpen(kind) => {
                let span = resolve_group(tokens, index);
                let component = Component {
                    kind: ComponentKind::Group,
                    raw_value: String::new(),
                    description: describe_group(kind, &span.content),
                    children: explain_tokens(&tokens[span.inner.clone()]),
                    unterminated: !span.closed,
                };
                (component, span.next)
            }
            _ => {
                let (kind, description) = describe_token(&tokens[index]);
                let component = Component {
                    kind,
                    raw_value: String::new(),
                    description,
                    children: Vec::new(),
                    unterminated: false,
                };
                (component, index + 1)
            }
        };

        let next = bind_quantifier(&mut component, tokens, next);
        component.raw_value = tokens[index..next].iter().map(|t| t.text).collect();
        components.push(component);
        index = next;
    }

    components
}

/// Fold the quantifiers starting at `tokens[next]` into `component`, each
/// with an optional lazy `?`.  Returns the index of the first token not
/// consumed.
fn bind_quantifier(component: &mut Component, tokens: &[Token<'_>], mut next: usize) -> usize {
    if component.kind == ComponentKind::Quantifier {
        return next;
    }
    while let Some(TokenKind::Quantifier(quantifier)) = tokens.get(next).map(|t| t.kind) {
        component.description.push(' ');
        component.description.push_str(&quantifier.phrase());
        next += 1;
        if tokens.get(next).is_some_and(is_lazy_marker) {
            component.description.push_str(LAZY_SUFFIX);
            next += 1;
        }
    }
    next
}

fn is_lazy_marker(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Quantifier(Quantifier::ZeroOrOne) && token.text == "?"
}
