//! Pattern explanation pipeline.
//!
//! A pattern is validated, split into tokens, and each token (or resolved
//! group) is described.  A trailing quantifier is folded into the description
//! of the atom before it, as are any quantifiers stacked after it.
//!
//! # Recognised syntax
//!
//! | Token                 | Description                                    |
//! |-----------------------|------------------------------------------------|
//! | `\d` `\D`             | digit / non-digit                              |
//! | `\w` `\W`             | word character / non-word character            |
//! | `\s` `\S`             | whitespace / non-whitespace                    |
//! | `\b` `\B`             | word boundary / non-word boundary              |
//! | `\n` `\r` `\t`        | newline / carriage return / tab                |
//! | `\X`                  | the character `X`                              |
//! | `.`                   | any character                                  |
//! | `[...]` `[^...]`      | character class, optionally negated            |
//! | `(...)`               | capturing group                                |
//! | `(?<name>...)`        | named capturing group (also `(?P<name>...)`)   |
//! | `(?:...)` `(?i:...)`  | non-capturing group                            |
//! | `(?i)`                | inline flag setting                            |
//! | `(?=...)` `(?!...)`   | positive / negative lookahead                  |
//! | `(?<=...)` `(?<!...)` | positive / negative lookbehind                 |
//! | `*` `+` `?`           | zero or more / one or more / zero or one       |
//! | `{n}` `{n,}` `{n,m}`  | exactly n / n or more / between n and m        |
//! | `{,m}`                | between 0 and m                                |
//! | `^` `$`               | start / end of the line                        |
//!
//! Anything else is a literal character.

pub mod describe;
pub mod group;
pub mod quantifier;
pub mod token;
pub mod validate;

pub use describe::ComponentKind;
pub use group::{GroupKind, GroupSpan, Opener, resolve_group, scan_opener};
pub use quantifier::Quantifier;
pub use token::{Token, TokenKind, tokenize};
pub use validate::{ExplainError, MAX_PATTERN_LEN, validate};
