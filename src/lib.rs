//! Explain regular expressions in plain English.
//!
//! A pattern is split into components (literals, character classes, anchors,
//! groups), each with a description.  Quantifiers are folded into the
//! component they repeat, and the descriptions are joined into one sentence.
//!
//! # Example
//!
//! ```rust
//! use rexplain::{ComponentKind, explain};
//!
//! let parsed = explain(r"^\d+[a-z]$").unwrap();
//!
//! assert_eq!(parsed.components.len(), 4);
//! assert_eq!(parsed.components[1].kind, ComponentKind::PredefinedClass);
//! assert_eq!(
//!     parsed.full_description,
//!     "start of the line followed by digit one or more times \
//!      followed by any lowercase letter followed by end of the line"
//! );
//! ```

mod explain;
pub mod pattern;
pub mod samples;

pub use explain::{CONNECTIVE, Component, ParsedPattern, explain};
pub use pattern::{
    ComponentKind, ExplainError, GroupKind, GroupSpan, MAX_PATTERN_LEN, Quantifier, Token,
    TokenKind, resolve_group, tokenize, validate,
};
pub use samples::{SAMPLES, Sample};
