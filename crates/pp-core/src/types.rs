use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Phrase identifier, assigned densely in insertion order.
pub type Code = u32;

/// Code of the empty root phrase, present before any input is processed.
pub const ROOT_CODE: Code = 0;

/// Marker for types usable as codec symbols. Blanket-implemented, so both
/// `u8` and `char` inputs work out of the box.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// One unit of encoder output: the longest already-known phrase plus the
/// symbol that ended the match.
///
/// `next` is `None` only for the trailing token emitted when the input ends
/// while still inside a known phrase; such a token emits its phrase on
/// decode without registering a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token<S> {
    pub code: Code,
    pub next: Option<S>,
}

impl<S> Token<S> {
    pub fn new(code: Code, next: S) -> Self {
        Self {
            code,
            next: Some(next),
        }
    }

    /// A pure-reference token with no extension symbol.
    pub fn partial(code: Code) -> Self {
        Self { code, next: None }
    }
}
