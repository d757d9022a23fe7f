//! Phrase dictionary — prefix-closed forest of learned phrases.

use pp_core::{Code, Symbol, ROOT_CODE};
use std::collections::HashMap;

/// Append-only dictionary of phrases.
///
/// Every phrase except the empty root is stored as `(parent_code, symbol)`,
/// i.e. "the parent phrase followed by one more symbol". Codes are dense and
/// assigned in insertion order, with the root holding code 0. A reverse index
/// keyed by `(parent, symbol)` gives O(1) child lookups.
pub struct PhraseDictionary<S> {
    /// `entries[i]` defines code `i + 1`; the root has no entry.
    entries: Vec<(Code, S)>,
    children: HashMap<(Code, S), Code>,
}

impl<S: Symbol> PhraseDictionary<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            children: HashMap::new(),
        }
    }

    /// Number of phrases, counting the root.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Whether `code` names a phrase already in the dictionary.
    pub fn contains(&self, code: Code) -> bool {
        (code as usize) < self.len()
    }

    /// Code of the phrase extending `parent` with `symbol`, if one exists.
    pub fn lookup_child(&self, parent: Code, symbol: S) -> Option<Code> {
        self.children.get(&(parent, symbol)).copied()
    }

    /// Register the phrase extending `parent` with `symbol` and return its
    /// code. The parent must already exist and the pair must be new; both
    /// hold for any caller following the LZ78 scan discipline.
    pub fn insert(&mut self, parent: Code, symbol: S) -> Code {
        debug_assert!(self.contains(parent), "insert under unknown parent");
        let code = self.len() as Code;
        let prev = self.children.insert((parent, symbol), code);
        debug_assert!(prev.is_none(), "duplicate phrase insertion");
        self.entries.push((parent, symbol));
        code
    }

    /// Append the full symbol sequence of `code` to `out`, front to back.
    /// The root resolves to the empty sequence. Caller must have checked
    /// `contains(code)`.
    pub fn resolve_into(&self, code: Code, out: &mut Vec<S>) {
        let start = out.len();
        let mut cursor = code;
        while cursor != ROOT_CODE {
            let (parent, symbol) = self.entries[cursor as usize - 1];
            out.push(symbol);
            cursor = parent;
        }
        out[start..].reverse();
    }
}

impl<S: Symbol> Default for PhraseDictionary<S> {
    fn default() -> Self {
        Self::new()
    }
}
