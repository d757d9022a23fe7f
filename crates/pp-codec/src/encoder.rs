//! Encoder — greedy longest-match LZ78 scan.

use crate::dictionary::PhraseDictionary;
use pp_core::{Code, CodecConfig, Symbol, Token, ROOT_CODE};

/// Streaming LZ78 encoder.
///
/// Feed symbols with [`push`](Self::push); each call returns at most one
/// token. Call [`finish`](Self::finish) after the last symbol to flush a
/// match still in progress.
pub struct Lz78Encoder<S> {
    dict: PhraseDictionary<S>,
    current: Code,
    max_phrases: Option<usize>,
}

impl<S: Symbol> Lz78Encoder<S> {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            dict: PhraseDictionary::new(),
            current: ROOT_CODE,
            max_phrases: config.max_phrases,
        }
    }

    /// Number of phrases registered so far, counting the root.
    pub fn dict_len(&self) -> usize {
        self.dict.len()
    }

    /// Consume one input symbol. Returns a token when the symbol ends the
    /// current match, `None` while the match is still extending.
    pub fn push(&mut self, symbol: S) -> Option<Token<S>> {
        if let Some(child) = self.dict.lookup_child(self.current, symbol) {
            self.current = child;
            return None;
        }
        let token = Token::new(self.current, symbol);
        if self.has_capacity() {
            self.dict.insert(self.current, symbol);
        }
        self.current = ROOT_CODE;
        Some(token)
    }

    /// Flush the in-progress match, if any. The input ending inside a known
    /// phrase yields a pure-reference token; dropping it would lose the
    /// phrase's symbols on decode.
    pub fn finish(self) -> Option<Token<S>> {
        if self.current != ROOT_CODE {
            Some(Token::partial(self.current))
        } else {
            None
        }
    }

    fn has_capacity(&self) -> bool {
        self.max_phrases.map_or(true, |cap| self.dict.len() < cap)
    }
}

impl<S: Symbol> Default for Lz78Encoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full symbol sequence with an unbounded dictionary.
///
/// Never fails: any finite symbol sequence is valid input.
pub fn encode<S: Symbol>(input: &[S]) -> Vec<Token<S>> {
    let mut encoder = Lz78Encoder::new();
    let mut tokens = Vec::new();
    for &symbol in input {
        if let Some(token) = encoder.push(symbol) {
            tokens.push(token);
        }
    }
    if let Some(token) = encoder.finish() {
        tokens.push(token);
    }
    tokens
}
