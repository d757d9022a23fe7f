//! Decoder — lockstep dictionary replay from the token stream.

use crate::dictionary::PhraseDictionary;
use pp_core::{CodecConfig, PpError, Result, Symbol, Token};

/// Streaming LZ78 decoder.
///
/// Rebuilds the encoder's dictionary from the token stream alone: each token
/// names a known phrase, and registering `(code, next)` reproduces the exact
/// code the encoder assigned at the same point in the stream.
pub struct Lz78Decoder<S> {
    dict: PhraseDictionary<S>,
    max_phrases: Option<usize>,
    position: usize,
}

impl<S: Symbol> Lz78Decoder<S> {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            dict: PhraseDictionary::new(),
            max_phrases: config.max_phrases,
            position: 0,
        }
    }

    /// Number of phrases reconstructed so far, counting the root.
    pub fn dict_len(&self) -> usize {
        self.dict.len()
    }

    /// Consume one token, appending its symbols to `out`.
    ///
    /// A token referencing a code the dictionary does not hold yet, or
    /// re-deriving a phrase that already exists, means the stream is
    /// corrupted or reordered; that is fatal to the pass and leaves `out`
    /// untouched.
    pub fn push(&mut self, token: Token<S>, out: &mut Vec<S>) -> Result<()> {
        if !self.dict.contains(token.code) {
            return Err(PpError::MalformedStream {
                position: self.position,
                code: token.code,
                dict_len: self.dict.len(),
            });
        }
        // A lockstep encoder registers each (code, symbol) pair exactly once
        // while it has capacity, so a repeat here is corrupted input, not a
        // case for the dictionary's caller-discipline assertion.
        let register = match token.next {
            Some(symbol) if self.has_capacity() => {
                if self.dict.lookup_child(token.code, symbol).is_some() {
                    return Err(PpError::DuplicatePhrase {
                        position: self.position,
                        code: token.code,
                    });
                }
                Some(symbol)
            }
            _ => None,
        };
        self.dict.resolve_into(token.code, out);
        if let Some(symbol) = token.next {
            out.push(symbol);
        }
        if let Some(symbol) = register {
            self.dict.insert(token.code, symbol);
        }
        self.position += 1;
        Ok(())
    }

    fn has_capacity(&self) -> bool {
        self.max_phrases.map_or(true, |cap| self.dict.len() < cap)
    }
}

impl<S: Symbol> Default for Lz78Decoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a full token sequence with an unbounded dictionary.
pub fn decode<S: Symbol>(tokens: &[Token<S>]) -> Result<Vec<S>> {
    let mut decoder = Lz78Decoder::new();
    let mut out = Vec::new();
    for &token in tokens {
        decoder.push(token, &mut out)?;
    }
    Ok(out)
}
