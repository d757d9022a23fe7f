//! Codec front — configured encode/decode passes with statistics.

use crate::decoder::Lz78Decoder;
use crate::encoder::Lz78Encoder;
use pp_core::{CodecConfig, Result, Symbol, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one encode pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeSummary<S> {
    pub tokens: Vec<Token<S>>,
    pub input_len: usize,
    pub token_count: usize,
    /// Final dictionary size, counting the root.
    pub dict_len: usize,
}

impl<S> EncodeSummary<S> {
    /// Tokens emitted per input symbol. Below 1.0 whenever any phrase
    /// repeated; 1.0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 1.0;
        }
        self.token_count as f64 / self.input_len as f64
    }
}

/// An LZ78 codec with a fixed configuration for both directions.
pub struct Lz78Codec {
    pub config: CodecConfig,
}

impl Lz78Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn unbounded() -> Self {
        Self::new(CodecConfig::default())
    }

    /// Codec whose dictionary freezes at `max_phrases` entries (root
    /// included). Decoding requires the same limit.
    pub fn capped(max_phrases: usize) -> Self {
        Self::new(CodecConfig::capped(max_phrases))
    }

    /// Encode a symbol sequence. Cannot fail.
    pub fn compress<S: Symbol>(&self, input: &[S]) -> EncodeSummary<S> {
        let mut encoder = Lz78Encoder::with_config(&self.config);
        let mut tokens = Vec::new();
        for &symbol in input {
            if let Some(token) = encoder.push(symbol) {
                tokens.push(token);
            }
        }
        let dict_len = encoder.dict_len();
        if let Some(token) = encoder.finish() {
            tokens.push(token);
        }

        let summary = EncodeSummary {
            input_len: input.len(),
            token_count: tokens.len(),
            dict_len,
            tokens,
        };
        debug!(
            input_len = summary.input_len,
            tokens = summary.token_count,
            dict = summary.dict_len,
            "encode pass complete"
        );
        summary
    }

    /// Decode a token sequence back into symbols.
    pub fn decompress<S: Symbol>(&self, tokens: &[Token<S>]) -> Result<Vec<S>> {
        let mut decoder = Lz78Decoder::with_config(&self.config);
        let mut out = Vec::new();
        for &token in tokens {
            decoder.push(token, &mut out)?;
        }
        debug!(
            tokens = tokens.len(),
            output_len = out.len(),
            dict = decoder.dict_len(),
            "decode pass complete"
        );
        Ok(out)
    }
}

impl Default for Lz78Codec {
    fn default() -> Self {
        Self::unbounded()
    }
}
