//! PhrasePack codec — incremental LZ78 phrase-dictionary compression.
//!
//! The encoder scans the input once, greedily matching the longest phrase the
//! dictionary already knows and emitting one `(code, next_symbol)` token per
//! newly discovered phrase. The decoder replays the same registrations in
//! lockstep from the token stream alone, so the two sides never share state.
//!
//! Tokens are abstract values; framing them into a concrete byte layout is
//! left to the caller (the serde derives on [`Token`] are the seam).

pub mod codec;
pub mod decoder;
pub mod dictionary;
pub mod encoder;

pub use codec::{EncodeSummary, Lz78Codec};
pub use decoder::{decode, Lz78Decoder};
pub use dictionary::PhraseDictionary;
pub use encoder::{encode, Lz78Encoder};
pub use pp_core::{Code, CodecConfig, PpError, Result, Symbol, Token, ROOT_CODE};
