use crate::types::Code;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PpError {
    #[error("malformed token stream: token {position} references code {code}, dictionary has {dict_len} phrases")]
    MalformedStream {
        position: usize,
        code: Code,
        dict_len: usize,
    },
    #[error("malformed token stream: token {position} re-derives the phrase ({code}, next) already in the dictionary")]
    DuplicatePhrase { position: usize, code: Code },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PpError>;
