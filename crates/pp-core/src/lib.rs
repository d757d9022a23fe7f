pub mod config;
pub mod error;
pub mod types;

pub use config::CodecConfig;
pub use error::{PpError, Result};
pub use types::{Code, Symbol, Token, ROOT_CODE};
