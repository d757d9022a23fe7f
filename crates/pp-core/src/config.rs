use serde::{Deserialize, Serialize};

/// Codec configuration shared by the encode and decode sides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum number of phrases the dictionary may hold, counting the root.
    /// `None` means unbounded. Once the limit is reached the dictionary
    /// freezes: matching continues, no new phrases are registered. Both
    /// sides of a round trip must use the same value.
    pub max_phrases: Option<usize>,
}

impl CodecConfig {
    pub fn capped(max_phrases: usize) -> Self {
        Self {
            max_phrases: Some(max_phrases),
        }
    }
}
