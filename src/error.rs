//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// Error types

use thiserror::Error;

/// Errors raised while parsing a configuration or composing a password.
#[derive(Debug, Error)]
pub enum Error {
    /// An enum-valued configuration field held an unrecognized token, or a
    /// multi-character string stood where a single character is required.
    #[error("unknown {field} value: {value:?}")]
    UnknownEnumValue {
        field: &'static str,
        value: String,
    },

    /// `word_length_min` exceeds `word_length_max`, so no dictionary word
    /// could ever be accepted.
    #[error("word_length_min ({min}) exceeds word_length_max ({max})")]
    InvalidWordLength { min: usize, max: usize },

    /// An active separator or padding mode needs a non-empty alphabet.
    #[error("{0} must not be empty")]
    InvalidAlphabet(&'static str),

    /// The word-selection attempt cap was reached without drawing a word
    /// inside the configured length bounds.
    #[error("no dictionary word matched the length bounds after {0} attempts")]
    WordSelectionExhausted(u32),

    /// Configuration JSON could not be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
