//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// Configuration model

use serde::Deserialize;

use crate::{Error, Result};

/// Casing policy applied to every selected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// `case` - all lowercase (`none` and `lower` both map here).
    Lower,
    /// `CaSe` - even character index uppercase, odd lowercase.
    Alternate,
    /// `CASE` - the whole word uppercase, matching the observed behavior
    /// of the `capitalise` token rather than first-letter-only.
    Capitalise,
    /// `cASE` - first character lowercase, the rest uppercase.
    Invert,
    /// `CASE` - all uppercase.
    Upper,
    /// `cASe` - one fair coin flip per character.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorMode {
    None,
    Random,
    Character,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingType {
    None,
    Fixed,
    Adaptive,
}

/// How the padding symbol is chosen when padding is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// Draw from `symbol_alphabet`.
    Random,
    /// Reuse the separator drawn for this password.
    Separator,
    /// Use the single configured character.
    Specified,
}

/// Loosely-typed configuration record as it appears on disk. Missing fields
/// take their zero values, like the original JSON decoding did.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub num_words: usize,
    pub word_length_min: usize,
    pub word_length_max: usize,
    pub case_transform: String,
    pub separator_character: String,
    pub separator_alphabet: Vec<String>,
    pub padding_digits_before: usize,
    pub padding_digits_after: usize,
    pub padding_type: String,
    pub padding_character: String,
    pub symbol_alphabet: Vec<String>,
    pub padding_characters_before: usize,
    pub padding_characters_after: usize,
    pub pad_to_length: usize,
}

/// Validated generation rules. Built once, never mutated; the composer
/// borrows it read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub word_dictionary: Vec<String>,
    pub num_words: usize,
    pub word_length_min: usize,
    pub word_length_max: usize,
    pub case_transform: CaseTransform,
    pub separator_mode: SeparatorMode,
    pub separator_alphabet: Vec<char>,
    pub padding_digits_before: usize,
    pub padding_digits_after: usize,
    pub padding_type: PaddingType,
    pub padding_mode: PaddingMode,
    pub symbol_alphabet: Vec<char>,
    pub padding_characters_before: usize,
    pub padding_characters_after: usize,
    pub pad_to_length: usize,
    /// Optional cap on rejected word draws before `select_word` gives up
    /// with `WordSelectionExhausted`. Not part of the file format; unset
    /// means the selection loop runs unbounded.
    pub word_attempts: Option<u32>,
}

fn single_char(field: &'static str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::UnknownEnumValue {
            field,
            value: value.to_string(),
        }),
    }
}

fn char_alphabet(field: &'static str, entries: &[String]) -> Result<Vec<char>> {
    entries.iter().map(|entry| single_char(field, entry)).collect()
}

impl Config {
    /// Validates and normalizes a raw record into a typed configuration.
    ///
    /// Enum tokens are matched case-insensitively. A literal single
    /// character given for `separator_character` or `padding_character`
    /// replaces the corresponding alphabet with a one-element alphabet.
    /// The lowering applied for token matching also reaches such literals,
    /// so `"Z"` is stored as separator `'z'`.
    pub fn from_raw(raw: RawConfig, word_dictionary: Vec<String>) -> Result<Self> {
        if raw.word_length_min > raw.word_length_max {
            return Err(Error::InvalidWordLength {
                min: raw.word_length_min,
                max: raw.word_length_max,
            });
        }

        let case_transform = match raw.case_transform.to_lowercase().as_str() {
            "none" | "lower" => CaseTransform::Lower,
            "alternate" => CaseTransform::Alternate,
            "capitalise" => CaseTransform::Capitalise,
            "invert" => CaseTransform::Invert,
            "upper" => CaseTransform::Upper,
            "random" => CaseTransform::Random,
            _ => {
                return Err(Error::UnknownEnumValue {
                    field: "case_transform",
                    value: raw.case_transform,
                });
            }
        };

        let mut separator_alphabet =
            char_alphabet("separator_alphabet", &raw.separator_alphabet)?;
        let separator_token = raw.separator_character.to_lowercase();
        let separator_mode = match separator_token.as_str() {
            "none" => SeparatorMode::None,
            "random" => SeparatorMode::Random,
            _ => {
                // A literal separator overrides any supplied alphabet.
                separator_alphabet =
                    vec![single_char("separator_character", &separator_token)?];
                SeparatorMode::Character
            }
        };

        let padding_type = match raw.padding_type.to_lowercase().as_str() {
            "none" => PaddingType::None,
            "fixed" => PaddingType::Fixed,
            "adaptive" => PaddingType::Adaptive,
            _ => {
                return Err(Error::UnknownEnumValue {
                    field: "padding_type",
                    value: raw.padding_type,
                });
            }
        };

        let mut symbol_alphabet = char_alphabet("symbol_alphabet", &raw.symbol_alphabet)?;
        let padding_token = raw.padding_character.to_lowercase();
        let padding_mode = match padding_token.as_str() {
            "random" => PaddingMode::Random,
            "separator" => PaddingMode::Separator,
            _ => {
                symbol_alphabet = vec![single_char("padding_character", &padding_token)?];
                PaddingMode::Specified
            }
        };

        Ok(Self {
            word_dictionary,
            num_words: raw.num_words,
            word_length_min: raw.word_length_min,
            word_length_max: raw.word_length_max,
            case_transform,
            separator_mode,
            separator_alphabet,
            padding_digits_before: raw.padding_digits_before,
            padding_digits_after: raw.padding_digits_after,
            padding_type,
            padding_mode,
            symbol_alphabet,
            padding_characters_before: raw.padding_characters_before,
            padding_characters_after: raw.padding_characters_after,
            pad_to_length: raw.pad_to_length,
            word_attempts: None,
        })
    }

    /// Decodes a JSON configuration document and validates it.
    pub fn from_json(data: &str, word_dictionary: Vec<String>) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(data)?;
        Self::from_raw(raw, word_dictionary)
    }
}
