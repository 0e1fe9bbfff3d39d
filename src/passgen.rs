//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// Password composition engine

use crate::config::{CaseTransform, Config, PaddingMode, PaddingType, SeparatorMode};
use crate::entropy::{EntropySource, OsEntropy};
use crate::{Error, Result};

/// Generate one password from `config` using the operating-system CSPRNG.
pub fn generate(config: &Config) -> Result<String> {
    compose(config, &mut OsEntropy)
}

/// Assemble one password.
///
/// Pipeline: the separator is drawn once and reused for every slot, the
/// padding symbol is resolved once, then leading fixed padding, leading
/// digits, the word block, trailing digits and trailing fixed padding are
/// concatenated in that order. Adaptive padding finally forces the result
/// to exactly `pad_to_length` characters.
///
/// Each call is independent; the configuration is only read.
pub fn compose(config: &Config, rng: &mut impl EntropySource) -> Result<String> {
    let separator = select_separator(config, rng)?;

    let padding = match config.padding_type {
        PaddingType::None => String::new(),
        PaddingType::Fixed | PaddingType::Adaptive => {
            select_padding(config, &separator, rng)?
        }
    };

    let mut password = String::new();

    if config.padding_type == PaddingType::Fixed {
        for _ in 0..config.padding_characters_before {
            password.push_str(&padding);
        }
    }

    if config.padding_digits_before > 0 {
        password.push_str(&random_digits(config.padding_digits_before, rng));
        password.push_str(&separator);
    }

    for i in 0..config.num_words {
        if i > 0 {
            password.push_str(&separator);
        }
        password.push_str(&select_word(config, rng)?);
    }

    if config.padding_digits_after > 0 {
        password.push_str(&separator);
        password.push_str(&random_digits(config.padding_digits_after, rng));
    }

    if config.padding_type == PaddingType::Fixed {
        for _ in 0..config.padding_characters_after {
            password.push_str(&padding);
        }
    }

    if config.padding_type == PaddingType::Adaptive {
        adapt_length(&mut password, config.pad_to_length, &padding);
    }

    Ok(password)
}

/// Draws dictionary entries until one lands inside the configured length
/// bounds, then applies the case transform.
///
/// With `word_attempts` unset the rejection loop is unbounded: if no
/// dictionary entry satisfies the bounds it never returns. Callers must
/// either guarantee a qualifying word exists or set the cap, which turns
/// exhaustion into `WordSelectionExhausted`.
pub fn select_word(config: &Config, rng: &mut impl EntropySource) -> Result<String> {
    if config.word_dictionary.is_empty() {
        return Err(Error::InvalidAlphabet("word_dictionary"));
    }

    let mut attempts: u32 = 0;
    loop {
        let word = &config.word_dictionary[rng.pick(config.word_dictionary.len())];
        let length = word.chars().count();
        if length >= config.word_length_min && length <= config.word_length_max {
            return Ok(apply_case(word, config.case_transform, rng));
        }

        attempts += 1;
        if let Some(cap) = config.word_attempts {
            if attempts >= cap {
                return Err(Error::WordSelectionExhausted(cap));
            }
        }
    }
}

/// Applies a casing policy to `word`. Pure and deterministic except for
/// `Random`, which spends one coin flip per character. Non-alphabetic
/// characters pass through unchanged.
pub fn apply_case(word: &str, transform: CaseTransform, rng: &mut impl EntropySource) -> String {
    match transform {
        CaseTransform::Lower => word.to_lowercase(),
        CaseTransform::Alternate => {
            let mut out = String::with_capacity(word.len());
            for (i, c) in word.chars().enumerate() {
                if i % 2 == 0 {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
            }
            out
        }
        // The whole word is upper-cased, not just the first letter. This
        // reproduces the observed `capitalise` behavior.
        CaseTransform::Capitalise => word.to_uppercase(),
        CaseTransform::Invert => {
            let mut out = String::with_capacity(word.len());
            for (i, c) in word.chars().enumerate() {
                if i == 0 {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
            }
            out
        }
        CaseTransform::Upper => word.to_uppercase(),
        CaseTransform::Random => {
            let mut out = String::with_capacity(word.len());
            for c in word.chars() {
                if rng.coin_flip() {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
            }
            out
        }
    }
}

/// The separator for one invocation: empty for mode `none`, the configured
/// character, or one draw from the separator alphabet.
fn select_separator(config: &Config, rng: &mut impl EntropySource) -> Result<String> {
    match config.separator_mode {
        SeparatorMode::None => Ok(String::new()),
        SeparatorMode::Random => {
            if config.separator_alphabet.is_empty() {
                return Err(Error::InvalidAlphabet("separator_alphabet"));
            }
            let index = rng.pick(config.separator_alphabet.len());
            Ok(config.separator_alphabet[index].to_string())
        }
        SeparatorMode::Character => match config.separator_alphabet.first() {
            Some(c) => Ok(c.to_string()),
            None => Err(Error::InvalidAlphabet("separator_alphabet")),
        },
    }
}

/// The padding symbol for one invocation, resolved once up front.
fn select_padding(
    config: &Config,
    separator: &str,
    rng: &mut impl EntropySource,
) -> Result<String> {
    match config.padding_mode {
        PaddingMode::Random => {
            if config.symbol_alphabet.is_empty() {
                return Err(Error::InvalidAlphabet("symbol_alphabet"));
            }
            let index = rng.pick(config.symbol_alphabet.len());
            Ok(config.symbol_alphabet[index].to_string())
        }
        PaddingMode::Separator => {
            // A `none` separator leaves nothing to pad with; under-filling
            // adaptive output silently would break the exact-length rule.
            if separator.is_empty() {
                return Err(Error::InvalidAlphabet("separator_alphabet"));
            }
            Ok(separator.to_string())
        }
        PaddingMode::Specified => match config.symbol_alphabet.first() {
            Some(c) => Ok(c.to_string()),
            None => Err(Error::InvalidAlphabet("symbol_alphabet")),
        },
    }
}

/// Fixed-width group of uniform decimal digits; leading zeros are kept.
fn random_digits(count: usize, rng: &mut impl EntropySource) -> String {
    let mut digits = String::with_capacity(count);
    for _ in 0..count {
        digits.push(char::from(b'0' + rng.pick(10) as u8));
    }
    digits
}

/// Forces `password` to exactly `target` characters: excess is dropped from
/// the head so the tail survives, shortfall is filled with `symbol`.
fn adapt_length(password: &mut String, target: usize, symbol: &str) {
    let length = password.chars().count();
    if length > target {
        *password = password.chars().skip(length - target).collect();
    } else if length < target {
        for _ in length..target {
            password.push_str(symbol);
        }
    }
}
