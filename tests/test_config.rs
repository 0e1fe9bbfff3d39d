use xkpasswd::Error;
use xkpasswd::config::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn base_raw() -> RawConfig {
        RawConfig {
            num_words: 3,
            word_length_min: 4,
            word_length_max: 8,
            case_transform: "capitalise".to_string(),
            separator_character: "random".to_string(),
            separator_alphabet: vec!["-".to_string(), "+".to_string()],
            padding_digits_before: 2,
            padding_digits_after: 2,
            padding_type: "fixed".to_string(),
            padding_character: "random".to_string(),
            symbol_alphabet: vec!["!".to_string(), "?".to_string()],
            padding_characters_before: 2,
            padding_characters_after: 2,
            pad_to_length: 0,
        }
    }

    fn dictionary() -> Vec<String> {
        vec!["wolf".to_string(), "tiger".to_string(), "puma".to_string()]
    }

    #[test]
    fn test_parse_valid_record() {
        let config = Config::from_raw(base_raw(), dictionary()).unwrap();
        assert_eq!(config.num_words, 3);
        assert_eq!(config.word_length_min, 4);
        assert_eq!(config.word_length_max, 8);
        assert_eq!(config.case_transform, CaseTransform::Capitalise);
        assert_eq!(config.separator_mode, SeparatorMode::Random);
        assert_eq!(config.separator_alphabet, vec!['-', '+']);
        assert_eq!(config.padding_type, PaddingType::Fixed);
        assert_eq!(config.padding_mode, PaddingMode::Random);
        assert_eq!(config.symbol_alphabet, vec!['!', '?']);
        assert_eq!(config.word_dictionary.len(), 3);
        assert!(config.word_attempts.is_none());
    }

    #[test]
    fn test_enum_tokens_are_case_insensitive() {
        let mut raw = base_raw();
        raw.case_transform = "ALTERNATE".to_string();
        raw.separator_character = "Random".to_string();
        raw.padding_type = "Adaptive".to_string();
        raw.padding_character = "SEPARATOR".to_string();
        let config = Config::from_raw(raw, dictionary()).unwrap();
        assert_eq!(config.case_transform, CaseTransform::Alternate);
        assert_eq!(config.separator_mode, SeparatorMode::Random);
        assert_eq!(config.padding_type, PaddingType::Adaptive);
        assert_eq!(config.padding_mode, PaddingMode::Separator);
    }

    #[test]
    fn test_none_and_lower_both_map_to_lower() {
        for token in ["none", "lower"] {
            let mut raw = base_raw();
            raw.case_transform = token.to_string();
            let config = Config::from_raw(raw, dictionary()).unwrap();
            assert_eq!(config.case_transform, CaseTransform::Lower);
        }
    }

    #[test]
    fn test_unknown_case_transform_is_rejected() {
        let mut raw = base_raw();
        raw.case_transform = "title".to_string();
        match Config::from_raw(raw, dictionary()) {
            Err(Error::UnknownEnumValue { field, value }) => {
                assert_eq!(field, "case_transform");
                assert_eq!(value, "title");
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_padding_type_is_rejected() {
        let mut raw = base_raw();
        raw.padding_type = "elastic".to_string();
        match Config::from_raw(raw, dictionary()) {
            Err(Error::UnknownEnumValue { field, .. }) => {
                assert_eq!(field, "padding_type");
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_separator_overrides_alphabet() {
        let mut raw = base_raw();
        raw.separator_character = "-".to_string();
        raw.separator_alphabet = vec!["!".to_string(), "@".to_string()];
        let config = Config::from_raw(raw, dictionary()).unwrap();
        assert_eq!(config.separator_mode, SeparatorMode::Character);
        assert_eq!(config.separator_alphabet, vec!['-']);
    }

    #[test]
    fn test_literal_separator_is_stored_lowercased() {
        let mut raw = base_raw();
        raw.separator_character = "Z".to_string();
        let config = Config::from_raw(raw, dictionary()).unwrap();
        assert_eq!(config.separator_mode, SeparatorMode::Character);
        assert_eq!(config.separator_alphabet, vec!['z']);
    }

    #[test]
    fn test_multi_character_separator_is_rejected() {
        let mut raw = base_raw();
        raw.separator_character = "--".to_string();
        match Config::from_raw(raw, dictionary()) {
            Err(Error::UnknownEnumValue { field, value }) => {
                assert_eq!(field, "separator_character");
                assert_eq!(value, "--");
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_padding_character_overrides_alphabet() {
        let mut raw = base_raw();
        raw.padding_character = "*".to_string();
        raw.symbol_alphabet = vec!["!".to_string(), "@".to_string()];
        let config = Config::from_raw(raw, dictionary()).unwrap();
        assert_eq!(config.padding_mode, PaddingMode::Specified);
        assert_eq!(config.symbol_alphabet, vec!['*']);
    }

    #[test]
    fn test_separator_padding_mode_keeps_symbol_alphabet() {
        let mut raw = base_raw();
        raw.padding_character = "separator".to_string();
        let config = Config::from_raw(raw, dictionary()).unwrap();
        assert_eq!(config.padding_mode, PaddingMode::Separator);
        assert_eq!(config.symbol_alphabet, vec!['!', '?']);
    }

    #[test]
    fn test_multi_character_alphabet_entry_is_rejected() {
        let mut raw = base_raw();
        raw.separator_alphabet = vec!["-".to_string(), "ab".to_string()];
        match Config::from_raw(raw, dictionary()) {
            Err(Error::UnknownEnumValue { field, value }) => {
                assert_eq!(field, "separator_alphabet");
                assert_eq!(value, "ab");
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_length_bounds_are_rejected() {
        let mut raw = base_raw();
        raw.word_length_min = 9;
        raw.word_length_max = 4;
        match Config::from_raw(raw, dictionary()) {
            Err(Error::InvalidWordLength { min, max }) => {
                assert_eq!(min, 9);
                assert_eq!(max, 4);
            }
            other => panic!("expected InvalidWordLength, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_round_trip() {
        let data = r#"{
            "num_words": 2,
            "word_length_min": 4,
            "word_length_max": 6,
            "case_transform": "upper",
            "separator_character": "none",
            "separator_alphabet": [],
            "padding_digits_before": 0,
            "padding_digits_after": 0,
            "padding_type": "none",
            "padding_character": "random",
            "symbol_alphabet": ["!"],
            "padding_characters_before": 0,
            "padding_characters_after": 0,
            "pad_to_length": 0
        }"#;
        let config = Config::from_json(data, dictionary()).unwrap();
        assert_eq!(config.num_words, 2);
        assert_eq!(config.case_transform, CaseTransform::Upper);
        assert_eq!(config.separator_mode, SeparatorMode::None);
        assert_eq!(config.padding_type, PaddingType::None);
    }

    #[test]
    fn test_from_json_missing_fields_behave_like_empty_tokens() {
        // An absent case_transform decodes as the empty string and fails
        // the same way an unknown token does.
        let result = Config::from_json(r#"{"num_words": 2}"#, dictionary());
        match result {
            Err(Error::UnknownEnumValue { field, value }) => {
                assert_eq!(field, "case_transform");
                assert_eq!(value, "");
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let result = Config::from_json("{not json", dictionary());
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
