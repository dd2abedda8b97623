// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::error::Error;

#[test]
fn test_default_options() {
    let options = Options::default();
    assert_eq!(options.special_character, SpecialCharacter::Dollar);
    assert_eq!(options.max_depth, None);

    let value = options.json_parser.parse(r#"{"a": [1, 2.5]}"#).unwrap();
    assert!(value.as_object().is_some());
}

#[test]
fn test_builder_methods() {
    let options = Options::new()
        .with_special_character(SpecialCharacter::At)
        .with_max_depth(3);
    assert_eq!(options.special_character, SpecialCharacter::At);
    assert_eq!(options.max_depth, Some(3));
}

#[test]
fn test_unset_partial_options_fall_back_to_defaults() {
    let options: Options = PartialOptions {
        special_character: None,
        max_depth: None,
        json_parser: None,
    }
    .into();
    assert_eq!(options.special_character, SpecialCharacter::Dollar);
    assert_eq!(options.max_depth, None);
    assert!(options.json_parser.parse("[]").is_ok());
}

#[test]
fn test_partial_options_override_base() {
    let base = Options::new().with_max_depth(10);
    let merged = PartialOptions {
        special_character: Some(SpecialCharacter::Hash),
        ..Default::default()
    }
    .merge_into(base);
    assert_eq!(merged.special_character, SpecialCharacter::Hash);
    assert_eq!(merged.max_depth, Some(10));
}

#[test]
fn test_special_character_conversion() {
    for special in SpecialCharacter::ALL {
        let ch = special.as_char();
        assert_eq!(SpecialCharacter::try_from(ch).unwrap(), special);
        assert_eq!(ch.to_string().parse::<SpecialCharacter>().unwrap(), special);
        assert_eq!(special.to_string(), ch.to_string());
    }
}

#[test]
fn test_invalid_special_character() {
    assert!(matches!(
        SpecialCharacter::try_from('!'),
        Err(Error::InvalidOption { .. })
    ));
    assert!("".parse::<SpecialCharacter>().is_err());
    assert!("$$".parse::<SpecialCharacter>().is_err());
    assert_eq!("x".parse::<SpecialCharacter>().unwrap_err().code(), 400);
}

#[test]
fn test_custom_json_parser() {
    let parser = JsonParser::new(|text| {
        let stripped: String = text
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_json::from_str::<serde_json::Value>(&stripped)
            .map(Value::from)
            .map_err(|e| e.to_string())
    });
    let value = parser.parse("// comment\n{\"a\": 1}").unwrap();
    assert_eq!(value.as_object().map(|o| o.len()), Some(1));
    assert!(JsonParser::strict().parse("// comment\n{}").is_err());
}
