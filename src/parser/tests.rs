#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Macro;

fn dollar() -> MacroParser {
    MacroParser::new(SpecialCharacter::Dollar)
}

fn literal(s: &str) -> Segment {
    Segment::Literal(s.to_string())
}

fn mac(name: &str, arg: Option<&str>) -> Segment {
    Segment::Macro(Macro::new(name, arg))
}

#[test]
fn test_plain_string_is_untouched() {
    assert_eq!(dollar().parse("abc123"), Ok(None));
    assert_eq!(dollar().parse(""), Ok(None));
    assert_eq!(dollar().parse("abc{123}"), Ok(None));
}

#[test]
fn test_escaped_special_character() {
    assert_eq!(dollar().parse("$$"), Ok(Some(vec![literal("$")])));
    assert_eq!(dollar().parse("abc$$123"), Ok(Some(vec![literal("abc$123")])));
    assert_eq!(dollar().parse("abc$${123"), Ok(Some(vec![literal("abc${123")])));
}

#[test]
fn test_single_macro() {
    assert_eq!(dollar().parse("${foo}"), Ok(Some(vec![mac("foo", None)])));
    assert_eq!(
        dollar().parse("${import-first-line}"),
        Ok(Some(vec![mac("import-first-line", None)]))
    );
}

#[test]
fn test_macro_arguments() {
    assert_eq!(dollar().parse("${foo:}"), Ok(Some(vec![mac("foo", Some(""))])));
    assert_eq!(dollar().parse("${foo:bar}"), Ok(Some(vec![mac("foo", Some("bar"))])));
    assert_eq!(
        dollar().parse("${foo:b$$a$}r}"),
        Ok(Some(vec![mac("foo", Some("b$a}r"))]))
    );
    // Other special characters are plain text inside an argument.
    assert_eq!(
        dollar().parse("${import:../dir/x#1.json}"),
        Ok(Some(vec![mac("import", Some("../dir/x#1.json"))]))
    );
}

#[test]
fn test_mixed_segments_keep_order() {
    let parsed = dollar()
        .parse("<<<${a:x}|||${b}>>>$$")
        .expect("parse failed")
        .expect("expected segments");
    assert_eq!(
        parsed,
        vec![
            literal("<<<"),
            mac("a", Some("x")),
            literal("|||"),
            mac("b", None),
            literal(">>>$"),
        ]
    );
}

#[test]
fn test_adjacent_macros() {
    assert_eq!(
        dollar().parse("${a}${b:}"),
        Ok(Some(vec![mac("a", None), mac("b", Some(""))]))
    );
}

#[test]
fn test_trailing_special_character() {
    let err = dollar().parse("abc$").unwrap_err();
    assert_eq!(
        err,
        MacroSyntaxError::UnexpectedEnd {
            special: '$',
            position: 4
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected end of string, \"{\" or \"$\" expected at position 4"
    );
}

#[test]
fn test_special_character_without_brace() {
    let err = dollar().parse("abc$foo").unwrap_err();
    assert_eq!(err.position(), 4);
    assert_eq!(err.to_string(), "\"{\" or \"$\" expected at position 4");
}

#[test]
fn test_unclosed_macro() {
    assert_eq!(
        dollar().parse("${foo"),
        Err(MacroSyntaxError::CloseExpected { position: 5 })
    );
    assert_eq!(
        dollar().parse("${foo:"),
        Err(MacroSyntaxError::CloseExpected { position: 6 })
    );
    assert_eq!(
        dollar().parse("${foo:bar"),
        Err(MacroSyntaxError::CloseExpected { position: 9 })
    );
    // Upper case letters end the name.
    assert_eq!(
        dollar().parse("${fooBar}"),
        Err(MacroSyntaxError::CloseExpected { position: 5 })
    );
}

#[test]
fn test_unescaped_special_in_argument() {
    let err = dollar().parse("${foo:b$ar}").unwrap_err();
    assert_eq!(
        err,
        MacroSyntaxError::ArgumentEscapeExpected {
            special: '$',
            position: 8
        }
    );
    assert_eq!(err.to_string(), "\"}\" or \"$\" expected at position 8");

    assert!(dollar().parse("${foo:bar$").is_err());
}

#[test]
fn test_empty_macro_name() {
    for input in ["${}", "${:}", "${:bar}", "${Foo}", "${1}"] {
        assert_eq!(
            dollar().parse(input),
            Err(MacroSyntaxError::NameExpected { position: 2 }),
            "input: {}",
            input
        );
    }
}

#[test]
fn test_positions_are_byte_offsets() {
    // "é" is two bytes long.
    let err = dollar().parse("é$x").unwrap_err();
    assert_eq!(err.position(), 3);
}

#[test]
fn test_other_special_characters() {
    let percent = MacroParser::new(SpecialCharacter::Percent);
    assert_eq!(
        percent.parse("%{foo:b%%a%}r}"),
        Ok(Some(vec![mac("foo", Some("b%a}r"))]))
    );
    // `$` has no meaning when another special character is configured.
    assert_eq!(percent.parse("${foo}"), Ok(None));

    let at = MacroParser::new(SpecialCharacter::At);
    assert_eq!(
        at.parse("mail@@example.com @{import-text:a.txt}"),
        Ok(Some(vec![
            literal("mail@example.com "),
            mac("import-text", Some("a.txt")),
        ]))
    );
}

#[test]
fn test_parser_is_reusable() {
    let parser = MacroParser::default();
    assert_eq!(parser.special_character(), SpecialCharacter::Dollar);
    assert!(parser.parse("${").is_err());
    assert_eq!(parser.parse("${ok}"), Ok(Some(vec![mac("ok", None)])));
}
