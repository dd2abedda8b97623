use once_cell::sync::Lazy;
use regex::Regex;

use super::scanner::ParserState;
use crate::error::MacroSyntaxError;

static MACRO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-z]+").expect("macro name pattern is valid"));

/// Called right after a special character has been consumed.
pub(super) fn parse_special(state: &mut ParserState) -> Result<(), MacroSyntaxError> {
    let special = state.special();
    match state.peek() {
        None => Err(MacroSyntaxError::UnexpectedEnd {
            special,
            position: state.pos(),
        }),
        Some(ch) if ch == special => {
            state.bump();
            state.push_literal(special);
            Ok(())
        }
        Some('{') => {
            state.bump();
            parse_macro(state)
        }
        Some(_) => Err(MacroSyntaxError::OpenExpected {
            special,
            position: state.pos(),
        }),
    }
}

/// Parses `name}` or `name:arg}` after the opening brace.
fn parse_macro(state: &mut ParserState) -> Result<(), MacroSyntaxError> {
    let name = parse_name(state)?;

    let arg = if state.peek() == Some(':') {
        state.bump();
        Some(parse_argument(state)?)
    } else {
        None
    };

    if state.peek() != Some('}') {
        return Err(MacroSyntaxError::CloseExpected {
            position: state.pos(),
        });
    }
    state.bump();

    state.push_macro(name, arg);
    Ok(())
}

fn parse_name(state: &mut ParserState) -> Result<String, MacroSyntaxError> {
    let name = MACRO_NAME
        .find(state.remaining())
        .map(|m| m.as_str().to_string())
        .ok_or(MacroSyntaxError::NameExpected {
            position: state.pos(),
        })?;
    state.advance(name.len());
    Ok(name)
}

/// Reads up to, but not including, the first unescaped `}`.
fn parse_argument(state: &mut ParserState) -> Result<String, MacroSyntaxError> {
    let special = state.special();
    let mut arg = String::new();

    while let Some(ch) = state.peek() {
        if ch == '}' {
            break;
        }
        state.bump();
        if ch == special {
            match state.peek() {
                Some(next) if next == special || next == '}' => {
                    state.bump();
                    arg.push(next);
                }
                _ => {
                    return Err(MacroSyntaxError::ArgumentEscapeExpected {
                        special,
                        position: state.pos(),
                    });
                }
            }
        } else {
            arg.push(ch);
        }
    }

    Ok(arg)
}
