//! Splits JSON string values into literal text and `${name:arg}` macros.

use crate::ast::Segment;
use crate::config::SpecialCharacter;
use crate::error::MacroSyntaxError;

mod macros;
mod scanner;

use scanner::ParserState;

/// Stateless macro parser for one special character.
///
/// A parser can be shared freely; every call to [`MacroParser::parse`] owns
/// its own cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroParser {
    special: SpecialCharacter,
}

impl MacroParser {
    pub fn new(special: SpecialCharacter) -> Self {
        Self { special }
    }

    pub fn special_character(&self) -> SpecialCharacter {
        self.special
    }

    /// Parse `text` into segments.
    ///
    /// Returns `Ok(None)` if `text` does not contain the special character at
    /// all, so callers can leave such strings untouched. Otherwise the result
    /// is never empty and adjacent literal text is merged into one segment.
    pub fn parse(&self, text: &str) -> Result<Option<Vec<Segment>>, MacroSyntaxError> {
        let special = self.special.as_char();
        if !text.contains(special) {
            return Ok(None);
        }

        let mut state = ParserState::new(text, special);
        while let Some(ch) = state.bump() {
            if ch == special {
                macros::parse_special(&mut state)?;
            } else {
                state.push_literal(ch);
            }
        }

        Ok(Some(state.finish()))
    }
}

impl Default for MacroParser {
    fn default() -> Self {
        Self::new(SpecialCharacter::default())
    }
}

#[cfg(test)]
mod tests;
