// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::sync::Arc;

use crate::ast::Value;

mod conversion;

/// Character that introduces a macro (`${...}`) or escapes itself (`$$`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialCharacter {
    Hash,
    #[default]
    Dollar,
    Percent,
    Ampersand,
    At,
}

impl SpecialCharacter {
    pub const ALL: [SpecialCharacter; 5] = [
        SpecialCharacter::Hash,
        SpecialCharacter::Dollar,
        SpecialCharacter::Percent,
        SpecialCharacter::Ampersand,
        SpecialCharacter::At,
    ];

    pub fn as_char(self) -> char {
        match self {
            SpecialCharacter::Hash => '#',
            SpecialCharacter::Dollar => '$',
            SpecialCharacter::Percent => '%',
            SpecialCharacter::Ampersand => '&',
            SpecialCharacter::At => '@',
        }
    }
}

impl fmt::Display for SpecialCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

type ParseFn = dyn Fn(&str) -> Result<Value, String> + Send + Sync;

/// Turns file content into a [`Value`]. Swappable so that looser JSON
/// dialects can be read.
#[derive(Clone)]
pub struct JsonParser(Arc<ParseFn>);

impl JsonParser {
    pub fn new<F>(parse: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self(Arc::new(parse))
    }

    /// Standard JSON as accepted by `serde_json`.
    pub fn strict() -> Self {
        Self::new(|text| {
            serde_json::from_str::<serde_json::Value>(text)
                .map(Value::from)
                .map_err(|e| e.to_string())
        })
    }

    pub fn parse(&self, text: &str) -> Result<Value, String> {
        (self.0)(text)
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::strict()
    }
}

impl fmt::Debug for JsonParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonParser(..)")
    }
}

/// Effective settings for one resolution.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub special_character: SpecialCharacter,
    /// Maximum number of import levels below the top-level file. `None` means unbounded.
    pub max_depth: Option<usize>,
    pub json_parser: JsonParser,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_special_character(mut self, special: SpecialCharacter) -> Self {
        self.special_character = special;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_json_parser(mut self, parser: JsonParser) -> Self {
        self.json_parser = parser;
        self
    }
}

/// Caller-supplied overrides. Any field left as `None` keeps its default,
/// so passing an explicitly unset option is the same as omitting it.
#[derive(Debug, Clone, Default)]
pub struct PartialOptions {
    pub special_character: Option<SpecialCharacter>,
    pub max_depth: Option<usize>,
    pub json_parser: Option<JsonParser>,
}

impl PartialOptions {
    /// Layer these overrides on top of `base`.
    pub fn merge_into(self, base: Options) -> Options {
        Options {
            special_character: self.special_character.unwrap_or(base.special_character),
            max_depth: self.max_depth.or(base.max_depth),
            json_parser: self.json_parser.unwrap_or(base.json_parser),
        }
    }
}

impl From<PartialOptions> for Options {
    fn from(partial: PartialOptions) -> Self {
        partial.merge_into(Options::default())
    }
}

#[cfg(test)]
mod tests;
