// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ImportChain;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Grammar violations found while splitting a string into segments.
/// Positions are 0-based byte offsets into the parsed string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroSyntaxError {
    #[error("macro name expected at position {position}")]
    NameExpected { position: usize },

    #[error("\"}}\" expected at position {position}")]
    CloseExpected { position: usize },

    /// A special character inside an argument that escapes neither itself nor `}`.
    #[error("\"}}\" or \"{special}\" expected at position {position}")]
    ArgumentEscapeExpected { special: char, position: usize },

    #[error("unexpected end of string, \"{{\" or \"{special}\" expected at position {position}")]
    UnexpectedEnd { special: char, position: usize },

    #[error("\"{{\" or \"{special}\" expected at position {position}")]
    OpenExpected { special: char, position: usize },
}

impl MacroSyntaxError {
    pub fn position(&self) -> usize {
        match self {
            MacroSyntaxError::NameExpected { position }
            | MacroSyntaxError::CloseExpected { position }
            | MacroSyntaxError::ArgumentEscapeExpected { position, .. }
            | MacroSyntaxError::UnexpectedEnd { position, .. }
            | MacroSyntaxError::OpenExpected { position, .. } => *position,
        }
    }
}

/// The main error type for resolving a document and its imports.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{source} ({chain})")]
    MacroSyntax {
        source: MacroSyntaxError,
        chain: ImportChain,
    },

    #[error("max depth exceeded ({chain})")]
    MaxDepthExceeded { chain: ImportChain },

    /// Also raised when a file imports itself.
    #[error("circular import ({chain})")]
    CircularImport { chain: ImportChain },

    #[error("missing filename in macro \"{macro_name}\" ({chain})")]
    MissingFilename {
        macro_name: String,
        chain: ImportChain,
    },

    #[error("macro \"import\" cannot be used together with string literals or other macros ({chain})")]
    CombinedImport { chain: ImportChain },

    #[error("undefined macro \"{name}\" ({chain})")]
    UndefinedMacro { name: String, chain: ImportChain },

    #[error("failed to read '{}': {source} ({chain})", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
        chain: ImportChain,
    },

    #[error("invalid JSON in '{}': {message} ({chain})", .path.display())]
    JsonSyntax {
        path: PathBuf,
        message: String,
        chain: ImportChain,
    },

    #[error("invalid option: {message}")]
    InvalidOption { message: String },
}

impl Error {
    /// Stable numeric code per error kind.
    pub fn code(&self) -> u32 {
        match self {
            Error::MacroSyntax { .. } => 201,
            Error::MaxDepthExceeded { .. } => 310,
            Error::CircularImport { .. } => 311,
            Error::MissingFilename { .. } => 320,
            Error::CombinedImport { .. } => 321,
            Error::UndefinedMacro { .. } => 322,
            Error::Io { .. } => 301,
            Error::JsonSyntax { .. } => 302,
            Error::InvalidOption { .. } => 400,
        }
    }

    /// The import chain active when the error was raised, if any.
    pub fn import_chain(&self) -> Option<&ImportChain> {
        match self {
            Error::MacroSyntax { chain, .. }
            | Error::MaxDepthExceeded { chain }
            | Error::CircularImport { chain }
            | Error::MissingFilename { chain, .. }
            | Error::CombinedImport { chain }
            | Error::UndefinedMacro { chain, .. }
            | Error::Io { chain, .. }
            | Error::JsonSyntax { chain, .. } => Some(chain),
            Error::InvalidOption { .. } => None,
        }
    }
}
