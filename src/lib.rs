pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod resolver;
pub mod utils;

pub use ast::{Macro, Segment, Value};
pub use config::{JsonParser, Options, PartialOptions, SpecialCharacter};
pub use error::{Error, MacroSyntaxError, Result};
pub use parser::MacroParser;
pub use resolver::{read_json_with_imports, FsLoader, ImportChain, MemoryLoader, Resolver, TextLoader};
