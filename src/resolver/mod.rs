// Author: Dustin Pilgrim
// License: MIT

//! Loads a JSON file and replaces every macro in its string values,
//! following `${import:...}` into other files.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::{debug, trace};

use crate::ast::{Segment, Value};
use crate::config::Options;
use crate::error::{Error, Result};
use crate::parser::MacroParser;
use crate::utils::{absolutize, first_line, resolve_relative_to};

mod chain;
mod loader;

pub use chain::ImportChain;
pub use loader::{FsLoader, MemoryLoader, TextLoader};

pub const IMPORT: &str = "import";
pub const IMPORT_TEXT: &str = "import-text";
pub const IMPORT_FIRST_LINE: &str = "import-first-line";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read `file` and resolve all of its macros, including nested imports.
///
/// # Examples
/// ```no_run
/// use json_imports::{read_json_with_imports, Options};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let value = read_json_with_imports("config.json", Options::new().with_max_depth(8)).await?;
/// println!("{}", json_imports::export::to_json_pretty(&value)?);
/// # Ok(())
/// # }
/// ```
pub async fn read_json_with_imports(
    file: impl AsRef<Path>,
    options: impl Into<Options>,
) -> Result<Value> {
    Resolver::new(options.into()).resolve_file(file).await
}

/// Resolves documents with a fixed set of options and a file loader.
///
/// Every call to [`Resolver::resolve_file`] starts with an empty import chain
/// and owns the tree it builds, so one resolver can serve many calls.
#[derive(Debug)]
pub struct Resolver<L = FsLoader> {
    options: Options,
    parser: MacroParser,
    loader: L,
}

impl Resolver<FsLoader> {
    pub fn new(options: Options) -> Self {
        Self::with_loader(options, FsLoader)
    }
}

impl<L: TextLoader> Resolver<L> {
    pub fn with_loader(options: Options, loader: L) -> Self {
        let parser = MacroParser::new(options.special_character);
        Self {
            options,
            parser,
            loader,
        }
    }

    pub async fn resolve_file(&self, file: impl AsRef<Path>) -> Result<Value> {
        let file = file.as_ref();
        let absolute = absolutize(file).map_err(|source| unresolvable_entry(file, source))?;
        self.read_and_parse_file(absolute, ImportChain::new()).await
    }

    fn read_and_parse_file(&self, file: PathBuf, parents: ImportChain) -> BoxFuture<'_, Result<Value>> {
        Box::pin(async move {
            let chain = parents.extended(&file);

            if let Some(max_depth) = self.options.max_depth {
                if parents.len() > max_depth {
                    return Err(Error::MaxDepthExceeded { chain });
                }
            }

            if parents.contains(&file) {
                return Err(Error::CircularImport { chain });
            }

            debug!(file = %file.display(), depth = parents.len(), "loading JSON file");
            let content = self.read_text(&file, &chain).await?;
            let mut value = self
                .options
                .json_parser
                .parse(&content)
                .map_err(|message| Error::JsonSyntax {
                    path: file.clone(),
                    message,
                    chain: chain.clone(),
                })?;

            match self.evaluate_macros(&mut value, &chain).await? {
                Some(replacement) => Ok(replacement),
                None => Ok(value),
            }
        })
    }

    /// Walks `value` depth-first, left to right.
    ///
    /// `Some` means the caller must replace `value` with the returned value;
    /// `None` means any nested replacements were already applied in place.
    fn evaluate_macros<'a>(
        &'a self,
        value: &'a mut Value,
        chain: &'a ImportChain,
    ) -> BoxFuture<'a, Result<Option<Value>>> {
        Box::pin(async move {
            match value {
                Value::Array(items) => {
                    for item in items.iter_mut() {
                        if let Some(replacement) = self.evaluate_macros(item, chain).await? {
                            *item = replacement;
                        }
                    }
                    Ok(None)
                }
                Value::Object(entries) => {
                    for (_, item) in entries.iter_mut() {
                        if let Some(replacement) = self.evaluate_macros(item, chain).await? {
                            *item = replacement;
                        }
                    }
                    Ok(None)
                }
                Value::String(text) => self.evaluate_string(text, chain).await,
                Value::Null | Value::Bool(_) | Value::Number(_) => Ok(None),
            }
        })
    }

    async fn evaluate_string(&self, text: &str, chain: &ImportChain) -> Result<Option<Value>> {
        let segments = match self.parser.parse(text) {
            Ok(Some(segments)) => segments,
            Ok(None) => return Ok(None),
            Err(source) => {
                return Err(Error::MacroSyntax {
                    source,
                    chain: chain.clone(),
                });
            }
        };

        if let [Segment::Macro(m)] = segments.as_slice() {
            if m.name == IMPORT {
                let target = self.target_path(m.filename(), IMPORT, chain)?;
                trace!(path = %target.display(), "importing JSON");
                let imported = self.read_and_parse_file(target, chain.clone()).await?;
                return Ok(Some(imported));
            }
        }

        let mut result = String::new();
        for segment in &segments {
            let m = match segment {
                Segment::Literal(literal) => {
                    result.push_str(literal);
                    continue;
                }
                Segment::Macro(m) => m,
            };

            trace!(name = %m.name, arg = ?m.arg, "evaluating macro");
            match m.name.as_str() {
                IMPORT => {
                    return Err(Error::CombinedImport {
                        chain: chain.clone(),
                    });
                }
                IMPORT_TEXT => {
                    let target = self.target_path(m.filename(), IMPORT_TEXT, chain)?;
                    let content = self.read_text(&target, chain).await?;
                    result.push_str(&content);
                }
                IMPORT_FIRST_LINE => {
                    let target = self.target_path(m.filename(), IMPORT_FIRST_LINE, chain)?;
                    let content = self.read_text(&target, chain).await?;
                    result.push_str(first_line(&content));
                }
                other => {
                    return Err(Error::UndefinedMacro {
                        name: other.to_string(),
                        chain: chain.clone(),
                    });
                }
            }
        }

        Ok(Some(Value::String(result)))
    }

    /// Resolve a macro's filename against the directory of the current file.
    fn target_path(&self, filename: Option<&str>, macro_name: &str, chain: &ImportChain) -> Result<PathBuf> {
        let filename = filename.ok_or_else(|| Error::MissingFilename {
            macro_name: macro_name.to_string(),
            chain: chain.clone(),
        })?;
        let current = chain.current().unwrap_or_else(|| Path::new("/"));
        Ok(resolve_relative_to(current, filename))
    }

    async fn read_text(&self, path: &Path, chain: &ImportChain) -> Result<String> {
        self.loader
            .read_text(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
                chain: chain.clone(),
            })
    }
}

/// The entry file could not be made absolute, so the chain holds the path as given.
fn unresolvable_entry(file: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: file.to_path_buf(),
        source,
        chain: ImportChain::new().extended(file),
    }
}
