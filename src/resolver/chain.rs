use std::fmt;
use std::path::{Path, PathBuf};

/// Absolute paths from the top-level file down to the file being loaded.
///
/// A chain is never modified once handed to a child; each import gets its
/// own extended copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportChain(Vec<PathBuf>);

impl ImportChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this chain with `file` appended.
    pub fn extended(&self, file: &Path) -> Self {
        let mut paths = Vec::with_capacity(self.0.len() + 1);
        paths.extend(self.0.iter().cloned());
        paths.push(file.to_path_buf());
        Self(paths)
    }

    pub fn contains(&self, file: &Path) -> bool {
        self.0.iter().any(|p| p == file)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The file currently being resolved.
    pub fn current(&self) -> Option<&Path> {
        self.0.last().map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }
}

impl fmt::Display for ImportChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}
