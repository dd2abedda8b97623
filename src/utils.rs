use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically collapse `.` and `..` components without touching the filesystem.
/// `..` at the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Make `path` absolute against the working directory and normalize it.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

/// Resolve an import target relative to the directory of the file naming it.
/// Absolute targets are only normalized.
pub fn resolve_relative_to(importing_file: &Path, target: &str) -> PathBuf {
    let base_dir = importing_file.parent().unwrap_or_else(|| Path::new("/"));
    normalize_path(&base_dir.join(target))
}

/// Text before the first `\n`, or all of `text` if there is none.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}
