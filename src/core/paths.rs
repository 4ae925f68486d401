//! Path utilities
//!
//! Include targets resolve against the directory of the including file, and
//! visited-tracking compares canonical identities rather than spellings.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to a base directory
pub fn make_relative(path: &Path, base: &Path) -> Option<String> {
    path.strip_prefix(base).ok().map(normalize_path)
}

/// Resolve a quoted include target against the including file's directory
///
/// A file given without any directory component resolves its includes
/// against the current working directory.
pub fn resolve_include(including_file: &Path, target: &str) -> PathBuf {
    let dir = including_file.parent().unwrap_or_else(|| Path::new(""));
    dir.join(target.replace('/', std::path::MAIN_SEPARATOR_STR))
}

/// Canonical identity of a file for visited-tracking
///
/// Symlinks and `..` segments are resolved when the file exists; otherwise the
/// lexically absolute path is used so the identity is still stable.
pub fn identity(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Directory that report paths are rendered relative to
pub fn report_base(root_file: &Path) -> PathBuf {
    identity(root_file)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Render a path for display in reports: relative to `base` when possible
pub fn display_path(path: &Path, base: &Path) -> String {
    let id = identity(path);
    make_relative(&id, base).unwrap_or_else(|| normalize_path(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.cpp");
        assert_eq!(normalize_path(path), "src/main.cpp");
    }

    #[test]
    fn test_make_relative() {
        let base = Path::new("/project");
        let path = Path::new("/project/src/a.h");
        assert_eq!(make_relative(path, base), Some("src/a.h".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_base() {
        let base = Path::new("/project");
        let path = Path::new("/other/a.h");
        assert_eq!(make_relative(path, base), None);
    }

    #[test]
    fn test_resolve_include_uses_including_dir() {
        let resolved = resolve_include(Path::new("lib/graph/dsu.hpp"), "../util.hpp");
        assert_eq!(
            resolved,
            Path::new("lib/graph").join("..").join("util.hpp")
        );
    }

    #[test]
    fn test_resolve_include_bare_file() {
        let resolved = resolve_include(Path::new("main.cpp"), "a.h");
        assert_eq!(resolved, PathBuf::from("a.h"));
    }

    #[test]
    fn test_resolve_include_nested_target() {
        let resolved = resolve_include(Path::new("/src/main.cpp"), "ds/tree.hpp");
        assert_eq!(resolved, Path::new("/src").join("ds").join("tree.hpp"));
    }

    #[test]
    fn test_identity_collapses_dotdot() {
        let temp = tempfile::tempdir().unwrap();
        let sub = temp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let file = temp.path().join("a.h");
        std::fs::write(&file, "int a;\n").unwrap();

        let via_sub = sub.join("..").join("a.h");
        assert_eq!(identity(&via_sub), identity(&file));
    }

    #[test]
    fn test_identity_of_missing_file_is_absolute() {
        let id = identity(Path::new("definitely/not/here.h"));
        assert!(id.is_absolute());
        assert!(id.ends_with("definitely/not/here.h"));
    }

    #[test]
    fn test_display_path_relative_to_base() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("inc").join("a.h");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "").unwrap();
        let root = temp.path().join("main.cpp");
        std::fs::write(&root, "").unwrap();

        let base = report_base(&root);
        assert_eq!(display_path(&file, &base), "inc/a.h");
    }
}
