//! Source file loading
//!
//! Files are read to completion and released before any of their includes are
//! expanded. Non-UTF-8 bytes are converted lossily rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::util::hash_bytes;
use crate::error::{FlattenError, Result};

/// One line of a source file, terminator included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-indexed line number in the original file
    pub number: usize,
    pub text: String,
}

/// The lines of one loaded file plus what the report needs to know about it
#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: PathBuf,
    pub lines: Vec<SourceLine>,

    /// File size in bytes
    pub size: u64,

    /// Content hash (XXH3)
    pub hash: String,

    /// Whether lossy conversion was used
    pub lossy: bool,
}

/// Read a file into lines
pub fn read_source(path: &Path) -> Result<SourceText> {
    let bytes = fs::read(path).map_err(|source| FlattenError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let size = bytes.len() as u64;
    let hash = hash_bytes(&bytes);

    let (content, lossy) = match String::from_utf8(bytes) {
        Ok(content) => (content, false),
        Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
    };

    Ok(SourceText {
        path: path.to_path_buf(),
        lines: split_lines(&content),
        size,
        hash,
        lossy,
    })
}

/// Split content into lines, keeping each line's own terminator
pub fn split_lines(content: &str) -> Vec<SourceLine> {
    content
        .split_inclusive('\n')
        .enumerate()
        .map(|(i, text)| SourceLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines = split_lines("a\r\nb\nc");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a\r\n", "b\n", "c"]);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_source() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.h");
        fs::write(&path, "#pragma once\nint a;\n").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.lines.len(), 2);
        assert_eq!(source.size, 20);
        assert_eq!(source.hash.len(), 16);
        assert!(!source.lossy);
    }

    #[test]
    fn test_read_source_lossy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latin1.h");
        fs::write(&path, b"// caf\xe9\nint x;\n").unwrap();

        let source = read_source(&path).unwrap();
        assert!(source.lossy);
        assert_eq!(source.lines[1].text, "int x;\n");
        assert!(source.lines[0].text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_source_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_source(&temp.path().join("nope.cpp")).unwrap_err();
        assert!(matches!(err, FlattenError::FileAccess { .. }));
    }

    #[test]
    fn test_read_source_directory_is_access_error() {
        let temp = tempdir().unwrap();
        let err = read_source(temp.path()).unwrap_err();
        assert!(matches!(err, FlattenError::FileAccess { .. }));
    }
}
