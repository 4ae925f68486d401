//! Flatten report model
//!
//! Every decision the expander makes about a file or directive is recorded
//! as a ReportItem, in traversal order, before rendering.

use serde::{Deserialize, Serialize};

/// The kind of report item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// The file the run started from
    Root,
    /// A local file whose content was spliced into the output
    Inlined,
    /// A local include suppressed because its file was already expanded
    Duplicate,
    /// A local include whose target does not exist
    Missing,
    /// A collected system header
    System,
}

/// Metadata for an item that corresponds to a file that was read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Content hash (XXH3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Whether lossy UTF-8 conversion was used
    #[serde(default)]
    pub lossy: bool,
}

/// One entry of the flatten report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    pub kind: Kind,

    /// Resolved file path, '/'-separated, relative to the root file's directory when possible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The quoted target exactly as written in the directive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// The including file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// 1-indexed line of the directive in the including file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// System header name (system items only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(default)]
    pub meta: Meta,
}

impl ReportItem {
    /// Create an item for a file reached without a directive
    pub fn file(kind: Kind) -> Self {
        Self {
            kind,
            path: None,
            target: None,
            from: None,
            line: None,
            header: None,
            meta: Meta::default(),
        }
    }

    /// Create the root item
    pub fn root(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::file(Kind::Root)
        }
    }

    /// Create an item for a local include directive
    pub fn include(kind: Kind, target: impl Into<String>, from: impl Into<String>, line: usize) -> Self {
        Self {
            target: Some(target.into()),
            from: Some(from.into()),
            line: Some(line as u32),
            ..Self::file(kind)
        }
    }

    /// Create a system header item
    pub fn system(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::file(Kind::System)
        }
    }

    /// Set the resolved path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// Ordered collection of report items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ReportItem>) {
        self.items.extend(items);
    }

    /// Number of items of the given kind
    pub fn count(&self, kind: Kind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    /// Items of the given kind, in traversal order
    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &ReportItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_item() {
        let item = ReportItem::root("main.cpp");
        assert_eq!(item.kind, Kind::Root);
        assert_eq!(item.path.as_deref(), Some("main.cpp"));
        assert!(item.from.is_none());
    }

    #[test]
    fn test_include_item() {
        let item = ReportItem::include(Kind::Inlined, "a.h", "main.cpp", 2).with_path("a.h");
        assert_eq!(item.kind, Kind::Inlined);
        assert_eq!(item.target.as_deref(), Some("a.h"));
        assert_eq!(item.from.as_deref(), Some("main.cpp"));
        assert_eq!(item.line, Some(2));
    }

    #[test]
    fn test_kind_serialization() {
        let item = ReportItem::system("vector");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"kind\":\"system\""));
        assert!(json.contains("\"header\":\"vector\""));
        assert!(!json.contains("\"path\""));
    }

    #[test]
    fn test_meta_serialization_skips_unset() {
        let item = ReportItem::root("main.cpp").with_meta(Meta {
            size: Some(12),
            hash: None,
            lossy: false,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"size\":12"));
        assert!(!json.contains("\"hash\""));
    }

    #[test]
    fn test_report_item_deserialization() {
        let json = r#"{"kind":"missing","target":"x.h","from":"main.cpp","line":4}"#;
        let item: ReportItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, Kind::Missing);
        assert_eq!(item.line, Some(4));
        assert_eq!(item.meta, Meta::default());
    }

    #[test]
    fn test_report_counts() {
        let mut report = Report::new();
        assert!(report.is_empty());
        report.push(ReportItem::root("main.cpp"));
        report.extend([ReportItem::system("a.h"), ReportItem::system("b.h")]);

        assert_eq!(report.len(), 3);
        assert_eq!(report.count(Kind::System), 2);
        assert_eq!(report.count(Kind::Inlined), 0);
        let headers: Vec<_> = report
            .of_kind(Kind::System)
            .filter_map(|i| i.header.as_deref())
            .collect();
        assert_eq!(headers, vec!["a.h", "b.h"]);
    }
}
