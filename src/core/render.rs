//! Renderer module
//!
//! Renders a flatten Report to different output formats: jsonl, json, md

use crate::core::model::{Kind, Report, ReportItem};
use std::io::Write;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(ReportFormat::Jsonl),
            "json" => Ok(ReportFormat::Json),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: ReportFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: ReportFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for flatten reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            ReportFormat::Jsonl => self.render_jsonl(report),
            ReportFormat::Json => self.render_json(report),
            ReportFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer, terminated by a newline
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let mut output = self.render(report);
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        writer.write_all(output.as_bytes())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &Report) -> String {
        report
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &Report) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&report.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&report.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        if let Some(root) = report.of_kind(Kind::Root).next() {
            output.push_str(&format!(
                "# Flatten report for `{}`\n\n",
                root.path.as_deref().unwrap_or("?")
            ));
        }

        output.push_str(&format!(
            "- inlined: {}\n- duplicates: {}\n- missing: {}\n- system headers: {}\n\n",
            report.count(Kind::Inlined),
            report.count(Kind::Duplicate),
            report.count(Kind::Missing),
            report.count(Kind::System),
        ));

        let sections = [
            (Kind::Inlined, "Inlined Files"),
            (Kind::Duplicate, "Suppressed Duplicates"),
            (Kind::Missing, "Missing Includes"),
        ];
        for (kind, title) in sections {
            if report.count(kind) == 0 {
                continue;
            }
            output.push_str(&format!("## {}\n\n", title));
            for item in report.of_kind(kind) {
                self.render_include_md(&mut output, item);
            }
            output.push('\n');
        }

        if report.count(Kind::System) > 0 {
            output.push_str("## System Headers\n\n");
            for item in report.of_kind(Kind::System) {
                if let Some(header) = &item.header {
                    output.push_str(&format!("- `<{}>`\n", header));
                }
            }
            output.push('\n');
        }

        output
    }

    fn render_include_md(&self, output: &mut String, item: &ReportItem) {
        let shown = item
            .path
            .as_deref()
            .or(item.target.as_deref())
            .unwrap_or("?");
        output.push_str(&format!("- `{}`", shown));

        if let (Some(from), Some(line)) = (&item.from, item.line) {
            output.push_str(&format!(" (from `{}`:{})", from, line));
        }
        if let Some(size) = item.meta.size {
            output.push_str(&format!(" {} bytes", size));
        }
        if item.meta.lossy {
            output.push_str(" ⚠️ lossy UTF-8");
        }
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Meta;

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.push(ReportItem::root("main.cpp"));
        report.push(
            ReportItem::include(Kind::Inlined, "a.h", "main.cpp", 2)
                .with_path("a.h")
                .with_meta(Meta {
                    size: Some(40),
                    hash: Some("0011223344556677".to_string()),
                    lossy: false,
                }),
        );
        report.push(ReportItem::include(Kind::Missing, "gone.h", "a.h", 3));
        report.push(ReportItem::system("vector"));
        report
    }

    fn renderer(format: ReportFormat) -> Renderer {
        Renderer::with_config(RenderConfig::with_pretty(format, false))
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("jsonl".parse::<ReportFormat>(), Ok(ReportFormat::Jsonl));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("markdown".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert!("xml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_render_jsonl() {
        let output = renderer(ReportFormat::Jsonl).render(&sample_report());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("\"kind\":\"root\""));
        assert!(lines[3].contains("\"header\":\"vector\""));
    }

    #[test]
    fn test_render_json() {
        let output = renderer(ReportFormat::Json).render(&sample_report());
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[1]["line"], 2);
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(ReportFormat::Json, true);
        let output = Renderer::with_config(config).render(&sample_report());
        assert!(output.contains("\n  {"));
    }

    #[test]
    fn test_render_markdown() {
        let output = renderer(ReportFormat::Markdown).render(&sample_report());
        assert!(output.starts_with("# Flatten report for `main.cpp`"));
        assert!(output.contains("- inlined: 1\n"));
        assert!(output.contains("## Inlined Files\n\n- `a.h` (from `main.cpp`:2) 40 bytes\n"));
        assert!(output.contains("## Missing Includes\n\n- `gone.h` (from `a.h`:3)\n"));
        assert!(output.contains("- `<vector>`"));
        assert!(!output.contains("## Suppressed Duplicates"));
    }

    #[test]
    fn test_render_to_appends_newline() {
        let mut buffer = Vec::new();
        renderer(ReportFormat::Jsonl)
            .render_to(&sample_report(), &mut buffer)
            .unwrap();
        assert!(buffer.ends_with(b"\n"));
    }

    #[test]
    fn test_render_empty_jsonl() {
        let output = renderer(ReportFormat::Jsonl).render(&Report::new());
        assert!(output.is_empty());
    }
}
