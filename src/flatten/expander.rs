//! Depth-first expansion of local includes
//!
//! Each local file is expanded at most once per run, at the first place it is
//! reached in line order (first-discovery-wins). A file is marked visited
//! before it is read, so direct and mutual self-inclusion terminate.
//!
//! Pending files live on an explicit stack of frames instead of the call
//! stack; a frame is resumed after the child it pushed has been spliced in.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::file_reader::{read_source, SourceLine, SourceText};
use crate::core::log::Logger;
use crate::core::model::{Kind, Meta, Report, ReportItem};
use crate::core::paths;
use crate::error::{FlattenError, Result};
use crate::flatten::collector::SystemIncludes;
use crate::flatten::directive::{self, Directive};
use crate::flatten::normalize::normalize;

/// What to do with a local include whose target does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Drop the directive without a word
    #[default]
    Silent,
    /// Drop the directive and print a warning
    Warn,
    /// Abort the run
    Error,
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" => Ok(MissingPolicy::Silent),
            "warn" => Ok(MissingPolicy::Warn),
            "error" => Ok(MissingPolicy::Error),
            _ => Err(format!("Unknown missing-include policy: {}", s)),
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPolicy::Silent => write!(f, "silent"),
            MissingPolicy::Warn => write!(f, "warn"),
            MissingPolicy::Error => write!(f, "error"),
        }
    }
}

/// Engine settings for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    pub missing: MissingPolicy,
}

/// Where a local include directive was found
#[derive(Debug, Clone, Copy)]
struct Site<'s> {
    target: &'s str,
    from: &'s Path,
    line: usize,
}

/// A file whose lines are still being walked
struct Frame {
    path: PathBuf,
    is_root: bool,
    lines: std::vec::IntoIter<SourceLine>,
    out: String,
}

impl Frame {
    /// The frame's finished text; only inlined content is normalized
    fn finish(self) -> String {
        if self.is_root {
            self.out
        } else {
            normalize(&self.out)
        }
    }
}

/// Traversal context for one run: visited files, collected system headers and
/// the report all live here, so separate runs never share state
pub struct Expander<'a> {
    options: ExpandOptions,
    log: &'a Logger,
    visited: HashSet<PathBuf>,
    system: SystemIncludes,
    report: Report,
    base: PathBuf,
}

impl<'a> Expander<'a> {
    pub fn new(options: ExpandOptions, log: &'a Logger) -> Self {
        Self {
            options,
            log,
            visited: HashSet::new(),
            system: SystemIncludes::new(),
            report: Report::new(),
            base: PathBuf::new(),
        }
    }

    /// Expand `path` and everything it locally includes
    ///
    /// The root's own text is returned exactly as written, minus system
    /// include lines and with local include lines replaced. A non-root file
    /// already expanded in this run yields empty text; otherwise its result is
    /// normalized.
    pub fn expand(&mut self, path: &Path, is_root: bool) -> Result<String> {
        if self.base.as_os_str().is_empty() {
            self.base = paths::report_base(path);
        }

        let first = if is_root {
            let source = self.load(path)?;
            let item = ReportItem::root(self.display(path)).with_meta(meta_of(&source));
            self.report.push(item);
            self.frame(source, true)
        } else {
            match self.enter(path, None)? {
                Some(frame) => frame,
                None => return Ok(String::new()),
            }
        };

        self.walk(first)
    }

    /// Consume the context, returning the collected headers and the report
    ///
    /// One system item per header is appended to the report, in sorted order.
    pub fn finish(mut self) -> (SystemIncludes, Report) {
        let headers: Vec<ReportItem> = self.system.iter().map(ReportItem::system).collect();
        self.report.extend(headers);
        (self.system, self.report)
    }

    fn walk(&mut self, first: Frame) -> Result<String> {
        let mut stack = vec![first];

        while let Some(mut frame) = stack.pop() {
            match frame.lines.next() {
                Some(line) => {
                    let child = self.visit_line(&mut frame, line)?;
                    stack.push(frame);
                    if let Some(child) = child {
                        stack.push(child);
                    }
                }
                None => {
                    let text = frame.finish();
                    match stack.last_mut() {
                        Some(parent) => parent.out.push_str(&text),
                        None => return Ok(text),
                    }
                }
            }
        }

        // The bottom frame returns its text above
        Ok(String::new())
    }

    /// Copy an ordinary line through, or open the file a local include names
    fn visit_line(&mut self, frame: &mut Frame, line: SourceLine) -> Result<Option<Frame>> {
        let Some(Directive::Local(target)) = directive::parse(&line.text) else {
            frame.out.push_str(&line.text);
            return Ok(None);
        };

        let site = Site {
            target,
            from: &frame.path,
            line: line.number,
        };
        let resolved = paths::resolve_include(site.from, target);
        if resolved.exists() {
            self.enter(&resolved, Some(site))
        } else {
            self.missing(&resolved, site)?;
            Ok(None)
        }
    }

    /// Mark a local file visited and load it, unless it already was
    fn enter(&mut self, path: &Path, site: Option<Site<'_>>) -> Result<Option<Frame>> {
        let shown = self.display(path);

        if !self.visited.insert(paths::identity(path)) {
            self.log.debug(format_args!("skip {} (already inlined)", shown));
            let item = self.site_item(Kind::Duplicate, site).with_path(shown);
            self.report.push(item);
            return Ok(None);
        }

        let source = self.load(path)?;
        self.log.debug(format_args!("inline {}", shown));
        let item = self
            .site_item(Kind::Inlined, site)
            .with_path(shown)
            .with_meta(meta_of(&source));
        self.report.push(item);

        Ok(Some(self.frame(source, false)))
    }

    fn load(&self, path: &Path) -> Result<SourceText> {
        let source = read_source(path)?;
        if source.lossy {
            self.log.warn(format_args!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            ));
        }
        Ok(source)
    }

    /// Apply the missing-include policy to a directive whose target is absent
    fn missing(&mut self, resolved: &Path, site: Site<'_>) -> Result<()> {
        let item = self
            .site_item(Kind::Missing, Some(site))
            .with_path(self.display(resolved));
        self.report.push(item);

        match self.options.missing {
            MissingPolicy::Silent => {
                self.log.debug(format_args!(
                    "drop {}:{}: \"{}\" not found",
                    site.from.display(),
                    site.line,
                    site.target
                ));
                Ok(())
            }
            MissingPolicy::Warn => {
                self.log.warn(format_args!(
                    "{}:{}: local include \"{}\" not found, dropping it",
                    site.from.display(),
                    site.line,
                    site.target
                ));
                Ok(())
            }
            MissingPolicy::Error => Err(FlattenError::MissingInclude {
                from: site.from.to_path_buf(),
                line: site.line,
                target: site.target.to_string(),
            }),
        }
    }

    /// Strip system includes and set up a frame over the remaining lines
    fn frame(&mut self, source: SourceText, is_root: bool) -> Frame {
        let lines = self.system.extract(source.lines);
        Frame {
            path: source.path,
            is_root,
            lines: lines.into_iter(),
            out: String::new(),
        }
    }

    fn site_item(&self, kind: Kind, site: Option<Site<'_>>) -> ReportItem {
        match site {
            Some(site) => ReportItem::include(kind, site.target, self.display(site.from), site.line),
            None => ReportItem::file(kind),
        }
    }

    fn display(&self, path: &Path) -> String {
        paths::display_path(path, &self.base)
    }
}

fn meta_of(source: &SourceText) -> Meta {
    Meta {
        size: Some(source.size),
        hash: Some(source.hash.clone()),
        lossy: source.lossy,
    }
}
