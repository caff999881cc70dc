//! Catalog loading service
//!
//! Turns comma-delimited catalog lines into course records and feeds them to a
//! session's index.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, Session};
use crate::domain::{CourseRecord, DomainError, InsertOutcome};
use crate::infrastructure::traits::FileSystem;

/// A catalog line that could not be turned into a course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    /// The raw line as read
    pub content: String,
    pub error: DomainError,
}

/// Summary of one loader pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the index
    pub inserted: usize,
    /// Well-formed records dropped because their identifier was already present
    pub duplicates: usize,
    /// Malformed lines, in file order
    pub rejected: Vec<RejectedLine>,
}

impl LoadReport {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Service for loading course catalogs into a session.
pub struct CatalogService {
    fs: Arc<dyn FileSystem>,
    max_prerequisites: usize,
}

impl CatalogService {
    /// Create a new catalog service.
    ///
    /// `max_prerequisites` bounds how many prerequisite columns are read per line.
    pub fn new(fs: Arc<dyn FileSystem>, max_prerequisites: usize) -> Self {
        Self {
            fs,
            max_prerequisites,
        }
    }

    /// Read the catalog at `path` and insert its courses into `session`.
    ///
    /// Malformed lines do not abort loading; they are collected in the report.
    /// Only an unreadable file is an error.
    #[instrument(level = "debug", skip(self, session))]
    pub fn load(&self, path: &Path, session: &mut Session) -> ApplicationResult<LoadReport> {
        // Check file exists first - give clear error message
        if !self.fs.exists(path) {
            return Err(ApplicationError::CatalogNotFound(path.to_path_buf()));
        }
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("not a file: {}", path.display()),
                source: Box::new(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "catalog must be a regular file",
                )),
            });
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read catalog", path)?;
        let report = self.load_str(&content, session);
        info!(
            "loaded {}: {} inserted, {} duplicates, {} rejected",
            path.display(),
            report.inserted,
            report.duplicates,
            report.rejected.len()
        );
        Ok(report)
    }

    /// Insert the courses of already-read catalog text into `session`.
    pub fn load_str(&self, content: &str, session: &mut Session) -> LoadReport {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut report = LoadReport::default();

        for (i, line) in content.lines().enumerate() {
            let line_number = i + 1;
            if line.is_empty() {
                continue;
            }

            let parsed = match CourseRecord::parse_line(line, self.max_prerequisites) {
                Ok(parsed) => parsed,
                Err(error) => {
                    warn!("line {}: invalid format: {} ({})", line_number, line, error);
                    report.rejected.push(RejectedLine {
                        line_number,
                        content: line.to_string(),
                        error,
                    });
                    continue;
                }
            };

            if parsed.ignored_columns > 0 {
                warn!(
                    "line {}: ignoring {} prerequisite column(s) beyond {}",
                    line_number, parsed.ignored_columns, self.max_prerequisites
                );
            }

            match session.index_mut().insert(parsed.record) {
                InsertOutcome::Inserted => report.inserted += 1,
                InsertOutcome::Duplicate => {
                    debug!("line {}: duplicate course, keeping first", line_number);
                    report.duplicates += 1;
                }
            }
        }

        report
    }
}
