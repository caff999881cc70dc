//! Domain entities: core data structures

use serde::Serialize;

use crate::domain::DomainError;

/// Column separator of catalog lines.
pub const FIELD_DELIMITER: char = ',';

/// One catalog entry.
///
/// Immutable after construction: fields are private and only reachable via
/// accessors. The constructor guarantees a non-empty identifier and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    identifier: String,
    title: String,
    prerequisites: Vec<String>,
}

impl CourseRecord {
    /// Create a well-formed record.
    ///
    /// Identifier and title are stored verbatim (no trimming, no case folding).
    /// Prerequisites are not checked for duplicates, self-reference or existence.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Result<Self, DomainError> {
        let identifier = identifier.into();
        let title = title.into();

        if identifier.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        if title.is_empty() {
            return Err(DomainError::EmptyTitle(identifier));
        }

        Ok(Self {
            identifier,
            title,
            prerequisites,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Parse one catalog line of the shape `identifier,title,prereq?,prereq?`.
    ///
    /// Extracts:
    /// - identifier from column 1, title from column 2
    /// - non-empty prerequisites from the first `max_prerequisites` columns
    ///   after the title
    ///
    /// The limit is positional: an empty column still takes its slot, it just
    /// contributes nothing. Columns past the limit are dropped and counted in
    /// [`ParsedLine::ignored_columns`], empty or not.
    pub fn parse_line(line: &str, max_prerequisites: usize) -> Result<ParsedLine, DomainError> {
        let mut fields = line.split(FIELD_DELIMITER);

        // split always yields at least one item
        let identifier = fields.next().unwrap_or_default();
        if identifier.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        let title = fields
            .next()
            .ok_or_else(|| DomainError::MissingTitle(identifier.to_string()))?;

        let mut prerequisites = Vec::new();
        let mut ignored_columns = 0;
        for (column, prereq) in fields.enumerate() {
            if column >= max_prerequisites {
                ignored_columns += 1;
                continue;
            }
            if !prereq.is_empty() {
                prerequisites.push(prereq.to_string());
            }
        }

        let record = Self::new(identifier, title, prerequisites)?;
        Ok(ParsedLine {
            record,
            ignored_columns,
        })
    }
}

/// Result of parsing one catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub record: CourseRecord,
    /// Prerequisite columns present on the line but beyond the configured limit
    pub ignored_columns: usize,
}
