// src/parser.rs

//! Turns the raw comma-separated sources into lookup tables.
//!
//! Every source starts with a header line that is skipped without being
//! checked. Lines are split on every comma, quotes carry no meaning. Rows
//! with the wrong number of fields are logged and skipped, the rest of the
//! stream is still read.

use crate::model::*;
use csv::{ReaderBuilder, StringRecord};
use indicatif::ProgressBar;
use std::io::{self, Read};
use tracing::{debug, warn};

/// A row type that can be read from one of the input files
pub trait Record: Sized {
    const ROLE: SourceRole;
    /// Number of fields a well-formed row has
    const FIELDS: usize;

    /// Only called with exactly `FIELDS` fields.
    fn from_fields(fields: &StringRecord) -> Self;

    /// The key the record is grouped under
    fn key(&self) -> &str;
}

/// Field `i` without trailing whitespace
fn field(fields: &StringRecord, i: usize) -> &str {
    fields.get(i).unwrap_or_default().trim_end()
}

impl Record for Actor {
    const ROLE: SourceRole = SourceRole::Actor;
    const FIELDS: usize = 2;

    fn from_fields(fields: &StringRecord) -> Self {
        Actor {
            id: field(fields, 0).to_string(),
            username: field(fields, 1).to_lowercase(),
            ..Actor::default()
        }
    }

    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for Repo {
    const ROLE: SourceRole = SourceRole::Repo;
    const FIELDS: usize = 2;

    fn from_fields(fields: &StringRecord) -> Self {
        Repo {
            id: field(fields, 0).to_string(),
            name: field(fields, 1).to_lowercase(),
            count: 0,
        }
    }

    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for Event {
    const ROLE: SourceRole = SourceRole::Event;
    const FIELDS: usize = 4;

    fn from_fields(fields: &StringRecord) -> Self {
        Event {
            id: field(fields, 0).to_string(),
            kind: field(fields, 1).to_lowercase(),
            actor_id: field(fields, 2).to_string(),
            repo_id: field(fields, 3).to_string(),
        }
    }

    // Events are indexed by type, not by their own id.
    fn key(&self) -> &str {
        &self.kind
    }
}

/// A skipped row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowIssue {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {reason}")]
    Undecodable { line: u64, reason: String },
}

#[derive(Debug)]
pub struct Parsed<R> {
    pub table: Lookup<R>,
    /// Well-formed rows that made it into the table
    pub rows: usize,
    pub issues: Vec<RowIssue>,
}

/// Reads one source into a lookup table.
///
/// Only a failure of the underlying reader is returned as an error; malformed
/// rows end up in [`Parsed::issues`].
pub fn parse<R: Record>(reader: impl Read, progress: &ProgressBar) -> io::Result<Parsed<R>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut parsed = Parsed {
        table: Lookup::default(),
        rows: 0,
        issues: Vec::new(),
    };

    for result in csv_reader.records() {
        progress.inc(1);
        let fields = match result {
            Ok(fields) => fields,
            Err(err) if err.is_io_error() => {
                warn!(role = %R::ROLE, "read failed: {}", err);
                return Err(match err.into_kind() {
                    csv::ErrorKind::Io(io_err) => io_err,
                    other => io::Error::other(format!("{:?}", other)),
                });
            }
            Err(err) => {
                let line = err.position().map_or(0, |p| p.line());
                let issue = RowIssue::Undecodable { line, reason: err.to_string() };
                warn!(role = %R::ROLE, "skipping row, {}", issue);
                parsed.issues.push(issue);
                continue;
            }
        };

        if fields.len() != R::FIELDS {
            let line = fields.position().map_or(0, |p| p.line());
            let issue = RowIssue::FieldCount {
                line,
                expected: R::FIELDS,
                found: fields.len(),
            };
            warn!(role = %R::ROLE, "data incorrectly formatted, {}: {:?}", issue, fields);
            parsed.issues.push(issue);
            continue;
        }

        let record = R::from_fields(&fields);
        parsed.table.insert(record.key().to_string(), record);
        parsed.rows += 1;
    }

    debug!(
        role = %R::ROLE,
        rows = parsed.rows,
        keys = parsed.table.len(),
        skipped = parsed.issues.len(),
        "source parsed"
    );
    Ok(parsed)
}
