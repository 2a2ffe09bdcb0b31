use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CatalogError, Result};
use crate::ir::{LogMessage, Severity};

/// A string literal, optionally followed by a format-specifier macro.
const LITERAL: &str =
    r#""[\w:;%~'\-\[\]=,.(){} ]*"\s*(?:PRI[A-Za-z0-9]+|PUBLIC_LOG_STRING|PRIVATE_LOG_STRING)?"#;
const SEPARATOR: &str = r"\s*,\s*";

static GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    let pattern = [
        r"^\s*(?P<identifier>[A-Z_0-9]+)".to_string(),
        format!(r"(?P<format_string>(?:{LITERAL}\s*)+)"),
        r"\((?P<parameter_list>.*)\)".to_string(),
        r"(?P<severity>DEFAULT|INFO|ERROR|FAULT)".to_string(),
        r"(?P<category>\w*)".to_string(),
    ]
    .join(SEPARATOR);
    Regex::new(&pattern).unwrap()
});

/// A streaming matcher for log-message catalogs.
///
/// `CatalogParser` accepts the catalog in arbitrary chunks. Complete lines are
/// matched as soon as they arrive; a trailing partial line is held back until
/// more input or [`finish`](Self::finish) is seen. Feeding a catalog in pieces
/// yields the same records, in the same order, as [`parse`](Self::parse).
///
/// The first line that is neither blank, a `#` comment, nor a match for the
/// grammar aborts parsing with [`CatalogError::Grammar`].
pub struct CatalogParser {
    buffer: String,
    line_number: usize,
}

impl Default for CatalogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogParser {
    /// Creates a parser positioned before the first catalog line.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            line_number: 0,
        }
    }

    /// Appends input and matches every line it completes.
    ///
    /// # Returns
    ///
    /// The records defined by the newly completed lines, in catalog order.
    pub fn update(&mut self, input: &str) -> Result<Vec<LogMessage>> {
        self.buffer.push_str(input);
        self.process_buffer()
    }

    /// Consumes the parser, treating any buffered partial line as the last line.
    pub fn finish(mut self) -> Result<Vec<LogMessage>> {
        if self.buffer.is_empty() {
            return Ok(Vec::new());
        }
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.process_buffer()
    }

    /// Parses a complete catalog at once.
    pub fn parse(mut self, input: &str) -> Result<Vec<LogMessage>> {
        let mut records = self.update(input)?;
        records.extend(self.finish()?);
        Ok(records)
    }

    fn process_buffer(&mut self) -> Result<Vec<LogMessage>> {
        let process_len = match self.buffer.rfind('\n') {
            Some(last_nl) => last_nl + 1,
            None => return Ok(Vec::new()),
        };

        let mut records = Vec::new();
        for raw_line in self.buffer[..process_len].split_inclusive('\n') {
            self.line_number += 1;
            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(record) = match_line(line, self.line_number)? {
                records.push(record);
            }
        }

        self.buffer.drain(..process_len);
        Ok(records)
    }
}

/// Matches a single catalog line (without its terminator).
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn match_line(line: &str, line_number: usize) -> Result<Option<LogMessage>> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let grammar_error = || CatalogError::Grammar {
        line: line_number,
        text: line.to_string(),
    };

    let caps = GRAMMAR.captures(line).ok_or_else(grammar_error)?;
    let severity: Severity = caps["severity"].parse().map_err(|_| grammar_error())?;

    if let Some(whole) = caps.get(0)
        && whole.end() < line.len()
    {
        debug!(
            "line {}: ignoring trailing text {:?}",
            line_number,
            &line[whole.end()..]
        );
    }

    let record = LogMessage {
        line: line_number,
        identifier: caps["identifier"].to_string(),
        format_string: caps["format_string"].to_string(),
        parameter_list: caps["parameter_list"].to_string(),
        severity,
        category: caps["category"].to_string(),
    };
    debug!("line {}: matched {}", line_number, record.identifier);
    Ok(Some(record))
}

/// A later definition reusing an identifier that already appeared.
#[derive(Debug, Clone, Copy)]
pub struct Duplicate<'a> {
    pub first: &'a LogMessage,
    pub repeat: &'a LogMessage,
}

/// Finds every record whose identifier was already defined earlier in the catalog.
pub fn duplicate_identifiers(records: &[LogMessage]) -> Vec<Duplicate<'_>> {
    let mut seen: HashMap<&str, &LogMessage> = HashMap::new();
    let mut duplicates = Vec::new();
    for record in records {
        match seen.entry(record.identifier.as_str()) {
            Entry::Occupied(entry) => duplicates.push(Duplicate {
                first: *entry.get(),
                repeat: record,
            }),
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }
    duplicates
}
