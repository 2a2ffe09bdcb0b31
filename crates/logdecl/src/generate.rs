//! End-to-end generation: read the catalog, then write each requested artifact.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::emit::{InterfaceOptions, render_declarations, render_interface, write_artifact};
use crate::error::{CatalogError, Result};
use crate::ir::LogMessage;
use crate::parser::{CatalogParser, duplicate_identifiers};

/// Inputs and outputs of one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub catalog: PathBuf,
    pub declarations: PathBuf,
    /// When `None`, no interface file is created or touched.
    pub interface: Option<PathBuf>,
    /// Fail on repeated identifiers instead of warning.
    pub deny_duplicates: bool,
    pub interface_options: InterfaceOptions,
}

impl GenerateOptions {
    pub fn new(catalog: impl Into<PathBuf>, declarations: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            declarations: declarations.into(),
            interface: None,
            deny_duplicates: false,
            interface_options: InterfaceOptions::default(),
        }
    }

    pub fn with_interface(mut self, interface: impl Into<PathBuf>) -> Self {
        self.interface = Some(interface.into());
        self
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub messages: usize,
    pub declarations: PathBuf,
    pub interface: Option<PathBuf>,
}

impl GenerateSummary {
    pub fn summary(&self) -> String {
        match &self.interface {
            Some(interface) => format!(
                "{} messages, declarations={}, interface={}",
                self.messages,
                self.declarations.display(),
                interface.display()
            ),
            None => format!(
                "{} messages, declarations={}",
                self.messages,
                self.declarations.display()
            ),
        }
    }
}

/// Reads and matches a catalog file.
pub fn read_catalog(path: &Path) -> Result<Vec<LogMessage>> {
    let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = CatalogParser::new().parse(&source)?;
    info!("{}: {} log messages", path.display(), records.len());
    Ok(records)
}

/// Reports identifiers defined more than once.
///
/// Each repeat is logged as a warning; with `deny` set the first repeat is
/// returned as [`CatalogError::DuplicateIdentifier`].
pub fn check_duplicates(records: &[LogMessage], deny: bool) -> Result<()> {
    for duplicate in duplicate_identifiers(records) {
        if deny {
            return Err(CatalogError::DuplicateIdentifier {
                identifier: duplicate.repeat.identifier.clone(),
                first_line: duplicate.first.line,
                line: duplicate.repeat.line,
            });
        }
        warn!(
            "log message `{}` on line {} repeats the definition on line {}",
            duplicate.repeat.identifier, duplicate.repeat.line, duplicate.first.line
        );
    }
    Ok(())
}

/// Runs the generator.
///
/// The whole catalog is matched before any output is opened, so a grammar
/// error leaves every target file untouched.
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    let records = read_catalog(&options.catalog)?;
    check_duplicates(&records, options.deny_duplicates)?;

    write_artifact(&options.declarations, &render_declarations(&records))?;
    if let Some(interface) = &options.interface {
        write_artifact(
            interface,
            &render_interface(&records, options.interface_options),
        )?;
    }

    Ok(GenerateSummary {
        messages: records.len(),
        declarations: options.declarations.clone(),
        interface: options.interface.clone(),
    })
}
