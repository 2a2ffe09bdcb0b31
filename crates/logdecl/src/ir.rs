use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSeverity;
use crate::params::ParameterList;

/// Severity column of a catalog entry; mirrors the host's `os_log_type_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Default,
    Info,
    Error,
    Fault,
}

impl Severity {
    /// All severities, in the order the grammar lists them.
    pub const ALL: [Severity; 4] = [
        Severity::Default,
        Severity::Info,
        Severity::Error,
        Severity::Fault,
    ];

    /// The catalog keyword for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Fault => "FAULT",
        }
    }

    /// The `os_log_type_t` constant a log client passes for this severity.
    pub fn os_log_type(&self) -> &'static str {
        match self {
            Severity::Default => "OS_LOG_TYPE_DEFAULT",
            Severity::Info => "OS_LOG_TYPE_INFO",
            Severity::Error => "OS_LOG_TYPE_ERROR",
            Severity::Fault => "OS_LOG_TYPE_FAULT",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/// One parsed catalog entry.
///
/// Fields hold the raw matched text; nothing is normalized after matching, so
/// emitters reproduce the catalog byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// 1-based catalog line the entry was read from.
    pub line: usize,
    pub identifier: String,
    /// Adjacent string literals and format-specifier tokens, as written.
    pub format_string: String,
    /// Text between the parentheses of the parameter column.
    pub parameter_list: String,
    pub severity: Severity,
    /// May be empty.
    pub category: String,
}

impl LogMessage {
    /// Decomposes [`parameter_list`](Self::parameter_list) into type tokens.
    pub fn parameters(&self) -> ParameterList {
        ParameterList::parse(&self.parameter_list)
    }
}
