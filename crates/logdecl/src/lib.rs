//! # logdecl
//!
//! Generator for log-message declarations.
//!
//! A *catalog* lists one log message per line:
//!
//! ```text
//! # IDENTIFIER, "format" [PRI*|PUBLIC_LOG_STRING|PRIVATE_LOG_STRING], (types), SEVERITY, Category
//! MYLOG_START, "Starting %d" PRIu32, (int), INFO, Network
//! ```
//!
//! From the catalog two C++ artifacts are produced:
//!
//! - a **declarations header** with one `#define MESSAGE_<IDENTIFIER> <format>` per
//!   message, and
//! - an **interface header** declaring `WebCore::LogClient`, an abstract class
//!   with one overridable no-op `virtual void <IDENTIFIER>(...)` per message.
//!
//! Both outputs are byte-for-byte deterministic: they depend only on the
//! catalog text, and messages appear in catalog order.
//!
//! ## Architecture
//!
//! ```text
//! catalog text ──► CatalogParser ──► Vec<LogMessage> ──┬──► render_declarations
//!                  (parser)          (ir)              └──► render_interface
//!                                                           (emit, params)
//! ```
//!
//! ## Examples
//!
//! ```
//! use logdecl::CatalogParser;
//! use logdecl::emit::{InterfaceOptions, render_declarations, render_interface};
//!
//! let catalog = "MYLOG_START, \"Starting %d\" PRIu32, (int), INFO, Network\n";
//! let records = CatalogParser::new().parse(catalog)?;
//!
//! let declarations = render_declarations(&records);
//! assert!(declarations.ends_with("#define MESSAGE_MYLOG_START \"Starting %d\" PRIu32\n"));
//!
//! let interface = render_interface(&records, InterfaceOptions::default());
//! assert!(interface.contains("    virtual void MYLOG_START(int) { }\n"));
//! # Ok::<(), logdecl::CatalogError>(())
//! ```
//!
//! ### Exporting to JSON
//!
//! ```
//! use logdecl::CatalogParser;
//!
//! let records = CatalogParser::new().parse("A, \"a\", (), FAULT, X\n")?;
//! let json = serde_json::to_string(&records)?;
//! assert!(json.contains("\"severity\":\"FAULT\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Artifact renderers.
pub mod emit;
/// Error types.
pub mod error;
/// Catalog-to-files driver.
pub mod generate;
/// Parsed catalog records.
pub mod ir;
/// Parameter list decomposition.
pub mod params;
/// Catalog line matcher.
pub mod parser;


pub use error::{CatalogError, Result};
pub use generate::{GenerateOptions, GenerateSummary, generate, read_catalog};
pub use ir::{LogMessage, Severity};
pub use params::{ParameterList, RenderOptions};
pub use parser::CatalogParser;

/// Schema version of the JSON record dump.
///
/// - MAJOR: Breaking changes to record structure
/// - MINOR: New optional fields
/// - PATCH: Bug fixes to matching behavior
pub const SCHEMA_VERSION: &str = "1.0.0";
