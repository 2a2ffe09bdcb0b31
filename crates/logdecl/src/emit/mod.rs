//! Text emitters for the generated C++ artifacts.
//!
//! Renderers are pure functions from records to text; [`write_artifact`]
//! performs the single open-truncate-write-close step per output file.

pub mod declarations;
pub mod interface;

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{CatalogError, Result};

pub use declarations::render_declarations;
pub use interface::{InterfaceOptions, render_interface};

/// Replaces the file at `path` with `contents`.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
