//! Multi-format export.
//!
//! One [`Table`] per export kind is rendered by the delimited text,
//! workbook, or paginated document renderer; [`ExportService`] runs the
//! whole pipeline from raw parameters to an [`ExportArtifact`].

pub mod document;
pub mod error;
pub mod filename;
pub mod service;
pub mod spreadsheet;
pub mod table;
pub mod tabular;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use service::{ExportService, ExportSettings};
pub use table::{Cell, Table};
pub use types::*;
