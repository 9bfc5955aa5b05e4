//! Benchmark source trait and the offline sources.
//!
//! - [`StaticBenchmarkSource`]: a table supplied in memory or from config
//! - [`JsonFileBenchmarkSource`]: a table read from a JSON file on every fetch
//!
//! The networked sources live in [`crate::sie`] and [`crate::legacy`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MarketDataError, MarketResult};
use crate::table::{BenchmarkTable, TableRecord};

/// Where a source gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Structured REST API
    Api,
    /// Text extraction from an HTML page
    Scrape,
    /// Local file
    File,
    /// Manual entry
    Manual,
}

/// A provider of CETES benchmark yields.
///
/// Instruments take a [`BenchmarkTable`] at construction; sources are how
/// callers obtain one. Each call to [`fetch`](Self::fetch) hits the
/// underlying source again.
pub trait BenchmarkSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Fetch the current table.
    fn fetch(&self) -> MarketResult<BenchmarkTable>;
}

impl<S: BenchmarkSource + ?Sized> BenchmarkSource for Box<S> {
    fn source_type(&self) -> SourceType {
        (**self).source_type()
    }

    fn fetch(&self) -> MarketResult<BenchmarkTable> {
        (**self).fetch()
    }
}

// =============================================================================
// STATIC SOURCE
// =============================================================================

/// Returns a fixed table. For tests, backfills and manual overrides.
#[derive(Debug, Clone)]
pub struct StaticBenchmarkSource {
    table: BenchmarkTable,
}

impl StaticBenchmarkSource {
    /// Create a new static source.
    pub fn new(table: BenchmarkTable) -> Self {
        Self { table }
    }
}

impl BenchmarkSource for StaticBenchmarkSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    fn fetch(&self) -> MarketResult<BenchmarkTable> {
        Ok(self.table.clone())
    }
}

// =============================================================================
// JSON FILE SOURCE
// =============================================================================

/// Reads a [`TableRecord`] from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileBenchmarkSource {
    file_path: PathBuf,
}

impl JsonFileBenchmarkSource {
    /// Create a new file source. The file is not read until [`fetch`](BenchmarkSource::fetch).
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl BenchmarkSource for JsonFileBenchmarkSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn fetch(&self) -> MarketResult<BenchmarkTable> {
        debug!(path = %self.file_path.display(), "Loading benchmark table");
        let content = std::fs::read_to_string(&self.file_path)?;
        let record: TableRecord =
            serde_json::from_str(&content).map_err(|e| MarketDataError::Parse(e.to_string()))?;
        BenchmarkTable::try_from(record)
    }
}
