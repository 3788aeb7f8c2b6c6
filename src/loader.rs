//! CSV loading for taxonomy tables.
//!
//! Table contract: the header row carries the category labels, the first
//! column is an arbitrary row identifier, and every later column is one
//! classification level, coarsest to finest.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{DomainError, TaxonomyTree};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("cannot read table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid table {path}: {message}")]
    InvalidTable { path: PathBuf, message: String },

    #[error("invalid row {row} in {path}: {source}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        #[source]
        source: DomainError,
    },
}

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// An in-memory taxonomy table: category headers plus classification rows,
/// identifier column already stripped.
#[derive(Debug, Clone)]
pub struct TaxonTable {
    path: PathBuf,
    categories: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TaxonTable {
    /// Read a CSV file into a table.
    ///
    /// Ragged records are rejected by the reader (no silent truncation or
    /// padding); a header without classification columns is rejected here.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> LoaderResult<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let headers = reader.headers().map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // First column is the row identifier, not a classification level.
        let categories: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        if categories.is_empty() {
            return Err(LoaderError::InvalidTable {
                path: path.to_path_buf(),
                message: "no classification columns after the identifier column".to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| LoaderError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            rows.push(record.iter().skip(1).map(str::to_string).collect());
        }
        debug!(
            "loaded {} rows with {} categories from {}",
            rows.len(),
            categories.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            categories,
            rows,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Feed every row to the tree, one walk-or-extend insertion each.
    #[instrument(level = "debug", skip(self))]
    pub fn build_tree(&self) -> LoaderResult<TaxonomyTree> {
        let mut tree = TaxonomyTree::new();
        for (i, row) in self.rows.iter().enumerate() {
            tree.add_row(row, &self.categories)
                .map_err(|source| LoaderError::InvalidRow {
                    path: self.path.clone(),
                    // 1-based, counting the header as row 1
                    row: i + 2,
                    source,
                })?;
        }
        Ok(tree)
    }
}

/// Load a table and build its tree in one step.
pub fn load_tree(path: &Path) -> LoaderResult<TaxonomyTree> {
    TaxonTable::load(path)?.build_tree()
}
