//! taxotree: hierarchical classification builder.
//!
//! Rows of tabular data, each an ordered sequence of category labels
//! (Kingdom → Phylum → ... → Species), are merged into a tree that collapses
//! shared label prefixes onto shared ancestor nodes. Two reports are derived:
//! a numbered outline of every node with its full lineage, and the sorted
//! list of all leaf (scientific) names.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod loader;
pub mod util;

pub use domain::{DomainError, OutlineLine, TaxonNode, TaxonomyTree};
pub use loader::{load_tree, LoaderError, TaxonTable};
