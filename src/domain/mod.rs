//! Domain layer: the taxonomy tree and its reports
//!
//! This layer is independent of external concerns (no I/O, no CLI, no file
//! parsing).

pub mod error;
pub mod node;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::TaxonNode;
pub use tree::{OutlineLine, TaxonomyTree};
