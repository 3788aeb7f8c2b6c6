//! Tree node for the taxonomy hierarchy.

use std::cmp::Ordering;
use std::fmt;

use tracing::instrument;

/// A single node in the taxonomy tree.
///
/// `name` is a cell value of the source table (e.g. "Animalia"), `category`
/// the column header it came from (e.g. "Kingdom"). Children are exclusively
/// owned by their parent and kept sorted ascending by `name`.
///
/// Two distinct comparisons apply and must not be conflated:
/// - sorting order is by `name` alone (`by_name`),
/// - lookup identity is the full `(name, category)` pair (`matches`).
///
/// Two siblings may share a `name` across different categories; they sort
/// adjacently but are distinct nodes. A deliberately asymmetric pair of
/// comparison functions, kept separate so "sorts the same" is never mistaken
/// for "is the same node".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonNode {
    /// Cell value, e.g. "Chordata"
    pub name: String,
    /// Column header, e.g. "Phylum"
    pub category: String,
    /// Child nodes, sorted ascending by name
    pub children: Vec<TaxonNode>,
}

impl fmt::Display for TaxonNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

impl Default for TaxonNode {
    /// The sentinel root: empty name, empty category.
    fn default() -> Self {
        TaxonNode::new("", "")
    }
}

impl TaxonNode {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            children: Vec::new(),
        }
    }

    /// Sorting order: `name` only, categories are irrelevant here.
    pub fn by_name(a: &TaxonNode, b: &TaxonNode) -> Ordering {
        a.name.cmp(&b.name)
    }

    /// Lookup identity: exact `(name, category)` match.
    pub fn matches(&self, name: &str, category: &str) -> bool {
        self.name == name && self.category == category
    }

    /// Insert a new child, keeping the children sorted by name. Equal names
    /// keep insertion order, matching an append followed by a stable sort.
    ///
    /// Callers must check `has_child` first; inserting an already present
    /// `(name, category)` pair duplicates the node.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, name: &str, category: &str) -> &mut TaxonNode {
        let child = TaxonNode::new(name, category);
        let idx = self
            .children
            .partition_point(|c| Self::by_name(c, &child) != Ordering::Greater);
        self.children.insert(idx, child);
        &mut self.children[idx]
    }

    /// Walk-or-extend: return the matching child, creating it if absent.
    pub fn ensure_child(&mut self, name: &str, category: &str) -> &mut TaxonNode {
        if let Some(idx) = self.children.iter().position(|c| c.matches(name, category)) {
            &mut self.children[idx]
        } else {
            self.add_child(name, category)
        }
    }

    /// Linear scan for an exact `(name, category)` child.
    pub fn has_child(&self, name: &str, category: &str) -> bool {
        self.children.iter().any(|c| c.matches(name, category))
    }

    /// Linear scan, first exact match or `None`.
    pub fn get_child(&self, name: &str, category: &str) -> Option<&TaxonNode> {
        self.children.iter().find(|c| c.matches(name, category))
    }

    pub fn get_child_mut(&mut self, name: &str, category: &str) -> Option<&mut TaxonNode> {
        self.children.iter_mut().find(|c| c.matches(name, category))
    }

    /// A leaf is a node with no children (a terminal classification).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }
}
