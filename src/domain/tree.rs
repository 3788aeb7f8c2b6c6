//! Taxonomy tree: row insertion and the two report traversals.

use std::fmt;

use itertools::Itertools;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::TaxonNode;

/// One line of the hierarchical outline report.
///
/// `line_no` is a global 1-based counter over the whole traversal,
/// `outline` the dotted 1-based sibling-index path (e.g. "1.2.1."),
/// `lineage` the dotted ancestor chain including the node itself
/// (e.g. "Animalia.Chordata.Mammalia.").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    pub line_no: usize,
    pub outline: String,
    pub lineage: String,
}

impl fmt::Display for OutlineLine {
    /// Column widths match the original report layout; the padding is
    /// cosmetic, the three fields are the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}{:<30} {}", self.line_no, self.outline, self.lineage)
    }
}

/// Tree merging classification rows on shared label prefixes.
///
/// The root is a sentinel with empty name and category, used only as the
/// attachment point. It never appears in any report.
///
/// Lifecycle: built row by row via [`add_row`](Self::add_row), then read via
/// the report operations. Reports are pure and may be interleaved with
/// insertions; they reflect whatever has been inserted so far.
///
/// Recursion depth is bounded by the category count of the source table
/// (tens of levels at most). Unbounded category counts would require
/// converting the traversals to an explicit stack.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyTree {
    root: TaxonNode,
}

impl TaxonomyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sentinel root, mainly useful for structural inspection in tests.
    pub fn root(&self) -> &TaxonNode {
        &self.root
    }

    /// Insert one classification row: `names` are the cell values, and
    /// `categories` the column headers, both ordered coarsest to finest.
    ///
    /// Walk-or-extend: at each level the matching `(name, category)` child is
    /// reused if present, created otherwise, so rows sharing a label prefix
    /// collapse onto one path.
    ///
    /// The row is validated before the first mutation: a length mismatch or
    /// an empty name rejects the call and leaves the tree untouched.
    #[instrument(level = "debug", skip(self, names, categories))]
    pub fn add_row<N, C>(&mut self, names: &[N], categories: &[C]) -> DomainResult<()>
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        if names.len() != categories.len() {
            return Err(DomainError::LengthMismatch {
                names: names.len(),
                categories: categories.len(),
            });
        }
        if let Some(position) = names.iter().position(|n| n.as_ref().is_empty()) {
            return Err(DomainError::EmptyName { position });
        }

        let mut current = &mut self.root;
        for (name, category) in names.iter().zip(categories.iter()) {
            current = current.ensure_child(name.as_ref(), category.as_ref());
        }
        Ok(())
    }

    /// Depth-first pre-order outline over the root's children.
    ///
    /// Threads three accumulators through the recursion: the global line
    /// counter (derived from lines emitted so far), the outline string
    /// (parent outline plus the 1-based child index), and the dotted
    /// ancestor prefix. An empty tree yields no lines.
    #[instrument(level = "debug", skip(self))]
    pub fn outline(&self) -> Vec<OutlineLine> {
        let mut lines = Vec::new();
        Self::collect_outline(&self.root, "", "", &mut lines);
        lines
    }

    fn collect_outline(
        node: &TaxonNode,
        outline: &str,
        ancestors: &str,
        lines: &mut Vec<OutlineLine>,
    ) {
        // The sentinel root contributes no line and no prefix segment.
        let lineage = if node.name.is_empty() {
            ancestors.to_string()
        } else {
            let lineage = format!("{ancestors}{}.", node.name);
            lines.push(OutlineLine {
                line_no: lines.len() + 1,
                outline: outline.to_string(),
                lineage: lineage.clone(),
            });
            lineage
        };

        for (i, child) in node.children.iter().enumerate() {
            let child_outline = format!("{outline}{}.", i + 1);
            Self::collect_outline(child, &child_outline, &lineage, lines);
        }
    }

    /// All leaf names, sorted ascending. Idempotent; an empty tree yields an
    /// empty list rather than the sentinel's empty name.
    #[instrument(level = "debug", skip(self))]
    pub fn scientific_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        Self::collect_leaves(&self.root, &mut names);
        names.into_iter().sorted().collect()
    }

    fn collect_leaves(node: &TaxonNode, names: &mut Vec<String>) {
        if node.is_leaf() {
            if !node.name.is_empty() {
                names.push(node.name.clone());
            }
        } else {
            for child in &node.children {
                Self::collect_leaves(child, names);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Longest classification chain below the sentinel root; equals the
    /// category count of the deepest inserted row.
    pub fn depth(&self) -> usize {
        self.root.depth() - 1
    }

    /// Number of nodes excluding the sentinel root.
    pub fn node_count(&self) -> usize {
        fn count(node: &TaxonNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        count(&self.root) - 1
    }

    pub fn leaf_count(&self) -> usize {
        self.scientific_names().len()
    }
}
