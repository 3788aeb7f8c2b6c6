//! Terminal output formatting
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::TaxonNode;

/// Print error (red "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print a labeled statistic
pub fn stat(label: &str, value: impl std::fmt::Display) {
    println!("{:<12}{}", format!("{label}:"), value);
}

/// Print plain output (no color, for report lines)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Convert a subtree into a termtree for display.
pub fn to_display_tree(node: &TaxonNode) -> Tree<String> {
    let leaves: Vec<_> = node.children.iter().map(to_display_tree).collect();
    Tree::new(node.name.clone()).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display_tree_renders_children() {
        let mut node = TaxonNode::new("Chordata", "Phylum");
        node.add_child("Aves", "Class");
        node.add_child("Mammalia", "Class");

        let rendered = to_display_tree(&node).to_string();
        assert!(rendered.starts_with("Chordata"));
        assert!(rendered.contains("Aves"));
        assert!(rendered.contains("Mammalia"));
    }
}
