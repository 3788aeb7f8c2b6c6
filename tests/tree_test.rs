//! Tests for TaxonomyTree structural invariants

use rstest::{fixture, rstest};

use taxotree::domain::{DomainError, TaxonomyTree};
use taxotree::util::testing;

const CATEGORIES: [&str; 4] = ["Kingdom", "Phylum", "Class", "Order"];

#[fixture]
fn animal_tree() -> TaxonomyTree {
    testing::init_test_setup();
    let mut tree = TaxonomyTree::new();
    tree.add_row(
        &["Animalia", "Chordata", "Mammalia", "Carnivora"],
        &CATEGORIES,
    )
    .unwrap();
    tree.add_row(
        &["Animalia", "Chordata", "Mammalia", "Primates"],
        &CATEGORIES,
    )
    .unwrap();
    tree.add_row(
        &["Animalia", "Chordata", "Aves", "Passeriformes"],
        &CATEGORIES,
    )
    .unwrap();
    tree
}

#[rstest]
fn given_rows_with_shared_prefix_when_inserting_then_single_path_before_branch(
    animal_tree: TaxonomyTree,
) {
    // Rows share (Animalia, Chordata) and must collapse onto one path of
    // exactly two nodes before branching.
    let root = animal_tree.root();
    assert_eq!(root.children.len(), 1);

    let animalia = root.get_child("Animalia", "Kingdom").unwrap();
    assert_eq!(animalia.children.len(), 1);

    let chordata = animalia.get_child("Chordata", "Phylum").unwrap();
    assert_eq!(chordata.children.len(), 2);
}

#[rstest]
fn given_identical_row_twice_when_inserting_then_structure_unchanged(
    mut animal_tree: TaxonomyTree,
) {
    // Arrange
    let nodes_before = animal_tree.node_count();
    let names_before = animal_tree.scientific_names();

    // Act
    animal_tree
        .add_row(
            &["Animalia", "Chordata", "Mammalia", "Carnivora"],
            &CATEGORIES,
        )
        .unwrap();

    // Assert
    assert_eq!(animal_tree.node_count(), nodes_before);
    assert_eq!(animal_tree.scientific_names(), names_before);
}

#[rstest]
#[case(&["Aves", "Mammalia", "Amphibia"])]
#[case(&["Mammalia", "Amphibia", "Aves"])]
#[case(&["Amphibia", "Aves", "Mammalia"])]
fn given_any_insertion_order_when_inserting_then_children_sorted(#[case] classes: &[&str]) {
    testing::init_test_setup();

    // Act
    let mut tree = TaxonomyTree::new();
    for class in classes {
        tree.add_row(
            &["Animalia", "Chordata", class],
            &["Kingdom", "Phylum", "Class"],
        )
        .unwrap();
    }

    // Assert
    let chordata = tree
        .root()
        .get_child("Animalia", "Kingdom")
        .unwrap()
        .get_child("Chordata", "Phylum")
        .unwrap();
    let names: Vec<&str> = chordata.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Amphibia", "Aves", "Mammalia"]);
}

#[rstest]
fn given_tree_when_outlining_then_line_numbers_contiguous(animal_tree: TaxonomyTree) {
    let lines = animal_tree.outline();
    let line_nos: Vec<usize> = lines.iter().map(|l| l.line_no).collect();
    assert_eq!(line_nos, (1..=lines.len()).collect::<Vec<_>>());
}

#[rstest]
fn given_tree_when_outlining_then_outline_extends_parent(animal_tree: TaxonomyTree) {
    let lines = animal_tree.outline();

    for line in &lines {
        // Strip the last "<index>." segment; what remains must be the outline
        // of an earlier line (or empty for depth-one nodes).
        let trimmed = line.outline.trim_end_matches('.');
        let parent_outline = match trimmed.rfind('.') {
            Some(pos) => &line.outline[..=pos],
            None => "",
        };
        if !parent_outline.is_empty() {
            assert!(
                lines.iter().any(|l| l.outline == parent_outline),
                "no parent outline for {}",
                line.outline
            );
        }
    }
}

#[rstest]
fn given_tree_when_listing_names_then_sorted_and_stable(animal_tree: TaxonomyTree) {
    let first = animal_tree.scientific_names();
    let second = animal_tree.scientific_names();

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
    assert_eq!(first, second);
    assert_eq!(first, vec!["Carnivora", "Passeriformes", "Primates"]);
}

#[test]
fn given_mismatched_row_when_inserting_then_rejected_without_mutation() {
    testing::init_test_setup();

    // Arrange
    let mut tree = TaxonomyTree::new();
    tree.add_row(&["Animalia"], &["Kingdom"]).unwrap();

    // Act
    let result = tree.add_row(&["Plantae", "Tracheophyta"], &["Kingdom"]);

    // Assert
    assert_eq!(
        result.unwrap_err(),
        DomainError::LengthMismatch {
            names: 2,
            categories: 1
        }
    );
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn given_interleaved_inserts_and_reports_then_reports_reflect_current_state() {
    testing::init_test_setup();

    let mut tree = TaxonomyTree::new();
    tree.add_row(&["Animalia", "Chordata"], &["Kingdom", "Phylum"])
        .unwrap();
    assert_eq!(tree.scientific_names(), vec!["Chordata"]);

    tree.add_row(&["Plantae", "Tracheophyta"], &["Kingdom", "Phylum"])
        .unwrap();
    assert_eq!(tree.scientific_names(), vec!["Chordata", "Tracheophyta"]);
    assert_eq!(tree.outline().len(), 4);
}
