//! Tests for node selection.

mod common;

use common::{fixture, record, selected_events};
use treeview::{Children, Tree, TreeEvent, TreeOptions};

fn selected_rows(tree: &Tree) -> Vec<&str> {
    tree.rows()
        .iter()
        .filter(|row| row.is_selected)
        .map(|row| row.text.as_str())
        .collect()
}

#[test]
fn test_selecting_a_node() {
    let mut tree = Tree::new(&fixture(), TreeOptions::default());
    let events = record(&mut tree);

    tree.select(0).unwrap();

    assert!(tree.rows()[0].is_selected);
    assert_eq!(selected_rows(&tree), vec!["Parent 1"]);
    assert_eq!(tree.selected().map(|node| node.text()), Some("Parent 1"));
    assert_eq!(selected_events(&events), vec!["Parent 1"]);
}

#[test]
fn test_unselecting_a_node() {
    let mut tree = Tree::new(&fixture(), TreeOptions::default());
    let events = record(&mut tree);

    tree.select(0).unwrap();
    events.borrow_mut().clear();
    tree.select(0).unwrap();

    assert!(!tree.rows()[0].is_selected);
    assert!(selected_rows(&tree).is_empty());
    assert!(tree.selected().is_none());
    assert!(selected_events(&events).is_empty());
}

#[test]
fn test_selecting_another_node_replaces_selection() {
    let mut tree = Tree::new(&fixture(), TreeOptions::default());
    let events = record(&mut tree);

    tree.select(0).unwrap();
    tree.select(3).unwrap();

    assert_eq!(selected_rows(&tree), vec!["Parent 4"]);
    assert_eq!(selected_events(&events), vec!["Parent 1", "Parent 4"]);
}

#[test]
fn test_at_most_one_selected_row() {
    let mut tree = Tree::new(&fixture(), TreeOptions::new().levels(3));
    for row in [0, 2, 2, 5, 8, 1, 1, 4] {
        tree.select(row).unwrap();
        assert!(selected_rows(&tree).len() <= 1);
    }
}

#[test]
fn test_selection_survives_fold() {
    let mut tree = Tree::new(&fixture(), TreeOptions::new().levels(3));
    // Select Grandchild 2, hide it, then show it again.
    tree.select(3).unwrap();
    tree.toggle(0).unwrap();
    assert!(selected_rows(&tree).is_empty());
    assert_eq!(tree.selected().map(|node| node.text()), Some("Grandchild 2"));

    tree.toggle(0).unwrap();
    assert_eq!(selected_rows(&tree), vec!["Grandchild 2"]);
}

#[test]
fn test_event_payload_is_detached_copy() {
    let mut tree = Tree::new(&fixture(), TreeOptions::new().levels(2));
    let events = record(&mut tree);

    tree.select(0).unwrap();
    let payload = events
        .borrow()
        .iter()
        .find_map(|event| match event {
            TreeEvent::NodeSelected(node) => Some(node.clone()),
            TreeEvent::Rendered { .. } => None,
        })
        .unwrap();
    assert_eq!(payload.children().nodes().len(), 2);

    // Later fold changes do not reach the delivered copy.
    tree.toggle(0).unwrap();
    assert!(matches!(payload.children(), Children::Expanded(_)));
    assert!(tree.nodes()[0].children().is_folded());
}

#[test]
fn test_every_interaction_signals_redraw() {
    let mut tree = Tree::new(&fixture(), TreeOptions::default());
    let events = record(&mut tree);

    tree.select(0).unwrap();
    tree.select(0).unwrap();
    tree.toggle(0).unwrap();

    let redraws: Vec<_> = events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            TreeEvent::Rendered { rows } => Some(*rows),
            TreeEvent::NodeSelected(_) => None,
        })
        .collect();
    assert_eq!(redraws, vec![5, 5, 7]);
}
