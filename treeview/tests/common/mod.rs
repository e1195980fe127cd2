#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use treeview::{NodeData, Tree, TreeEvent};

/// Five parents; Parent 1 has two children and Child 1 has two of its own.
pub fn fixture() -> Vec<NodeData> {
    vec![
        NodeData::new("Parent 1")
            .child(
                NodeData::new("Child 1")
                    .child(NodeData::new("Grandchild 1"))
                    .child(NodeData::new("Grandchild 2")),
            )
            .child(NodeData::new("Child 2")),
        NodeData::new("Parent 2"),
        NodeData::new("Parent 3"),
        NodeData::new("Parent 4"),
        NodeData::new("Parent 5"),
    ]
}

pub const FIXTURE_JSON: &str = r#"[
    {
        "text": "Parent 1",
        "nodes": [
            {
                "text": "Child 1",
                "nodes": [
                    { "text": "Grandchild 1" },
                    { "text": "Grandchild 2" }
                ]
            },
            { "text": "Child 2" }
        ]
    },
    { "text": "Parent 2" },
    { "text": "Parent 3" },
    { "text": "Parent 4" },
    { "text": "Parent 5" }
]"#;

/// Like [`fixture`], with hrefs on every node.
pub fn linked_fixture() -> Vec<NodeData> {
    vec![
        NodeData::new("Parent 1")
            .href("/p1")
            .child(
                NodeData::new("Child 1")
                    .href("/p1/c1")
                    .child(NodeData::new("Grandchild 1").href("/p1/c1/g1"))
                    .child(NodeData::new("Grandchild 2").href("/p1/c1/g2")),
            )
            .child(NodeData::new("Child 2").href("/p1/c2")),
        NodeData::new("Parent 2").href("/p2"),
        NodeData::new("Parent 3").href("/p3"),
    ]
}

/// Subscribe a recorder to `tree` and return the shared event log.
pub fn record(tree: &mut Tree) -> Rc<RefCell<Vec<TreeEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    tree.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

pub fn selected_events(events: &RefCell<Vec<TreeEvent>>) -> Vec<String> {
    events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            TreeEvent::NodeSelected(node) => Some(node.text().to_string()),
            TreeEvent::Rendered { .. } => None,
        })
        .collect()
}

pub fn texts(tree: &Tree) -> Vec<&str> {
    tree.rows().iter().map(|row| row.text.as_str()).collect()
}
