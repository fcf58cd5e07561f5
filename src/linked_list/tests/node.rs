extern crate std;

use std::string::{String, ToString};

use crate::linked_list::node::Node;

#[test]
fn test_new_node_is_detached() {
    let node = Node::new(7);
    assert_eq!(*node.value(), 7);
    assert!(node.next().is_none());
}

#[test]
fn test_has_value_uses_value_equality() {
    let node = Node::new(String::from("chain"));
    let probe = "chain".to_string();
    assert!(node.has_value(&probe));
    assert!(!node.has_value(&"link".to_string()));
}

#[test]
fn test_set_value_returns_previous() {
    let mut node = Node::new(1);
    assert_eq!(node.set_value(2), 1);
    *node.value_mut() += 40;
    assert_eq!(*node.value(), 42);
}
