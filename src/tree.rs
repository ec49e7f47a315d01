//! Element trees.
//!
//! An [`Element`] is an immutable, reference-counted node with a kind, an
//! optional key, a prop map, and optional children. Children are a single
//! [`Node`]; the ordered-sequence shape is [`Node::List`], which may nest.
//!
//! Cloning an `Element` clones the `Arc`, so "same reference" is observable
//! with [`Element::ptr_eq`]. The style transformer relies on this to hand back
//! untouched subtrees without allocating.
//!
//! # Example
//!
//! ```rust
//! use tachyon_style::tree::{Element, Node};
//!
//! let tree = Element::new("View")
//!     .prop("cls", "pa2 bg-red")
//!     .child(Element::new("Text").child("hello"))
//!     .child(Element::new("Text").child("world"));
//!
//! assert_eq!(tree.kind(), "View");
//! assert!(matches!(tree.children(), Some(Node::List(items)) if items.len() == 2));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

/// Prop map of an element.
pub type Props = BTreeMap<String, Value>;

/// A node in an element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A valid tree node.
    Element(Element),
    /// Text leaf.
    Text(String),
    /// Numeric leaf.
    Number(f64),
    /// Nothing rendered (null, undefined, booleans).
    Empty,
    /// An ordered children sequence.
    List(Vec<Node>),
}

impl Node {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns `true` for [`Node::Element`].
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Flattens a children sequence into a flat list.
    ///
    /// Nested lists are spliced in place and [`Node::Empty`] entries are
    /// dropped. Non-list nodes yield a one-element list (or nothing for
    /// `Empty`).
    pub fn flatten(&self) -> Vec<Node> {
        let mut flat = Vec::new();
        flatten_into(self, &mut flat);
        flat
    }

    /// Returns `true` if both nodes are the same element reference, or are
    /// equal leaves.
    pub fn same(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => Element::ptr_eq(a, b),
            (Node::List(a), Node::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
            }
            (a, b) => a == b,
        }
    }
}

fn flatten_into(node: &Node, flat: &mut Vec<Node>) {
    match node {
        Node::List(items) => {
            for item in items {
                flatten_into(item, flat);
            }
        }
        Node::Empty => {}
        other => flat.push(other.clone()),
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ElementData {
    kind: String,
    key: Option<String>,
    props: Props,
    children: Option<Node>,
}

/// An element descriptor.
///
/// Equality is structural; use [`Element::ptr_eq`] for identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    data: Arc<ElementData>,
}

impl Element {
    /// Creates an element with no props and no children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            data: Arc::new(ElementData {
                kind: kind.into(),
                key: None,
                props: Props::new(),
                children: None,
            }),
        }
    }

    /// Sets the element key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.data).key = Some(key.into());
        self
    }

    /// Sets a prop, returning the updated element.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.data)
            .props
            .insert(name.into(), value.into());
        self
    }

    /// Appends a child.
    ///
    /// The first child is stored as a single child; adding a second turns
    /// the children into a [`Node::List`].
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        let data = Arc::make_mut(&mut self.data);
        data.children = match data.children.take() {
            None => Some(child),
            Some(Node::List(mut items)) => {
                items.push(child);
                Some(Node::List(items))
            }
            Some(single) => Some(Node::List(vec![single, child])),
        };
        self
    }

    /// Replaces the children with an ordered sequence.
    pub fn children_list(mut self, children: Vec<Node>) -> Self {
        Arc::make_mut(&mut self.data).children = Some(Node::List(children));
        self
    }

    /// The element kind, e.g. `"View"`.
    pub fn kind(&self) -> &str {
        &self.data.kind
    }

    /// The element key, if any.
    pub fn key_str(&self) -> Option<&str> {
        self.data.key.as_deref()
    }

    /// All props.
    pub fn props(&self) -> &Props {
        &self.data.props
    }

    /// A single prop value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.props.get(name)
    }

    /// The children, if any.
    pub fn children(&self) -> Option<&Node> {
        self.data.children.as_ref()
    }

    /// Returns `true` if both handles point at the same element.
    pub fn ptr_eq(a: &Element, b: &Element) -> bool {
        Arc::ptr_eq(&a.data, &b.data)
    }

    /// Creates a new element from this one with prop overrides applied.
    ///
    /// `children` replaces the existing children when given; otherwise they
    /// are shared with the original.
    pub fn clone_with(&self, overrides: Props, children: Option<Node>) -> Element {
        let mut data = ElementData::clone(&self.data);
        data.props.extend(overrides);
        if let Some(children) = children {
            data.children = Some(children);
        }
        Element {
            data: Arc::new(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_child_builder_shapes() {
        let single = Element::new("View").child("a");
        assert_eq!(single.children(), Some(&Node::Text("a".into())));

        let many = Element::new("View").child("a").child("b").child("c");
        match many.children() {
            Some(Node::List(items)) => assert_eq!(items.len(), 3),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_children_list_replaces_children() {
        let el = Element::new("View")
            .child("old")
            .children_list(vec![Element::new("Text").into(), "x".into(), Node::Empty]);

        let items = el.children().map(Node::flatten).unwrap_or_default();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_element());
        assert!(!items[1].is_element());
    }

    #[test]
    fn test_flatten_splices_and_drops_empty() {
        let list = Node::List(vec![
            "a".into(),
            Node::Empty,
            Node::List(vec!["b".into(), Node::List(vec!["c".into()])]),
            Node::Number(1.0),
        ]);
        let expected: Vec<Node> = vec!["a".into(), "b".into(), "c".into(), Node::Number(1.0)];
        assert_eq!(list.flatten(), expected);
    }

    #[test]
    fn test_clone_with_overrides_props_and_keeps_original() {
        let original = Element::new("View")
            .key("k")
            .prop("cls", "pa2")
            .prop("testID", "root")
            .child("x");

        let mut overrides = Props::new();
        overrides.insert("style".into(), json!([{"padding": 8.0}]));
        let cloned = original.clone_with(overrides, None);

        assert!(!Element::ptr_eq(&original, &cloned));
        assert_eq!(cloned.get("style"), Some(&json!([{"padding": 8.0}])));
        assert_eq!(cloned.get("testID"), Some(&json!("root")));
        assert_eq!(cloned.key_str(), Some("k"));
        assert_eq!(cloned.children(), original.children());
        assert!(original.get("style").is_none());
    }

    #[test]
    fn test_clone_shares_reference() {
        let a = Element::new("View");
        let b = a.clone();
        assert!(Element::ptr_eq(&a, &b));
        assert!(Node::from(a).same(&Node::from(b)));
    }
}
