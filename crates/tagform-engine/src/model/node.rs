use serde::Serialize;

/// A resolved element: its tag, its children and its stringified attributes.
///
/// `children` is `None` only for void elements. `attributes` is `None` when
/// the element has no attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<(String, String)>>,
}

/// A child of a [`DocumentNode`]: either a nested node or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Node(DocumentNode),
    Text(String),
}

impl DocumentNode {
    pub fn is_void(&self) -> bool {
        self.children.is_none()
    }

    /// Number of element nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|child| match child {
                Child::Node(node) => node.node_count(),
                Child::Text(_) => 0,
            })
            .sum::<usize>()
    }
}
