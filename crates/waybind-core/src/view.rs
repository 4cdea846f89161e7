//! Minimal UI-node model for the provider boundary.

/// A renderable UI node.
///
/// The adapter never renders matched route content itself.
/// [`ViewNode::MatchedView`] is the marker the descendant renderer replaces
/// with the controller's currently matched view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// Consumer that renders the controller's currently matched content.
    MatchedView,
    /// Literal text content.
    Text(String),
    /// Ordered group of child nodes.
    Group(Vec<ViewNode>),
}

impl ViewNode {
    /// Text node from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}
