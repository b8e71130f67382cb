use std::fmt;

/// A node in the parsed lookup tree.
///
/// The variant set is closed: rendering and detection both match it
/// exhaustively, so no unhandled node kind can exist at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Wraps the whole input; exactly one per parse.
    Root { children: Vec<Node> },
    /// One `${...}` lookup. `key` holds everything before the lookup's
    /// first separator, `value` everything after it.
    Expression { key: Vec<Node>, value: Vec<Node> },
    /// Literal run of characters.
    Text { content: String },
}

impl Node {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn expression(key: Vec<Self>, value: Vec<Self>) -> Self {
        Self::Expression { key, value }
    }

    /// Render the node's key as a flat string.
    ///
    /// Nested expressions inside the key render as their `value`, the
    /// string they would resolve to. Root and Text have no key.
    #[must_use]
    pub fn rendered_key(&self) -> String {
        match self {
            Self::Expression { key, .. } => render(key),
            Self::Root { .. } | Self::Text { .. } => String::new(),
        }
    }
}

/// Concatenate the rendered form of a node list.
#[must_use]
pub fn render(nodes: &[Node]) -> String {
    use fmt::Write as _;

    let mut out = String::new();
    for node in nodes {
        // writing to a String is infallible
        let _ = write!(out, "{node}");
    }
    out
}

/// A node renders as the string the lookup would resolve to: Root and
/// Expression as the concatenation of their value children, Text as its
/// literal content.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root { children } => {
                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            Self::Expression { value, .. } => {
                for node in value {
                    write!(f, "{node}")?;
                }
                Ok(())
            }
            Self::Text { content } => f.write_str(content),
        }
    }
}
