use crate::ast::Node;

/// The lookup name behind CVE-2021-44228.
const JNDI: &str = "jndi";

/// Walk a lookup tree and report whether any expression's key resolves
/// to a string containing `jndi`, case-insensitively.
///
/// Every expression reachable through both `key` and `value` lists is
/// checked: nested expressions inside a key are further obfuscation
/// layers and render as the string they would resolve to.
#[must_use]
pub fn contains_jndi_name(node: &Node) -> bool {
    match node {
        Node::Root { children } => children.iter().any(contains_jndi_name),
        Node::Expression { key, value } => {
            if node.rendered_key().to_lowercase().contains(JNDI) {
                return true;
            }
            key.iter().chain(value).any(contains_jndi_name)
        }
        Node::Text { .. } => false,
    }
}
