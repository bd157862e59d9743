//! Rendering of identifier trees with `termtree`.

use termtree::Tree;

use crate::domain::OidNode;

pub trait OidTreeConvert {
    fn to_tree_string(&self, descriptions: bool) -> Tree<String>;
}

impl OidTreeConvert for OidNode {
    fn to_tree_string(&self, descriptions: bool) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string(descriptions))
            .collect();

        Tree::new(label(self, descriptions)).with_leaves(leaves)
    }
}

/// `name (value)`, optionally followed by ` - description`.
fn label(node: &OidNode, descriptions: bool) -> String {
    let mut label = format!(
        "{} ({})",
        node.name().unwrap_or("<unnamed>"),
        node.value().unwrap_or("?")
    );
    if descriptions {
        if let Some(description) = node.description() {
            label.push_str(" - ");
            label.push_str(description.trim());
        }
    }
    label
}
