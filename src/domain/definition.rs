//! Top-level definition files (`<oid-tree>`).

use crate::domain::document::XmlDocument;
use crate::domain::entities::OidNode;
use crate::domain::error::DomainError;

/// Root element of a top-level definition file.
pub const OID_TREE_TAG: &str = "oid-tree";
/// Attribute carrying the numeric identifier of the defining node.
pub const OID_ATTRIBUTE: &str = "oid";

/// A decoded `<oid-tree>`: the root node and its not-yet-expanded children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidTreeDefinition {
    pub root: OidNode,
    pub children: Vec<OidNode>,
}

impl OidTreeDefinition {
    /// Decode a parsed document.
    ///
    /// The first child element of `<oid-tree>` defines the root; its first
    /// attribute must be `oid`. Each element below it becomes a child whose
    /// first attribute holds the index appended to the root value.
    pub fn decode(doc: &XmlDocument) -> Result<Self, DomainError> {
        let tree = doc.root();
        if tree.local_name() != OID_TREE_TAG {
            return Err(DomainError::UnexpectedRootTag {
                expected: OID_TREE_TAG,
                found: tree.local_name().to_string(),
            });
        }

        let defining = tree
            .first_child()
            .ok_or_else(|| DomainError::MissingDefiningNode {
                root: tree.local_name().to_string(),
            })?;

        let oid = defining
            .first_attribute()
            .filter(|attr| attr.name == OID_ATTRIBUTE)
            .ok_or_else(|| DomainError::MissingOidAttribute {
                element: defining.local_name().to_string(),
                expected: OID_ATTRIBUTE,
            })?;

        let root = OidNode::root(oid.value.as_str(), defining.local_name());
        let children = defining
            .children()
            .iter()
            .map(|element| {
                let index = element.first_attribute().map(|attr| attr.value.as_str());
                OidNode::child_of(&root, index, element.local_name())
            })
            .collect();

        Ok(Self { root, children })
    }
}
