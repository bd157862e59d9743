//! The loaded forest and lookups between numeric and symbolic identifiers.

use std::fmt;

use crate::domain::entities::{join_path, OidNode, PATH_SEPARATOR};

/// Ordered collection of independently rooted identifier trees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OidForest {
    roots: Vec<OidNode>,
}

/// Result of resolving a numeric OID against the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<'a> {
    /// Deepest node whose value is the OID or a dotted prefix of it
    pub node: &'a OidNode,
    /// Arcs below `node`, e.g. an instance index (`None` on an exact match)
    pub suffix: Option<String>,
}

impl Translation<'_> {
    pub fn is_exact(&self) -> bool {
        self.suffix.is_none()
    }

    /// Symbolic rendering: the node's full name followed by any remaining arcs.
    pub fn symbolic(&self) -> String {
        let name = self.node.full_name().unwrap_or("<unnamed>");
        match &self.suffix {
            Some(suffix) => join_path(name, suffix),
            None => name.to_string(),
        }
    }
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbolic())
    }
}

impl OidForest {
    pub fn new(roots: Vec<OidNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[OidNode] {
        &self.roots
    }

    /// Number of root nodes.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth of the deepest tree (0 for an empty forest).
    pub fn depth(&self) -> usize {
        self.roots.iter().map(OidNode::depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order walk yielding `(depth, node)`, roots at depth 0.
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self)
    }

    pub fn find_by_value(&self, value: &str) -> Option<&OidNode> {
        self.iter()
            .map(|(_, node)| node)
            .find(|node| node.value() == Some(value))
    }

    pub fn find_by_full_name(&self, full_name: &str) -> Option<&OidNode> {
        self.iter()
            .map(|(_, node)| node)
            .find(|node| node.full_name() == Some(full_name))
    }

    /// Resolve `oid` to the node with the longest value that equals it or
    /// is a dotted prefix of it. Earlier nodes win ties.
    pub fn translate(&self, oid: &str) -> Option<Translation<'_>> {
        let oid = oid.trim().trim_start_matches(PATH_SEPARATOR);
        let mut best: Option<Translation<'_>> = None;

        for (_, node) in self.iter() {
            let Some(value) = node.value() else {
                continue;
            };
            let suffix = if oid == value {
                None
            } else {
                match oid
                    .strip_prefix(value)
                    .and_then(|rest| rest.strip_prefix(PATH_SEPARATOR))
                {
                    Some(rest) if !rest.is_empty() => Some(rest.to_string()),
                    _ => continue,
                }
            };

            let longer = best
                .as_ref()
                .and_then(|b| b.node.value())
                .map_or(true, |current| value.len() > current.len());
            if longer {
                best = Some(Translation { node, suffix });
            }
        }

        best
    }

    /// Nodes without children, in walk order.
    pub fn leaf_nodes(&self) -> Vec<&OidNode> {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| node.is_leaf())
            .collect()
    }
}

pub struct ForestIterator<'a> {
    stack: Vec<(usize, &'a OidNode)>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a OidForest) -> Self {
        let stack = forest.roots.iter().rev().map(|root| (0, root)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = (usize, &'a OidNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// device(1.3.6.1) -> status(.1) -> ok(.0), fail(.1); second root ext(1.3.6.1.4)
    #[fixture]
    fn forest() -> OidForest {
        let mut device = OidNode::root("1.3.6.1", "device");
        let mut status = OidNode::child_of(&device, Some("1"), "status");
        let uptime = OidNode::child_of(&device, Some("2"), "uptime");
        let ok = OidNode::code_entry(&status, Some("0"), Some("ok"), Some("Device OK"));
        let fail = OidNode::code_entry(&status, Some("1"), Some("fail"), None);
        status.assign_children(vec![ok, fail]);
        device.assign_children(vec![status, uptime]);

        let ext = OidNode::root("1.3.6.1.4", "ext");
        OidForest::new(vec![device, ext])
    }

    #[rstest]
    fn given_forest_when_iterating_then_pre_order_with_depth(forest: OidForest) {
        let walk: Vec<_> = forest
            .iter()
            .map(|(depth, node)| (depth, node.name().unwrap()))
            .collect();
        assert_eq!(
            walk,
            vec![
                (0, "device"),
                (1, "status"),
                (2, "ok"),
                (2, "fail"),
                (1, "uptime"),
                (0, "ext"),
            ]
        );
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.node_count(), 6);
        assert_eq!(forest.depth(), 3);
    }

    #[rstest]
    fn given_forest_when_finding_then_matches_exactly(forest: OidForest) {
        assert_eq!(
            forest.find_by_value("1.3.6.1.1.0").and_then(|n| n.full_name()),
            Some("status.ok")
        );
        assert_eq!(
            forest.find_by_full_name("device.uptime").and_then(|n| n.value()),
            Some("1.3.6.1.2")
        );
        assert!(forest.find_by_value("1.3.6").is_none());
        assert!(forest.find_by_full_name("uptime").is_none());
    }

    #[rstest]
    #[case("1.3.6.1.1.0", "status.ok", true)]
    #[case(".1.3.6.1.1.0", "status.ok", true)]
    #[case("1.3.6.1.2.0", "device.uptime.0", false)]
    #[case("1.3.6.1.1.7.3", "device.status.7.3", false)]
    #[case("1.3.6.1.4.1.9", "ext.1.9", false)]
    #[case("1.3.6.1.40", "device.40", false)]
    fn given_oid_when_translating_then_longest_prefix_wins(
        forest: OidForest,
        #[case] oid: &str,
        #[case] expected: &str,
        #[case] exact: bool,
    ) {
        let translation = forest.translate(oid).unwrap();
        assert_eq!(translation.to_string(), expected);
        assert_eq!(translation.is_exact(), exact);
    }

    #[rstest]
    fn given_unrelated_oid_when_translating_then_none(forest: OidForest) {
        assert!(forest.translate("2.5.4").is_none());
        assert!(forest.translate("1.3.6").is_none());
        assert!(forest.translate("1.3.6.10").is_none());
    }

    #[rstest]
    fn given_forest_when_collecting_leaves_then_returns_childless(forest: OidForest) {
        let leaves: Vec<_> = forest
            .leaf_nodes()
            .iter()
            .filter_map(|n| n.name())
            .collect();
        assert_eq!(leaves, vec!["ok", "fail", "uptime", "ext"]);
    }

    #[test]
    fn given_empty_forest_when_queried_then_empty() {
        let forest = OidForest::default();
        assert!(forest.is_empty());
        assert_eq!(forest.depth(), 0);
        assert!(forest.translate("1").is_none());
    }
}
