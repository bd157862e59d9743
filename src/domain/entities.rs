//! Domain entities: the identifier node

use std::fmt;

/// Separator between arcs of a numeric OID and segments of a symbolic path.
pub const PATH_SEPARATOR: char = '.';

/// Join a dotted path and one more segment.
pub fn join_path(prefix: &str, segment: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + segment.len() + 1);
    joined.push_str(prefix);
    joined.push(PATH_SEPARATOR);
    joined.push_str(segment);
    joined
}

/// One node of the identifier tree.
///
/// Identity fields are fixed at construction. Children are assigned at most
/// once, by the code-table expander, while the forest is being built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OidNode {
    value: Option<String>,
    name: Option<String>,
    full_name: Option<String>,
    description: Option<String>,
    children: Vec<OidNode>,
}

impl OidNode {
    /// Root of a tree: full name equals the local name.
    pub fn root(value: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Some(value.into()),
            full_name: Some(name.clone()),
            name: Some(name),
            description: None,
            children: Vec::new(),
        }
    }

    /// Immediate child declared in a top-level definition file.
    ///
    /// `value` is the parent value extended by `index`; `full_name` is the
    /// parent full name extended by `name`.
    pub fn child_of(parent: &OidNode, index: Option<&str>, name: &str) -> Self {
        Self {
            value: extend(parent.value(), index),
            name: Some(name.to_string()),
            full_name: extend(parent.full_name(), Some(name)),
            description: None,
            children: Vec::new(),
        }
    }

    /// Entry decoded from a code table attached to `parent`.
    ///
    /// Code entries are qualified by the parent's local name, not its full
    /// name: an entry `ok` under `device.status` is named `status.ok`.
    pub fn code_entry(
        parent: &OidNode,
        decimal: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            value: decimal.and_then(|d| extend(parent.value(), Some(d))),
            name: name.map(str::to_string),
            full_name: name.and_then(|n| extend(parent.name(), Some(n))),
            description: description.map(str::to_string),
            children: Vec::new(),
        }
    }

    pub(crate) fn assign_children(&mut self, children: Vec<OidNode>) {
        debug_assert!(
            self.children.is_empty(),
            "children of {} assigned twice",
            self
        );
        self.children = children;
    }

    /// Dotted numeric identifier, e.g. `1.3.6.1.1`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Local symbolic label.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Dotted symbolic path.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn children(&self) -> &[OidNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OidNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// First direct child with the given local name.
    pub fn find_child(&self, name: &str) -> Option<&OidNode> {
        self.children.iter().find(|c| c.name() == Some(name))
    }
}

fn extend(prefix: Option<&str>, segment: Option<&str>) -> Option<String> {
    match (prefix, segment) {
        (Some(prefix), Some(segment)) => Some(join_path(prefix, segment)),
        _ => None,
    }
}

impl fmt::Display for OidNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.full_name().unwrap_or("<unnamed>"),
            self.value().unwrap_or("?")
        )
    }
}
