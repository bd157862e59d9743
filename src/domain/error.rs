//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural problems found while decoding a definition document.
///
/// These never abort a load: the loader logs them and skips the offending
/// file (or leaves the node it was expanding untouched).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed document: {message}")]
    MalformedDocument { message: String },

    #[error("document has no root element")]
    MissingRoot,

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRootTag {
        expected: &'static str,
        found: String,
    },

    #[error("<{root}> has no child element to define the tree")]
    MissingDefiningNode { root: String },

    #[error("<{element}> must carry '{expected}' as its first attribute")]
    MissingOidAttribute {
        element: String,
        expected: &'static str,
    },
}

impl DomainError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }
}
