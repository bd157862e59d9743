//! Domain layer: identifier nodes, the forest, and decoding of definition documents
//!
//! This layer performs no I/O: decoders work on already-read document text.

pub mod codes;
pub mod definition;
pub mod document;
pub mod entities;
pub mod error;
pub mod forest;

pub use codes::{decode_code_table, find_code_table, CodeEntry};
pub use definition::OidTreeDefinition;
pub use document::{XmlAttribute, XmlDocument, XmlElement};
pub use entities::{join_path, OidNode};
pub use error::DomainError;
pub use forest::{ForestIterator, OidForest, Translation};
