//! Code-table expander
//!
//! Attaches children decoded from code tables to nodes whose name matches a
//! code-table file, then repeats the match on the new children. Depth is
//! driven entirely by the data; a table that is already being expanded
//! further up the current path is not entered again.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{decode_code_table, find_code_table, CodeEntry, OidNode, XmlDocument};
use crate::infrastructure::traits::FileSystem;

/// Expands nodes against a fixed, pre-scanned list of code tables.
///
/// Decoded tables are cached for the lifetime of the expander, so one table
/// shared by many nodes is read and parsed once per load.
pub struct CodeTableExpander<'a> {
    fs: &'a dyn FileSystem,
    code_files: &'a [PathBuf],
    /// `None` marks a table that could not be decoded
    tables: HashMap<PathBuf, Option<Rc<Vec<CodeEntry>>>>,
    /// Tables being expanded on the current recursion path
    active: Vec<PathBuf>,
}

impl<'a> CodeTableExpander<'a> {
    pub fn new(fs: &'a dyn FileSystem, code_files: &'a [PathBuf]) -> Self {
        Self {
            fs,
            code_files,
            tables: HashMap::new(),
            active: Vec::new(),
        }
    }

    /// Expand each node in order and return the same nodes.
    ///
    /// Only I/O failures are errors; unmatched names and invalid tables
    /// leave the node without children.
    pub fn expand(&mut self, nodes: Vec<OidNode>) -> ApplicationResult<Vec<OidNode>> {
        let mut expanded = Vec::with_capacity(nodes.len());
        for mut node in nodes {
            self.expand_node(&mut node)?;
            expanded.push(node);
        }
        Ok(expanded)
    }

    fn expand_node(&mut self, node: &mut OidNode) -> ApplicationResult<()> {
        let Some(file) = find_code_table(node.name(), self.code_files) else {
            trace!("expand: no code table for {}", node);
            return Ok(());
        };

        if self.active.iter().any(|active| active == file) {
            warn!(
                "expand: {} would re-enter {}, not expanding",
                node,
                file.display()
            );
            return Ok(());
        }

        let Some(entries) = self.table(file)? else {
            return Ok(());
        };

        let children: Vec<OidNode> = entries
            .iter()
            .map(|entry| {
                OidNode::code_entry(
                    node,
                    entry.decimal.as_deref(),
                    entry.name.as_deref(),
                    entry.description.as_deref(),
                )
            })
            .collect();
        if children.is_empty() {
            return Ok(());
        }
        debug!(
            "expand: {} <- {} entries from {}",
            node,
            children.len(),
            file.display()
        );

        self.active.push(file.to_path_buf());
        let children = self.expand(children);
        self.active.pop();

        node.assign_children(children?);
        Ok(())
    }

    /// Read and decode a code table, consulting the cache first.
    fn table(&mut self, file: &Path) -> ApplicationResult<Option<Rc<Vec<CodeEntry>>>> {
        if let Some(cached) = self.tables.get(file) {
            return Ok(cached.clone());
        }

        let content = self
            .fs
            .read_to_string(file)
            .with_path_context("read code table", file)?;
        let decoded = match XmlDocument::parse(&content).and_then(|doc| decode_code_table(&doc)) {
            Ok(entries) => Some(Rc::new(entries)),
            Err(e) => {
                warn!("skipping code table {}: {}", file.display(), e);
                None
            }
        };

        self.tables.insert(file.to_path_buf(), decoded.clone());
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::RealFileSystem;
    use crate::util::testing::{init_test_setup, write_file};
    use tempfile::TempDir;

    #[test]
    fn given_matching_table_when_expanding_then_children_in_document_order() {
        init_test_setup();
        let temp = TempDir::new().unwrap();
        let table = write_file(
            temp.path(),
            "codes_status.xml",
            r#"<codes>
                 <code><Decimal>2</Decimal><Name>degraded</Name></code>
                 <code><Decimal>0</Decimal><Name>ok</Name></code>
                 <code><Decimal>2</Decimal><Name>degraded</Name></code>
               </codes>"#,
        );
        let files = vec![table];
        let status = OidNode::root("1.3.6.1.1", "status");

        let mut expander = CodeTableExpander::new(&RealFileSystem, &files);
        let nodes = expander.expand(vec![status]).unwrap();

        let children: Vec<_> = nodes[0]
            .children()
            .iter()
            .map(|c| (c.value().unwrap(), c.name().unwrap()))
            .collect();
        // neither reordered nor deduplicated
        assert_eq!(
            children,
            vec![
                ("1.3.6.1.1.2", "degraded"),
                ("1.3.6.1.1.0", "ok"),
                ("1.3.6.1.1.2", "degraded"),
            ]
        );
    }

    #[test]
    fn given_empty_table_when_expanding_then_node_untouched() {
        let temp = TempDir::new().unwrap();
        let files = vec![write_file(temp.path(), "codes_status.xml", "<codes/>")];

        let mut expander = CodeTableExpander::new(&RealFileSystem, &files);
        let nodes = expander.expand(vec![OidNode::root("1", "status")]).unwrap();

        assert!(nodes[0].is_leaf());
    }

    #[test]
    fn given_shared_table_when_expanding_then_read_once() {
        let temp = TempDir::new().unwrap();
        let table = write_file(
            temp.path(),
            "codes_state.xml",
            "<codes><c><Decimal>1</Decimal><Name>up</Name></c></codes>",
        );
        let files = vec![table.clone()];

        let mut expander = CodeTableExpander::new(&RealFileSystem, &files);
        let nodes = expander
            .expand(vec![OidNode::root("1", "state"), OidNode::root("2", "state")])
            .unwrap();

        assert_eq!(expander.tables.len(), 1);
        assert!(expander.tables[&table].is_some());
        assert_eq!(nodes[1].children()[0].value(), Some("2.1"));
    }
}
