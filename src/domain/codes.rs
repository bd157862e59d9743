//! Code-table files (`<codes>`) and matching them to node names.

use std::path::{Path, PathBuf};

use crate::domain::document::{XmlDocument, XmlElement};
use crate::domain::error::DomainError;
use crate::util::path::PathExt;

/// Root element of a code-table file.
pub const CODES_TAG: &str = "codes";
pub const DECIMAL_ELEMENT: &str = "Decimal";
pub const NAME_ELEMENT: &str = "Name";
pub const DESCRIPTION_ELEMENT: &str = "Description";

/// One entry of a code table. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeEntry {
    pub decimal: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CodeEntry {
    fn from_element(element: &XmlElement) -> Self {
        Self {
            decimal: element
                .child(DECIMAL_ELEMENT)
                .map(|e| e.text().trim().to_string()),
            name: element
                .child(NAME_ELEMENT)
                .map(|e| e.text().trim().to_string()),
            // kept verbatim
            description: element
                .child(DESCRIPTION_ELEMENT)
                .map(|e| e.text().to_string()),
        }
    }
}

/// Decode the entries of a `<codes>` document in document order.
pub fn decode_code_table(doc: &XmlDocument) -> Result<Vec<CodeEntry>, DomainError> {
    let codes = doc.root();
    if codes.local_name() != CODES_TAG {
        return Err(DomainError::UnexpectedRootTag {
            expected: CODES_TAG,
            found: codes.local_name().to_string(),
        });
    }
    Ok(codes.children().iter().map(CodeEntry::from_element).collect())
}

/// First code-table file whose file name contains `name`.
///
/// Nodes without a name, or with an empty one, never match: an empty
/// substring would otherwise select the first table for every such node.
pub fn find_code_table<'a>(name: Option<&str>, code_files: &'a [PathBuf]) -> Option<&'a Path> {
    let name = name.filter(|n| !n.is_empty())?;
    code_files
        .iter()
        .find(|file| file.file_name_lossy().contains(name))
        .map(PathBuf::as_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(content: &str) -> Result<Vec<CodeEntry>, DomainError> {
        XmlDocument::parse(content).and_then(|doc| decode_code_table(&doc))
    }

    #[test]
    fn given_code_table_when_decoding_then_reads_all_fields() {
        let entries = decode(
            r#"<codes>
                 <code>
                   <Decimal> 0 </Decimal>
                   <Name>ok</Name>
                   <Description>  Device OK </Description>
                 </code>
                 <code><Decimal>1</Decimal></code>
                 <code/>
               </codes>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].decimal.as_deref(), Some("0"));
        assert_eq!(entries[0].name.as_deref(), Some("ok"));
        assert_eq!(entries[0].description.as_deref(), Some("  Device OK "));
        assert_eq!(entries[1].decimal.as_deref(), Some("1"));
        assert!(entries[1].name.is_none());
        assert_eq!(entries[2], CodeEntry::default());
    }

    #[test]
    fn given_lowercase_element_names_when_decoding_then_ignored() {
        let entries = decode("<codes><code><name>ok</name></code></codes>").unwrap();
        assert_eq!(entries, vec![CodeEntry::default()]);
    }

    #[test]
    fn given_wrong_root_when_decoding_then_rejected() {
        let result = decode("<wrong-tag><code><Name>ok</Name></code></wrong-tag>");
        assert!(matches!(
            result,
            Err(DomainError::UnexpectedRootTag { expected: CODES_TAG, .. })
        ));
    }

    #[rstest]
    #[case(Some("status"), Some("codes_status.xml"))]
    #[case(Some("link"), Some("codes_linkState.xml"))]
    #[case(Some("state"), Some("codes_adminstate.xml"))]
    #[case(Some("missing"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn given_name_when_finding_code_table_then_first_substring_match(
        #[case] name: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let files = vec![
            PathBuf::from("/conf/codes/codes_adminstate.xml"),
            PathBuf::from("/conf/codes/codes_linkState.xml"),
            PathBuf::from("/conf/codes/codes_status.xml"),
        ];

        let found = find_code_table(name, &files).map(|p| p.file_name_lossy());
        assert_eq!(found.as_deref(), expected);
    }

    #[test]
    fn given_directory_name_matches_when_finding_then_only_file_name_counts() {
        let files = vec![PathBuf::from("/status/codes/codes_other.xml")];
        assert!(find_code_table(Some("status"), &files).is_none());
    }
}
