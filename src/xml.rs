//! Builds [`MarkupNode`] trees from XML map documents with `roxmltree`.
//!
//! Element and attribute names are taken without their namespace prefix.
//! Comments and processing instructions are dropped. A node's text is the
//! concatenation of its direct text children, CDATA included.

use crate::error::BuildError;
use pagebuilder_markup::MarkupNode;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

/// Parses `source` and converts its root element.
pub fn parse_map(source: &str) -> Result<MarkupNode, roxmltree::Error> {
    let doc = Document::parse(source)?;
    Ok(convert(doc.root_element()))
}

pub fn parse_map_file<P: AsRef<Path>>(path: P) -> Result<MarkupNode, BuildError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to read map from '{}': {}", path.display(), e),
        )
    })?;
    let node = parse_map(&source)?;
    log::debug!(
        "Parsed map '{}': <{}> with {} nodes",
        path.display(),
        node.name(),
        node.subtree_len()
    );
    Ok(node)
}

fn convert(element: Node<'_, '_>) -> MarkupNode {
    let mut node = MarkupNode::new(element.tag_name().name());
    for attribute in element.attributes() {
        node.set_attr(attribute.name(), attribute.value());
    }
    for child in element.children() {
        if child.is_element() {
            node.push_child(convert(child));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                node.push_text(text);
            }
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_document_order() {
        let node = parse_map(r#"<Text Y="3" X="1" FontSize="9">Hello</Text>"#).unwrap();
        let names: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Y", "X", "FontSize"]);
        assert_eq!(node.text(), "Hello");
    }

    #[test]
    fn test_nested_elements_and_mixed_text() {
        let source = r#"
            <Page>
                <!-- header -->
                <Container YSpacing="2">
                    <Text>one</Text>
                    <Text><![CDATA[a < b]]></Text>
                </Container>
            </Page>"#;
        let page = parse_map(source).unwrap();
        assert_eq!(page.children().len(), 1);
        let container = &page.children()[0];
        assert_eq!(container.name(), "Container");
        assert_eq!(container.attr("YSpacing"), Some("2"));
        assert_eq!(container.children()[1].text(), "a < b");
        assert!(pagebuilder_markup::text::is_blank(page.text()));
    }

    #[test]
    fn test_namespace_prefix_is_dropped() {
        let node = parse_map(r#"<m:Text xmlns:m="urn:map" m:Property="name"/>"#).unwrap();
        assert_eq!(node.name(), "Text");
        assert_eq!(node.attr("Property"), Some("name"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_map("<Text>").is_err());
    }
}
