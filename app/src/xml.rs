//! Small helpers over roxmltree (reading) and xmlwriter (writing).

use roxmltree::{Document, Node};
use std::str::FromStr;
use xmlwriter::{Indent, Options, XmlWriter};

use crate::*;

/// Writer with an XML declaration and four-space indentation.
pub(crate) fn writer() -> XmlWriter {
    let mut writer = XmlWriter::new(Options {
        indent: Indent::Spaces(4),
        ..Options::default()
    });
    writer.write_declaration();
    writer
}

pub(crate) fn parse(text: &str) -> Result<Document<'_>> {
    Ok(Document::parse(text)?)
}

/// All elements named `name` below `parent`, in document order.
pub(crate) fn elements<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .descendants()
        .filter(move |node| node.is_element() && node.has_tag_name(name))
}

pub(crate) fn attribute<T: FromStr>(node: Node<'_, '_>, name: &'static str) -> Result<T> {
    match node.attribute(name) {
        Some(value) => parse_value(name, value),
        None => Err(AppError::MissingAttribute {
            element: node.tag_name().name().to_owned(),
            attribute: name,
        }),
    }
}

/// Like [`attribute`], but a missing attribute yields `default`.
pub(crate) fn attribute_or<T: FromStr>(
    node: Node<'_, '_>,
    name: &'static str,
    default: T,
) -> Result<T> {
    match node.attribute(name) {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| AppError::InvalidAttribute {
        attribute: name,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_typed_attributes() {
        let doc = parse(r#"<root><item a="12" b=" 7 " c="x"/></root>"#).unwrap();
        let item = elements(doc.root_element(), "item").next().unwrap();

        assert_eq!(attribute::<u8>(item, "a").unwrap(), 12);
        assert_eq!(attribute::<u8>(item, "b").unwrap(), 7);
        assert_eq!(attribute_or::<u8>(item, "d", 3).unwrap(), 3);
        assert!(matches!(
            attribute::<u8>(item, "c"),
            Err(AppError::InvalidAttribute { attribute: "c", .. })
        ));
        assert!(matches!(
            attribute::<u8>(item, "d"),
            Err(AppError::MissingAttribute { attribute: "d", .. })
        ));
    }

    #[test]
    fn writes_indented_document() {
        let mut w = writer();
        w.start_element("root");
        w.start_element("item");
        w.write_attribute("a", &1);
        w.end_element();
        w.end_element();
        let text = w.end_document();

        assert!(text.starts_with("<?xml"));
        assert!(text.contains("\n    <item a=\"1\"/>"));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(parse("<root>"), Err(AppError::Xml(_))));
    }
}
