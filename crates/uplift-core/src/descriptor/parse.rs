//! Descriptor parsing on top of `quick_xml::Reader`.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;

use super::tree::{Declaration, Document, Element};
use crate::errors::DescriptorError;

/// Read and parse the descriptor at `path`.
pub fn read_document(path: &Path) -> Result<Document, DescriptorError> {
    if !path.is_file() {
        return Err(DescriptorError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Parse descriptor XML into a [`Document`].
///
/// Rejects mismatched or unclosed tags, multiple roots and stray text
/// outside the root. Doctype and processing instructions are dropped.
pub fn parse_document(xml: &str) -> Result<Document, DescriptorError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut declaration = None;
    let mut prolog = Vec::new();
    let mut epilog = Vec::new();
    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut pending_comments: Vec<String> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DescriptorError::malformed(reader.error_position(), e.to_string()))?;
        let position = reader.buffer_position();

        match event {
            Event::Decl(decl) => declaration = Some(read_declaration(&decl)),
            Event::Start(start) => {
                let mut element = read_start(&start, position)?;
                element.leading_comments = std::mem::take(&mut pending_comments);
                stack.push(element);
            }
            Event::Empty(start) => {
                let mut element = read_start(&start, position)?;
                element.leading_comments = std::mem::take(&mut pending_comments);
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| DescriptorError::malformed(position, "unexpected closing tag"))?;
                element.trailing_comments = std::mem::take(&mut pending_comments);
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| DescriptorError::malformed(position, e.to_string()))?;
                push_text(&mut stack, value, position)?;
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                let value = String::from_utf8_lossy(&raw).into_owned();
                push_text(&mut stack, Cow::Owned(value), position)?;
            }
            Event::Comment(comment) => {
                let value = String::from_utf8_lossy(&comment).into_owned();
                if !stack.is_empty() {
                    pending_comments.push(value);
                } else if root.is_none() {
                    prolog.push(value);
                } else {
                    epilog.push(value);
                }
            }
            Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(DescriptorError::malformed(
            reader.buffer_position(),
            format!("unclosed element <{}>", open.name),
        ));
    }

    let root = root.ok_or(DescriptorError::MissingRoot)?;
    Ok(Document {
        declaration,
        prolog,
        root,
        epilog,
    })
}

fn read_declaration(decl: &BytesDecl<'_>) -> Declaration {
    Declaration {
        version: decl.version().ok().map(lossy).unwrap_or_else(|| "1.0".to_string()),
        encoding: decl.encoding().and_then(|r| r.ok()).map(lossy),
        standalone: decl.standalone().and_then(|r| r.ok()).map(lossy),
    }
}

fn lossy(bytes: Cow<'_, [u8]>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

fn read_start(start: &BytesStart<'_>, position: u64) -> Result<Element, DescriptorError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| DescriptorError::malformed(position, e.to_string()))?
        .to_string();

    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DescriptorError::malformed(position, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| DescriptorError::malformed(position, e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<(), DescriptorError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(DescriptorError::malformed(position, "multiple root elements"));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], value: Cow<'_, str>, position: u64) -> Result<(), DescriptorError> {
    match stack.last_mut() {
        Some(element) => {
            match element.text.as_mut() {
                Some(existing) => existing.push_str(&value),
                None => element.text = Some(value.into_owned()),
            }
            Ok(())
        }
        None if value.trim().is_empty() => Ok(()),
        None => Err(DescriptorError::malformed(position, "text outside the root element")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- top -->
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <modelVersion>4.0.0</modelVersion>
    <!-- coordinates -->
    <groupId>com.example</groupId>
    <name>a &amp; b</name>
    <properties>
        <java.version>1.8</java.version>
    </properties>
    <packaging/>
</project>
"#;

    #[test]
    fn test_parse_structure() {
        let doc = parse_document(POM).unwrap();
        let decl = doc.declaration.unwrap();
        assert_eq!(decl.version, "1.0");
        assert_eq!(decl.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(doc.prolog, vec![" top ".to_string()]);
        assert_eq!(doc.root.name, "project");
        assert_eq!(
            doc.root.attribute("xmlns"),
            Some("http://maven.apache.org/POM/4.0.0")
        );
        assert_eq!(doc.root.children.len(), 5);
        assert_eq!(doc.root.child_text("name"), Some("a & b"));
        assert_eq!(
            doc.root.child("groupId").unwrap().leading_comments,
            vec![" coordinates ".to_string()]
        );
        assert_eq!(
            doc.root.find_path(&["properties", "java.version"]).unwrap().text(),
            Some("1.8")
        );
        assert!(doc.root.child("packaging").unwrap().text.is_none());
    }

    #[test]
    fn test_parse_prefixed_root() {
        let doc = parse_document(r#"<m:project xmlns:m="urn:x"><m:parent/></m:project>"#).unwrap();
        assert_eq!(doc.root.prefix(), Some("m"));
        assert!(doc.root.child("parent").is_some());
        assert!(doc.declaration.is_none());
    }

    #[test]
    fn test_rejects_mismatched_tags() {
        let err = parse_document("<project><a></b></project>").unwrap_err();
        assert!(matches!(err, DescriptorError::Malformed { .. }));
    }

    #[test]
    fn test_rejects_unclosed() {
        let err = parse_document("<project><a>").unwrap_err();
        assert!(matches!(err, DescriptorError::Malformed { .. }));
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = parse_document("   ").unwrap_err();
        assert!(matches!(err, DescriptorError::MissingRoot));
    }

    #[test]
    fn test_rejects_two_roots() {
        let err = parse_document("<a/><b/>").unwrap_err();
        assert!(matches!(err, DescriptorError::Malformed { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document(Path::new("/no/such/pom.xml")).unwrap_err();
        assert!(matches!(err, DescriptorError::NotFound(_)));
    }
}
