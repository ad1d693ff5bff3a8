//! Deterministic serialization through `quick_xml::Writer`'s indenter.
//!
//! Every element is emitted by one recursive walk; indentation is four
//! spaces per level regardless of how the source was laid out.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::tree::{Declaration, Document, Element};
use crate::errors::DescriptorError;

const INDENT_WIDTH: usize = 4;

/// Serialize `doc` and replace the file at `path` with it.
pub fn write_document(path: &Path, doc: &Document) -> Result<(), DescriptorError> {
    let xml = to_xml_string(doc)?;
    std::fs::write(path, xml)?;
    Ok(())
}

/// Serialize `doc` to a string ending in a newline.
pub fn to_xml_string(doc: &Document) -> Result<String, DescriptorError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    let default_decl = Declaration::default();
    let decl = doc.declaration.as_ref().unwrap_or(&default_decl);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )),
    )?;

    write_comments(&mut writer, &doc.prolog)?;
    write_element(&mut writer, &doc.root)?;
    write_comments(&mut writer, &doc.epilog)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| DescriptorError::Serialize { message: e.to_string() })?;
    xml.push('\n');
    Ok(xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), DescriptorError> {
    write_comments(writer, &element.leading_comments)?;

    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().filter(|t| !t.trim().is_empty());
    if text.is_none() && element.children.is_empty() && element.trailing_comments.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(text) = text {
        emit(writer, Event::Text(BytesText::new(text.trim())))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    write_comments(writer, &element.trailing_comments)?;
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_comments(writer: &mut Writer<Vec<u8>>, comments: &[String]) -> Result<(), DescriptorError> {
    for comment in comments {
        emit(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?;
    }
    Ok(())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DescriptorError> {
    writer
        .write_event(event)
        .map_err(|e| DescriptorError::Serialize { message: e.to_string() })
}
