//! Build descriptor (`pom.xml`) model: an ordered element tree, a
//! `quick-xml` based parser and a deterministic, indenting serializer.

pub mod parse;
pub mod tree;
pub mod write;

pub use parse::{parse_document, read_document};
pub use tree::{Declaration, Document, Element};
pub use write::{to_xml_string, write_document};
