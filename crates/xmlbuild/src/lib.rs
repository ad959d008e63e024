//! xmlbuild - Builder and serializer for well-formed XML/SVG documents
//!
//! # Quick Start
//!
//! ```
//! use xmlbuild::Document;
//! # fn main() -> Result<(), xmlbuild::Error> {
//! let mut doc = Document::new("note");
//! doc.root.attr("lang", "en");
//! doc.root.with_element("body", |body| {
//!     body.text("don't forget & remember");
//! });
//! assert_eq!(
//!     doc.to_xml()?,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
//!      <note lang=\"en\"><body>don't forget &amp; remember</body></note>"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Trees are built top-down through [`Element`]'s append methods and
//! serialized in one depth-first pass. Serialization fails only when a
//! comment contains `--` or a CDATA section contains `]]>`; element and
//! attribute names are the caller's responsibility.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod escape;
pub use escape::{escape_text, quote_attribute};

pub mod model;
pub use model::{Content, Declaration, Doctype, Document, Element};

pub mod writer;
pub use writer::{write_document, write_element};

/// Serialize a document compactly
pub fn to_xml(document: &Document) -> Result<String> {
    write_document(document, 0)
}

/// Serialize a document with `indent` spaces per nesting level
pub fn to_xml_indented(document: &Document, indent: usize) -> Result<String> {
    write_document(document, indent)
}
