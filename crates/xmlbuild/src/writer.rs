//! Recursive serializer for document trees

use std::fmt;

use crate::error::{Error, ErrorKind, Result};
use crate::escape::{escape_text, quote_attribute};
use crate::model::{Content, Declaration, Doctype, Document, Element};

/// Serialize a document: declaration, doctype, root element
///
/// `indent` is the number of spaces per nesting level; zero selects compact
/// mode where no newlines are emitted at all.
pub fn write_document(document: &Document, indent: usize) -> Result<String> {
    let mut out = String::new();
    write_declaration(&document.declaration, &mut out);
    if !document.doctype.is_empty() {
        push_line_break(&mut out, indent);
        write_doctype(&document.doctype, &mut out);
    }
    push_line_break(&mut out, indent);
    write_element_into(&document.root, &mut out, indent, 0)?;
    Ok(out)
}

/// Serialize an element subtree
pub fn write_element(element: &Element, indent: usize) -> Result<String> {
    let mut out = String::new();
    write_element_into(element, &mut out, indent, 0)?;
    Ok(out)
}

fn write_element_into(
    element: &Element,
    out: &mut String,
    indent: usize,
    margin: usize,
) -> Result<()> {
    out.push('<');
    out.push_str(&element.name);

    for (key, value) in element.attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        out.push_str(&quote_attribute(value));
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return Ok(());
    }

    out.push('>');
    for child in &element.children {
        // the parent owns indentation for every child variant uniformly
        push_indent(out, indent, margin + 1);
        write_content(child, out, indent, margin + 1)?;
    }
    push_indent(out, indent, margin);
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
    Ok(())
}

fn write_content(content: &Content, out: &mut String, indent: usize, margin: usize) -> Result<()> {
    match content {
        Content::Element(child) => write_element_into(child, out, indent, margin),
        Content::Text(text) => {
            out.push_str(&escape_text(text));
            Ok(())
        }
        Content::Comment(text) => write_comment(text, out),
        Content::Cdata(data) => write_cdata(data, out),
    }
}

fn write_comment(text: &str, out: &mut String) -> Result<()> {
    if text.contains("--") {
        return Err(Error::new(ErrorKind::CommentDoubleHyphen));
    }
    out.push_str("<!-- ");
    out.push_str(&escape_text(text));
    out.push_str(" -->");
    Ok(())
}

fn write_cdata(data: &str, out: &mut String) -> Result<()> {
    if data.contains("]]>") {
        return Err(Error::new(ErrorKind::CdataEndMarker));
    }
    // CDATA is raw, never entity-escaped
    out.push_str("<![CDATA[");
    out.push_str(data);
    out.push_str("]]>");
    Ok(())
}

fn write_declaration(declaration: &Declaration, out: &mut String) {
    out.push_str("<?");
    out.push_str(&declaration.target);
    out.push_str(" version=");
    out.push_str(&quote_attribute(&declaration.version));
    if let Some(encoding) = declaration.encoding.as_deref() {
        if !encoding.is_empty() {
            out.push_str(" encoding=");
            out.push_str(&quote_attribute(encoding));
        }
    }
    if let Some(standalone) = declaration.standalone.as_deref() {
        if !standalone.is_empty() {
            out.push_str(" standalone=");
            out.push_str(&quote_attribute(standalone));
        }
    }
    out.push_str("?>");
}

fn write_doctype(doctype: &Doctype, out: &mut String) {
    let Some(name) = doctype.name.as_deref() else {
        return;
    };
    out.push_str("<!DOCTYPE ");
    out.push_str(name);
    if let Some(external_id) = doctype.external_id.as_deref() {
        if !external_id.is_empty() {
            out.push(' ');
            out.push_str(external_id);
        }
    }
    if let Some(internal_subset) = doctype.internal_subset.as_deref() {
        if !internal_subset.is_empty() {
            out.push(' ');
            out.push_str(internal_subset);
        }
    }
    out.push('>');
}

fn push_indent(out: &mut String, indent: usize, margin: usize) {
    if indent > 0 {
        out.push('\n');
        out.push_str(&" ".repeat(margin * indent));
    }
}

fn push_line_break(out: &mut String, indent: usize) {
    if indent > 0 {
        out.push('\n');
    }
}

impl Document {
    /// Serialize compactly on a single line
    pub fn to_xml(&self) -> Result<String> {
        write_document(self, 0)
    }

    /// Serialize with `indent` spaces per nesting level
    pub fn to_xml_indented(&self, indent: usize) -> Result<String> {
        write_document(self, indent)
    }
}

impl Element {
    /// Serialize this subtree compactly on a single line
    pub fn to_xml(&self) -> Result<String> {
        write_element(self, 0)
    }

    /// Serialize this subtree with `indent` spaces per nesting level
    pub fn to_xml_indented(&self, indent: usize) -> Result<String> {
        write_element(self, indent)
    }
}

impl Content {
    /// Serialize this single node compactly
    pub fn to_xml(&self) -> Result<String> {
        let mut out = String::new();
        write_content(self, &mut out, 0, 0)?;
        Ok(out)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_declaration(self, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_doctype(self, &mut out);
        f.write_str(&out)
    }
}
