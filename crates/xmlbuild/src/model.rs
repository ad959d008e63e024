//! Document tree model and builder operations

use indexmap::IndexMap;

/// XML document
///
/// An element tree prefixed by an XML declaration and an optional doctype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub declaration: Declaration,
    pub doctype: Doctype,
    pub root: Element,
}

impl Document {
    /// Create a document with the given root element name
    ///
    /// Uses the default declaration (`xml`, version 1.0, UTF-8) and an empty
    /// doctype.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            declaration: Declaration::default(),
            doctype: Doctype::default(),
            root: Element::new(root_name),
        }
    }

    /// Create a document around an already-built root element
    pub fn with_root(root: Element) -> Self {
        Self {
            declaration: Declaration::default(),
            doctype: Doctype::default(),
            root,
        }
    }

    /// Replace the declaration
    pub fn declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = declaration;
        self
    }

    /// Replace the doctype
    pub fn doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Preset: an SVG document skeleton (`svg` root, `svg` doctype)
    pub fn svg() -> Self {
        Self::new("svg").doctype(Doctype::new("svg"))
    }

    /// Preset: an XHTML 1.0 Strict page skeleton
    pub fn xhtml_strict() -> Self {
        let mut doc = Self::new("html").doctype(
            Doctype::new("html").external_id(
                "PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
                 \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\"",
            ),
        );
        doc.root
            .attr("xmlns", "http://www.w3.org/1999/xhtml")
            .attr("lang", "en")
            .attr("xml:lang", "en");
        doc
    }
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with initial attributes
    pub fn with_attrs<I, K, V>(name: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut element = Self::new(name);
        for (key, value) in attrs {
            element.attributes.insert(key.into(), value.into());
        }
        element
    }

    /// Set an attribute, keeping insertion order
    ///
    /// Re-setting an existing key overwrites the value in place; the key
    /// keeps its original position in the serialized output.
    pub fn attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child element and return a mutable reference to it
    ///
    /// The reference allows nested building:
    ///
    /// ```
    /// use xmlbuild::Element;
    ///
    /// let mut root = Element::new("stuff");
    /// root.element("x").element("z");
    /// ```
    #[allow(clippy::unreachable)]
    pub fn element(&mut self, name: impl Into<String>) -> &mut Self {
        self.children.push(Content::Element(Self::new(name)));
        match self.children.last_mut() {
            Some(Content::Element(child)) => child,
            _ => unreachable!("children ends with the element pushed above"),
        }
    }

    /// Build a child element inside a closure
    ///
    /// Equivalent to [`Self::element`] for callers who prefer scoped nesting
    /// over holding the returned reference.
    pub fn with_element<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let mut child = Self::new(name);
        f(&mut child);
        self.children.push(Content::Element(child));
        self
    }

    /// Append a text child
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.children.push(Content::Text(content.into()));
        self
    }

    /// Append a comment child
    ///
    /// The `--` restriction is checked when the tree is serialized, not here.
    pub fn comment(&mut self, content: impl Into<String>) -> &mut Self {
        self.children.push(Content::Comment(content.into()));
        self
    }

    /// Append a CDATA child
    ///
    /// The `]]>` restriction is checked when the tree is serialized, not here.
    pub fn cdata(&mut self, content: impl Into<String>) -> &mut Self {
        self.children.push(Content::Cdata(content.into()));
        self
    }

    /// Append an already-built content node
    pub fn push(&mut self, content: impl Into<Content>) -> &mut Self {
        self.children.push(content.into());
        self
    }
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    Element(Element),
    Text(String),
    Comment(String),
    Cdata(String),
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// XML declaration, e.g. `<?xml version="1.0" encoding="UTF-8"?>`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub target: String,
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            target: "xml".to_string(),
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

/// Document type declaration
///
/// `name` is the root element name, the first token after `DOCTYPE`.
/// `external_id` carries the full `PUBLIC "..." "..."` or `SYSTEM "..."`
/// clause verbatim. A doctype without a name serializes to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doctype {
    pub name: Option<String>,
    pub external_id: Option<String>,
    pub internal_subset: Option<String>,
}

impl Doctype {
    /// Create a doctype for the given root element name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            external_id: None,
            internal_subset: None,
        }
    }

    /// Set the external identifier clause
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Set the internal subset
    pub fn internal_subset(mut self, internal_subset: impl Into<String>) -> Self {
        self.internal_subset = Some(internal_subset.into());
        self
    }

    /// Returns true if this doctype serializes to nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
