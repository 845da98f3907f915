//! HTML node tree.
//!
//! A [`Node`] is either a leaf holding text content or a parent holding
//! child nodes. Rendering is a single recursive walk that appends to one
//! output buffer.

use staticmd_core::{Result, StaticmdError};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check whether `tag` is an HTML void element such as `img`.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// HTML attributes, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attributes::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an attribute. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as ` key="value"` pairs; empty attributes give an empty string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A node of the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, optionally wrapped in a tag
    Leaf {
        tag: Option<String>,
        content: String,
        attributes: Attributes,
    },
    /// A tag wrapping child nodes
    Parent {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// An untagged leaf, rendered as its raw content.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self::leaf_with_attributes(tag, content, Attributes::new())
    }

    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        content: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            content: content.into(),
            attributes,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::parent_with_attributes(tag, children, Attributes::new())
    }

    pub fn parent_with_attributes(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Self {
        Node::Parent {
            tag: tag.into(),
            children,
            attributes,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    /// Child nodes; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children,
        }
    }

    /// Render this node and its descendants as HTML.
    ///
    /// Fails with [`StaticmdError::MissingTag`] or
    /// [`StaticmdError::EmptyChildren`] if any parent in the tree has an
    /// empty tag or no children. Leaf content is emitted as-is, without
    /// escaping.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                tag,
                content,
                attributes,
            } => match tag.as_deref() {
                None | Some("") => out.push_str(content),
                Some(tag) if is_void_element(tag) => open_tag(out, tag, attributes),
                Some(tag) => {
                    open_tag(out, tag, attributes);
                    out.push_str(content);
                    close_tag(out, tag);
                }
            },
            Node::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(StaticmdError::MissingTag);
                }
                if children.is_empty() {
                    return Err(StaticmdError::EmptyChildren(tag.clone()));
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
