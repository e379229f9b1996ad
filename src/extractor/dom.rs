//! Read-only markup tree consumed by the extractor.
//!
//! The extractor never talks to an HTML parser directly. A [`MarkupParser`]
//! turns bytes into a [`DomNode`] tree and everything downstream only reads
//! from it, which also lets tests hand-build small synthetic pages.
//!
//! [`MarkupParser`]: crate::extractor::parser::MarkupParser

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Document {
        children: Vec<DomNode>,
    },
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<DomNode>,
    },
    Text(String),
    /// Comments, doctypes and processing instructions.
    Other,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self::Document { children }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self::Text(payload.into())
    }

    /// Appends an attribute. No-op on anything but an element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Appends a child. No-op on text and other leaf nodes.
    pub fn with_child(mut self, child: DomNode) -> Self {
        self.push_child(child);
        self
    }

    pub(crate) fn push_child(&mut self, child: DomNode) {
        if let Self::Document { children } | Self::Element { children, .. } = self {
            children.push(child);
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attrs(&self) -> &[(String, String)] {
        match self {
            Self::Element { attrs, .. } => attrs,
            _ => &[],
        }
    }

    pub fn children(&self) -> &[DomNode] {
        match self {
            Self::Document { children } | Self::Element { children, .. } => children,
            Self::Text(_) | Self::Other => &[],
        }
    }

    /// Value of the first attribute named exactly `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Payload of the first immediate text child.
    ///
    /// Sibling text nodes are not concatenated and nested elements are not
    /// descended into: the store pages wrap every leaf string in its own
    /// container.
    pub fn text_content(&self) -> Option<&str> {
        self.children().iter().find_map(|child| match child {
            Self::Text(payload) => Some(payload.as_str()),
            _ => None,
        })
    }
}

// The derived drop glue recurses once per level, which overflows the stack
// on pathologically nested pages.
impl Drop for DomNode {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Document { children } | Self::Element { children, .. } => {
                std::mem::take(children)
            }
            Self::Text(_) | Self::Other => return,
        };

        while let Some(mut node) = pending.pop() {
            if let Self::Document { children } | Self::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}
