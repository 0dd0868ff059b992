//! Message content as handed over by the transformation engine, and its
//! classification into the two payload shapes the dispatcher understands.

use sxmsg_core_types::schema::LEVEL_ATTRIBUTE;

use crate::errors::{malformed_payload, Result};

/// A node of the content tree the engine builds for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// Wrapper around the message body
    Document { children: Vec<MessageNode> },
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<MessageNode>,
    },
    Text(String),
}

impl MessageNode {
    pub fn document(children: Vec<MessageNode>) -> Self {
        MessageNode::Document { children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        MessageNode::Text(text.into())
    }

    /// An element with no attributes
    pub fn element(name: impl Into<String>, children: Vec<MessageNode>) -> Self {
        MessageNode::Element {
            name: name.into(),
            attributes: Vec::new(),
            children,
        }
    }

    /// Add an attribute to an element. Other node kinds are returned unchanged.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let MessageNode::Element { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    pub fn children(&self) -> &[MessageNode] {
        match self {
            MessageNode::Document { children } | MessageNode::Element { children, .. } => {
                children.as_slice()
            }
            MessageNode::Text(_) => &[],
        }
    }

    /// Value of the first attribute with this name, elements only
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            MessageNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Concatenation of all descendant text, in document order
    pub fn string_value(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MessageNode::Text(text) => out.push_str(text),
            MessageNode::Document { children } | MessageNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// The shapes a message body can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// Bare text, always logged at `info`
    PlainText { text: String },
    /// An element; `level` is the raw attribute value, if any
    Leveled { level: Option<String>, text: String },
}

impl MessagePayload {
    /// Classify the content wrapper's first child.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` when the content has no child at all.
    pub fn from_content(content: &MessageNode) -> Result<Self> {
        let child = content
            .children()
            .first()
            .ok_or_else(|| malformed_payload("message content has no child node"))?;

        Ok(match child {
            MessageNode::Text(text) => MessagePayload::PlainText { text: text.clone() },
            other => MessagePayload::Leveled {
                level: other.attribute(LEVEL_ATTRIBUTE).map(str::to_string),
                text: other.string_value(),
            },
        })
    }

    pub fn text(&self) -> &str {
        match self {
            MessagePayload::PlainText { text } | MessagePayload::Leveled { text, .. } => text.as_str(),
        }
    }
}
