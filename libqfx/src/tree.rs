use crate::tag::Tag;
use crate::{QfxError, Result};

use std::fmt;

/// A tag with inline content and no children, e.g. `<TRNAMT>-42.00`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    pub name: String,
    pub content: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}", self.name, self.content)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Leaf(Leaf),
    Node(Node),
}

impl Child {
    pub fn name(&self) -> &str {
        match self {
            Child::Leaf(leaf) => &leaf.name,
            Child::Node(node) => node.name(),
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Child::Leaf(leaf) => Some(leaf),
            Child::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Leaf(_) => None,
        }
    }
}

/// An element opened by `<NAME>` and closed by the balancing `</NAME>`.
///
/// Children keep source order, same-named siblings included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) children: Vec<Child>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_children(name, Vec::new())
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Child] {
        &mut self.children
    }

    pub fn append_node(&mut self, node: Node) {
        self.children.push(Child::Node(node));
    }

    /// Reduce a full sequence of tag tokens into its single root element.
    ///
    /// The first token must open the root and the last one must be its balancing close,
    /// anything else is an error; no partial tree is ever returned.
    pub fn build(tags: &[Tag<'_>]) -> Result<Node> {
        let name = match tags.first() {
            None => return Err(QfxError::EmptyDocument),
            Some(Tag::Open(name)) => *name,
            Some(other) => return Err(QfxError::ExpectedOpen(other.to_string())),
        };

        let end = balancing_close(tags, name)?;
        if let Some(extra) = tags.get(end + 1) {
            return Err(QfxError::TrailingTags(extra.to_string()));
        }

        Self::from_span(name, &tags[1..end])
    }

    // `inner` is everything strictly between `<name>` and its balancing `</name>`.
    fn from_span(name: &str, inner: &[Tag<'_>]) -> Result<Node> {
        let mut node = Node::new(name);
        let mut cursor = 0;

        while let Some(tag) = inner.get(cursor) {
            match *tag {
                Tag::Leaf(label, content) => {
                    node.children.push(Child::Leaf(Leaf::new(label, content)));
                    cursor += 1;
                }
                Tag::Open(label) => {
                    let span = &inner[cursor..];
                    let end = balancing_close(span, label)?;
                    node.append_node(Self::from_span(label, &span[1..end])?);
                    cursor += end + 1;
                }
                Tag::Close(label) => return Err(QfxError::UnexpectedClose(label.to_string())),
            }
        }

        Ok(node)
    }
}

// Index of the close tag balancing the open tag at `tags[0]`. Only tags named `name`
// move the depth, so a nested element may reuse an ancestor's name.
fn balancing_close(tags: &[Tag<'_>], name: &str) -> Result<usize> {
    let mut depth = 0usize;
    for (idx, tag) in tags.iter().enumerate() {
        match *tag {
            Tag::Open(label) if label == name => depth += 1,
            Tag::Close(label) if label == name => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }

    Err(QfxError::Unbalanced(name.to_string()))
}
