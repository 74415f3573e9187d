use crate::tree::{Child, Leaf, Node};
use crate::{QfxError, Result};

impl Node {
    /// First direct child named `name`, leaf or element.
    pub fn get(&self, name: &str) -> Option<&Child> {
        self.children.iter().find(|child| child.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Child> {
        self.children.iter_mut().find(|child| child.name() == name)
    }

    /// Like [`Node::get`], but the child has to exist and has to be a leaf.
    pub fn leaf(&self, name: &str) -> Result<&Leaf> {
        match self.get(name) {
            Some(Child::Leaf(leaf)) => Ok(leaf),
            Some(Child::Node(_)) => Err(not_a_leaf(&self.name, name)),
            None => Err(missing(&self.name, name)),
        }
    }

    pub fn node(&self, name: &str) -> Result<&Node> {
        match self.get(name) {
            Some(Child::Node(node)) => Ok(node),
            Some(Child::Leaf(_)) => Err(not_a_node(&self.name, name)),
            None => Err(missing(&self.name, name)),
        }
    }

    pub fn node_mut(&mut self, name: &str) -> Result<&mut Node> {
        let parent = &self.name;
        match self.children.iter_mut().find(|child| child.name() == name) {
            Some(Child::Node(node)) => Ok(node),
            Some(Child::Leaf(_)) => Err(not_a_node(parent, name)),
            None => Err(missing(parent, name)),
        }
    }

    /// Overwrite the content of the first direct leaf named `name`.
    pub fn set_leaf_content(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        let parent = &self.name;
        match self.children.iter_mut().find(|child| child.name() == name) {
            Some(Child::Leaf(leaf)) => {
                leaf.content = content.into();
                Ok(())
            }
            Some(Child::Node(_)) => Err(not_a_leaf(parent, name)),
            None => Err(missing(parent, name)),
        }
    }

    /// Push a new leaf at the end of the children, duplicates included.
    pub fn append_leaf(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.children.push(Child::Leaf(Leaf::new(name, content)));
    }

    /// Set the first direct leaf named `name`, or append one when there is none.
    pub fn upsert_leaf(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        match self.get(name) {
            None => {
                self.append_leaf(name, content);
                Ok(())
            }
            Some(_) => self.set_leaf_content(name, content),
        }
    }
}

fn missing(parent: &str, field: &str) -> QfxError {
    QfxError::MissingField {
        parent: parent.to_string(),
        field: field.to_string(),
    }
}

fn not_a_leaf(parent: &str, field: &str) -> QfxError {
    QfxError::NotALeaf {
        parent: parent.to_string(),
        field: field.to_string(),
    }
}

fn not_a_node(parent: &str, field: &str) -> QfxError {
    QfxError::NotANode {
        parent: parent.to_string(),
        field: field.to_string(),
    }
}
