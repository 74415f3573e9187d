use crate::tree::{Child, Node};

impl Node {
    /// Tag lines for this element, its children in order, then its close tag.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.dump_into(&mut lines);
        lines
    }

    pub fn dump_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("<{}>", self.name));
        for child in &self.children {
            match child {
                Child::Leaf(leaf) => lines.push(leaf.to_string()),
                Child::Node(node) => node.dump_into(lines),
            }
        }
        lines.push(format!("</{}>", self.name));
    }
}
