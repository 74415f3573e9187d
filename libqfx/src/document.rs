use crate::parser::parse_line;
use crate::statement;
use crate::tree::Node;
use crate::Result;
use tracing::{debug, info, instrument};

use std::fmt;

/// A parsed export: the verbatim header block and the one root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    headers: Vec<String>,
    root: Node,
}

impl Document {
    pub fn parse(input: &str) -> Result<Document> {
        let lines: Vec<&str> = input.lines().collect();
        Self::from_lines(&lines)
    }

    /// Lines not starting with `<` are header lines, wherever they appear; they are kept
    /// as-is and always written out before the tags. Every other line is a tag line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Document> {
        let mut headers = Vec::new();
        let mut tags = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.starts_with('<') {
                tags.push(parse_line(line)?);
            } else {
                headers.push(line.to_string());
            }
        }
        debug!("{} header lines, {} tag lines", headers.len(), tags.len());

        let root = Node::build(&tags)?;
        Ok(Document { headers, root })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn dump(&self) -> Vec<String> {
        let mut lines = self.headers.clone();
        self.root.dump_into(&mut lines);
        lines
    }

    /// Attach `account_id` to the statement and recompute every transaction's FITID.
    ///
    /// Either the whole patch applies or the document is left exactly as it was.
    #[instrument(skip(self))]
    pub fn apply_account_patch(&mut self, account_id: &str) -> Result<()> {
        let mut root = self.root.clone();
        let patched = statement::patch(&mut root, account_id)?;
        self.root = root;
        info!("patched {} transactions", patched);
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.dump() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
