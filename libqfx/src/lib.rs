//! libqfx - A tag tree parser and patcher for QFX/OFX SGML statement exports
//! ---
//!
//! Bank and credit card exports in the QFX flavour of OFX 1.x are not XML: leaf elements
//! carry their value on the same line and never close. libqfx reads such a file line by line,
//! keeps the header block untouched, rebuilds the element tree and writes it back out in the
//! exact same shape, so only the fields we touch ever change.
//!

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Header lines plus the root element, and the account patch entrypoint.
pub mod document;

/// Tree serialization back to tag lines.
pub mod dump;

/// Name based lookups and mutations over direct children.
///
/// Lookups never descend into grandchildren, and when several siblings share a name
/// the first one wins. Later siblings are still kept, and still dumped.
pub mod field;

/// Our main parser entrypoints.
pub mod parser;

/// Tag vocabulary of credit card statements, and the patch applied to them.
pub mod statement;

/// Typed tag tokens, one per tag line.
pub mod tag;

mod transaction;

/// Element tree and the builder that reduces tag tokens into it.
pub mod tree;

pub use document::Document;
pub use parser::{parse, parse_file, parse_line, write_file};
pub use tag::Tag;
pub use transaction::{derive_fitid, Transaction};
pub use tree::{Child, Leaf, Node};

/// Everything that can go wrong while reading, reducing or patching a statement.
///
/// All of these are fatal for the document being processed, nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QfxError {
    #[error("malformed tag line `{0}'")]
    MalformedLine(String),

    #[error("document has no tag lines")]
    EmptyDocument,

    #[error("expected an opening tag at the root, found `{0}'")]
    ExpectedOpen(String),

    #[error("unbalanced tags: `<{0}>' is never closed")]
    Unbalanced(String),

    #[error("unbalanced tags: unexpected `</{0}>'")]
    UnexpectedClose(String),

    #[error("unexpected `{0}' after the root element")]
    TrailingTags(String),

    #[error("key `{field}' not found in `{parent}'")]
    MissingField { parent: String, field: String },

    #[error("cannot overwrite `{field}' in `{parent}': not a leaf")]
    NotALeaf { parent: String, field: String },

    #[error("expected `{field}' in `{parent}' to hold nested tags, found a leaf")]
    NotANode { parent: String, field: String },
}

pub type Result<T, E = QfxError> = std::result::Result<T, E>;
