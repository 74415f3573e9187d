use crate::document::Document;
use crate::tag::Tag;
use crate::QfxError;
use anyhow::{anyhow, Context, Result};
use pest::Parser;
use tracing::{debug, instrument};

use std::convert::TryFrom;
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[grammar = "qfx.pest"]
pub struct QfxParser;

/// Classify one trimmed line that starts with `<`.
///
/// Lines that are not exactly one open, leaf or close tag are rejected rather than
/// guessed at.
pub fn parse_line(line: &str) -> Result<Tag<'_>, QfxError> {
    let mut pairs = QfxParser::parse(Rule::tag_line, line)
        .map_err(|_| QfxError::MalformedLine(line.to_string()))?;
    let pair = pairs
        .next()
        .ok_or_else(|| QfxError::MalformedLine(line.to_string()))?;
    Tag::try_from(pair)
}

/// Parses a whole export held in memory, we are not concerning ourselves
/// with file input here, see [`parse_file`] for that.
pub fn parse(input: &str) -> Result<Document, QfxError> {
    Document::parse(input)
}

#[instrument]
pub fn parse_file(path: &Path) -> Result<Document> {
    let fcontent = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}'", path.display()))?;
    debug!("read {} bytes", fcontent.len());

    parse(&fcontent).map_err(|e| anyhow!("{}: {}", path.display(), e))
}

/// Write every output line of `document` to `path`, each terminated with `\n`.
#[instrument(skip(document))]
pub fn write_file(path: &Path, document: &Document) -> Result<()> {
    fs::write(path, document.to_string())
        .with_context(|| format!("failed to write `{}'", path.display()))
}
