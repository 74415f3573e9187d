use crate::parser::Rule;
use crate::QfxError;
use pest::iterators::Pair;

use std::convert::TryFrom;
use std::fmt;

/// A single tag line, borrowed from the line it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag<'s> {
    /// `<NAME>`
    Open(&'s str),
    /// `<NAME>content`
    Leaf(&'s str, &'s str),
    /// `</NAME>`
    Close(&'s str),
}

impl<'s> Tag<'s> {
    pub fn name(&self) -> &'s str {
        match *self {
            Tag::Open(name) | Tag::Leaf(name, _) | Tag::Close(name) => name,
        }
    }
}

impl<'s> TryFrom<Pair<'s, Rule>> for Tag<'s> {
    type Error = QfxError;

    fn try_from(pair: Pair<'s, Rule>) -> Result<Self, Self::Error> {
        let rule = pair.as_rule();
        let line = pair.as_str();
        let mut inner = pair.into_inner();
        let name = inner
            .next()
            .ok_or_else(|| QfxError::MalformedLine(line.to_string()))?
            .as_str();

        match rule {
            Rule::open => Ok(Tag::Open(name)),
            Rule::close => Ok(Tag::Close(name)),
            Rule::leaf => {
                let content = inner
                    .next()
                    .ok_or_else(|| QfxError::MalformedLine(line.to_string()))?
                    .as_str();
                Ok(Tag::Leaf(name, content))
            }
            _ => Err(QfxError::MalformedLine(line.to_string())),
        }
    }
}

impl<'s> fmt::Display for Tag<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Open(name) => write!(f, "<{}>", name),
            Tag::Leaf(name, content) => write!(f, "<{}>{}", name, content),
            Tag::Close(name) => write!(f, "</{}>", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QfxParser, Rule};
    use crate::tag::Tag;
    use pest::Parser;

    use anyhow::{anyhow, Result};

    use std::convert::TryFrom;

    #[test]
    fn parse_open_tag() -> Result<()> {
        let mut pairs = QfxParser::parse(Rule::tag_line, "<BANKTRANLIST>")?;
        let tag = Tag::try_from(pairs.next().ok_or(anyhow!("empty line"))?)?;
        assert_eq!(tag, Tag::Open("BANKTRANLIST"));
        Ok(())
    }

    #[test]
    fn parse_close_tag() -> Result<()> {
        let mut pairs = QfxParser::parse(Rule::tag_line, "</STMTTRN>")?;
        let tag = Tag::try_from(pairs.next().ok_or(anyhow!("empty line"))?)?;
        assert_eq!(tag, Tag::Close("STMTTRN"));
        Ok(())
    }

    #[test]
    fn parse_leaf_tag() -> Result<()> {
        let mut pairs = QfxParser::parse(Rule::tag_line, "<DTPOSTED>20230115120000.000[-5:EST]")?;
        let tag = Tag::try_from(pairs.next().ok_or(anyhow!("empty line"))?)?;
        assert_eq!(tag, Tag::Leaf("DTPOSTED", "20230115120000.000[-5:EST]"));
        assert_eq!(tag.name(), "DTPOSTED");
        Ok(())
    }

    #[test]
    fn leaf_content_is_the_raw_remainder() -> Result<()> {
        let mut pairs = QfxParser::parse(Rule::tag_line, "<NAME>AT&T <BILL> PAY")?;
        let tag = Tag::try_from(pairs.next().ok_or(anyhow!("empty line"))?)?;
        assert_eq!(tag, Tag::Leaf("NAME", "AT&T <BILL> PAY"));
        Ok(())
    }

    #[test]
    fn display_matches_source_line() {
        assert_eq!(Tag::Open("OFX").to_string(), "<OFX>");
        assert_eq!(Tag::Close("OFX").to_string(), "</OFX>");
        assert_eq!(Tag::Leaf("TRNAMT", "-42.00").to_string(), "<TRNAMT>-42.00");
    }
}
