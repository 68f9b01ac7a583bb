//! Frontmatter parser for extracting YAML metadata from markdown files.

use crate::domain::{ParseTagError, Tag};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

/// Metadata and body split out of a note file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNote {
    pub title: String,
    pub tags: Vec<Tag>,
    pub created: DateTime<FixedOffset>,
    pub body: String,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing opening frontmatter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("missing required frontmatter field '{0}'")]
    MissingField(&'static str),

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("cannot parse created date time '{value}': {source}")]
    InvalidCreated {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    InvalidTag(#[from] ParseTagError),
}

/// Frontmatter as written in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawFrontmatter {
    title: Option<String>,
    created: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parses markdown content with YAML frontmatter.
///
/// # Format
/// ```text
/// ---
/// title: How to handle files in Go
/// created: 2018-10-30T11:37:45+09:00
/// tags: [golang, file]
/// ---
/// Body content here...
/// ```
///
/// `created` accepts RFC 3339 or a plain `YYYY-MM-DD` date (midnight UTC).
/// Unknown keys are ignored.
///
/// # Errors
///
/// Returns `ParseError` if the delimiters are missing, the YAML is invalid,
/// or `title`/`created`/`tags` are missing or malformed.
pub fn parse(content: &str) -> Result<ParsedNote, ParseError> {
    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else if content == "---" {
        return Err(ParseError::MissingClosingDelimiter);
    } else {
        return Err(ParseError::MissingOpeningDelimiter);
    };

    let yaml_and_rest = &content[after_opening..];
    let closing_pos = find_closing_delimiter(yaml_and_rest)?;
    let yaml_content = &yaml_and_rest[..closing_pos];

    let after_closing = &yaml_and_rest[closing_pos..];
    let body = after_closing
        .strip_prefix("---\r\n")
        .or_else(|| after_closing.strip_prefix("---\n"))
        .unwrap_or("")
        .to_string();

    // An empty frontmatter block deserializes to unit, not to a map.
    let raw: RawFrontmatter = if yaml_content.trim().is_empty() {
        RawFrontmatter {
            title: None,
            created: None,
            tags: Vec::new(),
        }
    } else {
        serde_yaml::from_str(yaml_content)?
    };

    let title = raw.title.ok_or(ParseError::MissingField("title"))?;
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ParseError::EmptyTitle);
    }

    let created = raw.created.ok_or(ParseError::MissingField("created"))?;
    let created = parse_created(&created)?;

    let tags = raw
        .tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedNote {
        title,
        tags,
        created,
        body,
    })
}

/// Parses a `created` value as RFC 3339, falling back to `YYYY-MM-DD`.
fn parse_created(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt),
        Err(rfc_err) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset()),
            Err(_) => Err(ParseError::InvalidCreated {
                value: value.to_string(),
                source: rfc_err,
            }),
        },
    }
}

/// Finds the position of the closing `---` delimiter.
///
/// The delimiter must start a line and be followed by a newline or EOF.
fn find_closing_delimiter(content: &str) -> Result<usize, ParseError> {
    let bytes = content.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if content[pos..].starts_with("---") {
            let rest = &content[pos + 3..];
            if rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n") {
                return Ok(pos);
            }
        }

        match content[pos..].find('\n') {
            Some(offset) => pos += offset + 1,
            None => break,
        }
    }

    Err(ParseError::MissingClosingDelimiter)
}
