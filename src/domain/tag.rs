//! Case-insensitive tag labels attached to notes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A case-insensitive label from a note's `tags` front matter.
///
/// The label keeps its original spelling for display, while equality,
/// hashing and ordering use the lower-cased form, so `Golang`, `golang` and
/// `GOLANG` are the same tag. Labels may contain inner whitespace
/// (`machine learning`) but not commas, because listings join tags with `,`.
///
/// # Examples
///
/// ```
/// use notes::domain::Tag;
///
/// let tag = Tag::new("A-BIT-LONG").unwrap();
/// assert_eq!(tag.as_str(), "A-BIT-LONG");
/// assert_eq!(tag, Tag::new("a-bit-long").unwrap());
/// ```
#[derive(Clone)]
pub struct Tag {
    label: String,
    folded: String,
}

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a tag from `s`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty after trimming, or
    /// contains a comma.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let label = s.trim();

        if label.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if label.contains(',') {
            return Err(ParseTagError(format!(
                "invalid tag '{label}': tags cannot contain commas"
            )));
        }

        Ok(Self {
            label: label.to_string(),
            folded: label.to_lowercase(),
        })
    }

    /// The tag as written in the front matter.
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Lower-cased form used for comparison.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.label)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
