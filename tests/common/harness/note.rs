//! Builder for test notes with sensible defaults.

// Allow dead code since not every test binary uses every builder method
#![allow(dead_code)]

use std::path::PathBuf;

/// Builder for creating test notes with sensible defaults.
///
/// Renders to a markdown file with YAML front matter, placed at
/// `<category>/<file>` below the notes home.
#[derive(Debug, Clone)]
pub struct TestNote {
    category: String,
    file: String,
    title: String,
    created: String,
    tags: Vec<String>,
    body: String,
}

impl TestNote {
    /// Creates a new test note in `category` (a `/`-separated directory).
    pub fn new(category: impl Into<String>, file: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            file: file.into(),
            title: title.into(),
            created: "2018-10-30T11:37:45+09:00".to_string(),
            tags: Vec::new(),
            body: String::new(),
        }
    }

    /// Sets the raw `created` value.
    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the path relative to the notes home.
    pub fn rel_path(&self) -> PathBuf {
        PathBuf::from(&self.category).join(&self.file)
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the note file contents.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: \"{}\"\n", self.title.replace('"', "\\\"")));
        if !self.tags.is_empty() {
            out.push_str(&format!("tags: [{}]\n", self.tags.join(", ")));
        }
        out.push_str(&format!("created: {}\n", self.created));
        out.push_str("---\n\n");
        out.push_str(&self.body);
        if !self.body.is_empty() && !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("blog/tech", "go.md", "How to handle files");
        assert_eq!(note.title(), "How to handle files");
        assert_eq!(note.rel_path(), PathBuf::from("blog/tech/go.md"));
    }

    #[test]
    fn test_note_renders_front_matter() {
        let note = TestNote::new("memo", "urls.md", "URLs for notes")
            .tag("notes")
            .tag("links")
            .created("2018-11-20")
            .body("# Links");

        assert_eq!(
            note.to_markdown(),
            "---\ntitle: \"URLs for notes\"\ntags: [notes, links]\ncreated: 2018-11-20\n---\n\n# Links\n"
        );
    }
}
