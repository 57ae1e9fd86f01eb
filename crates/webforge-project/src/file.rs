//! Project files and language tagging.

use serde::{Deserialize, Serialize};

/// Language a project file is tagged with.
///
/// The tag drives boilerplate content on creation and, for CSS and
/// JavaScript, where the preview compositor inlines the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Javascript,
    Json,
    Markdown,
    Plain,
}

impl Language {
    /// Detects the language from a file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "js" | "mjs" => Language::Javascript,
            "json" => Language::Json,
            "md" | "markdown" => Language::Markdown,
            _ => Language::Plain,
        }
    }

    /// Detects the language from a file name (by its extension).
    pub fn from_file_name(name: &str) -> Self {
        name.rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Language::Plain)
    }

    /// Returns the lowercase language identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Plain => "plain",
        }
    }

    /// Returns starter content for a newly created file.
    pub fn boilerplate(&self, name: &str) -> String {
        match self {
            Language::Html => format!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>{name}</title>\n</head>\n<body>\n\n</body>\n</html>\n"
            ),
            Language::Css => format!("/* {name} */\n"),
            Language::Javascript => format!("// {name}\n"),
            Language::Json => "{}\n".to_string(),
            Language::Markdown => format!("# {name}\n"),
            Language::Plain => String::new(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single editable file within a project.
///
/// Identity is `name`; two files in the same project never share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// File name, unique within the project
    pub name: String,

    /// Language tag
    pub language: Language,

    /// Full text content
    pub content: String,
}

impl ProjectFile {
    /// Creates a file with explicit content.
    pub fn new(name: impl Into<String>, language: Language, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language,
            content: content.into(),
        }
    }

    /// Creates a file with language-appropriate boilerplate content.
    pub fn with_boilerplate(name: impl Into<String>, language: Language) -> Self {
        let name = name.into();
        let content = language.boilerplate(&name);
        Self {
            name,
            language,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("html"), Language::Html);
        assert_eq!(Language::from_extension("HTM"), Language::Html);
        assert_eq!(Language::from_extension("css"), Language::Css);
        assert_eq!(Language::from_extension("js"), Language::Javascript);
        assert_eq!(Language::from_extension("xyz"), Language::Plain);
    }

    #[test]
    fn test_language_from_file_name() {
        assert_eq!(Language::from_file_name("about.html"), Language::Html);
        assert_eq!(Language::from_file_name("theme.css"), Language::Css);
        assert_eq!(Language::from_file_name("README"), Language::Plain);
    }

    #[test]
    fn test_boilerplate_mentions_name() {
        let file = ProjectFile::with_boilerplate("extra.js", Language::Javascript);
        assert_eq!(file.content, "// extra.js\n");

        let file = ProjectFile::with_boilerplate("about.html", Language::Html);
        assert!(file.content.contains("<title>about.html</title>"));
    }

    #[test]
    fn test_language_serde_is_lowercase() {
        let json = serde_json::to_string(&Language::Javascript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}
