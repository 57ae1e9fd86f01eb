//! The project: an ordered, uniquely named collection of files.

use serde::{Deserialize, Serialize};

use crate::file::{Language, ProjectFile};
use crate::{ProjectError, ProjectResult};

/// File names that every project must keep.
///
/// These three make up the minimal site (markup, styling, behavior) and
/// are the targets of AI generation, so deleting them is refused.
pub const RESERVED_FILES: [&str; 3] = ["index.html", "style.css", "script.js"];

/// An in-memory website project.
///
/// Invariants:
/// - file names are unique within the project
/// - insertion order is display order
///
/// The `files` field stays private so every mutation goes through methods
/// that uphold the uniqueness invariant. Deserialized projects are not
/// trusted; callers loading persisted state run [`Project::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name of the project
    pub name: String,

    /// Ordered list of files
    files: Vec<ProjectFile>,
}

impl Project {
    /// Creates an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Creates the default starter project with the three reserved files.
    pub fn starter(name: impl Into<String>) -> Self {
        let files = vec![
            ProjectFile::new("index.html", Language::Html, STARTER_HTML),
            ProjectFile::new("style.css", Language::Css, STARTER_CSS),
            ProjectFile::new("script.js", Language::Javascript, STARTER_JS),
        ];
        Self {
            name: name.into(),
            files,
        }
    }

    /// Returns the files in display order.
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    /// Returns the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the project has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns true if a file with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    /// Looks up a file by name.
    pub fn file(&self, name: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Looks up a file by name, mutably.
    pub fn file_mut(&mut self, name: &str) -> Option<&mut ProjectFile> {
        self.files.iter_mut().find(|f| f.name == name)
    }

    /// Returns the first file tagged with the given language.
    pub fn first_of(&self, language: Language) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.language == language)
    }

    /// Appends a new file with boilerplate content.
    ///
    /// Fails with [`ProjectError::DuplicateFileName`] if a file with that
    /// name already exists; the file list is left unchanged.
    pub fn create_file(&mut self, name: &str, language: Language) -> ProjectResult<()> {
        if self.contains(name) {
            return Err(ProjectError::DuplicateFileName(name.to_string()));
        }

        self.files.push(ProjectFile::with_boilerplate(name, language));
        Ok(())
    }

    /// Inserts an existing file, preserving the uniqueness invariant.
    pub fn insert_file(&mut self, file: ProjectFile) -> ProjectResult<()> {
        if self.contains(&file.name) {
            return Err(ProjectError::DuplicateFileName(file.name));
        }
        self.files.push(file);
        Ok(())
    }

    /// Removes a file by name.
    ///
    /// Reserved files ([`RESERVED_FILES`]) are refused with
    /// [`ProjectError::ProtectedFile`]; unknown names fail with
    /// [`ProjectError::FileNotFound`]. On success exactly one entry is
    /// removed.
    pub fn delete_file(&mut self, name: &str) -> ProjectResult<ProjectFile> {
        if RESERVED_FILES.contains(&name) {
            return Err(ProjectError::ProtectedFile(name.to_string()));
        }

        let idx = self
            .files
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| ProjectError::FileNotFound(name.to_string()))?;

        Ok(self.files.remove(idx))
    }

    /// Replaces the content of the named file.
    ///
    /// Returns `true` if a file was updated; a missing file is a silent
    /// no-op (the editor binding may race a deletion) and returns `false`.
    pub fn update_content(&mut self, name: &str, content: &str) -> bool {
        match self.file_mut(name) {
            Some(file) => {
                file.content.clear();
                file.content.push_str(content);
                true
            }
            None => false,
        }
    }

    /// Checks the project invariants.
    ///
    /// Used when loading persisted state, where the serialized form may
    /// have been tampered with or truncated.
    pub fn validate(&self) -> Result<(), String> {
        for (i, file) in self.files.iter().enumerate() {
            if file.name.is_empty() {
                return Err(format!("file at index {i} has an empty name"));
            }
            if self.files[..i].iter().any(|f| f.name == file.name) {
                return Err(format!("duplicate file name '{}'", file.name));
            }
        }
        Ok(())
    }
}

const STARTER_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Store</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <header>
        <h1>My Store</h1>
        <nav>
            <a href="#">Home</a>
            <a href="#">Products</a>
            <a href="#">Contact</a>
        </nav>
    </header>
    <main>
        <section class="hero">
            <h2>The best products, at the best prices</h2>
            <p>Discover our wide range of quality products.</p>
            <button>Shop now</button>
        </section>
        <section class="products-grid">
            <!-- products go here -->
        </section>
    </main>
    <footer>
        <p>&copy; 2024 My Store. All rights reserved.</p>
    </footer>
    <script src="script.js"></script>
</body>
</html>
"##;

const STARTER_CSS: &str = r#"body {
    font-family: sans-serif;
    margin: 0;
    background-color: #f4f4f9;
    color: #333;
}

header {
    background-color: #333;
    color: white;
    padding: 1rem;
    text-align: center;
}

nav a {
    color: white;
    margin: 0 15px;
    text-decoration: none;
}

.hero {
    text-align: center;
    padding: 50px 20px;
    background-color: #e2e8f0;
}

.hero button {
    background-color: #333;
    color: white;
    padding: 10px 20px;
    border: none;
    cursor: pointer;
    font-size: 1rem;
}

footer {
    text-align: center;
    padding: 20px;
    background-color: #333;
    color: white;
}
"#;

const STARTER_JS: &str = "console.log('Welcome to your store!');\n";
