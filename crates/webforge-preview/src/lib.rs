//! # Webforge Preview
//!
//! Flattens a multi-file project into one self-contained HTML document:
//! the CSS file is inlined into a `<style>` block in the head, the
//! JavaScript file into a `<script>` block at the end of the body. The
//! resulting string is what the host renders in an isolated surface
//! (an iframe with `srcdoc` in the browser shell).
//!
//! ## Design
//!
//! [`compose`] is a pure function over the project: it never mutates its
//! input and identical input yields identical output, so the caller can
//! recompose on every change without bookkeeping. No HTML validation or
//! sanitization happens here — isolation is the renderer's job.

use webforge_project::{Language, Project, ProjectFile};

/// The entry file name the compositor looks for first.
pub const ENTRY_FILE: &str = "index.html";

/// Errors produced by entry-document lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("Project '{0}' has no HTML entry document")]
    MissingEntryDocument(String),
}

/// Finds the document the preview is built from.
///
/// Prefers the file named `index.html`; falls back to the first file
/// tagged as HTML.
pub fn entry_document(project: &Project) -> Result<&ProjectFile, PreviewError> {
    project
        .file(ENTRY_FILE)
        .or_else(|| project.first_of(Language::Html))
        .ok_or_else(|| PreviewError::MissingEntryDocument(project.name.clone()))
}

/// Composes the project into a single renderable HTML document.
///
/// - Without an HTML file, a minimal fallback document is returned that
///   states the entry file is missing.
/// - The first CSS-tagged file is inserted as `<style>` before the first
///   `</head>`; if the document has no head, one is synthesized.
/// - The first JavaScript-tagged file is inserted as `<script>` before
///   the first `</body>`, or appended when the document has no body tag.
pub fn compose(project: &Project) -> String {
    let entry = match entry_document(project) {
        Ok(file) => file,
        Err(_) => return fallback_document(),
    };

    let mut html = entry.content.clone();

    if let Some(css) = project.first_of(Language::Css) {
        html = inject_style(&html, &css.content);
    }

    if let Some(js) = project.first_of(Language::Javascript) {
        html = inject_script(&html, &js.content);
    }

    html
}

/// Document shown when the project has no HTML file at all.
fn fallback_document() -> String {
    "<!DOCTYPE html><html><head></head><body><p>index.html is missing from this project.</p></body></html>"
        .to_string()
}

/// Inserts a `<style>` block immediately before the first `</head>`.
///
/// Documents without a `</head>` get one synthesized around the style
/// block, placed after a leading doctype when present.
fn inject_style(html: &str, css: &str) -> String {
    let block = format!("<style>{css}</style>");

    if let Some(idx) = html.find("</head>") {
        return splice(html, idx, &block);
    }

    let head = format!("<head>{block}</head>");
    match doctype_end(html) {
        Some(end) => splice(html, end, &head),
        None => format!("{head}{html}"),
    }
}

/// Inserts a `<script>` block immediately before the first `</body>`,
/// or appends it when no `</body>` exists.
fn inject_script(html: &str, js: &str) -> String {
    let block = format!("<script>{js}</script>");

    match html.find("</body>") {
        Some(idx) => splice(html, idx, &block),
        None => format!("{html}{block}"),
    }
}

/// Returns the byte offset just past a leading `<!DOCTYPE ...>`, if any.
fn doctype_end(html: &str) -> Option<usize> {
    let lead = html.len() - html.trim_start().len();
    let rest = &html[lead..];
    match rest.get(..9) {
        Some(prefix) if prefix.eq_ignore_ascii_case("<!doctype") => {
            rest.find('>').map(|i| lead + i + 1)
        }
        _ => None,
    }
}

fn splice(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project_with(files: Vec<ProjectFile>) -> Project {
        let mut project = Project::new("test");
        for file in files {
            project.insert_file(file).unwrap();
        }
        project
    }

    #[test]
    fn test_compose_keeps_body_markup() {
        let project = project_with(vec![ProjectFile::new(
            "index.html",
            Language::Html,
            "<html><head></head><body><h1>Hello</h1></body></html>",
        )]);

        assert!(compose(&project).contains("<h1>Hello</h1>"));
    }

    #[test]
    fn test_style_inserted_before_head_close() {
        let project = project_with(vec![
            ProjectFile::new("index.html", Language::Html, "<head></head>"),
            ProjectFile::new("style.css", Language::Css, "body{color:red}"),
        ]);

        let out = compose(&project);
        assert_eq!(out, "<head><style>body{color:red}</style></head>");
    }

    #[test]
    fn test_script_inserted_before_body_close() {
        let project = project_with(vec![
            ProjectFile::new("index.html", Language::Html, "<body></body>"),
            ProjectFile::new("script.js", Language::Javascript, "console.log(1)"),
        ]);

        let out = compose(&project);
        assert_eq!(out, "<body><script>console.log(1)</script></body>");
    }

    #[test]
    fn test_head_synthesized_after_doctype() {
        let project = project_with(vec![
            ProjectFile::new(
                "index.html",
                Language::Html,
                "<!DOCTYPE html><body>hi</body>",
            ),
            ProjectFile::new("style.css", Language::Css, "p{}"),
        ]);

        let out = compose(&project);
        assert_eq!(
            out,
            "<!DOCTYPE html><head><style>p{}</style></head><body>hi</body>"
        );
    }

    #[test]
    fn test_head_synthesized_without_doctype() {
        let project = project_with(vec![
            ProjectFile::new("index.html", Language::Html, "<p>bare</p>"),
            ProjectFile::new("style.css", Language::Css, "p{}"),
        ]);

        assert_eq!(
            compose(&project),
            "<head><style>p{}</style></head><p>bare</p>"
        );
    }

    #[test]
    fn test_script_appended_without_body_close() {
        let project = project_with(vec![
            ProjectFile::new("index.html", Language::Html, "<p>bare</p>"),
            ProjectFile::new("script.js", Language::Javascript, "x()"),
        ]);

        assert_eq!(compose(&project), "<p>bare</p><script>x()</script>");
    }

    #[test]
    fn test_fallback_when_no_html_file() {
        let project = project_with(vec![ProjectFile::new(
            "style.css",
            Language::Css,
            "body{}",
        )]);

        assert!(matches!(
            entry_document(&project),
            Err(PreviewError::MissingEntryDocument(_))
        ));
        assert!(compose(&project).contains("index.html is missing"));
    }

    #[test]
    fn test_first_html_file_used_when_index_absent() {
        let project = project_with(vec![ProjectFile::new(
            "about.html",
            Language::Html,
            "<body>about</body>",
        )]);

        assert_eq!(entry_document(&project).unwrap().name, "about.html");
        assert!(compose(&project).contains("about"));
    }

    #[test]
    fn test_compose_is_pure() {
        let mut project = Project::starter("demo");
        project
            .create_file("extra.js", Language::Javascript)
            .unwrap();

        let before = project.clone();
        let first = compose(&project);
        let second = compose(&project);

        assert_eq!(first, second);
        assert_eq!(project, before);
    }

    proptest! {
        /// Composition is deterministic for arbitrary file contents.
        #[test]
        fn prop_compose_deterministic(html in ".*", css in ".*", js in ".*") {
            let project = project_with(vec![
                ProjectFile::new("index.html", Language::Html, html),
                ProjectFile::new("style.css", Language::Css, css),
                ProjectFile::new("script.js", Language::Javascript, js),
            ]);

            prop_assert_eq!(compose(&project), compose(&project));
        }

        /// The CSS content always ends up in the composed document.
        #[test]
        fn prop_css_is_inlined(css in "[a-z{}:;#. ]*") {
            let project = project_with(vec![
                ProjectFile::new("index.html", Language::Html, "<head></head><body></body>"),
                ProjectFile::new("style.css", Language::Css, css.clone()),
            ]);

            let expected = format!("<style>{}</style>", css);
            prop_assert!(compose(&project).contains(&expected));
        }
    }
}
