//! The generation response contract and its parser.

use serde::{Deserialize, Serialize};

use crate::{GenerationError, GenerationResult};

/// A complete generated site: one value per reserved project file.
///
/// `deny_unknown_fields` enforces the contract's "exactly these keys"
/// rule; serde's typing enforces "all strings".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedSite {
    /// Replacement content for `index.html`
    pub html: String,

    /// Replacement content for `style.css`
    pub css: String,

    /// Replacement content for `script.js`
    pub javascript: String,
}

impl GeneratedSite {
    /// Parses raw model output into the contract.
    ///
    /// Models sometimes wrap the JSON in a markdown code fence; the fence
    /// is stripped before parsing. Any shape violation is reported as
    /// [`GenerationError::MalformedResponse`].
    pub fn parse(raw: &str) -> GenerationResult<Self> {
        let cleaned = strip_code_fence(raw);
        serde_json::from_str(cleaned).map_err(|e| {
            tracing::debug!("rejected generation response: {e}");
            GenerationError::MalformedResponse(e.to_string())
        })
    }
}

/// Strips a surrounding ```json ... ``` fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}
