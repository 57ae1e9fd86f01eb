//! # Webforge AI
//!
//! The AI code-generation boundary: the response contract, strict parsing
//! of model output, prompt construction, and the provider trait a real
//! backend implements.
//!
//! ## The contract
//!
//! A successful generation yields exactly three strings:
//!
//! ```json
//! {"html": "...", "css": "...", "javascript": "..."}
//! ```
//!
//! Anything else — missing keys, extra keys, non-string values, invalid
//! JSON — is a malformed response. The caller (`webforge-core`) applies a
//! parsed result to the three reserved project files all-or-nothing, so a
//! failure can never leave the project half-updated.
//!
//! The live HTTP call is out of scope here; this crate defines the seam
//! ([`GenerationProvider`]) and ships a scripted implementation for tests
//! and demos.

pub mod contract;
pub mod prompt;
pub mod provider;

pub use contract::GeneratedSite;
pub use prompt::build_prompt;
pub use provider::{GenerationProvider, ScriptedProvider};

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors from the generation boundary.
///
/// All variants are recoverable: the user sees the message and the
/// project stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation failed: {0}")]
    Failed(String),

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Provider '{0}' is not available")]
    ProviderUnavailable(String),
}
