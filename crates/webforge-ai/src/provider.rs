//! Provider trait for generation backends.
//!
//! A provider turns a prompt into a [`GeneratedSite`]. The real backend
//! is an HTTP call to a hosted model; tests and the CLI demo use
//! [`ScriptedProvider`]. The trait is object-safe so the session can hold
//! a `&dyn GenerationProvider` chosen at startup.

use async_trait::async_trait;

use crate::{GeneratedSite, GenerationError, GenerationResult};

/// A generation backend.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Provider name, for logging.
    fn name(&self) -> &str;

    /// Whether the provider is configured and usable (API key present,
    /// endpoint reachable at startup, ...).
    fn is_available(&self) -> bool {
        true
    }

    /// Generates a site from an already-built prompt.
    ///
    /// This is the only suspending operation in the system; callers must
    /// tolerate it resolving after the user has moved on (see the
    /// generation ticket in `webforge-core`).
    async fn generate(&self, prompt: &str) -> GenerationResult<GeneratedSite>;
}

/// A provider that replays a fixed outcome.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    outcome: Result<GeneratedSite, String>,
}

impl ScriptedProvider {
    /// Always succeeds with the given site.
    pub fn succeeding(site: GeneratedSite) -> Self {
        Self { outcome: Ok(site) }
    }

    /// Always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<GeneratedSite> {
        tracing::debug!(provider = self.name(), prompt_len = prompt.len(), "scripted generation");
        self.outcome
            .clone()
            .map_err(GenerationError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_site() -> GeneratedSite {
        GeneratedSite {
            html: "<body></body>".into(),
            css: "body{}".into(),
            javascript: "".into(),
        }
    }

    #[tokio::test]
    async fn test_scripted_success() {
        let provider = ScriptedProvider::succeeding(sample_site());
        let site = provider.generate("prompt").await.unwrap();
        assert_eq!(site, sample_site());
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let provider = ScriptedProvider::failing("quota exceeded");
        let err = provider.generate("prompt").await.unwrap_err();
        assert_eq!(err, GenerationError::Failed("quota exceeded".into()));
    }
}
