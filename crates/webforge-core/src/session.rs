//! Session orchestration.
//!
//! [`Session`] is the facade the UI layer talks to: it owns the project,
//! tracks the active file, publishes an event after every mutation, and
//! guards AI generation results against cancellation. It is the single
//! logical writer — concurrency in the system reduces to "a generation
//! may resolve after the user moved on", which the ticket mechanism
//! handles without locks.

use webforge_ai::{GeneratedSite, GenerationProvider, build_prompt};
use webforge_project::{Language, Project, ProjectExport, RESERVED_FILES};

use crate::config::Config;
use crate::event::{EventBus, SessionEvent};
use crate::{CoreError, CoreResult};

/// The file that is active when a session starts or after the active
/// file is deleted.
const DEFAULT_ACTIVE: &str = "index.html";

/// Proof that a generation request was started under the current epoch.
///
/// The session hands out a ticket when the generation modal opens and
/// bumps its epoch when the modal is closed. A result carrying a stale
/// ticket is discarded instead of applied, so a cancelled request can
/// never mutate the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

/// What happened to a generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The result was written to the reserved files
    Applied,
    /// The ticket was stale; the project was not touched
    Discarded,
}

/// The main session state.
#[derive(Debug)]
pub struct Session {
    /// The project being edited
    project: Project,

    /// Name of the file bound to the editor widget
    active_file: String,

    /// Builder configuration
    config: Config,

    /// Event bus for notifications
    event_bus: EventBus,

    /// Current generation epoch; bumped on cancellation
    generation_epoch: u64,
}

impl Session {
    /// Creates a session with the starter project.
    pub fn new(config: Config) -> Self {
        let project = Project::starter(config.project.default_name.clone());
        Self::with_project(project, config)
    }

    /// Creates a session over an existing project.
    pub fn with_project(project: Project, config: Config) -> Self {
        let active_file = if project.contains(DEFAULT_ACTIVE) {
            DEFAULT_ACTIVE.to_string()
        } else {
            project
                .files()
                .first()
                .map(|f| f.name.clone())
                .unwrap_or_else(|| DEFAULT_ACTIVE.to_string())
        };

        Self {
            project,
            active_file,
            config,
            event_bus: EventBus::new(),
            generation_epoch: 0,
        }
    }

    /// Restores a session from persisted state.
    ///
    /// The caller (the persist module) has already validated that
    /// `active_file` names an existing file.
    pub(crate) fn restore(project: Project, active_file: String, config: Config) -> Self {
        Self {
            project,
            active_file,
            config,
            event_bus: EventBus::new(),
            generation_epoch: 0,
        }
    }

    // ==================== Project Store ====================

    /// Returns the project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the name of the active file.
    pub fn active_file(&self) -> &str {
        &self.active_file
    }

    /// Returns the content of the active file.
    pub fn active_content(&self) -> &str {
        self.project
            .file(&self.active_file)
            .map(|f| f.content.as_str())
            .unwrap_or("")
    }

    /// Binds the editor to a different file.
    ///
    /// Unknown names fail with `FileNotFound` so the UI can surface an
    /// invalid selection instead of silently ignoring it.
    pub fn select_file(&mut self, name: &str) -> CoreResult<()> {
        if !self.project.contains(name) {
            return Err(webforge_project::ProjectError::FileNotFound(name.to_string()).into());
        }

        if self.active_file != name {
            self.active_file = name.to_string();
            self.emit(SessionEvent::FileSelected(name.to_string()));
        }
        Ok(())
    }

    /// Replaces the content of the named file with what the editor holds.
    ///
    /// A missing file is a silent no-op: the widget may flush an edit for
    /// a file that was deleted in the meantime, and the last writer wins.
    pub fn update_file_content(&mut self, name: &str, content: &str) {
        let unchanged = self
            .project
            .file(name)
            .is_some_and(|f| f.content == content);
        if unchanged {
            return;
        }

        if self.project.update_content(name, content) {
            self.emit(SessionEvent::ContentChanged(name.to_string()));
        }
    }

    /// Replaces the content of the active file.
    pub fn update_active_content(&mut self, content: &str) {
        let name = self.active_file.clone();
        self.update_file_content(&name, content);
    }

    /// Creates a file, inferring the language from its extension.
    ///
    /// The new file gets boilerplate content and becomes active.
    pub fn create_file(&mut self, name: &str) -> CoreResult<()> {
        self.create_file_as(name, Language::from_file_name(name))
    }

    /// Creates a file with an explicit language tag.
    pub fn create_file_as(&mut self, name: &str, language: Language) -> CoreResult<()> {
        self.project.create_file(name, language)?;
        self.active_file = name.to_string();

        tracing::debug!(file = name, language = %language, "file created");
        self.emit(SessionEvent::FileCreated(name.to_string()));
        Ok(())
    }

    /// Deletes a file.
    ///
    /// Reserved files are refused. If the deleted file was active, the
    /// editor falls back to `index.html`.
    pub fn delete_file(&mut self, name: &str) -> CoreResult<()> {
        self.project.delete_file(name)?;

        if self.active_file == name {
            self.active_file = DEFAULT_ACTIVE.to_string();
        }

        tracing::debug!(file = name, "file deleted");
        self.emit(SessionEvent::FileDeleted(name.to_string()));
        Ok(())
    }

    // ==================== Preview & Export ====================

    /// Composes the current project into a single preview document.
    pub fn compose_preview(&self) -> String {
        webforge_preview::compose(&self.project)
    }

    /// Captures an export dump of the project.
    pub fn export(&self) -> ProjectExport {
        ProjectExport::capture(&self.project)
    }

    // ==================== Generation ====================

    /// Starts a generation attempt under the current epoch.
    pub fn begin_generation(&self) -> GenerationTicket {
        GenerationTicket {
            epoch: self.generation_epoch,
        }
    }

    /// Cancels in-flight generation (the modal was closed).
    ///
    /// All outstanding tickets become stale; their results will be
    /// discarded on arrival.
    pub fn cancel_generation(&mut self) {
        self.generation_epoch += 1;
        tracing::debug!(epoch = self.generation_epoch, "generation cancelled");
    }

    /// Applies a generation result, unless its ticket went stale.
    ///
    /// Overwrites the content of the three reserved files and nothing
    /// else. Empty fields leave the corresponding file untouched. The
    /// write is all-or-nothing by construction: the result is already
    /// fully parsed, so there is no partial-application path.
    pub fn apply_generation(
        &mut self,
        ticket: GenerationTicket,
        site: GeneratedSite,
    ) -> GenerationOutcome {
        if ticket.epoch != self.generation_epoch {
            tracing::info!("discarding generation result from cancelled request");
            self.emit(SessionEvent::GenerationDiscarded);
            return GenerationOutcome::Discarded;
        }

        let replacements = [
            (RESERVED_FILES[0], &site.html),
            (RESERVED_FILES[1], &site.css),
            (RESERVED_FILES[2], &site.javascript),
        ];
        for (name, content) in replacements {
            if !content.is_empty() {
                self.project.update_content(name, content);
            }
        }

        tracing::info!("generation result applied");
        self.emit(SessionEvent::GenerationApplied);
        GenerationOutcome::Applied
    }

    /// Drives a provider call and the guarded apply in one step.
    ///
    /// A provider failure propagates as an error and leaves the project
    /// untouched; a stale ticket discards the result silently.
    pub async fn generate_and_apply(
        &mut self,
        provider: &dyn GenerationProvider,
        request: &str,
        ticket: GenerationTicket,
    ) -> CoreResult<GenerationOutcome> {
        if !provider.is_available() {
            return Err(CoreError::Generation(
                webforge_ai::GenerationError::ProviderUnavailable(provider.name().to_string()),
            ));
        }

        let prompt = build_prompt(request);
        let site = provider.generate(&prompt).await?;
        Ok(self.apply_generation(ticket, site))
    }

    // ==================== Configuration & Events ====================

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.emit(SessionEvent::ConfigChanged);
    }

    /// Subscribes to session events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        self.event_bus.emit(event);
    }
}
