//! The four-step prompt building session.

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

use crate::catalog::Template;
use crate::errors::{GenerationError, WizardError};
use crate::history::{HistoryEntry, HistoryStore};
use crate::preview;
use crate::provider::Provider;
use crate::settings::SettingsRecord;
use crate::wire::{GenerationRequest, GenerationResponse};

mod presets;

pub use presets::{structure_preset, StructurePreset, COMMON_INPUTS, STRUCTURE_PRESETS};

/// Minimum trimmed task length (exclusive) before leaving the first step.
pub const MIN_TASK_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Task,
    Inputs,
    Structure,
    Generate,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Task, Step::Inputs, Step::Structure, Step::Generate];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Task => "Define Task",
            Step::Inputs => "Add Inputs",
            Step::Structure => "Plan Structure",
            Step::Generate => "Generate",
        }
    }

    fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Step::ALL[i])
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index() + 1, self.title())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub task: String,
    /// Unique `[A-Z0-9_]+` tokens in insertion order.
    pub inputs: Vec<String>,
    pub structure: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Task(String),
    Inputs(Vec<String>),
    Structure(String),
    Instructions(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Library,
    History,
    Settings,
}

/// `"user id"` -> `"USER_ID"`. Returns `None` when nothing usable is left.
pub fn normalize_input(raw: &str) -> Option<String> {
    let upper = raw.to_uppercase();
    let token: String = upper
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_')
        .collect();
    (!token.is_empty()).then_some(token)
}

fn normalize_inputs(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for token in raw.iter().filter_map(|r| normalize_input(r)) {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

/// A request that has been issued but not yet resolved.
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub request: GenerationRequest,
}

#[derive(Debug, Default)]
pub struct Wizard {
    step: Step,
    form: FormData,
    generated: String,
    in_flight: bool,
    overlay: Overlay,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn open(&mut self, overlay: Overlay) {
        self.overlay = overlay;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::Task => self.form.task.trim().chars().count() > MIN_TASK_CHARS,
            Step::Inputs | Step::Structure | Step::Generate => true,
        }
    }

    /// Moves forward one step when the current step allows it. Returns
    /// whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Task(v) => self.form.task = v,
            FieldUpdate::Inputs(v) => self.form.inputs = normalize_inputs(v),
            FieldUpdate::Structure(v) => self.form.structure = v,
            FieldUpdate::Instructions(v) => {
                self.generated = v.clone();
                self.form.instructions = v;
            }
        }
    }

    /// Normalizes and appends an input token. Returns the stored token, or
    /// `None` for empty or duplicate input.
    pub fn add_input(&mut self, raw: &str) -> Option<String> {
        let token = normalize_input(raw)?;
        if self.form.inputs.contains(&token) {
            return None;
        }
        self.form.inputs.push(token.clone());
        Some(token)
    }

    pub fn remove_input(&mut self, token: &str) -> bool {
        let before = self.form.inputs.len();
        self.form.inputs.retain(|t| t != token);
        self.form.inputs.len() != before
    }

    pub fn apply_structure_preset(&mut self, id: &str) -> bool {
        match structure_preset(id) {
            Some(p) => {
                self.form.structure = p.body.to_string();
                true
            }
            None => false,
        }
    }

    pub fn load_template(&mut self, t: &Template) {
        self.form = FormData {
            task: t.task.to_string(),
            inputs: t.inputs.iter().map(|s| s.to_string()).collect(),
            structure: t.structure.to_string(),
            instructions: String::new(),
        };
        self.generated.clear();
        self.step = Step::Task;
        self.close_overlay();
        debug!(template = t.id, "template loaded");
    }

    /// Restores a past generation and jumps straight to the last step.
    pub fn load_history_entry(&mut self, e: &HistoryEntry) {
        self.form = FormData {
            task: e.task.clone(),
            inputs: e.inputs.clone(),
            structure: String::new(),
            instructions: e.prompt.clone(),
        };
        self.generated = e.prompt.clone();
        self.step = Step::Generate;
        self.close_overlay();
        debug!(entry = e.id, "history entry loaded");
    }

    /// Text to show in the preview pane.
    pub fn preview(&self) -> String {
        if self.generated.is_empty() {
            preview::assemble(&self.form)
        } else {
            self.generated.clone()
        }
    }

    /// Final text for copy/export, if any has been produced.
    pub fn final_prompt(&self) -> Option<&str> {
        [self.generated.as_str(), self.form.instructions.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    /// Takes the in-flight lock and snapshots the request. The session stays
    /// usable until [`Wizard::complete_generation`] is called.
    pub fn begin_generation(&mut self, settings: &SettingsRecord) -> Result<PendingGeneration, WizardError> {
        if self.in_flight {
            return Err(WizardError::Busy);
        }
        if self.form.task.trim().is_empty() {
            return Err(WizardError::EmptyTask);
        }
        self.in_flight = true;
        let request = GenerationRequest::new(&self.form.task, &self.form.inputs, &self.form.structure, settings);
        info!(provider = %request.provider, model = ?request.model, "generation started");
        Ok(PendingGeneration { request })
    }

    /// Releases the lock and applies the outcome. On failure nothing in the
    /// form or the history changes.
    pub fn complete_generation(
        &mut self,
        pending: PendingGeneration,
        result: Result<GenerationResponse, GenerationError>,
        history: &HistoryStore,
        now: DateTime<Utc>,
    ) -> Result<HistoryEntry, WizardError> {
        self.in_flight = false;
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "generation failed");
                return Err(e.into());
            }
        };

        self.generated = resp.prompt.clone();
        self.form.instructions = resp.prompt.clone();

        let entry = HistoryEntry::new(
            pending.request.task,
            pending.request.inputs,
            resp.prompt,
            resp.provider_used,
            now,
        );
        if let Err(e) = history.save(entry.clone()) {
            warn!(error = %e, "could not record generation in history");
        }
        info!(provider = %entry.provider, model = %resp.model_used, chars = entry.prompt.len(), "generation finished");
        Ok(entry)
    }

    pub async fn generate(
        &mut self,
        provider: &dyn Provider,
        settings: &SettingsRecord,
        history: &HistoryStore,
    ) -> Result<HistoryEntry, WizardError> {
        let pending = self.begin_generation(settings)?;
        let result = provider.generate(&pending.request).await;
        self.complete_generation(pending, result, history, Utc::now())
    }
}

/// Short confirmation shown after a successful generation.
pub fn success_message(provider_used: &str) -> &'static str {
    match provider_used {
        "openai" => "Generated with OpenAI!",
        "anthropic" => "Generated with Claude!",
        _ => "Generated with template!",
    }
}
