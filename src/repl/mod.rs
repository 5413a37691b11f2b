//! Interactive terminal session driving a [`Wizard`].

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

use crate::catalog::{Catalog, ALL_CATEGORIES};
use crate::context::AppContext;
use crate::errors::WizardError;
use crate::export;
use crate::history::{HistoryEntry, HistoryStore};
use crate::log;
use crate::preview;
use crate::provider::Provider;
use crate::settings::SettingsStore;
use crate::ux;
use crate::wizard::{self, FieldUpdate, Overlay, Step, Wizard, COMMON_INPUTS, STRUCTURE_PRESETS};

const HELP: &str = "\
:next / :back         move between steps
:lib [query]          browse templates      :use <id>    load a template
:history              list past prompts     :load <id>   reopen one
:preset <id>          simple | detailed | structured
:suggest              common input names    :rm <NAME>   remove an input
:clear                empty the current field
:preview              show the assembled prompt
:gen                  generate instructions
:export               write the final prompt to a markdown file
:settings             show settings         :theme on|off
:quit";

pub fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Everything one session needs: the wizard plus its collaborators.
pub struct Session<'a> {
    pub ctx: &'a AppContext,
    pub provider: &'a dyn Provider,
    pub history: &'a HistoryStore,
    pub settings: &'a SettingsStore,
    pub catalog: Catalog,
    pub wizard: Wizard,
    /// Where to dump request/response pairs; `None` unless debugging.
    pub debug_dir: Option<PathBuf>,
}

impl<'a> Session<'a> {
    pub fn new(
        ctx: &'a AppContext,
        provider: &'a dyn Provider,
        history: &'a HistoryStore,
        settings: &'a SettingsStore,
    ) -> Self {
        Self {
            ctx,
            provider,
            history,
            settings,
            catalog: Catalog::builtin(),
            wizard: Wizard::new(),
            debug_dir: None,
        }
    }

    pub async fn generate(&mut self) -> Result<HistoryEntry, WizardError> {
        let settings = self.settings.load();
        let pending = self.wizard.begin_generation(&settings)?;

        let pb = spinner("Generating...");
        let result = self.provider.generate(&pending.request).await;
        pb.finish_and_clear();

        if let (Some(dir), Ok(resp)) = (&self.debug_dir, &result) {
            match log::save_exchange(dir, Uuid::new_v4(), &pending.request, resp) {
                Ok(saved) => {
                    log::print_saved_paths(&saved);
                    if let Err(e) = log::print_json_debug(&pending.request, resp) {
                        warn!(error = %e, "debug print failed");
                    }
                }
                Err(e) => warn!(error = %e, "could not save debug artifacts"),
            }
        }

        self.wizard.complete_generation(pending, result, self.history, Utc::now())
    }

    pub fn export(&self) -> Result<Option<PathBuf>> {
        let Some(text) = self.wizard.final_prompt() else {
            return Ok(None);
        };
        let path = export::write_markdown(&self.ctx.config.export_dir, text, Utc::now())?;
        ux::show_export(&path, text.len());
        Ok(Some(path))
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "MetaPrompt Generator".bold());
        println!("Type text to fill the current step, or :help for commands.");

        loop {
            ux::show_step_header(&self.ctx.theme, &self.wizard);
            self.show_step_hint();

            let Some(line) = ux::read_line("> ") else {
                break;
            };
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            match line.strip_prefix(':') {
                Some(cmd) => {
                    if !self.command(cmd).await? {
                        break;
                    }
                }
                None => self.text(line),
            }
        }
        Ok(())
    }

    fn show_step_hint(&self) {
        let form = self.wizard.form();
        match self.wizard.step() {
            Step::Task => {
                if !form.task.is_empty() {
                    println!("{}", form.task);
                }
                if !self.wizard.can_proceed() {
                    println!("{}", "Describe the task (more than 10 characters) to continue.".dimmed());
                }
            }
            Step::Inputs => {
                let current = if form.inputs.is_empty() { "-".to_string() } else { form.inputs.join(", ") };
                println!("Inputs: {}", current);
                println!("{}", "Type input names (comma separated), :suggest for ideas.".dimmed());
            }
            Step::Structure => {
                if form.structure.is_empty() {
                    println!("{}", "Optional. Leave empty to let the model decide. :preset <id> for a starting point.".dimmed());
                } else {
                    println!("{}", form.structure);
                }
            }
            Step::Generate => {
                ux::show_summary(&self.ctx.theme, &preview::summarize(form, self.wizard.generated()));
            }
        }
    }

    /// Plain text goes into the field of the current step.
    fn text(&mut self, line: &str) {
        let form = self.wizard.form().clone();
        match self.wizard.step() {
            Step::Task => self.wizard.update_field(FieldUpdate::Task(append(&form.task, line))),
            Step::Inputs => {
                for raw in line.split(',') {
                    match self.wizard.add_input(raw) {
                        Some(token) => println!("added {}", preview::placeholder(&token).green()),
                        None if !raw.trim().is_empty() => println!("skipped {:?}", raw.trim()),
                        None => {}
                    }
                }
            }
            Step::Structure => self.wizard.update_field(FieldUpdate::Structure(append(&form.structure, line))),
            Step::Generate => {
                let current = self.wizard.generated().to_string();
                self.wizard.update_field(FieldUpdate::Instructions(append(&current, line)));
            }
        }
    }

    /// Returns `false` when the session should end.
    async fn command(&mut self, cmd: &str) -> Result<bool> {
        let ctx = self.ctx;
        let theme = &ctx.theme;
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((n, a)) => (n, a.trim()),
            None => (cmd, ""),
        };

        match name {
            "q" | "quit" | "exit" => return Ok(false),
            "h" | "help" => println!("{HELP}"),
            "n" | "next" => {
                if !self.wizard.advance() {
                    println!("{}", "Cannot continue yet.".yellow());
                }
            }
            "b" | "back" => {
                self.wizard.retreat();
            }
            "lib" => {
                self.wizard.open(Overlay::Library);
                ux::show_templates(theme, &self.catalog.search(arg, ALL_CATEGORIES));
            }
            "use" => match arg.parse::<u32>().ok().and_then(|id| self.catalog.get(id)) {
                Some(t) => {
                    self.wizard.load_template(t);
                    println!("Loaded {}", t.title.bold());
                }
                None => println!("{}", "No such template.".red()),
            },
            "history" => {
                self.wizard.open(Overlay::History);
                ux::show_history(theme, &self.history.recent_first(), Utc::now());
            }
            "load" => match arg.parse::<i64>().ok().and_then(|id| self.history.find(id)) {
                Some(e) => self.wizard.load_history_entry(&e),
                None => println!("{}", "No such history entry.".red()),
            },
            "preset" => {
                if !self.wizard.apply_structure_preset(arg) {
                    let ids: Vec<&str> = STRUCTURE_PRESETS.iter().map(|p| p.id).collect();
                    println!("Presets: {}", ids.join(", "));
                }
            }
            "suggest" => println!("Common inputs: {}", COMMON_INPUTS.join(", ")),
            "rm" => {
                if !self.wizard.remove_input(&arg.to_uppercase()) {
                    println!("{}", "Not an input.".yellow());
                }
            }
            "clear" => {
                let update = match self.wizard.step() {
                    Step::Task => FieldUpdate::Task(String::new()),
                    Step::Inputs => FieldUpdate::Inputs(Vec::new()),
                    Step::Structure => FieldUpdate::Structure(String::new()),
                    Step::Generate => FieldUpdate::Instructions(String::new()),
                };
                self.wizard.update_field(update);
            }
            "preview" => ux::show_preview(theme, &self.wizard.preview()),
            "gen" | "generate" => match self.generate().await {
                Ok(entry) => {
                    println!("{}", wizard::success_message(&entry.provider).green().bold());
                    ux::show_preview(theme, &self.wizard.preview());
                }
                Err(e) => println!("{} {}", "Failed to generate prompt:".red().bold(), e),
            },
            "export" => match self.export() {
                Ok(Some(_)) => {}
                Ok(None) => println!("{}", "Nothing to export yet.".yellow()),
                Err(e) => println!("{} {e:#}", "Export failed:".red()),
            },
            "settings" => {
                self.wizard.open(Overlay::Settings);
                ux::show_settings(theme, &self.settings.load());
                self.wizard.close_overlay();
            }
            "theme" => {
                let on = matches!(arg, "on" | "dark" | "true");
                if let Err(e) = self.settings.set_dark_mode(ctx, on) {
                    println!("{} {e:#}", "Could not save theme:".red());
                }
            }
            other => println!("Unknown command :{other}. Try :help"),
        }
        Ok(true)
    }
}

fn append(current: &str, line: &str) -> String {
    if current.is_empty() {
        line.to_string()
    } else {
        format!("{current}\n{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::GenerationError;
    use crate::store::{DynStore, MemoryStore};
    use crate::wire::{GenerationRequest, GenerationResponse};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::tempdir;

    struct Echo;

    #[async_trait]
    impl Provider for Echo {
        async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResponse, GenerationError> {
            Ok(GenerationResponse {
                prompt: format!("Instructions for: {}", req.task),
                provider_used: "anthropic".into(),
                model_used: "claude-3-haiku-20240307".into(),
                tokens_used: None,
            })
        }
    }

    #[test]
    fn append_joins_with_newlines() {
        assert_eq!(append("", "a"), "a");
        assert_eq!(append("a", "b"), "a\nb");
    }

    #[tokio::test]
    async fn text_and_commands_drive_the_wizard() {
        let dir = tempdir().unwrap();
        let store: DynStore = Arc::new(MemoryStore::new());
        let history = HistoryStore::new(store.clone());
        let settings = SettingsStore::new(store);
        let ctx = AppContext::new(Config { export_dir: dir.path().to_path_buf(), ..Default::default() }, false);
        let mut s = Session::new(&ctx, &Echo, &history, &settings);

        s.text("Write onboarding emails for new customers");
        assert!(s.command("next").await.unwrap());
        s.text("customer name, , product");
        assert_eq!(s.wizard.form().inputs, vec!["CUSTOMER_NAME", "PRODUCT"]);
        s.command("rm product").await.unwrap();
        assert_eq!(s.wizard.form().inputs, vec!["CUSTOMER_NAME"]);
        s.command("next").await.unwrap();
        s.command("preset simple").await.unwrap();
        assert!(s.wizard.form().structure.starts_with("1. Role/Context"));
        s.command("next").await.unwrap();
        assert_eq!(s.wizard.step(), Step::Generate);

        s.command("gen").await.unwrap();
        assert_eq!(s.wizard.generated(), "Instructions for: Write onboarding emails for new customers");
        assert_eq!(history.load().len(), 1);

        let path = s.export().unwrap().unwrap();
        assert!(std::fs::read_to_string(path).unwrap().starts_with("Instructions for:"));

        assert!(!s.command("quit").await.unwrap());
    }

    #[tokio::test]
    async fn theme_command_updates_context_and_store() {
        let store: DynStore = Arc::new(MemoryStore::new());
        let history = HistoryStore::new(store.clone());
        let settings = SettingsStore::new(store);
        let ctx = AppContext::new(Config::default(), false);
        let mut s = Session::new(&ctx, &Echo, &history, &settings);

        s.command("theme on").await.unwrap();
        assert!(ctx.theme.is_dark());
        assert!(settings.load().dark_mode);
    }

    #[tokio::test]
    async fn use_loads_a_library_template() {
        let store: DynStore = Arc::new(MemoryStore::new());
        let history = HistoryStore::new(store.clone());
        let settings = SettingsStore::new(store);
        let ctx = AppContext::new(Config::default(), false);
        let mut s = Session::new(&ctx, &Echo, &history, &settings);

        s.command("lib").await.unwrap();
        assert_eq!(s.wizard.overlay(), Overlay::Library);
        s.command("use 16").await.unwrap();
        assert_eq!(s.wizard.overlay(), Overlay::None);
        assert!(!s.wizard.form().task.is_empty());
    }
}
