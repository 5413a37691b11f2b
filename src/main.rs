use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::{debug, info};

use metaprompt::catalog::{Catalog, ALL_CATEGORIES};
use metaprompt::cli::{self, Command, FormArgs, HistoryAction, SettingsAction};
use metaprompt::config::Config;
use metaprompt::context::AppContext;
use metaprompt::history::HistoryStore;
use metaprompt::repl::Session;
use metaprompt::settings::SettingsStore;
use metaprompt::store::{DynStore, FileStore, MemoryStore};
use metaprompt::wizard::{self, FieldUpdate, Wizard};
use metaprompt::{log, provider, ux};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let mut cfg = Config::load(args.config.as_deref())?;
    if let Some(dir) = &args.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    if let Some(url) = &args.backend_url {
        cfg.backend_url = Some(url.clone());
    }
    if let Some(level) = &args.log_level {
        cfg.log_level = level.clone();
    }
    log::init_tracing(&cfg.log_level);

    let data_dir = cfg.resolved_data_dir();
    let store: DynStore = if args.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::open(&data_dir).with_context(|| format!("open data dir {}", data_dir.display()))?)
    };
    debug!(data_dir = %data_dir.display(), ephemeral = args.ephemeral, "storage ready");

    let history = HistoryStore::new(store.clone());
    let settings = SettingsStore::new(store);
    let ctx = AppContext::new(cfg, settings.load().dark_mode);

    let prov = provider::make_provider(&ctx.config)?;
    info!(backend = ?ctx.config.backend_url, "provider ready");

    let mut session = Session::new(&ctx, &*prov, &history, &settings);
    if args.debug {
        session.debug_dir = Some(data_dir.clone());
    }

    match args.command.unwrap_or(Command::Wizard) {
        Command::Wizard => session.run().await?,

        Command::Generate { form, template, export } => {
            if let Some(id) = template {
                let t = session.catalog.get(id).ok_or_else(|| anyhow!("no template with id {id}"))?;
                session.wizard.load_template(t);
            }
            apply_form(&mut session.wizard, &form);
            if session.wizard.form().task.trim().is_empty() {
                bail!("--task or --template is required");
            }

            let entry = session.generate().await?;
            eprintln!("{}", wizard::success_message(&entry.provider).green().bold());
            println!("{}", entry.prompt);
            if export {
                session.export()?;
            }
        }

        Command::Preview { form } => {
            apply_form(&mut session.wizard, &form);
            println!("{}", session.wizard.preview());
        }

        Command::Templates { query, category } => {
            let found = session
                .catalog
                .search(query.as_deref().unwrap_or(""), category.as_deref().unwrap_or(ALL_CATEGORIES));
            ux::show_templates(&ctx.theme, &found);
        }

        Command::Template { id, yaml } => {
            let t = Catalog::builtin().get(id).ok_or_else(|| anyhow!("no template with id {id}"))?;
            if yaml {
                print!("{}", serde_yaml::to_string(t)?);
            } else {
                ux::show_template(&ctx.theme, t);
            }
        }

        Command::Categories => {
            for c in Catalog::builtin().categories() {
                println!("{c}");
            }
        }

        Command::History { action } => match action {
            HistoryAction::List => ux::show_history(&ctx.theme, &history.recent_first(), Utc::now()),
            HistoryAction::Show { id } => {
                let e = history.find(id).ok_or_else(|| anyhow!("no history entry {id}"))?;
                ux::show_history_entry(&ctx.theme, &e, Utc::now());
            }
            HistoryAction::Delete { id } => {
                if !history.delete(id)? {
                    bail!("no history entry {id}");
                }
                println!("Deleted {id}");
            }
            HistoryAction::Clear { yes } => {
                if yes || ux::confirm("Clear all history?") {
                    history.clear()?;
                    println!("History cleared");
                }
            }
        },

        Command::Settings { action } => match action {
            SettingsAction::Show => ux::show_settings(&ctx.theme, &settings.load()),
            SettingsAction::Set { provider, model, custom_model, api_key, dark_mode } => {
                let mut record = settings.load();
                if let Some(p) = provider {
                    record.set_provider(p);
                }
                if let Some(m) = model {
                    record.select_model(&m);
                }
                if let Some(c) = custom_model {
                    record.custom_model = c;
                }
                if let Some(k) = api_key {
                    record.api_key = k;
                }
                if let Some(on) = dark_mode {
                    ctx.theme.set_dark(on);
                    record.dark_mode = on;
                }
                settings.save(&record)?;
                ux::show_settings(&ctx.theme, &record);
            }
        },
    }

    Ok(())
}

/// Explicit flags override whatever a template put in the form.
fn apply_form(w: &mut Wizard, form: &FormArgs) {
    if let Some(task) = &form.task {
        w.update_field(FieldUpdate::Task(task.clone()));
    }
    if !form.inputs.is_empty() {
        w.update_field(FieldUpdate::Inputs(form.inputs.clone()));
    }
    if let Some(structure) = &form.structure {
        w.update_field(FieldUpdate::Structure(structure.clone()));
    }
}
